/// Production endpoint of the NASA/JPL Fireball Data API.
pub const DEFAULT_API_URL: &str = "https://ssd-api.jpl.nasa.gov/fireball.api";

pub const DEFAULT_USER_AGENT: &str = "fireball-finder/0.1 (brightest-fireball)";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub log_level: String,
    /// Half-width of the search box around each candidate, in degrees.
    pub buffer_degrees: f64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Worker pool bound for batch lookups. `0` means one worker per candidate.
    pub max_concurrent_lookups: usize,
}

impl AppConfig {
    /// Resolves the effective pool size for a batch of `candidates` lookups.
    #[must_use]
    pub fn pool_size(&self, candidates: usize) -> usize {
        if self.max_concurrent_lookups == 0 {
            candidates.max(1)
        } else {
            self.max_concurrent_lookups
        }
    }
}
