mod offices;
mod report;

use clap::Parser;
use fireball_api::FireballClient;
use fireball_core::{Candidate, Coordinate, QueryParams};
use fireball_locator::FireballLocator;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fireball-cli")]
#[command(about = "Find which location saw the brightest fireball")]
struct Cli {
    /// Earliest fireball date to consider (YYYY-MM-DD).
    #[arg(long, default_value = offices::DEFAULT_DATE_MIN)]
    date_min: String,

    /// Latest fireball date to consider (YYYY-MM-DD).
    #[arg(long)]
    date_max: Option<String>,

    /// Minimum total radiated energy.
    #[arg(long, default_value = offices::DEFAULT_ENERGY_MIN)]
    energy_min: String,

    /// Half-width of the search box in degrees. Overrides `FIREBALL_BUFFER_DEGREES`.
    #[arg(long)]
    buffer: Option<f64>,

    /// Candidate location as `LAT,LON` in signed degrees. Repeatable; replaces
    /// the built-in office list.
    #[arg(long = "candidate", value_name = "LAT,LON", allow_hyphen_values = true)]
    candidates: Vec<Coordinate>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn query_params(&self) -> QueryParams {
        let mut params = offices::base_params();
        params.set("date_min", self.date_min.as_str());
        params.set("energy_min", self.energy_min.as_str());
        if let Some(date_max) = &self.date_max {
            params.set("date_max", date_max.as_str());
        }
        params
    }

    fn candidates(&self) -> Vec<Candidate> {
        if self.candidates.is_empty() {
            offices::reference_offices()
        } else {
            self.candidates
                .iter()
                .copied()
                .map(Candidate::unlabelled)
                .collect()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = fireball_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let buffer = cli.buffer.unwrap_or(config.buffer_degrees);
    if !buffer.is_finite() || buffer < 0.0 {
        anyhow::bail!("--buffer must be a finite, non-negative number of degrees");
    }

    let candidates = cli.candidates();
    let client = FireballClient::with_base_url(
        &config.api_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let locator = FireballLocator::new(client, cli.query_params())
        .with_buffer(buffer)
        .with_max_concurrent(config.pool_size(candidates.len()));

    tracing::debug!(?config, buffer, "starting fireball lookup");

    match locator.locate_brightest_among(&candidates).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", report::outcome_json(&outcome));
            } else {
                report::print_outcome(&outcome);
            }
            Ok(())
        }
        Err(err) => {
            if let fireball_locator::BatchError::AllCandidatesFailed { failures } = &err {
                report::print_failures(failures);
            }
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests;
