use super::*;
use fireball_api::build_query;
use fireball_core::FireballRecord;
use fireball_locator::{BatchOutcome, CandidateFailure, LocateError};

#[test]
fn no_args_uses_reference_defaults() {
    let cli = Cli::try_parse_from(["fireball-cli"]).expect("expected valid cli args");
    assert_eq!(
        build_query(&cli.query_params()),
        "date-min=2017-01-01&req-alt=true&energy-min=0.3&sort=-energy"
    );
    assert!(cli.buffer.is_none());
    assert!(!cli.json);

    let labels: Vec<String> = cli
        .candidates()
        .into_iter()
        .filter_map(|c| c.label)
        .collect();
    assert_eq!(labels, ["Boston", "NCR", "San Francisco"]);
}

#[test]
fn date_overrides_keep_parameter_order() {
    let cli = Cli::try_parse_from([
        "fireball-cli",
        "--date-min",
        "2019-01-01",
        "--date-max",
        "2020-01-01",
        "--energy-min",
        "1.5",
    ])
    .unwrap();
    assert_eq!(
        build_query(&cli.query_params()),
        "date-min=2019-01-01&req-alt=true&energy-min=1.5&sort=-energy&date-max=2020-01-01"
    );
}

#[test]
fn candidates_replace_offices() {
    let cli = Cli::try_parse_from([
        "fireball-cli",
        "--candidate",
        "-33.9,18.4",
        "--candidate",
        "56.9,172.4",
        "--buffer",
        "10",
    ])
    .unwrap();
    let candidates = cli.candidates();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].coordinate, Coordinate::new(-33.9, 18.4));
    assert!(candidates[0].label.is_none());
    assert!(cli.buffer.is_some_and(|b| (b - 10.0).abs() < f64::EPSILON));
}

#[test]
fn invalid_candidate_is_rejected() {
    assert!(Cli::try_parse_from(["fireball-cli", "--candidate", "95,0"]).is_err());
    assert!(Cli::try_parse_from(["fireball-cli", "--candidate", "north"]).is_err());
}

#[test]
fn outcome_json_lists_winner_and_failures() {
    let outcome = BatchOutcome {
        candidate: Candidate::new("Kamchatka", Coordinate::new(56.9, 172.4)),
        record: FireballRecord {
            timestamp: "2018-12-18 23:48:20".to_string(),
            energy: 13000.0,
            latitude: 56.9,
            longitude: 172.4,
        },
        failures: vec![CandidateFailure {
            candidate: Candidate::new("Boston", Coordinate::new(42.354_558, -71.054_254)),
            error: LocateError::NoData,
        }],
    };

    let value = report::outcome_json(&outcome);
    assert_eq!(value["candidate"]["label"], "Kamchatka");
    assert_eq!(value["record"]["energy"], 13000.0);
    assert_eq!(value["failures"][0]["candidate"]["label"], "Boston");
    assert_eq!(
        value["failures"][0]["error"],
        "the Fireball API returned no data"
    );
}

#[test]
fn help_is_answered_by_the_parser_alone() {
    let err = Cli::try_parse_from(["fireball-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
