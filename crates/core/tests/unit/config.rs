//! # Configuration Tests
//!
//! Verifies algorithm-code resolution, output-flag parsing, frame-count
//! validation, and JSON overrides over the defaults.

use vmsim_core::Config;
use vmsim_core::common::SimError;
use vmsim_core::config::{Algorithm, CostModel, OutputOptions};

#[test]
fn algorithm_codes_resolve() {
    assert_eq!(Algorithm::from_code('f').unwrap(), Algorithm::Fifo);
    assert_eq!(Algorithm::from_code('s').unwrap(), Algorithm::SecondChance);
    assert_eq!(Algorithm::from_code('r').unwrap(), Algorithm::Random);
    assert_eq!(Algorithm::from_code('n').unwrap(), Algorithm::Nru);
    assert_eq!(Algorithm::from_code('c').unwrap(), Algorithm::Clock);
    assert_eq!(Algorithm::from_code('a').unwrap(), Algorithm::Aging);
}

#[test]
fn unknown_algorithm_code_is_rejected() {
    assert!(matches!(
        Algorithm::from_code('x'),
        Err(SimError::UnknownAlgorithm('x'))
    ));
}

#[test]
fn output_flags_parse() {
    let all = OutputOptions::from_flags("OPFS").unwrap();
    assert_eq!(all, OutputOptions::all());

    let some = OutputOptions::from_flags("OS").unwrap();
    assert!(some.trace);
    assert!(some.summary);
    assert!(!some.page_table);
    assert!(!some.frame_table);

    let none = OutputOptions::from_flags("").unwrap();
    assert_eq!(none, OutputOptions::default());
}

#[test]
fn unknown_output_flag_is_rejected() {
    assert!(matches!(
        OutputOptions::from_flags("OX"),
        Err(SimError::UnknownOutputOption('X'))
    ));
}

#[test]
fn frame_count_is_validated() {
    let mut config = Config::default();
    config.num_frames = 0;
    assert!(matches!(
        config.validate(),
        Err(SimError::InvalidFrameCount(0))
    ));

    config.num_frames = 129;
    assert!(config.validate().is_err());

    config.num_frames = 1;
    assert!(config.validate().is_ok());
    config.num_frames = 128;
    assert!(config.validate().is_ok());
}

#[test]
fn default_costs_match_reference_weights() {
    let costs = CostModel::default();
    assert_eq!(costs.read_write, 1);
    assert_eq!(costs.context_switch, 121);
    assert_eq!(costs.map, 400);
    assert_eq!(costs.unmap, 400);
    assert_eq!(costs.page_in, 3000);
    assert_eq!(costs.page_out, 3000);
    assert_eq!(costs.file_in, 2500);
    assert_eq!(costs.file_out, 2500);
    assert_eq!(costs.zero_fill, 150);
    assert_eq!(costs.segv, 240);
    assert_eq!(costs.segprot, 300);
}

#[test]
fn json_overrides_merge_over_defaults() {
    let config =
        Config::from_json(r#"{"algorithm": "Clock", "num_frames": 8, "costs": {"map": 1}}"#)
            .unwrap();
    assert_eq!(config.algorithm, Algorithm::Clock);
    assert_eq!(config.num_frames, 8);
    assert_eq!(config.costs.map, 1);
    // Untouched weights keep their defaults.
    assert_eq!(config.costs.unmap, 400);
}

#[test]
fn empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.algorithm, Algorithm::Fifo);
    assert_eq!(config.num_frames, 16);
    assert_eq!(config.costs, CostModel::default());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        Config::from_json("{\"algorithm\": \"Lru\"}"),
        Err(SimError::Config(_))
    ));
    assert!(Config::from_json("not json").is_err());
}
