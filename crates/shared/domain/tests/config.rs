use ncraft_domain::config::{AvailabilityConfig, GeneratorConfig, StudioConfig};
use ncraft_domain::suffix::SuffixSet;
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let generator = GeneratorConfig::default();
    assert_eq!(generator.primary_limit, 8);
    assert_eq!(generator.extended_limit, 15);
    assert_eq!((generator.min_len, generator.max_len), (4, 14));

    let availability = AvailabilityConfig::default();
    assert!(availability.live);
    assert_eq!(availability.suffixes, SuffixSet::STANDARD);
    assert_eq!(availability.rate_limit.cooldown(), Duration::from_secs(36));
    assert_eq!(availability.rate_limit.window(), Duration::from_secs(3_600));
    assert_eq!(availability.rate_limit.max_requests, 100);

    let config = StudioConfig::default();
    assert!((config.trademark.similarity_threshold - 0.8).abs() < f64::EPSILON);
    assert!(config.affiliates.godaddy.is_none());
}

#[test]
fn studio_config_deserializes_partial_sections() {
    let raw = json!({
        "generator": { "primary_limit": 5 },
        "availability": { "live": false, "suffixes": [".dev", "ai"], "rate_limit": { "max_requests": 3 } },
        "affiliates": { "godaddy": "gd-42" },
        "storage": { "data_dir": "/tmp/ncraft" }
    });

    let cfg: StudioConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.generator.primary_limit, 5);
    assert_eq!(cfg.generator.extended_limit, 15);
    assert!(!cfg.availability.live);
    assert_eq!(cfg.availability.suffixes, SuffixSet::DEV | SuffixSet::AI);
    assert_eq!(cfg.availability.rate_limit.max_requests, 3);
    assert_eq!(cfg.availability.rate_limit.cooldown_secs, 36);
    assert_eq!(cfg.affiliates.godaddy.as_deref(), Some("gd-42"));
    assert!(cfg.affiliates.namecheap.is_none());
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/ncraft"));
}

#[test]
fn unknown_suffix_is_rejected() {
    let raw = json!({ "availability": { "suffixes": [".xyz"] } });
    assert!(serde_json::from_value::<StudioConfig>(raw).is_err());
}

#[test]
fn config_mutation_is_copy_on_write() {
    let original = StudioConfig::default();
    let mut tuned = original.clone();
    tuned.generator.primary_limit = 3;

    assert_eq!(original.generator.primary_limit, 8);
    assert_eq!(tuned.generator.primary_limit, 3);
}
