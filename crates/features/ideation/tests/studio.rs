use ncraft_availability::{CheckSource, Simulator};
use ncraft_domain::Industry;
use ncraft_domain::config::StudioConfig;
use ncraft_domain::suffix::SuffixSet;
use ncraft_domain::trademark::RiskLevel;
use ncraft_ideation::{GenerationFlow, IdeationError, IdeationRequest, Studio};
use ncraft_naming::NamingError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Offline studio with the default simulated latencies.
fn offline_config() -> StudioConfig {
    let mut config = StudioConfig::default();
    config.availability.live = false;
    config
}

fn studio(config: &StudioConfig) -> Studio {
    Studio::with_simulator(config, Simulator::seeded(11)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn records_follow_generator_order() {
    let config = offline_config();
    let studio = studio(&config);
    let request = IdeationRequest::new(["cloud"]).industry(Some(Industry::Technology)).seed(21);

    let batch = studio.ideate(request).await.unwrap();

    let expected = studio
        .generator()
        .generate(&["cloud"], Some(Industry::Technology), GenerationFlow::Primary, &mut StdRng::seed_from_u64(21))
        .unwrap();
    assert_eq!(batch.names().collect::<Vec<_>>(), expected);
    assert_eq!(batch.id.len(), 12);
}

#[tokio::test(start_paused = true)]
async fn every_record_is_complete() {
    let config = offline_config();
    let batch = studio(&config)
        .ideate(IdeationRequest::new(["pixel"]).industry(Some(Industry::Creative)).seed(3))
        .await
        .unwrap();

    assert_eq!(batch.records.len(), 8);
    for record in &batch.records {
        assert!(record.logo.starts_with("<svg"));
        assert!(record.logo.contains("#7B1FA2"));
        assert_eq!(record.domains.len(), 4);
        assert_eq!(record.social.len(), 4);
        assert!(record.social.iter().all(|s| s.source == CheckSource::Simulated));
        assert_eq!(record.trademark.is_registered, record.trademark.risk_level == RiskLevel::High);
    }
}

#[tokio::test(start_paused = true)]
async fn candidates_are_screened_concurrently() {
    let config = offline_config();
    let studio = studio(&config);

    let started = tokio::time::Instant::now();
    let batch = studio.ideate(IdeationRequest::new(["data", "flow"]).seed(1)).await.unwrap();

    // Eight candidates with 300 ms trademark and domain delays each.
    assert_eq!(batch.records.len(), 8);
    assert!(started.elapsed() < Duration::from_millis(600));
}

#[tokio::test(start_paused = true)]
async fn logos_default_to_technology_colors() {
    let config = offline_config();
    let batch = studio(&config).ideate(IdeationRequest::new(["orbit"]).seed(5)).await.unwrap();

    assert!(batch.records.iter().all(|r| r.logo.contains("#FF3366")));
}

#[tokio::test(start_paused = true)]
async fn request_suffixes_override_the_config() {
    let config = offline_config();
    let request = IdeationRequest::new(["nova"]).suffixes(SuffixSet::DEV | SuffixSet::AI).seed(8);
    let batch = studio(&config).ideate(request).await.unwrap();

    for record in &batch.records {
        let domains: Vec<&str> = record.domains.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(domains.len(), 2);
        assert!(domains[0].ends_with(".dev") && domains[1].ends_with(".ai"));
    }
}

#[tokio::test(start_paused = true)]
async fn extended_flow_returns_up_to_fifteen() {
    let config = offline_config();
    let request = IdeationRequest::new(["health", "care"])
        .industry(Some(Industry::Health))
        .flow(GenerationFlow::Extended)
        .seed(13);
    let batch = studio(&config).ideate(request).await.unwrap();

    assert!(!batch.records.is_empty());
    assert!(batch.records.len() <= 15);
}

#[tokio::test(start_paused = true)]
async fn empty_keywords_fail_before_any_check() {
    let config = offline_config();
    let err = studio(&config).ideate(IdeationRequest::new(["  "])).await.unwrap_err();

    assert!(matches!(err, IdeationError::Naming { source: NamingError::NoKeywords { .. }, .. }));
}

#[tokio::test(start_paused = true)]
async fn batch_serializes_with_camel_case_fields() {
    let config = offline_config();
    let batch = studio(&config).ideate(IdeationRequest::new(["apple"]).seed(2)).await.unwrap();
    let json = serde_json::to_value(&batch).unwrap();

    let record = &json["records"][0];
    assert!(record["trademark"]["riskLevel"].is_string());
    assert!(record["trademark"]["isRegistered"].is_boolean());
    assert!(record["domains"][0]["registrars"][0]["priceRange"].is_string());
}
