use ncraft_domain::Industry;
use ncraft_domain::constants::{DEFAULT_LOGO_INDUSTRY, GENERIC_PREFIXES, GENERIC_SUFFIXES};
use ncraft_domain::palette::Palette;
use ncraft_domain::patterns::AffixRule;
use ncraft_domain::suffix::SuffixSet;
use ncraft_domain::trademark::RiskLevel;

#[test]
fn industries_parse_case_insensitively() {
    assert_eq!("Finance".parse::<Industry>(), Ok(Industry::Finance));
    assert_eq!(" food ".parse::<Industry>(), Ok(Industry::Food));
    assert!("aerospace".parse::<Industry>().is_err());

    for industry in Industry::ALL {
        assert_eq!(industry.id().parse::<Industry>(), Ok(industry));
    }
}

#[test]
fn display_names_match_the_catalogue() {
    assert_eq!(Industry::Health.display_name(), "Healthcare");
    assert_eq!(Industry::Food.display_name(), "Food & Restaurant");
    assert_eq!(Industry::Creative.display_name(), "Creative & Design");
}

#[test]
fn affix_tables_have_no_blank_entries() {
    for industry in Industry::ALL {
        let affixes = industry.affixes();
        for entry in affixes.prefixes.iter().chain(&affixes.suffixes).chain(&affixes.modifiers) {
            assert!(!entry.is_empty(), "{industry} has a blank affix");
        }
    }
    assert!(GENERIC_PREFIXES.iter().chain(&GENERIC_SUFFIXES).all(|a| !a.is_empty()));
}

#[test]
fn every_industry_has_weighted_patterns() {
    for industry in Industry::ALL {
        let table = industry.patterns();
        assert_eq!(table.patterns.len(), 3, "{industry}");
        assert!(table.patterns.iter().all(|p| (0.0..=1.0).contains(&p.weight)));
        assert_eq!(table.common_words.len(), 10, "{industry}");
        assert_eq!(table.prefix_rules.len(), 5, "{industry}");
        assert_eq!(table.suffix_rules.len(), 5, "{industry}");
    }

    assert!(Industry::Technology.patterns().prefix_rules.contains(&AffixRule::PrefixCapitalized("i")));
}

#[test]
fn unknown_palette_falls_back_to_technology() {
    assert_eq!(DEFAULT_LOGO_INDUSTRY, Industry::Technology);
    assert_eq!(Palette::for_industry(None), DEFAULT_LOGO_INDUSTRY.palette());
    assert_eq!(Industry::Finance.palette().accent, "#004D40");
}

#[test]
fn suffix_labels_follow_canonical_order() {
    let labels: Vec<_> = SuffixSet::STANDARD.labels().collect();
    assert_eq!(labels, [".com", ".io", ".co", ".app"]);
    assert_eq!(SuffixSet::from_label("DEV"), Some(SuffixSet::DEV));
    assert_eq!(SuffixSet::from_label(".xyz"), None);
    assert_eq!(SuffixSet::default(), SuffixSet::COM);
}

#[test]
fn risk_levels_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    assert!(RiskLevel::High > RiskLevel::Medium);
}
