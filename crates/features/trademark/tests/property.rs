use ncraft_trademark::{KNOWN_MARKS, RiskLevel, TrademarkClassifier, similarity};
use proptest::prelude::*;

#[test]
fn google_is_registered() {
    let assessment = TrademarkClassifier::default().assess("Google");

    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert!(assessment.similar_marks.iter().any(|mark| mark == "google"));
}

#[test]
fn punctuation_does_not_hide_a_mark() {
    let assessment = TrademarkClassifier::default().assess("Micro-Soft Works!");

    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert_eq!(assessment.similar_marks, ["microsoft"]);
}

proptest! {
    #[test]
    fn similarity_is_reflexive(s in "\\PC{0,20}") {
        prop_assert!((similarity(&s, &s) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-zA-Z0-9]{0,16}", b in "[a-zA-Z0-9]{0,16}") {
        prop_assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_is_a_ratio(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn assessment_is_pure(name in "[a-zA-Z0-9 ]{0,24}") {
        let classifier = TrademarkClassifier::default();
        prop_assert_eq!(classifier.assess(&name), classifier.assess(&name));
    }

    #[test]
    fn embedded_marks_are_always_high(
        prefix in "[a-z]{0,6}",
        suffix in "[a-z]{0,6}",
        index in 0..KNOWN_MARKS.len(),
    ) {
        let name = format!("{prefix}{}{suffix}", KNOWN_MARKS[index].mark);
        let assessment = TrademarkClassifier::default().assess(&name);

        prop_assert_eq!(assessment.risk_level, RiskLevel::High);
        prop_assert!(assessment.is_registered);
    }
}
