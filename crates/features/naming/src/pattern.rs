use fxhash::FxHashSet;
use ncraft_domain::Industry;
use ncraft_domain::constants::{LEXICAL_ENDINGS, VOWELS};
use ncraft_domain::patterns::AffixRule;
use ncraft_kernel::text::capitalize;
use rand::Rng;
use std::ops::RangeInclusive;

/// Extended pool: weighted industry rules, compounds with the industry's common words,
/// lexical transformations and pairwise keyword combinations, all within `len`.
pub(crate) fn pattern_pool<R: Rng>(
    keywords: &[String],
    industry: Option<Industry>,
    len: &RangeInclusive<usize>,
    rng: &mut R,
) -> FxHashSet<String> {
    let mut raw = Vec::new();

    for keyword in keywords {
        if let Some(industry) = industry {
            industry_candidates(keyword, industry, rng, &mut raw);
        }
        raw.extend(transformations(keyword));
    }

    for first in keywords {
        for second in keywords.iter().filter(|second| *second != first) {
            raw.push(format!("{first}{}", capitalize(second)));
        }
    }

    raw.iter()
        .map(|name| capitalize(name))
        .filter(|name| len.contains(&name.chars().count()))
        .collect()
}

pub(crate) fn apply_rule(rule: AffixRule, keyword: &str) -> String {
    match rule {
        AffixRule::Prefix(fragment) => format!("{fragment}{keyword}"),
        AffixRule::PrefixCapitalized(fragment) => format!("{fragment}{}", capitalize(keyword)),
        AffixRule::Suffix(fragment) => format!("{keyword}{fragment}"),
    }
}

fn industry_candidates<R: Rng>(
    keyword: &str,
    industry: Industry,
    rng: &mut R,
    out: &mut Vec<String>,
) {
    let table = industry.patterns();

    for pattern in table.patterns {
        if rng.random::<f64>() < pattern.weight {
            let rules = table.prefix_rules.iter().chain(table.suffix_rules);
            out.extend(rules.map(|rule| apply_rule(*rule, keyword)));
        }
    }

    for word in table.common_words.iter().filter(|word| **word != keyword) {
        out.push(format!("{keyword}{}", capitalize(word)));
        out.push(format!("{word}{}", capitalize(keyword)));
    }
}

fn transformations(keyword: &str) -> impl Iterator<Item = String> + '_ {
    [strip_vowels(keyword), double_last_run(keyword)]
        .into_iter()
        .chain(LEXICAL_ENDINGS.iter().map(move |ending| format!("{keyword}{ending}")))
}

fn strip_vowels(word: &str) -> String {
    word.chars().filter(|c| !VOWELS.contains(c)).collect()
}

/// Collapses the final run of a repeated character to exactly two (`fiver` → `fiverr`,
/// `zzz` → `zz`).
fn double_last_run(word: &str) -> String {
    let Some(last) = word.chars().last() else {
        return String::new();
    };
    let mut doubled = word.trim_end_matches(last).to_owned();
    doubled.push(last);
    doubled.push(last);
    doubled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: RangeInclusive<usize> = 4..=14;

    #[test]
    fn rules_follow_their_shape() {
        assert_eq!(apply_rule(AffixRule::Suffix("AI"), "stack"), "stackAI");
        assert_eq!(apply_rule(AffixRule::PrefixCapitalized("i"), "cloud"), "iCloud");
        assert_eq!(apply_rule(AffixRule::Prefix("Smart"), "cash"), "Smartcash");
    }

    #[test]
    fn lexical_transformations() {
        assert_eq!(strip_vowels("software"), "sftwr");
        assert_eq!(double_last_run("fiver"), "fiverr");
        assert_eq!(double_last_run("buzz"), "buzz");
        assert_eq!(double_last_run("zzz"), "zz");
        assert_eq!(double_last_run(""), "");
    }

    #[test]
    fn transformations_apply_without_an_industry() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = pattern_pool(&["stack".to_owned()], None, &BOUNDS, &mut rng);

        for expected in ["Stck", "Stackk", "Stackly", "Stackify", "Stackio"] {
            assert!(pool.contains(expected), "missing {expected}");
        }
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn compounds_skip_the_keyword_itself() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = pattern_pool(&["cloud".to_owned()], Some(Industry::Technology), &BOUNDS, &mut rng);

        assert!(pool.contains("CloudStack"));
        assert!(pool.contains("StackCloud"));
        assert!(!pool.contains("CloudCloud"));
    }

    #[test]
    fn pairwise_combinations_are_included() {
        let mut rng = StdRng::seed_from_u64(3);
        let keywords = ["tech".to_owned(), "software".to_owned()];
        let pool = pattern_pool(&keywords, None, &BOUNDS, &mut rng);

        assert!(pool.contains("TechSoftware"));
        assert!(pool.contains("SoftwareTech"));
    }

    #[test]
    fn everything_respects_the_length_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let keywords = ["extraordinarily".to_owned(), "ab".to_owned()];
        let pool = pattern_pool(&keywords, Some(Industry::Finance), &BOUNDS, &mut rng);

        assert!(!pool.is_empty());
        assert!(pool.iter().all(|name| BOUNDS.contains(&name.chars().count())));
    }
}
