use edit_distance::edit_distance;

/// Normalized similarity of two strings, ignoring case.
///
/// `(longer - distance) / longer`, where lengths are counted in characters and `distance`
/// is the Levenshtein distance. Two empty strings are identical.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }

    let distance = edit_distance(&a, &b);
    #[allow(clippy::cast_precision_loss)]
    let score = (longer - distance) as f64 / longer as f64;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert!((similarity("apple", "apple") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("Apple", "aPPLE") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_deletion_stays_close() {
        assert!((similarity("apple", "aple") - 0.8).abs() < 1e-9);
        assert!(similarity("google", "gogle") > 0.8);
    }

    #[test]
    fn unrelated_words_score_low() {
        assert!(similarity("apple", "zebra") < 0.3);
        assert!(similarity("abc", "").abs() < f64::EPSILON);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!((similarity("café", "cafe") - 0.75).abs() < 1e-9);
    }
}
