use fxhash::FxHashSet;
use ncraft_domain::Industry;
use ncraft_domain::constants::{GENERIC_PREFIXES, GENERIC_SUFFIXES};
use ncraft_kernel::text::capitalize;

/// Primary pool: each keyword capitalized, wrapped in the generic affixes and, with an
/// industry, in that industry's prefixes, suffixes and modifiers.
pub(crate) fn affix_pool(keywords: &[String], industry: Option<Industry>) -> FxHashSet<String> {
    let mut pool = FxHashSet::default();

    for keyword in keywords {
        let root = capitalize(keyword);

        pool.extend(GENERIC_PREFIXES.iter().map(|prefix| format!("{prefix}{root}")));
        pool.extend(GENERIC_SUFFIXES.iter().map(|suffix| format!("{root}{suffix}")));

        if let Some(industry) = industry {
            let affixes = industry.affixes();
            pool.extend(affixes.prefixes.iter().map(|prefix| format!("{prefix}{root}")));
            pool.extend(affixes.suffixes.iter().map(|suffix| format!("{root}{suffix}")));
            pool.extend(affixes.modifiers.iter().map(|modifier| format!("{modifier}{root}")));
        }

        pool.insert(root);
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_pool_has_twenty_one_names_per_keyword() {
        let pool = affix_pool(&["cloud".to_owned()], None);
        assert_eq!(pool.len(), 21);
        assert!(pool.contains("Cloud"));
        assert!(pool.contains("ApexCloud"));
        assert!(pool.contains("CloudSync"));
    }

    #[test]
    fn industry_adds_its_affixes() {
        let pool = affix_pool(&["pixel".to_owned()], Some(Industry::Creative));
        assert!(pool.contains("BoldPixel"));
        assert!(pool.contains("PixelStudio"));
        assert!(pool.contains("VisualPixel"));
    }

    #[test]
    fn overlapping_affixes_are_deduplicated() {
        // 21 generic + 30 technology, minus Smart, Labs, Tech, Solutions, Logic, Pro, Next
        // and Future which both tables produce.
        let pool = affix_pool(&["data".to_owned()], Some(Industry::Technology));
        assert_eq!(pool.len(), 43);
    }
}
