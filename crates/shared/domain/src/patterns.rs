//! Weighted name patterns used by the extended generator.

use crate::industry::Industry;

/// A named construction with a selection weight in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamePattern {
    pub template: &'static str,
    pub examples: &'static [&'static str],
    pub weight: f64,
}

/// How a rule combines its fragment with a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixRule {
    /// `fragment + keyword`
    Prefix(&'static str),
    /// `fragment + Capitalized(keyword)`
    PrefixCapitalized(&'static str),
    /// `keyword + fragment`
    Suffix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryPatterns {
    pub patterns: &'static [NamePattern],
    pub common_words: &'static [&'static str],
    pub prefix_rules: &'static [AffixRule],
    pub suffix_rules: &'static [AffixRule],
}

impl Industry {
    #[must_use]
    pub const fn patterns(self) -> &'static IndustryPatterns {
        match self {
            Self::Technology => &TECHNOLOGY,
            Self::Finance => &FINANCE,
            Self::Health => &HEALTH,
            Self::Education => &EDUCATION,
            Self::Retail => &RETAIL,
            Self::Food => &FOOD,
            Self::Creative => &CREATIVE,
        }
    }
}

use AffixRule::{Prefix, PrefixCapitalized, Suffix};

const TECHNOLOGY: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "prefix + root + ly",
            examples: &["Stackify", "Cloudify", "Codify"],
            weight: 0.4,
        },
        NamePattern { template: "root + io", examples: &["Twilio", "Rubio", "Stackio"], weight: 0.3 },
        NamePattern {
            template: "ai + root",
            examples: &["AiSense", "AiFlow", "AiCore"],
            weight: 0.3,
        },
    ],
    common_words: &["stack", "cloud", "code", "data", "tech", "byte", "bit", "net", "web", "app"],
    prefix_rules: &[
        Suffix("AI"),
        PrefixCapitalized("i"),
        Suffix("Hub"),
        Suffix("Flow"),
        Suffix("Sync"),
    ],
    suffix_rules: &[Suffix("ify"), Suffix("io"), Suffix("ly"), Suffix("Base"), Suffix("Labs")],
};

const FINANCE: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "fin + root",
            examples: &["FinWise", "FinCore", "FinFlow"],
            weight: 0.4,
        },
        NamePattern {
            template: "pay + root",
            examples: &["PayFlow", "PayWise", "PayCore"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + capital",
            examples: &["WiseCapital", "CoreCapital", "FlowCapital"],
            weight: 0.3,
        },
    ],
    common_words: &[
        "wealth", "money", "cash", "pay", "coin", "bank", "fund", "trade", "invest", "fin",
    ],
    prefix_rules: &[
        PrefixCapitalized("Fin"),
        Suffix("Capital"),
        Suffix("Wealth"),
        Prefix("Smart"),
        Suffix("Trust"),
    ],
    suffix_rules: &[
        Suffix("Finance"),
        Suffix("Bank"),
        Suffix("Trade"),
        Suffix("Fund"),
        Suffix("Pay"),
    ],
};

const HEALTH: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "root + ly",
            examples: &["Vitally", "Curely", "Carely"],
            weight: 0.4,
        },
        NamePattern {
            template: "vita + root",
            examples: &["VitaCare", "VitaPulse", "VitaPath"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + well",
            examples: &["LifeWell", "MindWell", "CoreWell"],
            weight: 0.3,
        },
    ],
    common_words: &["care", "health", "vital", "life", "well", "cure", "heal", "pulse", "med", "bio"],
    prefix_rules: &[
        Suffix("Care"),
        PrefixCapitalized("Vita"),
        Suffix("Well"),
        Suffix("Med"),
        Suffix("Life"),
    ],
    suffix_rules: &[
        Suffix("ly"),
        Suffix("io"),
        Suffix("Health"),
        Suffix("Clinic"),
        Suffix("Path"),
    ],
};

const EDUCATION: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "edu + root",
            examples: &["EduPath", "EduCore", "EduSpark"],
            weight: 0.4,
        },
        NamePattern {
            template: "learn + root",
            examples: &["LearnLoop", "LearnWise", "LearnHub"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + academy",
            examples: &["CodeAcademy", "MathAcademy", "ArtAcademy"],
            weight: 0.3,
        },
    ],
    common_words: &[
        "learn", "mind", "skill", "study", "teach", "brain", "know", "class", "tutor", "edu",
    ],
    prefix_rules: &[
        PrefixCapitalized("Edu"),
        Suffix("Academy"),
        Suffix("Mind"),
        PrefixCapitalized("Learn"),
        Suffix("Lab"),
    ],
    suffix_rules: &[Suffix("ly"), Suffix("io"), Suffix("Skills"), Suffix("Class"), Suffix("Hub")],
};

const RETAIL: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "shop + root",
            examples: &["ShopWise", "ShopLoop", "ShopNest"],
            weight: 0.4,
        },
        NamePattern {
            template: "root + ify",
            examples: &["Shopify", "Cartify", "Dealify"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + mart",
            examples: &["ValueMart", "HomeMart", "TechMart"],
            weight: 0.3,
        },
    ],
    common_words: &[
        "shop", "store", "mart", "cart", "deal", "buy", "goods", "market", "sale", "trade",
    ],
    prefix_rules: &[
        PrefixCapitalized("Shop"),
        Suffix("Mart"),
        Suffix("Cart"),
        PrefixCapitalized("Buy"),
        Suffix("Store"),
    ],
    suffix_rules: &[
        Suffix("ify"),
        Suffix("ly"),
        Suffix("Deals"),
        Suffix("Goods"),
        Suffix("Box"),
    ],
};

const FOOD: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "root + kitchen",
            examples: &["GreenKitchen", "UrbanKitchen", "SpiceKitchen"],
            weight: 0.4,
        },
        NamePattern {
            template: "chef + root",
            examples: &["ChefTable", "ChefPlate", "ChefBox"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + bites",
            examples: &["TinyBites", "FreshBites", "QuickBites"],
            weight: 0.3,
        },
    ],
    common_words: &[
        "taste", "dish", "chef", "meal", "bite", "feast", "fresh", "grill", "spice", "table",
    ],
    prefix_rules: &[
        Suffix("Kitchen"),
        Suffix("Bites"),
        PrefixCapitalized("Chef"),
        Suffix("Table"),
        PrefixCapitalized("Eat"),
    ],
    suffix_rules: &[
        Suffix("ly"),
        Suffix("io"),
        Suffix("Eats"),
        Suffix("Feast"),
        Suffix("Grill"),
    ],
};

const CREATIVE: IndustryPatterns = IndustryPatterns {
    patterns: &[
        NamePattern {
            template: "root + studio",
            examples: &["PixelStudio", "InkStudio", "BoldStudio"],
            weight: 0.4,
        },
        NamePattern {
            template: "art + root",
            examples: &["ArtLoop", "ArtNest", "ArtForge"],
            weight: 0.3,
        },
        NamePattern {
            template: "root + ify",
            examples: &["Canvify", "Colorify", "Brandify"],
            weight: 0.3,
        },
    ],
    common_words: &[
        "art", "pixel", "design", "studio", "color", "canvas", "brand", "media", "craft", "vision",
    ],
    prefix_rules: &[
        Suffix("Studio"),
        Suffix("Pixel"),
        PrefixCapitalized("Art"),
        Suffix("Craft"),
        Suffix("Works"),
    ],
    suffix_rules: &[Suffix("ify"), Suffix("io"), Suffix("ly"), Suffix("Lab"), Suffix("Media")],
};
