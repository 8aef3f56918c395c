use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Industry vertical driving affixes, name patterns and the logo palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Health,
    Education,
    Retail,
    Food,
    Creative,
}

/// The three affix lists of an industry. Each holds exactly ten entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryAffixes {
    pub prefixes: [&'static str; 10],
    pub suffixes: [&'static str; 10],
    pub modifiers: [&'static str; 10],
}

impl Industry {
    pub const ALL: [Self; 7] = [
        Self::Technology,
        Self::Finance,
        Self::Health,
        Self::Education,
        Self::Retail,
        Self::Food,
        Self::Creative,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Health => "health",
            Self::Education => "education",
            Self::Retail => "retail",
            Self::Food => "food",
            Self::Creative => "creative",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Health => "Healthcare",
            Self::Education => "Education",
            Self::Retail => "Retail",
            Self::Food => "Food & Restaurant",
            Self::Creative => "Creative & Design",
        }
    }

    #[must_use]
    pub const fn affixes(self) -> &'static IndustryAffixes {
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

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned by [`Industry::from_str`] for identifiers outside the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIndustry(pub String);

impl fmt::Display for UnknownIndustry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown industry '{}'", self.0)
    }
}

impl std::error::Error for UnknownIndustry {}

impl FromStr for Industry {
    type Err = UnknownIndustry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|industry| industry.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownIndustry(wanted.to_owned()))
    }
}

const TECHNOLOGY: IndustryAffixes = IndustryAffixes {
    prefixes: ["Tech", "Digital", "Cyber", "Data", "AI", "Smart", "Cloud", "Net", "Web", "App"],
    suffixes: [
        "Labs", "Tech", "Systems", "Solutions", "Ware", "Soft", "Core", "Matrix", "Byte", "Logic",
    ],
    modifiers: [
        "Pro",
        "Plus",
        "Advanced",
        "Next",
        "Future",
        "Modern",
        "Innovative",
        "Dynamic",
        "Global",
        "Connected",
    ],
};

const FINANCE: IndustryAffixes = IndustryAffixes {
    prefixes: [
        "Fin", "Capital", "Wealth", "Money", "Asset", "Trade", "Trust", "Credit", "Cash", "Bank",
    ],
    suffixes: [
        "Invest", "Finance", "Capital", "Partners", "Group", "Advisors", "Markets", "Holdings",
        "Exchange", "Fund",
    ],
    modifiers: [
        "Global",
        "Prime",
        "Elite",
        "Premier",
        "First",
        "Smart",
        "Strategic",
        "Secure",
        "Direct",
        "United",
    ],
};

const HEALTH: IndustryAffixes = IndustryAffixes {
    prefixes: ["Health", "Med", "Care", "Vital", "Life", "Well", "Bio", "Cure", "Heal", "Pulse"],
    suffixes: [
        "Care", "Health", "Medical", "Wellness", "Life", "Living", "Clinic", "Services", "Path",
        "Bridge",
    ],
    modifiers: [
        "Total",
        "Complete",
        "Active",
        "Better",
        "Natural",
        "Optimal",
        "Pure",
        "Essential",
        "Balanced",
        "Core",
    ],
};

const EDUCATION: IndustryAffixes = IndustryAffixes {
    prefixes: [
        "Edu", "Learn", "Mind", "Brain", "Skill", "Know", "Study", "Teach", "Academic", "Scholar",
    ],
    suffixes: [
        "Academy",
        "School",
        "Institute",
        "Learning",
        "Education",
        "Studies",
        "Skills",
        "Center",
        "Hub",
        "Lab",
    ],
    modifiers: [
        "Smart", "Bright", "Elite", "Advanced", "Premier", "Global", "Future", "Leading", "Prime",
        "Core",
    ],
};

const RETAIL: IndustryAffixes = IndustryAffixes {
    prefixes: ["Shop", "Store", "Mart", "Market", "Buy", "Retail", "Trade", "Goods", "Deal", "Sale"],
    suffixes: ["Store", "Market", "Shop", "Mart", "Place", "Zone", "Hub", "Center", "World", "Space"],
    modifiers: ["Prime", "Super", "Mega", "Ultra", "Best", "Top", "Direct", "Smart", "Value", "Choice"],
};

const FOOD: IndustryAffixes = IndustryAffixes {
    prefixes: [
        "Food", "Taste", "Flavor", "Dish", "Cook", "Chef", "Eat", "Meal", "Kitchen", "Dining",
    ],
    suffixes: [
        "Kitchen", "Bistro", "Cafe", "Grill", "Diner", "Eats", "Table", "Plate", "Bites", "House",
    ],
    modifiers: [
        "Fresh",
        "Tasty",
        "Gourmet",
        "Delicious",
        "Premium",
        "Classic",
        "Modern",
        "Urban",
        "Artisan",
        "Select",
    ],
};

const CREATIVE: IndustryAffixes = IndustryAffixes {
    prefixes: [
        "Art", "Design", "Create", "Visual", "Studio", "Pixel", "Color", "Style", "Brand", "Media",
    ],
    suffixes: [
        "Studio", "Design", "Arts", "Media", "Works", "Creative", "Lab", "House", "Space", "Shop",
    ],
    modifiers: [
        "Creative", "Modern", "Bold", "Fresh", "Prime", "Pure", "Elite", "Smart", "Next", "Core",
    ],
};
