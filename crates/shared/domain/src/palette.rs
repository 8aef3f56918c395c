use crate::constants::DEFAULT_LOGO_INDUSTRY;
use crate::industry::Industry;

/// Logo colors: gradient from `primary` to `secondary`, initials in `accent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Palette for an optional industry; `None` maps to [`DEFAULT_LOGO_INDUSTRY`].
    #[must_use]
    pub const fn for_industry(industry: Option<Industry>) -> &'static Self {
        match industry {
            Some(industry) => industry.palette(),
            None => DEFAULT_LOGO_INDUSTRY.palette(),
        }
    }
}

impl Industry {
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Technology => &Palette { primary: "#0066FF", secondary: "#00C2FF", accent: "#FF3366" },
            Self::Finance => &Palette { primary: "#00875A", secondary: "#66B2A0", accent: "#004D40" },
            Self::Health => &Palette { primary: "#4CAF50", secondary: "#81C784", accent: "#388E3C" },
            Self::Education => &Palette { primary: "#5C6BC0", secondary: "#7986CB", accent: "#3949AB" },
            Self::Retail => &Palette { primary: "#FF6B6B", secondary: "#FF8E8E", accent: "#FF4949" },
            Self::Food => &Palette { primary: "#FF9800", secondary: "#FFB74D", accent: "#F57C00" },
            Self::Creative => &Palette { primary: "#9C27B0", secondary: "#BA68C8", accent: "#7B1FA2" },
        }
    }
}
