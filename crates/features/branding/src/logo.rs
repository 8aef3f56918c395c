use crate::hash::name_hash;
use crate::pattern::Pattern;
use ncraft_domain::Industry;
use ncraft_domain::constants::SVG_MIME_TYPE;
use ncraft_domain::palette::Palette;
use quick_xml::escape::escape;

/// Rendered logo for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    name: String,
    svg: String,
}

impl Logo {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Export file name, `<name>-logo.svg`. Path separators and control characters in
    /// the name become `-`, so the result is always a single path component.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') || c.is_control() { '-' } else { c })
            .collect();
        format!("{stem}-logo.svg")
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        SVG_MIME_TYPE
    }
}

/// Renders the logo for `name` with the palette of `industry`. Unknown or empty industry
/// identifiers fall back to the technology palette.
#[must_use]
pub fn synthesize(name: &str, industry: &str) -> Logo {
    synthesize_for(name, industry.parse::<Industry>().ok())
}

#[must_use]
pub fn synthesize_for(name: &str, industry: Option<Industry>) -> Logo {
    let palette = Palette::for_industry(industry);
    let hash = name_hash(name);
    let shapes = Pattern::for_hash(hash).render(hash);
    let initials = initials(name);

    let svg = format!(
        r##"<svg width="200" height="200" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{primary};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{secondary};stop-opacity:1"/>
    </linearGradient>
  </defs>
  <rect width="200" height="200" fill="white"/>
{shapes}
  <text x="100" y="115" font-family="Arial, sans-serif" font-size="40" font-weight="bold" text-anchor="middle" fill="{accent}">{initials}</text>
</svg>
"##,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
        initials = escape(&initials),
    );

    Logo { name: name.to_owned(), svg }
}

/// First character of each word, uppercased, cut to two characters.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("acme"), "A");
        assert_eq!(initials("  north  star labs"), "NS");
        assert_eq!(initials(""), "");
        assert_eq!(initials("ßeta"), "SS");
    }

    #[test]
    fn unknown_industry_uses_technology_colors() {
        let fallback = synthesize("Nova", "aerospace");
        let technology = synthesize("Nova", "technology");
        assert_eq!(fallback, technology);
        assert!(fallback.svg().contains("stop-color:#0066FF"));
    }

    #[test]
    fn export_metadata() {
        let logo = synthesize("CloudHub", "");
        assert_eq!(logo.file_name(), "CloudHub-logo.svg");
        assert_eq!(logo.mime_type(), "image/svg+xml");
        assert_eq!(logo.name(), "CloudHub");
    }

    #[test]
    fn file_name_is_a_single_component() {
        assert_eq!(synthesize("Nova/Labs", "").file_name(), "Nova-Labs-logo.svg");
        assert_eq!(synthesize(r"C:\Acme", "").file_name(), "C--Acme-logo.svg");
        assert_eq!(synthesize("../Escape", "").file_name(), "..-Escape-logo.svg");
        assert_eq!(synthesize("Tab\tName", "").file_name(), "Tab-Name-logo.svg");
    }
}
