//! Abstract shapes drawn behind the initials. Geometry is derived from the magnitude of
//! the name hash so every coordinate, radius and size is positive.

const FILL: &str = "url(#grad)";

/// Shape family, selected by `|hash| % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Circles,
    Triangle,
    Squares,
}

impl Pattern {
    #[must_use]
    pub const fn for_hash(hash: i32) -> Self {
        match hash.unsigned_abs() % 3 {
            0 => Self::Circles,
            1 => Self::Triangle,
            _ => Self::Squares,
        }
    }

    /// SVG elements for this pattern, one per line.
    #[must_use]
    pub fn render(self, hash: i32) -> String {
        let m = u64::from(hash.unsigned_abs());
        match self {
            Self::Circles => circles(m),
            Self::Triangle => triangle(m),
            Self::Squares => squares(m),
        }
    }
}

fn circles(m: u64) -> String {
    (0..5_u64)
        .map(|i| {
            let cx = 40 + m % 120;
            let cy = 40 + (m * i) % 120;
            let r = 20 + m % 40;
            let opacity = opacity(0.1, i);
            format!(r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{FILL}" opacity="{opacity}"/>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn triangle(m: u64) -> String {
    let top = 50 + m % 30;
    let points = format!(
        "{},{top} {},{top} {},{}",
        50 + m % 50,
        150 - m % 50,
        100 + m % 20,
        150 - m % 30,
    );
    format!(r#"  <polygon points="{points}" fill="{FILL}" opacity="0.8"/>"#)
}

fn squares(m: u64) -> String {
    let size = 40 + m % 40;
    let rotation = m % 90;

    (0..3_u64)
        .map(|i| {
            let offset = 40 + (m * i) % 80;
            #[allow(clippy::cast_precision_loss)]
            let center = offset as f64 + size as f64 / 2.0;
            let opacity = opacity(0.3, i);
            format!(
                r#"  <rect x="{offset}" y="{offset}" width="{size}" height="{size}" transform="rotate({rotation} {center} {center})" fill="{FILL}" opacity="{opacity}"/>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `base + 0.2 * step`, printed with one decimal.
fn opacity(base: f64, step: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = 0.2_f64.mul_add(step as f64, base);
    format!("{value:.1}")
}
