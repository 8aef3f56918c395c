use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Set of top-level domain suffixes to check.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SuffixSet: u8 {
        const COM = 1 << 0;
        const IO = 1 << 1;
        const CO = 1 << 2;
        const APP = 1 << 3;
        const DEV = 1 << 4;
        const AI = 1 << 5;

        /// Suffixes checked by the ideation flow.
        const STANDARD = Self::COM.bits() | Self::IO.bits() | Self::CO.bits() | Self::APP.bits();
    }
}

const LABELS: [(SuffixSet, &str); 6] = [
    (SuffixSet::COM, ".com"),
    (SuffixSet::IO, ".io"),
    (SuffixSet::CO, ".co"),
    (SuffixSet::APP, ".app"),
    (SuffixSet::DEV, ".dev"),
    (SuffixSet::AI, ".ai"),
];

impl Default for SuffixSet {
    /// A lone `.com`, the fallback when no suffixes are requested.
    fn default() -> Self {
        Self::COM
    }
}

impl SuffixSet {
    /// Labels in canonical order (`.com`, `.io`, `.co`, `.app`, `.dev`, `.ai`).
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        LABELS.into_iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, label)| label)
    }

    /// Parses `.io`, `io` or `IO`; `None` for unsupported suffixes.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().trim_start_matches('.');
        LABELS
            .into_iter()
            .find(|(_, known)| known[1..].eq_ignore_ascii_case(wanted))
            .map(|(flag, _)| flag)
    }
}

impl Serialize for SuffixSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let labels: Vec<&str> = self.labels().collect();
        let mut seq = serializer.serialize_seq(Some(labels.len()))?;
        for label in labels {
            seq.serialize_element(label)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SuffixSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelsVisitor;

        impl<'de> Visitor<'de> for LabelsVisitor {
            type Value = SuffixSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of domain suffixes such as [\".com\", \".io\"]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = SuffixSet::empty();
                while let Some(label) = seq.next_element::<String>()? {
                    let flag = SuffixSet::from_label(&label).ok_or_else(|| {
                        de::Error::invalid_value(de::Unexpected::Str(&label), &self)
                    })?;
                    set |= flag;
                }
                Ok(if set.is_empty() { SuffixSet::default() } else { set })
            }
        }

        deserializer.deserialize_seq(LabelsVisitor)
    }
}
