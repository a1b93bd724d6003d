//! Dosha tags and the dominant-dosha label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Separator between the two halves of a composite label.
pub const LABEL_SEPARATOR: char = '-';

/// One of the three constitutional categories.
///
/// Declaration order is significant: Vata is first, Pitta second,
/// Kapha third. Composite labels always list doshas in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// All doshas in canonical order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Lowercase answer tag, as recorded in answer sets.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Capitalised name, as used in labels and reference-table keys.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Dosha {
    type Err = ValidationError;

    /// Accepts both the tag and display forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(ValidationError::invalid_format(
                "dosha",
                format!("unknown dosha '{}'", other),
            )),
        }
    }
}

/// Result label of an assessment: a single dosha, a pair, or all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominantDosha {
    Vata,
    Pitta,
    Kapha,
    VataPitta,
    VataKapha,
    PittaKapha,
    TriDosha,
}

impl DominantDosha {
    /// Every label the scorer can produce.
    pub const ALL: [DominantDosha; 7] = [
        DominantDosha::Vata,
        DominantDosha::Pitta,
        DominantDosha::Kapha,
        DominantDosha::VataPitta,
        DominantDosha::VataKapha,
        DominantDosha::PittaKapha,
        DominantDosha::TriDosha,
    ];

    /// Label for a single dosha.
    pub fn single(dosha: Dosha) -> Self {
        match dosha {
            Dosha::Vata => DominantDosha::Vata,
            Dosha::Pitta => DominantDosha::Pitta,
            Dosha::Kapha => DominantDosha::Kapha,
        }
    }

    /// The stored and displayed form, e.g. `Vata-Pitta`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantDosha::Vata => "Vata",
            DominantDosha::Pitta => "Pitta",
            DominantDosha::Kapha => "Kapha",
            DominantDosha::VataPitta => "Vata-Pitta",
            DominantDosha::VataKapha => "Vata-Kapha",
            DominantDosha::PittaKapha => "Pitta-Kapha",
            DominantDosha::TriDosha => "Tri-Dosha",
        }
    }

    /// Whether the label names more than one dosha.
    pub fn is_composite(&self) -> bool {
        !matches!(
            self,
            DominantDosha::Vata | DominantDosha::Pitta | DominantDosha::Kapha
        )
    }

    /// Doshas named by this label, in canonical order.
    pub fn doshas(&self) -> Vec<Dosha> {
        match self {
            DominantDosha::Vata => vec![Dosha::Vata],
            DominantDosha::Pitta => vec![Dosha::Pitta],
            DominantDosha::Kapha => vec![Dosha::Kapha],
            DominantDosha::VataPitta => vec![Dosha::Vata, Dosha::Pitta],
            DominantDosha::VataKapha => vec![Dosha::Vata, Dosha::Kapha],
            DominantDosha::PittaKapha => vec![Dosha::Pitta, Dosha::Kapha],
            DominantDosha::TriDosha => Dosha::ALL.to_vec(),
        }
    }
}

impl fmt::Display for DominantDosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DominantDosha {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DominantDosha::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "dominant_dosha",
                    format!("unknown label '{}'", s),
                )
            })
    }
}

impl Serialize for DominantDosha {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DominantDosha {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
