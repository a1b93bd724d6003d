//! Lookup-key derivation for reference recommendations.

use serde::{Deserialize, Serialize};

use crate::domain::prakriti::{DominantDosha, LABEL_SEPARATOR};

/// Which reference table to select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTable {
    Diet,
    Schedule,
}

/// Reference tables are keyed by a single dosha; a composite label
/// resolves to its first listed component.
///
/// `Vata-Pitta` → `Vata`, `Kapha` → `Kapha`. `Tri-Dosha` → `Tri`, which
/// matches no reference rows and so yields an empty selection.
pub fn recommendation_key(label: &str) -> &str {
    label.split(LABEL_SEPARATOR).next().unwrap_or(label)
}

impl DominantDosha {
    /// Key used to select this label's diet and schedule rows.
    pub fn recommendation_key(&self) -> &'static str {
        recommendation_key(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_label_uses_first_component() {
        assert_eq!(recommendation_key("Vata-Pitta"), "Vata");
        assert_eq!(recommendation_key("Pitta-Kapha"), "Pitta");
    }

    #[test]
    fn single_label_is_unchanged() {
        assert_eq!(recommendation_key("Kapha"), "Kapha");
    }

    #[test]
    fn tri_dosha_resolves_to_prefix() {
        assert_eq!(DominantDosha::TriDosha.recommendation_key(), "Tri");
    }

    #[test]
    fn every_pair_label_keys_on_its_first_dosha() {
        for label in DominantDosha::ALL {
            if label != DominantDosha::TriDosha {
                assert_eq!(label.recommendation_key(), label.doshas()[0].display_name());
            }
        }
    }
}
