//! Prakriti scoring - tallies answers and derives the dominant label.

use serde::{Deserialize, Serialize};

use super::{AnswerSet, DominantDosha, Dosha};

/// Per-dosha answer counts.
///
/// Invariant when produced by [`PrakritiScorer::compute_scores`]:
/// `total()` equals the number of answers tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaScores {
    pub fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Score for one dosha.
    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sum of all three scores.
    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    fn increment(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata += 1,
            Dosha::Pitta => self.pitta += 1,
            Dosha::Kapha => self.kapha += 1,
        }
    }
}

/// Stateless scorer for Prakriti assessments.
pub struct PrakritiScorer;

impl PrakritiScorer {
    /// One point per answer to the chosen dosha. No weighting.
    ///
    /// An empty answer set yields all-zero scores.
    pub fn compute_scores(answers: &AnswerSet) -> DoshaScores {
        let mut scores = DoshaScores::default();
        for dosha in answers.choices() {
            scores.increment(dosha);
        }
        scores
    }

    /// Derives the dominant label.
    ///
    /// Rules are evaluated in this exact order:
    /// 1. all equal → `Tri-Dosha`
    /// 2. vata == pitta > kapha → `Vata-Pitta`
    /// 3. vata == kapha > pitta → `Vata-Kapha`
    /// 4. pitta == kapha > vata → `Pitta-Kapha`
    /// 5. the single strictly greatest dosha
    ///
    /// Once rules 1-4 have failed the maximum is unique, so rule 5 never
    /// has to break a tie.
    pub fn dominant_label(scores: &DoshaScores) -> DominantDosha {
        let DoshaScores { vata, pitta, kapha } = *scores;

        if vata == pitta && pitta == kapha {
            DominantDosha::TriDosha
        } else if vata == pitta && vata > kapha {
            DominantDosha::VataPitta
        } else if vata == kapha && vata > pitta {
            DominantDosha::VataKapha
        } else if pitta == kapha && pitta > vata {
            DominantDosha::PittaKapha
        } else if vata > pitta && vata > kapha {
            DominantDosha::Vata
        } else if pitta > kapha {
            DominantDosha::Pitta
        } else {
            DominantDosha::Kapha
        }
    }

    /// Convenience: tally then label.
    pub fn evaluate(answers: &AnswerSet) -> (DoshaScores, DominantDosha) {
        let scores = Self::compute_scores(answers);
        (scores, Self::dominant_label(&scores))
    }
}
