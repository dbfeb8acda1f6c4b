//! Valence-weighted polarity lexicons for English and French.
//!
//! # Responsibility
//! - Hold the per-language word valence tables, negators and intensifiers.
//! - Score raw text to a polarity in [-1, 1] per language model.
//!
//! # Invariants
//! - `polarity` always returns a value in [-1, 1].
//! - Text with no lexicon hits scores exactly 0.0.
//! - Scoring reads nothing but its arguments; tables are immutable statics.

use crate::analysis::tokenize::raw_words;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Number of following tokens a negator applies to.
const NEGATION_SCOPE: usize = 3;
/// Valence multiplier under negation. "not good" reads as mildly negative
/// rather than as the full inverse of "good".
const NEGATION_FACTOR: f64 = -0.5;

/// One language's scoring tables.
pub struct LexiconModel {
    valences: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
    boosters: HashMap<&'static str, f64>,
}

impl LexiconModel {
    /// Scores `text` to a polarity in [-1, 1].
    ///
    /// Each lexicon hit contributes its valence, scaled by any directly
    /// preceding booster and flipped/damped by a negator within
    /// `NEGATION_SCOPE` tokens. The final score is the arithmetic mean of
    /// all contributions, clamped to the polarity range; no hits means 0.0.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut assessments: Vec<f64> = Vec::new();
        let mut negation_left = 0usize;
        let mut booster = 1.0;

        for token in raw_words(text) {
            let token = token.as_str();

            if self.negators.contains(token) {
                negation_left = NEGATION_SCOPE;
                booster = 1.0;
                continue;
            }

            if let Some(factor) = self.boosters.get(token) {
                booster *= factor;
                continue;
            }

            if let Some(valence) = self.valences.get(token) {
                let mut value = valence * booster;
                if negation_left > 0 {
                    value *= NEGATION_FACTOR;
                }
                assessments.push(value.clamp(-1.0, 1.0));
            }

            negation_left = negation_left.saturating_sub(1);
            booster = 1.0;
        }

        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// General-purpose English polarity model.
pub static ENGLISH: Lazy<LexiconModel> = Lazy::new(|| LexiconModel {
    valences: HashMap::from([
        // positive
        ("happy", 0.8),
        ("happiness", 0.8),
        ("joy", 0.8),
        ("joyful", 0.8),
        ("love", 0.6),
        ("loved", 0.7),
        ("lovely", 0.8),
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("amazing", 0.8),
        ("wonderful", 1.0),
        ("awesome", 1.0),
        ("fantastic", 0.9),
        ("beautiful", 0.85),
        ("best", 1.0),
        ("better", 0.5),
        ("perfect", 1.0),
        ("nice", 0.6),
        ("calm", 0.3),
        ("peaceful", 0.6),
        ("grateful", 0.7),
        ("thankful", 0.6),
        ("proud", 0.8),
        ("excited", 0.4),
        ("fun", 0.4),
        ("hope", 0.4),
        ("hopeful", 0.5),
        ("relaxed", 0.4),
        ("accomplished", 0.6),
        ("delighted", 1.0),
        ("pleasant", 0.7),
        ("satisfied", 0.5),
        ("satisfying", 0.5),
        ("success", 0.7),
        ("successful", 0.75),
        ("progress", 0.3),
        ("motivated", 0.5),
        ("inspired", 0.6),
        ("inspiring", 0.6),
        ("comfortable", 0.5),
        ("friendly", 0.6),
        ("smile", 0.5),
        ("smiled", 0.5),
        ("laughed", 0.4),
        ("enjoy", 0.4),
        ("enjoyed", 0.5),
        ("enjoyable", 0.6),
        ("optimistic", 0.6),
        ("productive", 0.5),
        // negative
        ("sad", -0.5),
        ("sadness", -0.5),
        ("unhappy", -0.6),
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("hate", -0.8),
        ("hated", -0.9),
        ("angry", -0.5),
        ("furious", -0.8),
        ("depressed", -0.75),
        ("depressing", -0.7),
        ("anxious", -0.5),
        ("anxiety", -0.5),
        ("worried", -0.4),
        ("worry", -0.4),
        ("stress", -0.5),
        ("stressed", -0.6),
        ("stressful", -0.6),
        ("tired", -0.4),
        ("exhausted", -0.6),
        ("lonely", -0.6),
        ("fear", -0.6),
        ("afraid", -0.6),
        ("scared", -0.6),
        ("cry", -0.4),
        ("cried", -0.5),
        ("pain", -0.6),
        ("painful", -0.7),
        ("hurt", -0.6),
        ("fail", -0.5),
        ("failed", -0.6),
        ("failure", -0.7),
        ("worst", -1.0),
        ("worse", -0.6),
        ("annoyed", -0.4),
        ("annoying", -0.5),
        ("frustrated", -0.6),
        ("frustrating", -0.6),
        ("miserable", -0.8),
        ("upset", -0.5),
        ("disappointed", -0.6),
        ("disappointing", -0.6),
        ("sick", -0.5),
        ("nightmare", -0.7),
        ("gloomy", -0.5),
        ("boring", -0.4),
        ("bored", -0.4),
        ("guilty", -0.5),
        ("ashamed", -0.6),
    ]),
    negators: HashSet::from([
        "not", "never", "no", "nothing", "neither", "nor", "cannot", "without", "hardly",
    ]),
    boosters: HashMap::from([
        ("very", 1.3),
        ("really", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("so", 1.2),
        ("totally", 1.3),
        ("absolutely", 1.4),
        ("completely", 1.4),
        ("quite", 1.1),
        ("slightly", 0.7),
        ("somewhat", 0.8),
        ("barely", 0.6),
    ]),
});

/// French-tuned polarity model. Feminine/masculine and common inflected
/// forms are listed separately; there is no stemming.
pub static FRENCH: Lazy<LexiconModel> = Lazy::new(|| LexiconModel {
    valences: HashMap::from([
        // positif
        ("heureux", 0.8),
        ("heureuse", 0.8),
        ("bonheur", 0.8),
        ("joie", 0.8),
        ("joyeux", 0.7),
        ("joyeuse", 0.7),
        ("content", 0.6),
        ("contente", 0.6),
        ("bien", 0.5),
        ("bon", 0.7),
        ("bonne", 0.7),
        ("beau", 0.8),
        ("belle", 0.8),
        ("magnifique", 0.9),
        ("merveilleux", 0.9),
        ("merveilleuse", 0.9),
        ("excellent", 1.0),
        ("excellente", 1.0),
        ("formidable", 0.8),
        ("génial", 0.9),
        ("géniale", 0.9),
        ("super", 0.7),
        ("parfait", 1.0),
        ("parfaite", 1.0),
        ("aime", 0.5),
        ("adore", 0.8),
        ("adoré", 0.8),
        ("amour", 0.6),
        ("agréable", 0.7),
        ("calme", 0.4),
        ("paisible", 0.6),
        ("fier", 0.7),
        ("fière", 0.7),
        ("reconnaissant", 0.7),
        ("reconnaissante", 0.7),
        ("motivé", 0.5),
        ("motivée", 0.5),
        ("réussi", 0.6),
        ("réussite", 0.7),
        ("succès", 0.7),
        ("espoir", 0.5),
        ("optimiste", 0.6),
        ("détendu", 0.4),
        ("détendue", 0.4),
        ("épanoui", 0.7),
        ("épanouie", 0.7),
        ("sourire", 0.5),
        ("rire", 0.4),
        ("plaisir", 0.6),
        // négatif
        ("triste", -0.6),
        ("tristesse", -0.6),
        ("malheureux", -0.7),
        ("malheureuse", -0.7),
        ("mauvais", -0.7),
        ("mauvaise", -0.7),
        ("mal", -0.5),
        ("terrible", -0.9),
        ("affreux", -1.0),
        ("affreuse", -1.0),
        ("horrible", -1.0),
        ("déteste", -0.8),
        ("détesté", -0.8),
        ("haine", -0.8),
        ("colère", -0.6),
        ("furieux", -0.8),
        ("furieuse", -0.8),
        ("déprimé", -0.75),
        ("déprimée", -0.75),
        ("déprimant", -0.7),
        ("anxieux", -0.5),
        ("anxieuse", -0.5),
        ("angoisse", -0.6),
        ("inquiet", -0.4),
        ("inquiète", -0.4),
        ("stressé", -0.6),
        ("stressée", -0.6),
        ("fatigué", -0.4),
        ("fatiguée", -0.4),
        ("épuisé", -0.6),
        ("épuisée", -0.6),
        ("solitude", -0.5),
        ("peur", -0.6),
        ("effrayé", -0.6),
        ("effrayée", -0.6),
        ("pleurer", -0.4),
        ("pleuré", -0.5),
        ("douleur", -0.6),
        ("douloureux", -0.7),
        ("blessé", -0.6),
        ("blessée", -0.6),
        ("échec", -0.7),
        ("échoué", -0.6),
        ("pire", -0.8),
        ("nul", -0.6),
        ("nulle", -0.6),
        ("ennuyeux", -0.4),
        ("frustré", -0.6),
        ("frustrée", -0.6),
        ("misérable", -0.8),
        ("déçu", -0.6),
        ("déçue", -0.6),
        ("décevant", -0.6),
        ("malade", -0.5),
        ("cauchemar", -0.7),
        ("honte", -0.6),
        ("coupable", -0.5),
    ]),
    negators: HashSet::from([
        "ne", "pas", "jamais", "rien", "aucun", "aucune", "sans", "personne", "guère",
        "nullement", "non",
    ]),
    boosters: HashMap::from([
        ("très", 1.3),
        ("vraiment", 1.3),
        ("extrêmement", 1.5),
        ("tellement", 1.3),
        ("si", 1.2),
        ("trop", 1.2),
        ("assez", 1.1),
        ("peu", 0.7),
        ("légèrement", 0.7),
        ("complètement", 1.4),
        ("totalement", 1.4),
        ("absolument", 1.4),
    ]),
});

#[cfg(test)]
mod tests {
    use super::{ENGLISH, FRENCH};

    #[test]
    fn english_positive_text_scores_positive() {
        assert!(ENGLISH.polarity("what a wonderful and happy day") > 0.5);
    }

    #[test]
    fn english_negative_text_scores_negative() {
        assert!(ENGLISH.polarity("a terrible, awful experience") < -0.5);
    }

    #[test]
    fn negation_flips_and_damps_valence() {
        let plain = ENGLISH.polarity("good");
        let negated = ENGLISH.polarity("not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn booster_amplifies_valence() {
        let plain = ENGLISH.polarity("happy");
        let boosted = ENGLISH.polarity("very happy");
        assert!(boosted > plain);
    }

    #[test]
    fn booster_only_applies_to_adjacent_hit() {
        // "very" followed by a non-lexicon word resets before "good".
        let detached = ENGLISH.polarity("very long good");
        let plain = ENGLISH.polarity("good");
        assert!((detached - plain).abs() < 1e-9);
    }

    #[test]
    fn french_accented_words_are_scored() {
        assert!(FRENCH.polarity("journée absolument géniale") > 0.8);
        assert!(FRENCH.polarity("je suis très déprimé") < -0.5);
    }

    #[test]
    fn french_negation_applies_within_scope() {
        let plain = FRENCH.polarity("je suis content");
        let negated = FRENCH.polarity("je ne suis pas content");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn no_lexicon_hits_score_zero() {
        assert_eq!(ENGLISH.polarity("the meeting starts at noon"), 0.0);
        assert_eq!(FRENCH.polarity("la réunion commence demain"), 0.0);
        assert_eq!(ENGLISH.polarity(""), 0.0);
        assert_eq!(ENGLISH.polarity("   \t\n"), 0.0);
    }

    #[test]
    fn polarity_stays_within_range() {
        let score = ENGLISH.polarity("extremely incredibly awesome perfect best wonderful");
        assert!((-1.0..=1.0).contains(&score));
        let negative = FRENCH.polarity("extrêmement affreux horrible pire cauchemar");
        assert!((-1.0..=1.0).contains(&negative));
    }
}
