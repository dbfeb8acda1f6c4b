//! Emotion keyword profile.
//!
//! # Responsibility
//! - Count exact keyword mentions per emotion group in free text.
//!
//! # Invariants
//! - The profile always contains all six emotions in declaration order.
//! - Matching is exact-word and case-insensitive; no stemming.

use crate::analysis::tokenize::raw_words;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Fixed emotion categories tracked by the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
        };
        write!(f, "{name}")
    }
}

/// All emotions in profile output order.
pub const EMOTIONS: [Emotion; 6] = [
    Emotion::Joy,
    Emotion::Sadness,
    Emotion::Anger,
    Emotion::Fear,
    Emotion::Surprise,
    Emotion::Disgust,
];

/// Mention count for one emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: Emotion,
    pub mentions: u32,
}

static KEYWORD_EMOTION: Lazy<HashMap<&'static str, Emotion>> = Lazy::new(|| {
    let groups: [(Emotion, &[&'static str]); 6] = [
        (
            Emotion::Joy,
            &["happy", "joy", "excited", "delighted", "wonderful"],
        ),
        (
            Emotion::Sadness,
            &["sad", "depressed", "unhappy", "miserable", "blue"],
        ),
        (
            Emotion::Anger,
            &["angry", "furious", "mad", "irritated", "annoyed"],
        ),
        (
            Emotion::Fear,
            &["afraid", "scared", "anxious", "worried", "nervous"],
        ),
        (
            Emotion::Surprise,
            &["surprised", "shocked", "amazed", "astonished", "stunned"],
        ),
        (
            Emotion::Disgust,
            &["disgusted", "repulsed", "sick", "revolted"],
        ),
    ];

    let mut map = HashMap::new();
    for (emotion, keywords) in groups {
        for keyword in keywords {
            map.insert(*keyword, emotion);
        }
    }
    map
});

/// Counts keyword mentions per emotion across `text`.
///
/// Returns one [`EmotionScore`] per emotion in [`EMOTIONS`] order, zero
/// counts included. Pure and total like the rest of the pipeline.
pub fn emotion_profile(text: &str) -> Vec<EmotionScore> {
    let mut counts: HashMap<Emotion, u32> = HashMap::new();

    for token in raw_words(text) {
        if let Some(emotion) = KEYWORD_EMOTION.get(token.as_str()) {
            *counts.entry(*emotion).or_insert(0) += 1;
        }
    }

    EMOTIONS
        .iter()
        .map(|&emotion| EmotionScore {
            emotion,
            mentions: counts.get(&emotion).copied().unwrap_or(0),
        })
        .collect()
}
