use std::collections::HashMap;
use std::fmt;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Product feature a review can talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Display,
    Camera,
    Battery,
    Build,
    Value,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Display => "display",
            Aspect::Camera => "camera",
            Aspect::Battery => "battery",
            Aspect::Build => "build",
            Aspect::Value => "value",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Hyphenated and multi-word entries never survive tokenization and are kept as-is.
const ASPECT_KEYWORDS: &[(Aspect, &[&str])] = &[
    (
        Aspect::Display,
        &[
            "screen", "display", "oled", "amoled", "brightness", "contrast", "colors", "blacks",
            "refresh", "hz", "sunlight", "outdoors", "indoor",
        ],
    ),
    (
        Aspect::Camera,
        &[
            "camera", "photo", "picture", "selfie", "lens", "zoom", "low-light", "grainy", "bokeh",
            "ultra-wide", "macro", "night", "portrait", "dynamic range",
        ],
    ),
    (
        Aspect::Battery,
        &[
            "battery", "charging", "power", "backup", "drain", "drains", "endurance", "mah",
            "fast charging", "overnight", "standby", "swelled", "longevity",
        ],
    ),
    (
        Aspect::Build,
        &[
            "build", "material", "design", "durability", "feel", "premium", "plastic", "glass",
            "aluminum", "frame", "matte", "glossy", "fingerprint", "scratches", "flex",
        ],
    ),
    (Aspect::Value, &["price", "cost", "value", "expensive", "cheap", "worth"]),
];

const SENTIMENT_WORDS: &[(&str, f64)] = &[
    // Positive
    ("awesome", 0.9),
    ("excellent", 0.95),
    ("great", 0.85),
    ("good", 0.6),
    ("nice", 0.55),
    ("ok", 0.3),
    ("average", 0.4),
    ("decent", 0.5),
    ("beautiful", 0.85),
    ("fine", 0.4),
    ("outdoors", 0.3),
    ("daylight", 0.2),
    // Negative
    ("bad", -0.6),
    ("worse", -0.8),
    ("worst", -0.95),
    ("terrible", -0.9),
    ("poor", -0.7),
    ("awful", -0.9),
    ("struggles", -0.75),
    ("struggle", -0.75),
    ("drains", -0.8),
    ("drained", -0.75),
    ("indoors", -0.3),
    ("stunning", 0.9),
    ("vibrant", 0.7),
    ("deep", 0.5),
    ("letdown", -0.8),
    ("grainy", -0.6),
    ("disappointing", -0.75),
    ("premium", 0.7),
    ("cheap", -0.5),
    ("buttery", 0.6),
    ("unacceptable", -0.9),
    ("polished", 0.8),
];

/// Lexicon compiled into the binary, built on first use.
pub static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_tables(ASPECT_KEYWORDS, SENTIMENT_WORDS)
});

/// Read-only aspect and sentiment reference data.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keyword_to_aspect: HashMap<String, Aspect>,
    sentiment_words: HashMap<String, f64>,
}

impl Lexicon {
    /// Builds a lexicon from an aspect keyword table and a sentiment table.
    ///
    /// A keyword listed under several aspects belongs to the first aspect that
    /// lists it. A repeated sentiment word keeps its first score.
    pub fn from_tables(aspects: &[(Aspect, &[&str])], sentiments: &[(&str, f64)]) -> Self {
        let mut keyword_to_aspect = HashMap::new();
        for (aspect, keywords) in aspects {
            for keyword in keywords.iter() {
                if let Some(owner) = keyword_to_aspect.get(*keyword) {
                    if owner != aspect {
                        tracing::warn!(
                            keyword = %keyword,
                            kept = %owner,
                            ignored = %aspect,
                            "aspect keyword listed under more than one aspect"
                        );
                    }
                    continue;
                }
                keyword_to_aspect.insert(keyword.to_string(), *aspect);
            }
        }

        let mut sentiment_words = HashMap::new();
        for (word, score) in sentiments {
            sentiment_words.entry(word.to_string()).or_insert(*score);
        }

        Lexicon {
            keyword_to_aspect,
            sentiment_words,
        }
    }

    /// Aspect signalled by an already-lowercased keyword.
    pub fn aspect_of(&self, keyword: &str) -> Option<Aspect> {
        self.keyword_to_aspect.get(keyword).copied()
    }

    /// Polarity score of an already-lowercased word.
    pub fn sentiment_of(&self, word: &str) -> Option<f64> {
        self.sentiment_words.get(word).copied()
    }
}
