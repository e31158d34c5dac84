use std::collections::BTreeMap;
use serde::Serialize;
use crate::lexicon::Aspect;

const NEUTRAL_RATING: f64 = 3.0;
const RATING_SPREAD: f64 = 2.0;
const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Final score for one aspect of a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRating {
    pub aspect: Aspect,
    pub sentiment: f64,
    pub rating: f64,
}

/// Sentiment scores attributed to each aspect over a whole review.
#[derive(Debug, Default)]
pub struct AspectSentiments {
    scores: BTreeMap<Aspect, Vec<f64>>,
}

impl AspectSentiments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, aspect: Aspect, score: f64) {
        self.scores.entry(aspect).or_default().push(score);
    }

    pub fn extend<I: IntoIterator<Item = (Aspect, f64)>>(&mut self, attributions: I) {
        for (aspect, score) in attributions {
            self.add(aspect, score);
        }
    }

    /// One rating per aspect that received at least one score, in aspect order.
    pub fn into_ratings(self) -> Vec<AspectRating> {
        self.scores
            .into_iter()
            .filter(|(_, scores)| !scores.is_empty())
            .map(|(aspect, scores)| {
                let sentiment = scores.iter().sum::<f64>() / (scores.len() as f64);
                AspectRating {
                    aspect,
                    sentiment,
                    rating: rating_for(sentiment),
                }
            })
            .collect()
    }
}

/// Maps a mean polarity in [-1, 1] linearly onto [1, 5]; anything outside is clamped.
pub fn rating_for(sentiment: f64) -> f64 {
    (NEUTRAL_RATING + sentiment * RATING_SPREAD).clamp(MIN_RATING, MAX_RATING)
}
