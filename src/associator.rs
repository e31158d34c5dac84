use crate::lexicon::Aspect;
use crate::locator::SentenceMentions;

/// How many tokens to the left of a sentiment word are searched for an aspect.
pub const ATTRIBUTION_WINDOW: usize = 6;

/// Nearest aspect strictly to the left of `position`, at most
/// `ATTRIBUTION_WINDOW` tokens away.
pub fn nearest_aspect(mentions: &SentenceMentions, position: usize) -> Option<Aspect> {
    let lowest = position.saturating_sub(ATTRIBUTION_WINDOW);
    (lowest..position).rev().find_map(|candidate| mentions.aspect_at(candidate))
}

/// Pairs every sentiment score of a sentence with the aspect it modifies.
/// Scores with no aspect inside the window are dropped.
pub fn attribute(mentions: &SentenceMentions) -> Vec<(Aspect, f64)> {
    mentions
        .sentiments()
        .iter()
        .filter_map(|sentiment| {
            let aspect = nearest_aspect(mentions, sentiment.position);
            if aspect.is_none() {
                tracing::trace!(position = sentiment.position, "sentiment word without aspect");
            }
            aspect.map(|aspect| (aspect, sentiment.score))
        })
        .collect()
}
