use crate::aggregator::{ AspectRating, AspectSentiments };
use crate::associator::attribute;
use crate::lexicon::{ Lexicon, DEFAULT_LEXICON };
use crate::locator::locate;
use crate::segmenter::split_sentences;
use crate::tokenizer::{ is_separator, tokenize };

/// Scores product reviews per aspect against a shared lexicon.
#[derive(Debug, Clone, Copy)]
pub struct ReviewAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl ReviewAnalyzer<'static> {
    /// Analyzer backed by the compiled-in lexicon.
    pub fn with_default_lexicon() -> Self {
        ReviewAnalyzer::new(&DEFAULT_LEXICON)
    }
}

impl<'a> ReviewAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        ReviewAnalyzer { lexicon }
    }

    /// Rates every aspect the review expresses sentiment about.
    ///
    /// Never fails: text with nothing recognizable, including empty text,
    /// produces an empty list.
    pub fn analyze(&self, review_text: &str) -> Vec<AspectRating> {
        if review_text.trim_matches(is_separator).is_empty() {
            return Vec::new();
        }

        let mut sentiments = AspectSentiments::new();
        for sentence in split_sentences(review_text) {
            let tokens = tokenize(sentence);
            if tokens.is_empty() {
                continue;
            }
            let mentions = locate(&tokens, self.lexicon);
            tracing::trace!(
                tokens = tokens.len(),
                aspects = mentions.aspects().count(),
                sentiments = mentions.sentiments().len(),
                "sentence located"
            );
            sentiments.extend(attribute(&mentions));
        }

        let ratings = sentiments.into_ratings();
        tracing::debug!(
            review_chars = review_text.chars().count(),
            aspects = ratings.len(),
            "review analyzed"
        );
        ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Aspect;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rating_of(ratings: &[AspectRating], aspect: Aspect) -> Option<&AspectRating> {
        ratings.iter().find(|rating| rating.aspect == aspect)
    }

    #[test]
    fn test_camera_and_battery_review() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        let ratings = analyzer.analyze("The camera is great but battery drains fast.");

        assert_eq!(ratings.len(), 2);
        let camera = rating_of(&ratings, Aspect::Camera).unwrap();
        assert!(approx_eq(camera.sentiment, 0.85));
        assert!(approx_eq(camera.rating, 4.7));
        let battery = rating_of(&ratings, Aspect::Battery).unwrap();
        assert!(approx_eq(battery.sentiment, -0.8));
        assert!(approx_eq(battery.rating, 1.4));
    }

    #[test]
    fn test_blank_reviews() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   \n\t ").is_empty());
        assert!(analyzer.analyze("... !!! ???").is_empty());
    }

    #[test]
    fn test_aspect_without_sentiment_is_omitted() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        assert!(analyzer.analyze("I bought it for the camera and the screen.").is_empty());
    }

    #[test]
    fn test_sentences_do_not_interact() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        assert!(analyzer.analyze("Look at the camera. Great!").is_empty());
        assert_eq!(analyzer.analyze("Look at the camera, great!").len(), 1);
    }

    #[test]
    fn test_scores_averaged_across_sentences() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        let ratings = analyzer.analyze("The screen is stunning. The screen is bad indoors");

        assert_eq!(ratings.len(), 1);
        let display = rating_of(&ratings, Aspect::Display).unwrap();
        // stunning 0.9, bad -0.6, indoors -0.3
        assert!(approx_eq(display.sentiment, 0.0));
        assert!(approx_eq(display.rating, 3.0));
    }

    #[test]
    fn test_one_rating_per_aspect_and_bounded() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        let ratings = analyzer.analyze(
            "Screen is awesome, screen is excellent! Price is awful, cost is terrible. \
             Design feels premium and polished. Battery good, battery bad, battery ok."
        );

        let mut aspects: Vec<Aspect> = ratings.iter().map(|rating| rating.aspect).collect();
        aspects.sort();
        aspects.dedup();
        assert_eq!(aspects.len(), ratings.len());
        for rating in &ratings {
            assert!((1.0..=5.0).contains(&rating.rating), "{rating:?}");
        }
    }

    #[test]
    fn test_non_breaking_spaces_join_words() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        assert!(analyzer.analyze("camera\u{00A0}is\u{00A0}great").is_empty());
        assert!(analyzer.analyze("\u{00A0}\u{00A0}").is_empty());
        assert_eq!(analyzer.analyze("camera is\u{00A0}really great").len(), 1);
    }

    #[test]
    fn test_hyphenated_keyword_is_dead_entry() {
        let analyzer = ReviewAnalyzer::with_default_lexicon();
        assert!(analyzer.analyze("Low-light is terrible").is_empty());
        assert!(analyzer.analyze("Ultra-wide great").is_empty());
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_tables(&[(Aspect::Value, &["deal"])], &[("steal", 1.0)]);
        let ratings = ReviewAnalyzer::new(&lexicon).analyze("What a deal, a steal!");

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].aspect, Aspect::Value);
        assert_eq!(ratings[0].rating, 5.0);
    }
}
