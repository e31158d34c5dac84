use crate::lexicon::{ Aspect, Lexicon };
use crate::tokenizer::Token;

/// Position in a sentence where an aspect keyword occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectMention {
    pub aspect: Aspect,
    pub position: usize,
}

/// Position in a sentence where a sentiment word occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentMention {
    pub score: f64,
    pub position: usize,
}

/// Aspect and sentiment occurrences of one sentence.
#[derive(Debug, Default)]
pub struct SentenceMentions {
    aspect_at: Vec<Option<Aspect>>,
    sentiments: Vec<SentimentMention>,
}

impl SentenceMentions {
    /// Aspect mentioned at `position`, if any.
    pub fn aspect_at(&self, position: usize) -> Option<Aspect> {
        self.aspect_at.get(position).copied().flatten()
    }

    pub fn aspects(&self) -> impl Iterator<Item = AspectMention> + '_ {
        self.aspect_at
            .iter()
            .enumerate()
            .filter_map(|(position, aspect)| {
                (*aspect).map(|aspect| AspectMention { aspect, position })
            })
    }

    pub fn sentiments(&self) -> &[SentimentMention] {
        &self.sentiments
    }
}

/// Looks every token up in both tables. A token found in both gets both mentions.
pub fn locate(tokens: &[Token], lexicon: &Lexicon) -> SentenceMentions {
    let mut mentions = SentenceMentions {
        aspect_at: Vec::with_capacity(tokens.len()),
        sentiments: Vec::new(),
    };

    for token in tokens {
        mentions.aspect_at.push(lexicon.aspect_of(&token.word));
        if let Some(score) = lexicon.sentiment_of(&token.word) {
            mentions.sentiments.push(SentimentMention {
                score,
                position: token.position,
            });
        }
    }

    mentions
}
