use rustc_hash::FxHashSet;

use crate::MIN_WORD_LEN;

/// Dictionary wrapper answering word and prefix membership
///
/// The prefix set is what lets the solver abandon a path the moment no
/// dictionary word can start with it.
pub struct Lexicon {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a collection of words
    ///
    /// Words are uppercased; words shorter than [`MIN_WORD_LEN`] letters
    /// are discarded. Every non-empty prefix of every kept word goes into
    /// the prefix set, the word itself included.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::empty();
        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if word.chars().count() < MIN_WORD_LEN {
                continue;
            }
            // char_indices keeps the slicing safe on non-ASCII words
            for (end, _) in word.char_indices().skip(1) {
                lexicon.prefixes.insert(word[..end].to_string());
            }
            lexicon.prefixes.insert(word.clone());
            lexicon.words.insert(word);
        }

        tracing::debug!(
            "Lexicon built: {} words, {} prefixes",
            lexicon.words.len(),
            lexicon.prefixes.len()
        );

        lexicon
    }

    /// Create an empty lexicon (for testing)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
            prefixes: FxHashSet::default(),
        }
    }

    /// Check if a word exists in the lexicon
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Check if some lexicon word starts with the given string
    ///
    /// A full word counts as its own prefix. The empty string is the root
    /// of every search and always returns true.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.prefixes.contains(&prefix.to_uppercase())
    }

    /// Get the number of words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
