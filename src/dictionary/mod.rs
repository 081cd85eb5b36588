use std::collections::HashSet;

use once_cell::sync::Lazy;

const WORDS_3: &str = include_str!("../../data/words_3.json");
const WORDS_4: &str = include_str!("../../data/words_4.json");
const WORDS_5: &str = include_str!("../../data/words_5.json");

static GLOBAL: Lazy<Dictionary> = Lazy::new(|| {
    let mut words = parse_embedded(WORDS_3, 3);
    words.extend(parse_embedded(WORDS_4, 4));
    words.extend(parse_embedded(WORDS_5, 5));

    let dict = Dictionary::from_word_list(&words);
    tracing::info!(
        "Loaded {} words into dictionary ({} three-letter, {} four-letter, {} five-letter)",
        dict.len(),
        dict.word_count(3),
        dict.word_count(4),
        dict.word_count(5)
    );
    dict
});

fn parse_embedded(raw: &str, length: usize) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Failed to parse embedded {}-letter word list: {}", length, e);
            Vec::new()
        }
    }
}

/// Word lookup tables, bucketed by length.
///
/// Only three, four, and five letter words are playable, so each length
/// gets its own set and anything else is discarded on load.
pub struct Dictionary {
    three: HashSet<String>,
    four: HashSet<String>,
    five: HashSet<String>,
}

impl Dictionary {
    /// The embedded word lists, parsed once on first use.
    pub fn global() -> &'static Dictionary {
        &GLOBAL
    }

    /// Build a dictionary from any word iterator
    pub fn from_word_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::empty();
        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            match word.len() {
                3 => {
                    dict.three.insert(word);
                }
                4 => {
                    dict.four.insert(word);
                }
                5 => {
                    dict.five.insert(word);
                }
                _ => {}
            }
        }
        dict
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            three: HashSet::new(),
            four: HashSet::new(),
            five: HashSet::new(),
        }
    }

    /// Check if a word is playable; case-insensitive, false for any
    /// length outside 3..=5
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        match word.len() {
            3 => self.three.contains(&word),
            4 => self.four.contains(&word),
            5 => self.five.contains(&word),
            _ => false,
        }
    }

    /// Number of words of the given length
    pub fn word_count(&self, length: usize) -> usize {
        match length {
            3 => self.three.len(),
            4 => self.four.len(),
            5 => self.five.len(),
            _ => 0,
        }
    }

    /// Total number of words across all lengths
    pub fn len(&self) -> usize {
        self.three.len() + self.four.len() + self.five.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.three.is_empty() && self.four.is_empty() && self.five.is_empty()
    }
}
