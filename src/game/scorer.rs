use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::game::scanner::LineScanner;
use crate::models::{FoundWord, GameScore, Grid};
use crate::GRID_SIZE;

/// Points awarded per word length.
pub const TIER_POINTS: [(usize, u32); 3] = [(3, 1), (4, 2), (5, 4)];

pub struct Scorer;

impl Scorer {
    /// Recompute the full score for a grid snapshot from scratch.
    ///
    /// Scoring rules:
    /// - Every row and column is split into runs of filled cells
    /// - Every substring of length 3 to 5 inside a run is a candidate
    /// - Candidates in the dictionary form a set, so a word readable
    ///   in several lines counts once
    /// - Overlapping words within one run all count (CARE and SCARE
    ///   both score when SCARE is on the board)
    /// - 3-letter words score 1 point, 4-letter 2, 5-letter 4
    pub fn score(dictionary: &Dictionary, grid: &Grid) -> GameScore {
        let mut total = 0;
        let mut tiers: [Vec<String>; TIER_POINTS.len()] = std::array::from_fn(|_| Vec::new());

        // found_words is sorted, so each tier stays sorted too; the
        // buckets follow TIER_POINTS entry order
        for found in Self::found_words(dictionary, grid) {
            let length = found.word.chars().count();
            if let Some(tier) = TIER_POINTS
                .iter()
                .position(|(tier_length, _)| *tier_length == length)
            {
                total += found.points;
                tiers[tier].push(found.word);
            }
        }

        let [one_point_words, two_point_words, four_point_words] = tiers;
        GameScore {
            total,
            one_point_words,
            two_point_words,
            four_point_words,
        }
    }

    /// The deduplicated dictionary words currently readable on the
    /// grid, sorted alphabetically, each paired with its point value.
    pub fn found_words(dictionary: &Dictionary, grid: &Grid) -> Vec<FoundWord> {
        let mut seen = HashSet::new();

        for index in 0..GRID_SIZE {
            for line in [grid.row(index), grid.column(index)] {
                for run in LineScanner::runs(&line) {
                    for candidate in LineScanner::candidate_substrings(&run) {
                        if dictionary.is_valid_word(&candidate) {
                            seen.insert(candidate);
                        }
                    }
                }
            }
        }

        let mut words: Vec<String> = seen.into_iter().collect();
        words.sort();

        words
            .into_iter()
            .filter_map(|word| {
                Self::points_for_length(word.chars().count())
                    .map(|points| FoundWord { word, points })
            })
            .collect()
    }

    /// Point value for a word of the given length, if playable.
    pub fn points_for_length(length: usize) -> Option<u32> {
        TIER_POINTS
            .iter()
            .find(|(tier_length, _)| *tier_length == length)
            .map(|(_, points)| *points)
    }
}
