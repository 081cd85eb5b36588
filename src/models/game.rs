use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GRID_SIZE;

/// A square letter grid. Cells start empty and are filled one letter at
/// a time; a placed letter is never removed.
///
/// Serializes as a plain nested array of optional letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Option<char>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Letter at (row, col), if any. Both indices must be < GRID_SIZE.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row][col]
    }

    /// Copy of this grid with one cell set.
    pub fn with_letter(mut self, row: usize, col: usize, letter: char) -> Self {
        self.cells[row][col] = Some(letter);
        self
    }

    /// Cells of row `index`, in column order. The index must be < GRID_SIZE.
    pub fn row(&self, index: usize) -> [Option<char>; GRID_SIZE] {
        self.cells[index]
    }

    /// Cells of column `index`, in row order. The index must be < GRID_SIZE.
    pub fn column(&self, index: usize) -> [Option<char>; GRID_SIZE] {
        std::array::from_fn(|row| self.cells[row][index])
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    pub fn empty_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.filled_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// A dictionary word found on the grid, paired with the points its
/// length is worth. Produced fresh by every scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub points: u32,
}

/// Full score for one grid snapshot. Words are grouped by point tier
/// and each tier is sorted alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub total: u32,
    pub one_point_words: Vec<String>,
    pub two_point_words: Vec<String>,
    pub four_point_words: Vec<String>,
}

impl GameScore {
    pub fn word_count(&self) -> usize {
        self.one_point_words.len() + self.two_point_words.len() + self.four_point_words.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Why a placement was turned down. Rejections leave the session
/// untouched; they are outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRejection {
    CellOccupied,
    LetterNotOffered,
    GameFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlacementOutcome {
    Placed,
    Rejected { reason: PlacementRejection },
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} grid")]
    PositionOutOfBounds { row: usize, col: usize, size: usize },
}

/// Point-in-time view of a session, safe to hand to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub supply: Vec<char>,
    pub score: GameScore,
    pub status: GameStatus,
    pub cells_remaining: usize,
}
