//! SelfCross Engine
//!
//! Scoring and letter-supply engine for SelfCross, a single-player
//! word game: the player fills a 5x5 grid one letter at a time from a
//! small rotating batch, and every placement is scored by scanning the
//! grid for dictionary words.
//!
//! # Overview
//!
//! The engine provides:
//!
//! - **Dictionary** - Fixed vocabulary bucketed by word length, with
//!   O(1) case-insensitive membership tests.
//!
//! - **LetterSupplier** - Frequency-weighted random letter batches
//!   with no letter repeated within a batch.
//!
//! - **Scorer** - Full-grid rescoring: rows and columns are split into
//!   runs, candidate substrings are checked against the dictionary,
//!   and found words are deduplicated into three point tiers.
//!
//! - **GameSession** - The placement rules and the in-progress /
//!   finished state machine for one game.
//!
//! - **SessionRegistry** - Concurrent id-keyed access to many live
//!   sessions.
//!
//! # Design Principles
//!
//! 1. **Pure state** - No networking, no I/O, no background tasks;
//!    every operation runs to completion before returning.
//!
//! 2. **Scores are recomputed, never patched** - Each placement
//!    rescans the whole grid, so any score can be reproduced from its
//!    grid snapshot alone.
//!
//! 3. **Rejections are not errors** - Placing into an occupied cell or
//!    with a letter not on offer is a no-op reported as an outcome;
//!    only out-of-range coordinates are an error.
//!
//! 4. **Serialization-ready** - Snapshots, scores, and outcomes all
//!    serialize to JSON for clients.
//!
//! # Example
//!
//! ```rust
//! use selfcross_engine::{Dictionary, GameSession, SUPPLY_SIZE};
//!
//! let dictionary = Dictionary::global();
//! let mut session = GameSession::new();
//!
//! // Place the first offered letter in the top-left corner
//! let letter = session.supply()[0];
//! let outcome = session.place_letter(dictionary, letter, 0, 0).unwrap();
//! assert!(outcome.is_placed());
//!
//! // A fresh batch is offered after every accepted placement
//! assert_eq!(session.supply().len(), SUPPLY_SIZE);
//! assert_eq!(session.grid().cell(0, 0), Some(letter));
//! ```

pub mod dictionary;
pub mod game;
pub mod models;
pub mod registry;
pub mod utils;

pub use dictionary::Dictionary;
pub use game::{GameSession, LetterSupplier, LineScanner, Scorer};
pub use models::{
    FoundWord, GameError, GameScore, GameStatus, Grid, PlacementOutcome, PlacementRejection,
    SessionSnapshot,
};
pub use registry::SessionRegistry;

/// Side length of the square letter grid
pub const GRID_SIZE: usize = 5;
/// Number of letters offered to the player at a time
pub const SUPPLY_SIZE: usize = 3;
/// Shortest word length that scores
pub const MIN_WORD_LENGTH: usize = 3;
/// Longest word length that scores
pub const MAX_WORD_LENGTH: usize = 5;
