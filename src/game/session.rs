use rand::Rng;

use crate::dictionary::Dictionary;
use crate::game::scorer::Scorer;
use crate::game::supply::LetterSupplier;
use crate::models::{
    GameError, GameScore, GameStatus, Grid, PlacementOutcome, PlacementRejection, SessionSnapshot,
};
use crate::{GRID_SIZE, SUPPLY_SIZE};

/// One player's game: the grid, the letters currently on offer, and
/// the score for the latest snapshot.
///
/// A session is mutated only through `place_letter` and `new_game`;
/// rejected placements leave it byte-for-byte unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    supply: Vec<char>,
    score: GameScore,
    status: GameStatus,
}

impl GameSession {
    /// Fresh session: empty grid, zero score, first batch of letters.
    pub fn new() -> Self {
        Self::new_with_rng(&mut rand::rng())
    }

    pub fn new_with_rng(rng: &mut impl Rng) -> Self {
        Self {
            grid: Grid::new(),
            supply: LetterSupplier::draw_with_rng(SUPPLY_SIZE, rng),
            score: GameScore::default(),
            status: GameStatus::InProgress,
        }
    }

    /// Place one offered letter into an empty cell and rescore.
    ///
    /// The letter is uppercased before any check. Placements into an
    /// occupied cell, of a letter not on offer, or after the game
    /// finished are rejected without touching the session. Coordinates
    /// outside the grid are an error, not a rejection.
    ///
    /// An accepted placement rescores the whole grid, then either ends
    /// the game (grid full, supply cleared) or draws a fresh supply.
    pub fn place_letter(
        &mut self,
        dictionary: &Dictionary,
        letter: char,
        row: usize,
        col: usize,
    ) -> Result<PlacementOutcome, GameError> {
        self.place_letter_with_rng(dictionary, letter, row, col, &mut rand::rng())
    }

    pub fn place_letter_with_rng(
        &mut self,
        dictionary: &Dictionary,
        letter: char,
        row: usize,
        col: usize,
        rng: &mut impl Rng,
    ) -> Result<PlacementOutcome, GameError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::PositionOutOfBounds {
                row,
                col,
                size: GRID_SIZE,
            });
        }

        let letter = letter.to_ascii_uppercase();

        if let Some(reason) = self.rejection_for(letter, row, col) {
            tracing::debug!(
                "Rejected placing '{}' at ({}, {}): {:?}",
                letter,
                row,
                col,
                reason
            );
            return Ok(PlacementOutcome::Rejected { reason });
        }

        self.grid = self.grid.with_letter(row, col, letter);
        self.score = Scorer::score(dictionary, &self.grid);
        tracing::debug!(
            "Placed '{}' at ({}, {}), total score {}",
            letter,
            row,
            col,
            self.score.total
        );

        if self.grid.is_full() {
            self.status = GameStatus::Finished;
            self.supply.clear();
            tracing::info!("Grid filled, final score {}", self.score.total);
        } else {
            self.supply = LetterSupplier::draw_with_rng(SUPPLY_SIZE, rng);
        }

        Ok(PlacementOutcome::Placed)
    }

    fn rejection_for(&self, letter: char, row: usize, col: usize) -> Option<PlacementRejection> {
        if self.status == GameStatus::Finished {
            return Some(PlacementRejection::GameFinished);
        }
        if self.grid.cell(row, col).is_some() {
            return Some(PlacementRejection::CellOccupied);
        }
        if !self.supply.contains(&letter) {
            return Some(PlacementRejection::LetterNotOffered);
        }
        None
    }

    /// Reset to a fresh game, valid from any state.
    pub fn new_game(&mut self) {
        self.new_game_with_rng(&mut rand::rng());
    }

    pub fn new_game_with_rng(&mut self, rng: &mut impl Rng) {
        *self = Self::new_with_rng(rng);
        tracing::debug!("Session reset to a fresh game");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn supply(&self) -> &[char] {
        &self.supply
    }

    pub fn score(&self) -> &GameScore {
        &self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn cells_remaining(&self) -> usize {
        self.grid.empty_count()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid,
            supply: self.supply.clone(),
            score: self.score.clone(),
            status: self.status,
            cells_remaining: self.cells_remaining(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn offered(session: &GameSession) -> char {
        session.supply()[0]
    }

    fn unoffered(session: &GameSession) -> char {
        ('A'..='Z')
            .find(|c| !session.supply().contains(c))
            .unwrap()
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = GameSession::new();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.supply().len(), SUPPLY_SIZE);
        assert_eq!(session.cells_remaining(), GRID_SIZE * GRID_SIZE);
        assert_eq!(session.score().total, 0);
    }

    #[test]
    fn test_placement_writes_letter_and_redraws_supply() {
        let dict = Dictionary::empty();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new_with_rng(&mut rng);
        let letter = offered(&session);

        let outcome = session
            .place_letter_with_rng(&dict, letter, 2, 2, &mut rng)
            .unwrap();

        assert_eq!(outcome, PlacementOutcome::Placed);
        assert_eq!(session.grid().cell(2, 2), Some(letter));
        assert_eq!(session.supply().len(), SUPPLY_SIZE);
        assert_eq!(session.cells_remaining(), GRID_SIZE * GRID_SIZE - 1);
    }

    #[test]
    fn test_lowercase_letter_is_uppercased() {
        let dict = Dictionary::empty();
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = GameSession::new_with_rng(&mut rng);
        let letter = offered(&session);

        let outcome = session
            .place_letter_with_rng(&dict, letter.to_ascii_lowercase(), 0, 0, &mut rng)
            .unwrap();

        assert_eq!(outcome, PlacementOutcome::Placed);
        assert_eq!(session.grid().cell(0, 0), Some(letter));
    }

    #[test]
    fn test_occupied_cell_rejection_is_a_no_op() {
        let dict = Dictionary::empty();
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = GameSession::new_with_rng(&mut rng);
        let letter = offered(&session);
        session
            .place_letter_with_rng(&dict, letter, 1, 1, &mut rng)
            .unwrap();

        let before = session.clone();
        let outcome = session
            .place_letter_with_rng(&dict, offered(&session), 1, 1, &mut rng)
            .unwrap();

        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                reason: PlacementRejection::CellOccupied
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_unoffered_letter_rejection_is_a_no_op() {
        let dict = Dictionary::empty();
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = GameSession::new_with_rng(&mut rng);
        let letter = unoffered(&session);

        let before = session.clone();
        let outcome = session
            .place_letter_with_rng(&dict, letter, 0, 0, &mut rng)
            .unwrap();

        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                reason: PlacementRejection::LetterNotOffered
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_bounds_is_an_error_not_a_rejection() {
        let dict = Dictionary::empty();
        let mut session = GameSession::new();
        let letter = offered(&session);

        let before = session.clone();
        let err = session.place_letter(&dict, letter, GRID_SIZE, 0).unwrap_err();

        assert_eq!(
            err,
            GameError::PositionOutOfBounds {
                row: GRID_SIZE,
                col: 0,
                size: GRID_SIZE
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_score_tracks_scorer_output() {
        let dict = Dictionary::global();
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = GameSession::new_with_rng(&mut rng);

        for (row, col) in [(0, 0), (0, 1), (0, 2), (3, 3)] {
            let letter = offered(&session);
            session
                .place_letter_with_rng(dict, letter, row, col, &mut rng)
                .unwrap();
        }

        assert_eq!(session.score(), &Scorer::score(dict, session.grid()));
    }

    #[test]
    fn test_filling_the_grid_finishes_the_game() {
        let dict = Dictionary::global();
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = GameSession::new_with_rng(&mut rng);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let letter = offered(&session);
                let outcome = session
                    .place_letter_with_rng(dict, letter, row, col, &mut rng)
                    .unwrap();
                assert_eq!(outcome, PlacementOutcome::Placed);
            }
        }

        assert!(session.is_finished());
        assert!(session.supply().is_empty());
        assert_eq!(session.cells_remaining(), 0);

        // The finished session refuses further placements untouched
        let before = session.clone();
        let outcome = session.place_letter(dict, 'A', 0, 0).unwrap();
        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                reason: PlacementRejection::GameFinished
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_new_game_resets_from_finished() {
        let dict = Dictionary::global();
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = GameSession::new_with_rng(&mut rng);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let letter = offered(&session);
                session
                    .place_letter_with_rng(dict, letter, row, col, &mut rng)
                    .unwrap();
            }
        }
        assert!(session.is_finished());

        session.new_game_with_rng(&mut rng);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.supply().len(), SUPPLY_SIZE);
        assert_eq!(session.cells_remaining(), GRID_SIZE * GRID_SIZE);
        assert_eq!(session.score().total, 0);
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut rng = StdRng::seed_from_u64(10);
        let session = GameSession::new_with_rng(&mut rng);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.grid, *session.grid());
        assert_eq!(snapshot.supply, session.supply());
        assert_eq!(snapshot.status, session.status());
        assert_eq!(snapshot.cells_remaining, session.cells_remaining());
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let dict = Dictionary::global();
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        let mut a = GameSession::new_with_rng(&mut rng_a);
        let mut b = GameSession::new_with_rng(&mut rng_b);
        assert_eq!(a, b);

        // Equal seeds keep grid, supply, and score in lockstep across
        // a whole run of placements
        for (row, col) in [(0, 0), (0, 1), (1, 3), (2, 2), (4, 4)] {
            let letter = offered(&a);
            let outcome_a = a
                .place_letter_with_rng(dict, letter, row, col, &mut rng_a)
                .unwrap();
            let outcome_b = b
                .place_letter_with_rng(dict, letter, row, col, &mut rng_b)
                .unwrap();
            assert_eq!(outcome_a, outcome_b);
            assert_eq!(a, b);
        }
    }
}
