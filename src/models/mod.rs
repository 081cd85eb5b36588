pub mod game;

pub use game::{
    FoundWord, GameError, GameScore, GameStatus, Grid, PlacementOutcome, PlacementRejection,
    SessionSnapshot,
};
