pub mod scanner;
pub mod scorer;
pub mod session;
pub mod supply;

pub use scanner::LineScanner;
pub use scorer::Scorer;
pub use session::GameSession;
pub use supply::LetterSupplier;
