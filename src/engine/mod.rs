pub mod clock;
pub mod context;
pub mod eta;
pub mod formatting;
pub mod layout;
pub mod orp;
pub mod player;
pub mod tokenizer;

pub use clock::PacingClock;
pub use player::{ClockRequest, Player, PlayerState};
pub use tokenizer::{tokenize, WordSequence};
