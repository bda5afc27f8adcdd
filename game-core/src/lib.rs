pub mod game_state;
pub mod scoring;
pub mod word_bank;
pub mod scrambler;
pub mod round_timer;
pub mod game_events;

// Re-export main components
pub use game_state::*;
pub use scoring::*;
pub use word_bank::*;
pub use scrambler::*;
pub use round_timer::*;
pub use game_events::*;
