//! Game rules: wire types, the two-stage validation gate, and state
//! advancement

pub mod advance;
pub mod board;
pub mod validate;

pub use advance::{advance, random_fruit};
pub use board::{GameState, Position, Snake, Submission, Tick};
pub use validate::{validate_move_set, validate_state, ValidationError};
