//! Snake Game Server - backend validator for a grid-based snake game
//!
//! The server is stateless: the full game state round-trips through the
//! client on every request. It issues fresh states on demand and, on each
//! submission, replays the reported movement ticks backwards from the
//! declared head position to check them against board boundaries and
//! turn-legality rules before advancing the score.

pub mod app;
pub mod config;
pub mod game;
pub mod http;
pub mod util;
