//! Console driver for a local two-player game.
//!
//! This crate provides:
//! - `PlayConfig`, loaded from an optional TOML file
//! - `Session`, which turns input lines into moves and verdicts
//! - `GameRecord`, a JSON transcript of the accepted moves and the result
//!
//! # Usage
//!
//! ```bash
//! cargo run -p local_play
//! cargo run -p local_play -- --letters --record game.json
//! ```

mod config;
mod record;
mod session;

pub use config::*;
pub use record::*;
pub use session::*;
