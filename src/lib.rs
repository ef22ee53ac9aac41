//! A scoring engine for the four-player trick-taking game Joker, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks bids, tricks taken, round
//! scores, end-of-segment bonuses and running totals, plus a [`ScoreKeeper`]
//! that persists the current game and a short history through any
//! [`KeyValueStore`].
//!
//! # Example
//!
//! ```
//! use joker_score::{Game, GameOptions, RoundPosition, Timestamp};
//!
//! let names = ["Ana", "Beka", "Gio", "Nino"].map(String::from);
//! let mut game = Game::new(names, GameOptions::default(), Timestamp::from_secs(0));
//!
//! let first = RoundPosition::new(0, 0);
//! game.set_bids(first, [0, 1, 0, 1]).unwrap();
//! game.record_round_tricks(first, [0, 1, 0, 0]).unwrap();
//!
//! assert_eq!(game.final_scores(), [50, 100, 50, -200]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bonus;
pub mod error;
pub mod game;
pub mod history;
pub mod options;
pub mod round;
pub mod scoring;
pub mod seat;
pub mod segment;
pub mod storage;
mod sync;
pub mod template;

// Re-export main types
pub use bonus::apply_segment_bonuses;
pub use error::{BidError, CompleteError, StoreError, TricksError};
pub use game::{Game, RoundPosition, bids_are_valid, last_bid_allowed};
pub use history::{GameHistory, Timestamp};
pub use options::{GameMode, GameOptions, PlayType, StoreOptions};
pub use round::Round;
pub use scoring::round_score;
pub use seat::{PLAYER_COUNT, partner_of};
pub use segment::Segment;
pub use storage::{KeyValueStore, MemoryStore, ScoreKeeper};
pub use template::{is_nines_segment, segment_template};
