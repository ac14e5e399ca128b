//! # daily_set
//!
//! A deterministic daily puzzle generator for the card game SET.
//!
//! Every day has one seed, and every seed has one board: twelve cards holding
//! exactly the requested number of matches (six by default). Share the seed
//! and anyone can replay the identical board.
//!
//! ## How it works
//!
//! 1. The seed is either given directly (e.g. from a shared `?id=` link) or
//!    derived by hashing the `YYYY-MM-DD` date in `America/New_York`.
//! 2. A Mulberry32 generator seeded with it drives a Fisher-Yates shuffle of
//!    the 81-card deck.
//! 3. The shuffled deck is cut into six 12-card windows; the first window with
//!    exactly the target number of matches is the board. Otherwise the same
//!    generator stream shuffles again.
//!
//! ## Quick start
//!
//! ```rust
//! use daily_set::{find_matches, generate, generate_board, BoardRequest, PuzzleSession};
//!
//! // Replay a shared board:
//! let board = generate_board(42, 6).unwrap();
//! assert_eq!(find_matches(&board.cards).len(), 6);
//! assert_eq!(board, generate_board(42, 6).unwrap());
//!
//! // Today's puzzle, played through a session:
//! let board = generate(BoardRequest::today()).unwrap();
//! let mut session = PuzzleSession::new(board);
//! session.select(0).unwrap();
//! assert_eq!(session.selected(), &[0]);
//! ```

pub mod board_engine;

// Convenience re-exports so callers can use `daily_set::generate_board`
// directly without reaching into `board_engine::`.
pub use board_engine::{
    count_matches, daily_board, find_matches, generate, generate_board, is_match, third_card,
    Board, BoardError, BoardRequest, Card, Color, Count, Deck, ErrorKind, Fill, GenerationLimits,
    Guess, PuzzleSession, SeedSource, SelectionEvent, Shape, Triple,
};
