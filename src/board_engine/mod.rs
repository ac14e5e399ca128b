//! Core board engine: the SET deck, the match rule and the seeded board search.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Card attributes, cards, triples, board request/response types |
//! | `deck`      | 81-card canonical deck and its non-mutating Fisher-Yates shuffle |
//! | `rng`       | Mulberry32, the bit-exact 32-bit generator behind every shuffle |
//! | `seed`      | Date-to-seed hashing in the reference time zone, seed parsing |
//! | `evaluator` | Match predicate, per-window match counting, match listing |
//! | `generator` | `generate_board()` / `generate()`: the window search |
//! | `session`   | Selection and found-match tracking for one player |
//! | `client`    | JSON payloads and share links for the browser page |
//! | `helpers`   | Card codes, grid text, solve-time and share-message formatting |
//! | `errors`    | `BoardError` and its `ErrorKind` classification |

pub mod client;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod rng;
pub mod seed;
pub mod session;

// Re-export the public API surface so callers can use
// `board_engine::generate_board` without reaching into sub-modules.
pub use deck::Deck;
pub use errors::{BoardError, ErrorKind};
pub use evaluator::{count_matches, find_matches, is_match, third_card};
pub use generator::{daily_board, generate, generate_board, generate_from_deck};
pub use models::{
    Board, BoardRequest, Card, Color, Count, Fill, GenerationLimits, SeedSource, Shape, Triple,
    BOARD_SIZE, DEFAULT_TARGET_MATCHES, MAX_TARGET_MATCHES,
};
pub use rng::Mulberry32;
pub use seed::{date_seed, hash_string_to_int, parse_seed, today_seed};
pub use session::{Guess, PuzzleSession, SelectionEvent};
