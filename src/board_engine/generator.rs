use std::time::Instant;

use tracing::{debug, warn};

use crate::board_engine::{
    deck::Deck,
    errors::BoardError,
    evaluator::count_matches,
    models::{
        Board, BoardRequest, GenerationLimits, BOARD_SIZE, DEFAULT_TARGET_MATCHES,
        MAX_TARGET_MATCHES,
    },
    rng::Mulberry32,
    seed,
};

/// Deal the board for `seed` holding exactly `target_matches` matches,
/// using the default shuffle cap.
pub fn generate_board(seed: i32, target_matches: u32) -> Result<Board, BoardError> {
    generate(BoardRequest::new(seed).with_target(target_matches))
}

/// Today's six-match board.
pub fn daily_board() -> Result<Board, BoardError> {
    generate_board(seed::today_seed(), DEFAULT_TARGET_MATCHES)
}

/// Resolve the request's seed and search for its board.
pub fn generate(request: BoardRequest) -> Result<Board, BoardError> {
    let seed = seed::resolve(request.seed);
    generate_from_deck(&Deck::standard(), seed, request.target_matches, request.limits)
}

/// Core search.
///
/// Draws permutations of `deck` from one Mulberry32 stream and scans each in
/// consecutive, non-overlapping 12-card windows; the first window whose match
/// count equals the target becomes the board. A permutation with no hit is
/// followed by another from the same stream, never a reseed.
pub fn generate_from_deck(
    deck: &Deck,
    seed: i32,
    target_matches: u32,
    limits: GenerationLimits,
) -> Result<Board, BoardError> {
    if target_matches > MAX_TARGET_MATCHES {
        return Err(BoardError::TargetOutOfRange { target: target_matches });
    }

    debug!(seed, target = target_matches, "building board");
    let start = Instant::now();
    let mut rng = Mulberry32::new(seed);
    let mut shuffles = 0u32;

    loop {
        if let Some(max) = limits.max_shuffles {
            if shuffles >= max {
                warn!(seed, target = target_matches, shuffles, "shuffle cap reached");
                return Err(BoardError::GenerationExhausted { shuffles, target: target_matches });
            }
        }
        if let Some(budget) = limits.time_budget {
            let elapsed = start.elapsed();
            if elapsed >= budget {
                warn!(seed, target = target_matches, shuffles, ?elapsed, "time budget exhausted");
                return Err(BoardError::TimedOut { elapsed, shuffles });
            }
        }

        let permutation = deck.shuffled(&mut rng);
        shuffles += 1;
        debug!(shuffle = shuffles, "shuffle");

        for (window, cards) in permutation.chunks_exact(BOARD_SIZE).enumerate() {
            let count = count_matches(cards, target_matches);
            if count > target_matches {
                debug!(window, "over");
                continue;
            }
            if count < target_matches {
                debug!(window, count, "under");
                continue;
            }

            // chunks_exact guarantees the length
            let mut board_cards = [cards[0]; BOARD_SIZE];
            board_cards.copy_from_slice(cards);
            debug!(
                window,
                shuffles,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "match"
            );
            return Ok(Board { seed, target_matches, cards: board_cards, shuffles, window });
        }
    }
}
