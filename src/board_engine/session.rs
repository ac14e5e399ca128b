//! One player's pass over a board: picking cards, checking guesses and
//! remembering which matches were already found.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board_engine::{
    errors::BoardError,
    evaluator::is_match,
    helpers::share_message,
    models::{Board, Triple, BOARD_SIZE},
};

/// Result of checking three selected cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// A new match; `total` is the number found so far.
    Found { total: usize },
    AlreadyFound,
    NotASet,
}

/// What a click on a board position did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    Selected,
    Deselected,
    /// The third card was picked; the selection was checked and cleared.
    Evaluated(Guess),
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    board: Board,
    selected: Vec<usize>,
    found: Vec<Triple>,
    solve_time: Option<Duration>,
}

impl PuzzleSession {
    pub fn new(board: Board) -> Self {
        PuzzleSession { board, selected: Vec::with_capacity(3), found: Vec::new(), solve_time: None }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board positions currently selected, in click order.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Matches found so far, in discovery order.
    pub fn found(&self) -> &[Triple] {
        &self.found
    }

    pub fn remaining(&self) -> usize {
        (self.board.target_matches as usize).saturating_sub(self.found.len())
    }

    /// True once every match on the board has been found. A board dealt with
    /// a target of zero is solved from the start.
    pub fn is_solved(&self) -> bool {
        self.found.len() == self.board.target_matches as usize
    }

    pub fn solve_time(&self) -> Option<Duration> {
        self.solve_time
    }

    /// Toggle the card at `position`.
    pub fn select(&mut self, position: usize) -> Result<SelectionEvent, BoardError> {
        if position >= BOARD_SIZE {
            return Err(BoardError::PositionOutOfRange { position });
        }

        if let Some(at) = self.selected.iter().position(|&p| p == position) {
            self.selected.remove(at);
            return Ok(SelectionEvent::Deselected);
        }
        self.selected.push(position);
        if self.selected.len() < 3 {
            return Ok(SelectionEvent::Selected);
        }

        let [a, b, c] = [self.selected[0], self.selected[1], self.selected[2]]
            .map(|p| self.board.cards[p]);
        self.selected.clear();
        Ok(SelectionEvent::Evaluated(self.record(Triple::new(a, b, c))))
    }

    /// Check a triple directly, bypassing selection state. The three
    /// positions must be distinct.
    pub fn guess(&mut self, positions: [usize; 3]) -> Result<Guess, BoardError> {
        if let Some(&position) = positions.iter().find(|&&p| p >= BOARD_SIZE) {
            return Err(BoardError::PositionOutOfRange { position });
        }
        let [p, q, r] = positions;
        if p == q || p == r {
            return Err(BoardError::RepeatedPosition { position: p });
        }
        if q == r {
            return Err(BoardError::RepeatedPosition { position: q });
        }
        let [a, b, c] = positions.map(|p| self.board.cards[p]);
        Ok(self.record(Triple::new(a, b, c)))
    }

    fn record(&mut self, triple: Triple) -> Guess {
        let [a, b, c] = &triple.cards;
        if !is_match(a, b, c) {
            debug!(%triple, "not a set");
            return Guess::NotASet;
        }
        if self.found.contains(&triple) {
            debug!(%triple, "already found");
            return Guess::AlreadyFound;
        }
        self.found.push(triple);
        debug!(%triple, total = self.found.len(), "found a set");
        Guess::Found { total: self.found.len() }
    }

    /// Stamp the solve time. Only takes effect once the board is solved, and
    /// only the first time; for a zero-target board that is the first call.
    pub fn finish(&mut self, elapsed: Duration) -> Option<Duration> {
        if self.is_solved() && self.solve_time.is_none() {
            self.solve_time = Some(elapsed);
        }
        self.solve_time
    }

    /// Share text for a solved board.
    pub fn share_message(&self, url: &str) -> Option<String> {
        self.solve_time.map(|elapsed| share_message(elapsed, url))
    }
}
