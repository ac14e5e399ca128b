use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of cards on a dealt board.
pub const BOARD_SIZE: usize = 12;

/// C(12, 3): the most matches a board could ever hold.
pub const MAX_TARGET_MATCHES: u32 = 220;

/// Match count the daily puzzle asks for.
pub const DEFAULT_TARGET_MATCHES: u32 = 6;

/// Shuffle cap applied unless the caller asks for an unbounded search.
pub const DEFAULT_MAX_SHUFFLES: u32 = 100_000;

// ---------------------------------------------------------------------------
// Card attributes
// ---------------------------------------------------------------------------
//
// Variant order is the canonical deck order; reordering any of these changes
// every seeded board.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red    => write!(f, "red"),
            Color::Green  => write!(f, "green"),
            Color::Purple => write!(f, "purple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// How many symbols the card shows.
    pub fn value(self) -> u8 {
        match self {
            Count::One   => 1,
            Count::Two   => 2,
            Count::Three => 3,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Oval,
    Diamond,
    Squiggle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Oval, Shape::Diamond, Shape::Squiggle];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Oval     => write!(f, "oval"),
            Shape::Diamond  => write!(f, "diamond"),
            Shape::Squiggle => write!(f, "squiggle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Solid,
    Striped,
    Empty,
}

impl Fill {
    pub const ALL: [Fill; 3] = [Fill::Solid, Fill::Striped, Fill::Empty];
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Solid   => write!(f, "solid"),
            Fill::Striped => write!(f, "striped"),
            Fill::Empty   => write!(f, "empty"),
        }
    }
}

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// One of the 81 SET cards. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub count: Count,
    pub shape: Shape,
    pub fill: Fill,
}

impl Card {
    pub const fn new(color: Color, count: Count, shape: Shape, fill: Fill) -> Self {
        Card { color, count, shape, fill }
    }

    /// Position of this card in the canonical deck (0..81).
    pub fn index(self) -> usize {
        self.color as usize * 27 + self.count as usize * 9 + self.shape as usize * 3 + self.fill as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.fill, self.shape)
    }
}

/// Three cards forming a match.
///
/// `cards` keeps the order the cards were picked in (for display), while
/// equality and hashing ignore order so a rediscovered match compares equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triple {
    pub cards: [Card; 3],
}

impl Triple {
    pub fn new(a: Card, b: Card, c: Card) -> Self {
        Triple { cards: [a, b, c] }
    }

    fn key(&self) -> [usize; 3] {
        let mut key = self.cards.map(Card::index);
        key.sort_unstable();
        key
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl PartialEq for Triple {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Triple {}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.cards;
        write!(f, "{a} | {b} | {c}")
    }
}

// ---------------------------------------------------------------------------
// Board request / response types
// ---------------------------------------------------------------------------

/// Where the board's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedSource {
    /// A literal seed, e.g. read back from a shared link.
    Explicit(i32),
    /// The daily seed for a given calendar date.
    Date(NaiveDate),
    /// The daily seed for the current date in the reference time zone.
    Today,
}

impl From<i32> for SeedSource {
    fn from(seed: i32) -> Self {
        SeedSource::Explicit(seed)
    }
}

impl From<NaiveDate> for SeedSource {
    fn from(date: NaiveDate) -> Self {
        SeedSource::Date(date)
    }
}

/// Escape hatches for a search that has no natural bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationLimits {
    /// Maximum number of full-deck permutations to draw.
    pub max_shuffles: Option<u32>,
    /// Wall-clock budget for the whole search.
    pub time_budget: Option<Duration>,
}

impl GenerationLimits {
    /// Search until a board is found, however long it takes.
    pub fn unbounded() -> Self {
        GenerationLimits { max_shuffles: None, time_budget: None }
    }
}

impl Default for GenerationLimits {
    fn default() -> Self {
        GenerationLimits { max_shuffles: Some(DEFAULT_MAX_SHUFFLES), time_budget: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRequest {
    pub seed: SeedSource,
    pub target_matches: u32,
    pub limits: GenerationLimits,
}

impl BoardRequest {
    /// Request with the daily defaults: six matches, default limits.
    pub fn new(seed: impl Into<SeedSource>) -> Self {
        BoardRequest {
            seed: seed.into(),
            target_matches: DEFAULT_TARGET_MATCHES,
            limits: GenerationLimits::default(),
        }
    }

    /// Today's puzzle.
    pub fn today() -> Self {
        BoardRequest::new(SeedSource::Today)
    }

    pub fn with_target(mut self, target_matches: u32) -> Self {
        self.target_matches = target_matches;
        self
    }

    pub fn with_limits(mut self, limits: GenerationLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// A dealt 12-card board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The resolved 32-bit seed; feeding it back reproduces this board.
    pub seed: i32,
    pub target_matches: u32,
    /// Cards in the order of the winning shuffle window (grid order).
    pub cards: [Card; BOARD_SIZE],
    /// Full-deck permutations drawn before this board was found.
    pub shuffles: u32,
    /// Index of the winning 12-card window inside its permutation.
    pub window: usize,
}
