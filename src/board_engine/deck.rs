use rand::RngCore;

use crate::board_engine::{
    models::{Card, Color, Count, Fill, Shape},
    rng::unit_f64,
};

/// Size of the full SET deck.
pub const DECK_SIZE: usize = 81;

/// The 81-card SET deck in canonical order.
///
/// Built once and only ever read; shuffling hands back a new sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the canonical deck: colors outermost, then counts, shapes, fills.
    pub fn standard() -> Self {
        let cards: Vec<Card> = Color::ALL
            .iter()
            .flat_map(|&color| {
                Count::ALL.iter().flat_map(move |&count| {
                    Shape::ALL.iter().flat_map(move |&shape| {
                        Fill::ALL.iter().map(move |&fill| Card::new(color, count, shape, fill))
                    })
                })
            })
            .collect();

        Deck { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a canonical index.
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// A fresh permutation of the deck; `self` is left untouched.
    pub fn shuffled<R: RngCore + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();

        // Fisher-Yates, j = floor(u * (i + 1)) with u in [0, 1)
        for i in (1..cards.len()).rev() {
            let j = (unit_f64(rng) * (i + 1) as f64).floor() as usize;
            cards.swap(i, j);
        }

        cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_engine::rng::Mulberry32;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_has_81_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn canonical_order_matches_index() {
        let deck = Deck::standard();
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index(), i, "card {card} out of place");
        }
        assert_eq!(deck.get(81), None);
    }

    #[test]
    fn shuffle_does_not_mutate_deck() {
        let deck = Deck::standard();
        let before = deck.clone();
        let shuffled = deck.shuffled(&mut Mulberry32::new(9));
        assert_eq!(deck, before);
        assert_ne!(shuffled, deck.cards());

        let mut sorted = shuffled.clone();
        sorted.sort_by_key(|c| c.index());
        assert_eq!(sorted, deck.cards());
    }

    #[test]
    fn shuffle_matches_reference_permutation() {
        let deck = Deck::standard();
        let shuffled = deck.shuffled(&mut Mulberry32::new(42));
        let head: Vec<usize> = shuffled.iter().take(12).map(|c| c.index()).collect();
        assert_eq!(head, [66, 58, 31, 37, 45, 5, 36, 18, 4, 73, 7, 22]);
    }

    #[test]
    fn shuffle_is_deterministic_with_any_seeded_rng() {
        let deck = Deck::standard();
        let make = |seed: u64| deck.shuffled(&mut StdRng::seed_from_u64(seed));
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }
}
