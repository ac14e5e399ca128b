//! Property tests for the match rule and the board search.

use daily_set::{find_matches, generate_board, is_match, third_card, Deck, Triple};
use proptest::prelude::*;

fn card_index() -> impl Strategy<Value = usize> {
    0usize..81
}

proptest! {
    #[test]
    fn match_rule_ignores_argument_order(i in card_index(), j in card_index(), k in card_index()) {
        let deck = Deck::standard();
        let c = deck.cards();
        let (a, b, d) = (&c[i], &c[j], &c[k]);
        let expected = is_match(a, b, d);
        prop_assert_eq!(is_match(a, d, b), expected);
        prop_assert_eq!(is_match(b, a, d), expected);
        prop_assert_eq!(is_match(b, d, a), expected);
        prop_assert_eq!(is_match(d, a, b), expected);
        prop_assert_eq!(is_match(d, b, a), expected);
    }

    #[test]
    fn third_card_completes_any_pair(i in card_index(), j in card_index()) {
        let deck = Deck::standard();
        let (a, b) = (deck.cards()[i], deck.cards()[j]);
        let c = third_card(&a, &b);
        prop_assert!(is_match(&a, &b, &c));
        prop_assert_eq!(Triple::new(a, b, c), Triple::new(c, b, a));
    }

    #[test]
    fn generated_board_holds_target(seed in any::<i32>(), target in 0u32..=6) {
        let board = generate_board(seed, target).unwrap();
        prop_assert_eq!(find_matches(&board.cards).len(), target as usize);
        prop_assert_eq!(board.seed, seed);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generation_is_deterministic(seed in any::<i32>()) {
        let a = generate_board(seed, 6).unwrap();
        let b = generate_board(seed, 6).unwrap();
        prop_assert_eq!(a, b);
    }
}
