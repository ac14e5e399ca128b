use crate::board_engine::models::{Card, Color, Count, Fill, Shape, Triple};

/// True when the three values are all equal or pairwise all different.
fn attribute_ok<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && c != a)
}

/// The SET rule: every attribute is either shared by all three cards or
/// distinct on all three.
pub fn is_match(a: &Card, b: &Card, c: &Card) -> bool {
    attribute_ok(a.color, b.color, c.color)
        && attribute_ok(a.count, b.count, c.count)
        && attribute_ok(a.shape, b.shape, c.shape)
        && attribute_ok(a.fill, b.fill, c.fill)
}

/// Count matching triples in `cards`, enumerated with ascending `i < j < k`.
///
/// Counting stops as soon as the total exceeds `limit`, so the result is
/// exact whenever it is `<= limit` and merely "more than `limit`" otherwise.
pub fn count_matches(cards: &[Card], limit: u32) -> u32 {
    let n = cards.len();
    let mut count = 0u32;
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_match(&cards[i], &cards[j], &cards[k]) {
                    count += 1;
                    if count > limit {
                        return count;
                    }
                }
            }
        }
    }
    count
}

/// Every matching triple in `cards`, in enumeration order.
pub fn find_matches(cards: &[Card]) -> Vec<Triple> {
    let n = cards.len();
    let mut found = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_match(&cards[i], &cards[j], &cards[k]) {
                    found.push(Triple::new(cards[i], cards[j], cards[k]));
                }
            }
        }
    }
    found
}

fn complete<T: Copy + PartialEq>(all: [T; 3], a: T, b: T) -> T {
    if a == b {
        return a;
    }
    // exactly one value differs from both
    all.into_iter().find(|v| *v != a && *v != b).unwrap_or(a)
}

/// The unique card that completes a match with `a` and `b`.
///
/// For `a == b` this is the same card again.
pub fn third_card(a: &Card, b: &Card) -> Card {
    Card::new(
        complete(Color::ALL, a.color, b.color),
        complete(Count::ALL, a.count, b.count),
        complete(Shape::ALL, a.shape, b.shape),
        complete(Fill::ALL, a.fill, b.fill),
    )
}
