use serde_json::{json, Value};

use crate::board_engine::{
    helpers::GRID_COLUMNS,
    models::{Board, Card, Fill, Triple},
};

/// Query parameter carrying the seed in a shared link.
pub const SEED_PARAM: &str = "id";

/// Mask applied to striped fills in the card SVG.
const STRIPE_MASK: &str = "url(#mask-stripes)";

/// CSS class the page uses for a fill style.
fn fill_class(fill: Fill) -> &'static str {
    match fill {
        Fill::Solid   => "solid",
        Fill::Striped => "stripes",
        Fill::Empty   => "empty",
    }
}

/// SVG layers for one symbol: an optional fill layer under the outline.
fn svg_layers(card: &Card) -> Value {
    let href = format!("#{}", card.shape);
    let fill = match card.fill {
        Fill::Empty   => Value::Null,
        Fill::Solid   => json!({ "href": href, "mask": null }),
        Fill::Striped => json!({ "href": href, "mask": STRIPE_MASK }),
    };
    json!({ "fill": fill, "stroke": { "href": href } })
}

/// One card as the page renders it, without placement.
pub fn card_json(card: &Card) -> Value {
    json!({
        "color": card.color.to_string(),
        "count": card.count.value(),
        "shape": card.shape.to_string(),
        "fill": fill_class(card.fill),
        "svg": svg_layers(card),
    })
}

/// 1-based CSS grid cell `(column, row)` for a board position; column and row
/// 1 are left for the frame.
pub fn grid_cell(position: usize) -> (usize, usize) {
    (2 + position % GRID_COLUMNS, 2 + position / GRID_COLUMNS)
}

/// Full board payload for the page.
pub fn board_json(board: &Board) -> Value {
    let cards: Vec<Value> = board
        .cards
        .iter()
        .enumerate()
        .map(|(position, card)| {
            let (column, row) = grid_cell(position);
            let mut value = card_json(card);
            value["position"] = json!(position);
            value["grid"] = json!({ "column": column, "row": row });
            value
        })
        .collect();

    json!({
        "seed": board.seed,
        "target_matches": board.target_matches,
        "cards": cards,
    })
}

/// A found match as the side panel shows it: three cards stacked in column 2.
pub fn triple_json(triple: &Triple) -> Value {
    let cards: Vec<Value> = triple
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let mut value = card_json(card);
            value["grid"] = json!({ "column": 2, "row": 2 + i });
            value
        })
        .collect();
    Value::Array(cards)
}

/// Link that reopens the board for `seed`.
pub fn share_url(base_url: &str, seed: i32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{SEED_PARAM}={seed}")
}

/// Worked examples from the rules panel: three matches, then three near-misses.
pub fn rules_examples() -> [(Triple, bool); 6] {
    use crate::board_engine::models::{Color::*, Count::*, Fill::*, Shape::*};

    let t = |a: Card, b: Card, c: Card| Triple::new(a, b, c);
    [
        (
            t(
                Card::new(Purple, Two, Squiggle, Striped),
                Card::new(Purple, Two, Diamond, Striped),
                Card::new(Purple, Two, Oval, Striped),
            ),
            true,
        ),
        (
            t(
                Card::new(Red, One, Oval, Empty),
                Card::new(Purple, Two, Oval, Solid),
                Card::new(Green, Three, Oval, Striped),
            ),
            true,
        ),
        (
            t(
                Card::new(Green, Three, Diamond, Solid),
                Card::new(Red, One, Oval, Striped),
                Card::new(Purple, Two, Squiggle, Empty),
            ),
            true,
        ),
        (
            t(
                Card::new(Red, One, Diamond, Empty),
                Card::new(Red, Three, Diamond, Solid),
                Card::new(Red, Three, Diamond, Striped),
            ),
            false,
        ),
        (
            t(
                Card::new(Red, Two, Squiggle, Striped),
                Card::new(Purple, Two, Diamond, Striped),
                Card::new(Purple, Two, Oval, Solid),
            ),
            false,
        ),
        (
            t(
                Card::new(Green, Three, Squiggle, Solid),
                Card::new(Red, One, Oval, Striped),
                Card::new(Purple, Two, Squiggle, Empty),
            ),
            false,
        ),
    ]
}
