//! Text formatting shared by the session, the client adapter and the CLI.

use std::time::Duration;

use crate::board_engine::models::{Board, Card, Color, Count, Fill, Shape, Triple};

/// Columns in the on-screen board grid.
pub const GRID_COLUMNS: usize = 3;

/// Compact card code, e.g. `2RSOv` = two red striped ovals.
pub fn card_code(card: &Card) -> String {
    let count = card.count.value();
    let color = match card.color {
        Color::Red    => 'R',
        Color::Green  => 'G',
        Color::Purple => 'P',
    };
    let fill = match card.fill {
        Fill::Solid   => 'F',
        Fill::Striped => 'S',
        Fill::Empty   => 'E',
    };
    let shape = match card.shape {
        Shape::Oval     => "Ov",
        Shape::Diamond  => "Di",
        Shape::Squiggle => "Sq",
    };
    format!("{count}{color}{fill}{shape}")
}

/// Long-form name, pluralised, e.g. "two red striped ovals".
pub fn card_name(card: &Card) -> String {
    let count = match card.count {
        Count::One   => "one",
        Count::Two   => "two",
        Count::Three => "three",
    };
    let plural = if card.count == Count::One { "" } else { "s" };
    format!("{count} {} {} {}{plural}", card.color, card.fill, card.shape)
}

/// Board laid out as rows of three card codes, positions numbered from 1.
pub fn board_grid(board: &Board) -> String {
    board
        .cards
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, cards)| {
            cards
                .iter()
                .enumerate()
                .map(|(col, card)| format!("{:>2}: {:<6}", row * GRID_COLUMNS + col + 1, card_code(card)))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn triple_str(triple: &Triple) -> String {
    triple.cards.iter().map(card_code).collect::<Vec<_>>().join(" ")
}

/// Solve time as `MM:SS.mmm`. Minutes wrap at the hour like the on-page timer.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1_000) % 60;
    format!("{minutes:02}:{seconds:02}.{:03}", millis % 1_000)
}

/// Text dropped into the share sheet once the puzzle is solved.
pub fn share_message(elapsed: Duration, url: &str) -> String {
    format!(
        "I just solved the Daily SET in {}! Give it a try!\n{url}",
        format_elapsed(elapsed)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_names() {
        let card = Card::new(Color::Red, Count::Two, Shape::Oval, Fill::Striped);
        assert_eq!(card_code(&card), "2RSOv");
        assert_eq!(card_name(&card), "two red striped ovals");

        let single = Card::new(Color::Purple, Count::One, Shape::Squiggle, Fill::Empty);
        assert_eq!(card_name(&single), "one purple empty squiggle");
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_millis(83_456)), "01:23.456");
        assert_eq!(format_elapsed(Duration::from_millis(5)), "00:00.005");
        assert_eq!(format_elapsed(Duration::from_secs(3_601)), "00:01.000");
    }

    #[test]
    fn share_text() {
        let msg = share_message(Duration::from_millis(61_000), "https://example.com/set.html");
        assert_eq!(
            msg,
            "I just solved the Daily SET in 01:01.000! Give it a try!\nhttps://example.com/set.html"
        );
    }
}
