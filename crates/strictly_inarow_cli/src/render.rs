//! Plain-text board rendering.

use strictly_inarow::{MoveLedger, Player};

/// Glyph for a cell's owner.
pub fn glyph(owner: Option<Player>) -> char {
    match owner {
        Some(Player::One) => 'o',
        Some(Player::Two) => 'x',
        None => '_',
    }
}

/// Renders the grid with one text line per row, columns left to right.
pub fn render_board(ledger: &MoveLedger) -> String {
    let side = ledger.side();
    let divider = format!("+{}\n", "---+".repeat(side));

    let mut out = divider.clone();
    for row in 0..side {
        out.push('|');
        for column in 0..side {
            let owner = ledger.owner_of(column * side + row);
            out.push_str(&format!(" {} |", glyph(owner)));
        }
        out.push('\n');
        out.push_str(&divider);
    }
    out
}
