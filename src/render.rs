//! Plain-text board dumps for headless runs and debugging.

use crate::board::CellView;
use crate::player::Player;

const GUTTER: &str = "          ";

/// Render both players' grids side by side: a shots block on top (`x`
/// marks an attacked cell) and an occupancy block below (`s` marks a ship
/// segment).
pub fn render_boards(left: &Player, right: &Player) -> String {
    let left_view = left.board_view();
    let right_view = right.board_view();
    let mut out = String::from("top - was shot, down - ship position\n");
    push_block(&mut out, &left_view, &right_view, |cell| cell.was_shot, 'x');
    out.push('\n');
    push_block(&mut out, &left_view, &right_view, |cell| !cell.is_free, 's');
    out
}

fn push_block(
    out: &mut String,
    left: &[Vec<CellView>],
    right: &[Vec<CellView>],
    marked: impl Fn(&CellView) -> bool,
    mark: char,
) {
    for (left_row, right_row) in left.iter().zip(right) {
        push_row(out, left_row, &marked, mark);
        out.push_str(GUTTER);
        push_row(out, right_row, &marked, mark);
        out.push('\n');
    }
}

fn push_row(out: &mut String, row: &[CellView], marked: impl Fn(&CellView) -> bool, mark: char) {
    for cell in row {
        out.push(if marked(cell) { mark } else { '.' });
        out.push(' ');
    }
}
