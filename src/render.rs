use std::fmt;

use crate::Grid;

/// Renders the grid as text: one line per row, symbols concatenated in column order with no
/// separators, each line terminated by a newline. Does not mutate the grid.
pub fn render(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in grid.rows() {
        text.extend(row.iter().copied());
        text.push('\n');
    }
    text
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
