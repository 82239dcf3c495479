use crate::chess::{File, Piece, Placement, Square};
use std::fmt::{self, Write};

/// The shade of a [`Cell`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

/// A square as drawn on the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    pub square: Square,
    pub shade: Shade,
    pub symbol: Option<char>,
    pub selected: bool,
}

impl Cell {
    /// The figurine shown on this cell, or the raw symbol if it names no piece.
    pub fn glyph(&self) -> Option<char> {
        let c = self.symbol?;
        Some(Piece::from_symbol(c).map_or(c, |p| p.glyph()))
    }
}

/// The drawable board.
///
/// Always holds 64 cells in reading order, from `a8` to `h1`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Board::render(None, None)
    }
}

impl Board {
    /// Lays out the cells for a [`Placement`], leaving them all empty if there is none.
    pub fn render(placement: Option<&Placement>, selected: Option<Square>) -> Self {
        let cells = Square::iter()
            .map(|square| {
                let (row, col) = (square.rank().row(), square.file().index());

                Cell {
                    square,
                    shade: if (row + col) % 2 == 0 {
                        Shade::Light
                    } else {
                        Shade::Dark
                    },
                    symbol: placement.and_then(|p| p.get(square)),
                    selected: selected == Some(square),
                }
            })
            .collect();

        Board { cells }
    }

    /// All cells in reading order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The [`Cell`] drawn for a [`Square`].
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.rank().row() * 8 + sq.file().index()]
    }

    /// The symbol drawn on a [`Square`], if any.
    pub fn symbol(&self, sq: Square) -> Option<char> {
        self.cell(sq).symbol
    }

    /// The currently selected [`Square`], if any.
    pub fn selected(&self) -> Option<Square> {
        self.cells.iter().find(|c| c.selected).map(|c| c.square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(8) {
            write!(f, "{} ", row[0].square.rank())?;

            for cell in row {
                let glyph = match (cell.glyph(), cell.shade) {
                    (Some(g), _) => g,
                    (None, Shade::Light) => '.',
                    (None, Shade::Dark) => ':',
                };

                match cell.selected {
                    true => write!(f, "[{}]", glyph)?,
                    false => write!(f, " {} ", glyph)?,
                }
            }

            f.write_char('\n')?;
        }

        f.write_str("  ")?;
        for file in File::iter() {
            write!(f, " {} ", file)?;
        }

        Ok(())
    }
}
