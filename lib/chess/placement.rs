use crate::chess::{Piece, Square};
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// The arrangement of symbols on the board, as described by the first field of a [FEN].
///
/// Row 0 holds the eighth rank, column 0 holds the `a` file.
/// Symbols are kept verbatim, so unknown letters survive parsing.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement([[Option<char>; 8]; 8]);

impl Placement {
    /// Parses the placement of a position string, discarding the reason of failure.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// The symbol on a [`Square`], if any.
    pub fn get(&self, sq: Square) -> Option<char> {
        self.0[sq.rank().row()][sq.file().index()]
    }

    /// The [`Piece`] on a [`Square`], if the symbol there names one.
    pub fn piece(&self, sq: Square) -> Option<Piece> {
        Piece::from_symbol(self.get(sq)?)
    }
}

/// The reason why parsing [`Placement`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePlacementError {
    #[display(fmt = "expected 8 ranks, found {}", _0)]
    RankCount(#[error(not(source))] usize),
    #[display(fmt = "rank {} overflows the board", _0)]
    Overflow(#[error(not(source))] usize),
    #[display(fmt = "rank {} spans {} files instead of 8", _0, _1)]
    Width(usize, usize),
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split(' ').next().unwrap_or_default();
        let ranks: Vec<_> = placement.split('/').collect();

        if ranks.len() != 8 {
            return Err(ParsePlacementError::RankCount(ranks.len()));
        }

        let mut grid = [[None; 8]; 8];
        for (row, (rank, cells)) in ranks.into_iter().zip(&mut grid).enumerate() {
            let label = 8 - row;
            let mut file = 0usize;

            for c in rank.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    _ => {
                        *cells
                            .get_mut(file)
                            .ok_or(ParsePlacementError::Overflow(label))? = Some(c);
                        file += 1;
                    }
                }
            }

            if file != 8 {
                return Err(ParsePlacementError::Width(label, file));
            }
        }

        Ok(Placement(grid))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.iter().enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }

            let mut empty = 0;
            for cell in cells {
                match cell {
                    None => empty += 1,
                    Some(c) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }

                        write!(f, "{}", c)?;
                    }
                }
            }

            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }

        Ok(())
    }
}
