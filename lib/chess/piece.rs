use crate::chess::{Color, Role};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Role, pub Color);

impl Piece {
    /// Constructs [`Piece`] from its symbol, upper case standing for white.
    pub fn from_symbol(c: char) -> Option<Self> {
        let role = Role::from_letter(c)?;
        if c.is_ascii_uppercase() {
            Some(Piece(role, Color::White))
        } else {
            Some(Piece(role, Color::Black))
        }
    }

    /// The figurine that depicts this piece.
    pub fn glyph(&self) -> char {
        match (self.role(), self.color()) {
            (Role::Pawn, Color::White) => '♙',
            (Role::Knight, Color::White) => '♘',
            (Role::Bishop, Color::White) => '♗',
            (Role::Rook, Color::White) => '♖',
            (Role::Queen, Color::White) => '♕',
            (Role::King, Color::White) => '♔',
            (Role::Pawn, Color::Black) => '♟',
            (Role::Knight, Color::Black) => '♞',
            (Role::Bishop, Color::Black) => '♝',
            (Role::Rook, Color::Black) => '♜',
            (Role::Queen, Color::Black) => '♛',
            (Role::King, Color::Black) => '♚',
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.0
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.1
    }
}
