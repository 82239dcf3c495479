use crate::chess::{Move, Piece, Placement, Promotion, Role, Square};
use std::mem;

/// Where two-click move entry stands.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Selection {
    #[default]
    None,
    Pending(Square),
}

/// A move put together from two clicks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Composed {
    Ready(Move),
    Promotion(PendingPromotion),
}

/// A pawn move to the last rank awaiting the choice of a piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PendingPromotion(Square, Square);

impl PendingPromotion {
    /// The prompt shown to the user.
    pub const PROMPT: &'static str = "Promote to (q/r/b/n). Default q:";

    /// Completes the move with the user's reply, see [`Promotion::from_reply`].
    pub fn resolve(self, reply: Option<&str>) -> Move {
        Move(self.0, self.1, Promotion::from_reply(reply))
    }
}

impl Selection {
    /// The pending origin, if any.
    pub fn origin(&self) -> Option<Square> {
        match *self {
            Selection::None => None,
            Selection::Pending(sq) => Some(sq),
        }
    }

    /// Registers a click on a [`Square`].
    ///
    /// The first click records the origin, the second one composes the move and clears
    /// the selection. Whether the move promotes is decided by the piece found on the
    /// origin in `placement`.
    pub fn click(&mut self, sq: Square, placement: Option<&Placement>) -> Option<Composed> {
        match mem::take(self) {
            Selection::None => {
                *self = Selection::Pending(sq);
                None
            }

            Selection::Pending(whence) => Some(compose(whence, sq, placement)),
        }
    }

    /// Forgets the pending origin.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }
}

fn compose(whence: Square, whither: Square, placement: Option<&Placement>) -> Composed {
    match placement.and_then(|p| p.piece(whence)) {
        Some(Piece(Role::Pawn, c)) if whither.rank() == c.promotion_rank() => {
            Composed::Promotion(PendingPromotion(whence, whither))
        }

        _ => Composed::Ready(Move(whence, whither, Promotion::None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Rank;
    use proptest::sample::select;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[proptest]
    fn first_click_records_origin(s: Square) {
        let p = Placement::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut selection = Selection::None;
        assert_eq!(selection.click(s, p.as_ref()), None);
        assert_eq!(selection.origin(), Some(s));
    }

    #[proptest]
    fn second_click_composes_move_and_clears_selection(a: Square, b: Square) {
        let mut selection = Selection::Pending(a);
        assert_eq!(
            selection.click(b, None),
            Some(Composed::Ready(Move(a, b, Promotion::None)))
        );
        assert_eq!(selection, Selection::None);
    }

    #[test]
    fn pawn_push_to_fourth_rank_does_not_promote() {
        let p = Placement::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut selection = Selection::None;
        assert_eq!(selection.click(sq("e2"), p.as_ref()), None);

        let composed = selection.click(sq("e4"), p.as_ref());
        assert_eq!(
            composed.map(|c| match c {
                Composed::Ready(m) => m.to_string(),
                Composed::Promotion(_) => String::new(),
            }),
            Some("e2e4".into())
        );
    }

    #[test]
    fn white_pawn_reaching_eighth_rank_promotes_to_queen_by_default() {
        let p = Placement::parse("8/P7/8/8/8/8/8/8 w - - 0 1");
        let mut selection = Selection::Pending(sq("a7"));

        match selection.click(sq("a8"), p.as_ref()) {
            Some(Composed::Promotion(pending)) => {
                assert_eq!(pending.resolve(Some("")).to_string(), "a7a8q");
                assert_eq!(pending.resolve(None).to_string(), "a7a8q");
                assert_eq!(pending.resolve(Some("N")).to_string(), "a7a8n");
            }

            c => panic!("expected a promotion, got {c:?}"),
        }
    }

    #[test]
    fn black_pawn_reaching_first_rank_promotes() {
        let p = Placement::parse("8/8/8/8/8/8/7p/8 b - - 0 1");
        let mut selection = Selection::Pending(sq("h2"));

        assert!(matches!(
            selection.click(sq("h1"), p.as_ref()),
            Some(Composed::Promotion(_))
        ));
    }

    #[test]
    fn pawn_reaching_its_own_back_rank_does_not_promote() {
        let p = Placement::parse("8/8/8/8/8/8/7P/8 w - - 0 1");
        let mut selection = Selection::Pending(sq("h2"));

        assert_eq!(
            selection.click(sq("h1"), p.as_ref()),
            Some(Composed::Ready(Move(sq("h2"), sq("h1"), Promotion::None)))
        );
    }

    #[proptest]
    fn non_pawns_never_promote(
        #[strategy(select(vec!['N', 'B', 'R', 'Q', 'K']))] symbol: char,
        #[strategy(0usize..8)] col: usize,
    ) {
        let rows: Vec<_> = (0..8)
            .map(|row| match row {
                1 => format!("{symbol}7"),
                _ => "8".into(),
            })
            .collect();

        let p = Placement::parse(&rows.join("/"));
        let whence = sq("a7");
        let whither = Square::at(Rank::Eighth.row(), col).unwrap();
        let mut selection = Selection::Pending(whence);

        assert_eq!(
            selection.click(whither, p.as_ref()),
            Some(Composed::Ready(Move(whence, whither, Promotion::None)))
        );
    }

    #[test]
    fn clear_forgets_origin() {
        let mut selection = Selection::Pending(sq("e2"));
        selection.clear();
        assert_eq!(selection.origin(), None);
    }
}
