use derive_more::Display;
use test_strategy::Arbitrary;

/// A promotion specifier.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum Promotion {
    #[display(fmt = "")]
    None,
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "q")]
    Queen,
}

impl Promotion {
    /// Interprets the user's answer to a promotion prompt.
    ///
    /// Anything but one of `q`, `r`, `b` or `n`, including no answer at all,
    /// promotes to a queen.
    pub fn from_reply(reply: Option<&str>) -> Self {
        match reply.map(|r| r.trim().to_lowercase()).as_deref() {
            Some("r") => Promotion::Rook,
            Some("b") => Promotion::Bishop,
            Some("n") => Promotion::Knight,
            _ => Promotion::Queen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn reply_with_promotion_letter_selects_it(
        #[filter(#p != Promotion::None)] p: Promotion,
        #[strategy(" *")] pad: String,
    ) {
        let reply = format!("{pad}{}{pad}", p.to_string().to_uppercase());
        assert_eq!(Promotion::from_reply(Some(&reply)), p);
    }

    #[proptest]
    fn invalid_reply_promotes_to_queen(
        #[filter(!["r", "b", "n"].contains(&#s.trim().to_lowercase().as_str()))] s: String,
    ) {
        assert_eq!(Promotion::from_reply(Some(&s)), Promotion::Queen);
    }

    #[test]
    fn empty_or_missing_reply_promotes_to_queen() {
        assert_eq!(Promotion::from_reply(Some("")), Promotion::Queen);
        assert_eq!(Promotion::from_reply(None), Promotion::Queen);
    }
}
