//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;

/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// [`SelectorBuilder::combine`](crate::SelectorBuilder::combine) accepts any
/// text as a combinator; this enum names the ones Selectors Level 4 defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators) `A B`
    Descendant,
    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,
    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,
    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
    /// [§ 16.5](https://www.w3.org/TR/selectors-4/#the-column-combinator) `A || B`
    Column,
}

impl Combinator {
    /// The token written between two compound selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
        }
    }

    /// Map combinator text back to a combinator.
    ///
    /// Whitespace-only text (including the empty string) is the descendant
    /// combinator; anything else must match a token exactly.
    #[must_use]
    pub fn from_token(text: &str) -> Option<Self> {
        match text {
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            "||" => Some(Self::Column),
            _ if text.chars().all(char::is_whitespace) => Some(Self::Descendant),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
