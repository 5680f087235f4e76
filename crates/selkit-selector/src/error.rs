//! Errors raised while appending selector parts.

use thiserror::Error;

use crate::category::PartCategory;

/// A part could not be appended to a [`SelectorBuilder`](crate::SelectorBuilder).
///
/// Both variants mean the call itself was wrong; the builder that rejected the
/// part is consumed and should be rebuilt without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The part ranks below a part already present.
    #[error(
        "cannot add {category} after {after}: selector parts must appear in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// Category of the rejected part.
        category: PartCategory,
        /// Category of the last part that was accepted.
        after: PartCategory,
    },

    /// A second element, id, or pseudo-element part.
    #[error(
        "cannot add a second {category}: element, id, and pseudo-element may occur at most once"
    )]
    Duplicate {
        /// Category of the rejected part.
        category: PartCategory,
    },
}
