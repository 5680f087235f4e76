//! Selector part categories and their fixed order.

use strum_macros::{Display, EnumIter};

/// The kind of a simple selector part.
///
/// Variants are declared in the order CSS requires them to appear inside a
/// compound selector, so the derived `Ord` is the category rank:
/// element < id < class < attribute < pseudo-class < pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PartCategory {
    /// Type selector, e.g. `div`
    Element,
    /// `#name`
    Id,
    /// `.name`
    Class,
    /// `[text]`
    Attribute,
    /// `:name`
    PseudoClass,
    /// `::name`
    PseudoElement,
}

impl PartCategory {
    /// Position of this category in the required order, starting at 0.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Whether a compound selector may contain at most one part of this category.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text placed before the value when rendering a part.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text placed after the value when rendering a part.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Render one part of this category. The value is not escaped.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        format!("{}{value}{}", self.prefix(), self.suffix())
    }
}
