//! The selector builder.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::category::PartCategory;
use crate::error::SelectorError;

/// Builds a selector string one typed part at a time.
///
/// Parts must be added in category order (see [`PartCategory`]) and element,
/// id, and pseudo-element may each appear once. Two builders can be joined
/// with a combinator using [`combine`](Self::combine), which leaves both
/// operands untouched.
///
/// ```
/// use selkit_selector::element;
///
/// # fn main() -> Result<(), selkit_selector::SelectorError> {
/// let link = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
/// assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Rendered parts and combinator separators, in output order.
    fragments: Vec<String>,
    /// Index of the first fragment of the rightmost compound selector.
    compound_start: usize,
    /// Category of the last part in the rightmost compound selector.
    last: Option<PartCategory>,
    /// Whether the rightmost compound selector has an element part.
    has_element: bool,
}

impl SelectorBuilder {
    /// An empty builder. Any category is accepted as its first part.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            compound_start: 0,
            last: None,
            has_element: false,
        }
    }

    /// A builder holding exactly one part. An empty builder accepts any
    /// first part, so this cannot fail.
    pub(crate) fn seeded(category: PartCategory, value: &str) -> Self {
        Self {
            fragments: vec![category.render(value)],
            compound_start: 0,
            last: Some(category),
            has_element: category == PartCategory::Element,
        }
    }

    /// Append a type selector such as `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if any other part is already present,
    /// [`SelectorError::Duplicate`] if an element is.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::Element, name)
    }

    /// Append `#name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a class or later part is present,
    /// [`SelectorError::Duplicate`] if an id is.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::Id, name)
    }

    /// Append `.name`. Repeats are allowed.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute or later part is present.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::Class, name)
    }

    /// Append `[text]`. The text is used as given, without escaping.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(self, text: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::Attribute, text)
    }

    /// Append `:name`. Repeats are allowed.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is present.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::PseudoClass, name)
    }

    /// Append `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already present.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartCategory::PseudoElement, name)
    }

    /// Append a part whose category is only known at runtime.
    ///
    /// # Errors
    ///
    /// Same as the typed method for `category`.
    pub fn part(self, category: PartCategory, value: &str) -> Result<Self, SelectorError> {
        self.append(category, value)
    }

    fn append(mut self, category: PartCategory, value: &str) -> Result<Self, SelectorError> {
        if let Some(after) = self.last.filter(|&last| category < last) {
            return Err(SelectorError::Order { category, after });
        }
        if category.is_singleton() && self.contains(category) {
            return Err(SelectorError::Duplicate { category });
        }

        self.fragments.push(category.render(value));
        self.last = Some(category);
        self.has_element |= category == PartCategory::Element;
        Ok(self)
    }

    /// Whether the rightmost compound selector already has a singleton part
    /// of `category`.
    fn contains(&self, category: PartCategory) -> bool {
        let marker = match category {
            PartCategory::Element => return self.has_element,
            PartCategory::Id => "#",
            PartCategory::PseudoElement => "::",
            _ => return false,
        };
        self.fragments[self.compound_start..]
            .iter()
            .any(|f| f.starts_with(marker))
    }

    /// Join `self` and `other` with `combinator` into a new builder.
    ///
    /// The result renders as `self`, then the combinator padded with one
    /// space on each side, then `other`. The combinator text is inserted
    /// verbatim, so `" "` yields three spaces. Neither operand is modified
    /// and the two sides are not validated against each other: each is its
    /// own compound selector.
    ///
    /// Typed parts added to the result extend `other`'s rightmost compound
    /// selector and are checked against it alone.
    #[must_use]
    pub fn combine<C: AsRef<str> + ?Sized>(&self, other: &Self, combinator: &C) -> Self {
        let combinator = combinator.as_ref();
        let mut fragments = Vec::with_capacity(self.fragments.len() + other.fragments.len() + 1);
        fragments.extend_from_slice(&self.fragments);
        fragments.push(format!(" {combinator} "));
        fragments.extend_from_slice(&other.fragments);

        Self {
            fragments,
            compound_start: self.fragments.len() + 1 + other.compound_start,
            last: other.last,
            has_element: other.has_element,
        }
    }

    /// Render the selector.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.concat()
    }

    /// The rendered parts and combinator separators, in order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| f.write_str(fragment))
    }
}

impl Serialize for SelectorBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
