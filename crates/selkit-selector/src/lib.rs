//! Typed CSS selector builder.
//!
//! Selectors are assembled from typed parts instead of hand-written strings.
//! Within one [compound selector](https://www.w3.org/TR/selectors-4/#compound)
//! the parts must follow a fixed order: element, id, class, attribute,
//! pseudo-class, pseudo-element. Element, id, and pseudo-element may appear once.
//! Compound selectors are joined with combinators into a new builder.
//!
//! The free functions here are the entry points: each starts a builder with
//! one part.
//!
//! ```
//! use selkit_selector::{Combinator, combine, element, id, stringify};
//!
//! # fn main() -> Result<(), selkit_selector::SelectorError> {
//! let main = element("div").id("main")?;
//! let data = element("table").id("data")?;
//! let rows = combine(&combine(&main, "+", &data), &Combinator::Child, &element("tr"));
//! assert_eq!(stringify(&rows), "div#main + table#data > tr");
//!
//! let card = id("main").class("container")?.class("editable")?;
//! assert_eq!(card.to_string(), "#main.container.editable");
//! # Ok(())
//! # }
//! ```
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching against a document
//! - Specificity

mod builder;
mod category;
mod combinator;
mod error;

pub use builder::SelectorBuilder;
pub use category::PartCategory;
pub use combinator::Combinator;
pub use error::SelectorError;

/// Start a selector with a type selector such as `div`.
#[must_use]
pub fn element(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::Element, name)
}

/// Start a selector with `#name`.
#[must_use]
pub fn id(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::Id, name)
}

/// Start a selector with `.name`.
#[must_use]
pub fn class(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::Class, name)
}

/// Start a selector with `[text]`.
#[must_use]
pub fn attr(text: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::Attribute, text)
}

/// Start a selector with `:name`.
#[must_use]
pub fn pseudo_class(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::PseudoClass, name)
}

/// Start a selector with `::name`.
#[must_use]
pub fn pseudo_element(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(PartCategory::PseudoElement, name)
}

/// Same as `a.combine(b, combinator)`.
#[must_use]
pub fn combine<C: AsRef<str> + ?Sized>(
    a: &SelectorBuilder,
    combinator: &C,
    b: &SelectorBuilder,
) -> SelectorBuilder {
    a.combine(b, combinator)
}

/// Render `builder` to selector text.
#[must_use]
pub fn stringify(builder: &SelectorBuilder) -> String {
    builder.stringify()
}
