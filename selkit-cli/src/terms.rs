//! Command-line terms and folding them into one selector.

use std::fmt;
use std::mem;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use selkit_common::warning::warn_once;
use selkit_selector::{Combinator, PartCategory, SelectorBuilder};

/// One `KIND=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A typed selector part.
    Part(PartCategory, String),
    /// Ends the current compound selector and joins it to the next one.
    Combinator(String),
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KIND=VALUE, got '{s}'"))?;
        let category = match kind {
            "element" => PartCategory::Element,
            "id" => PartCategory::Id,
            "class" => PartCategory::Class,
            "attr" | "attribute" => PartCategory::Attribute,
            "pseudo-class" => PartCategory::PseudoClass,
            "pseudo-element" => PartCategory::PseudoElement,
            "combinator" => return Ok(Self::Combinator(value.to_string())),
            _ => return Err(format!("unknown part kind '{kind}'")),
        };
        Ok(Self::Part(category, value.to_string()))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(category, value) => write!(f, "{category}={value}"),
            Self::Combinator(text) => write!(f, "combinator={text}"),
        }
    }
}

/// The folded selector and how many compound selectors went into it.
#[derive(Debug)]
pub struct Built {
    /// Every compound selector joined by its combinator.
    pub selector: SelectorBuilder,
    /// Number of compound selectors.
    pub compounds: usize,
}

/// Build each compound selector from consecutive parts, then join them left
/// to right with the combinators between them.
pub fn build(terms: &[Term]) -> Result<Built> {
    let mut current = SelectorBuilder::new();
    // Everything left of the last combinator, with that combinator.
    let mut chain: Option<(SelectorBuilder, String)> = None;
    let mut compounds = 0;

    for (index, term) in terms.iter().enumerate() {
        match term {
            Term::Part(category, value) => {
                current = current
                    .part(*category, value)
                    .with_context(|| format!("argument {} ({term})", index + 1))?;
            }
            Term::Combinator(text) => {
                ensure!(
                    !current.is_empty(),
                    "argument {} ({term}) has no selector on its left",
                    index + 1
                );
                if Combinator::from_token(text).is_none() {
                    warn_once("CLI", &unknown_combinator_warning(text));
                }
                let right = mem::take(&mut current);
                let left = join(chain.take(), right);
                chain = Some((left, text.clone()));
                compounds += 1;
            }
        }
    }

    ensure!(
        !current.is_empty(),
        "expected selector parts after the last combinator"
    );
    Ok(Built {
        selector: join(chain, current),
        compounds: compounds + 1,
    })
}

fn unknown_combinator_warning(text: &str) -> String {
    format!("unrecognized combinator '{text}', inserting it verbatim")
}

fn join(chain: Option<(SelectorBuilder, String)>, right: SelectorBuilder) -> SelectorBuilder {
    match chain {
        Some((left, combinator)) => left.combine(&right, &combinator),
        None => right,
    }
}

#[cfg(test)]
mod tests {
    use selkit_common::warning::has_warned;

    use super::*;

    fn terms(args: &[&str]) -> Vec<Term> {
        args.iter().map(|arg| arg.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_terms() {
        assert_eq!(
            "pseudo-class=hover".parse::<Term>().unwrap(),
            Term::Part(PartCategory::PseudoClass, "hover".to_string())
        );
        assert_eq!(
            "attr=href$=\".png\"".parse::<Term>().unwrap(),
            Term::Part(PartCategory::Attribute, "href$=\".png\"".to_string())
        );
        assert_eq!(
            "combinator=+".parse::<Term>().unwrap(),
            Term::Combinator("+".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_terms() {
        assert!("div".parse::<Term>().is_err());
        assert!("tag=div".parse::<Term>().is_err());
    }

    #[test]
    fn test_build_single_compound() {
        let built = build(&terms(&["element=div", "id=main", "class=a"])).unwrap();
        assert_eq!(built.selector.stringify(), "div#main.a");
        assert_eq!(built.compounds, 1);
    }

    #[test]
    fn test_build_chain() {
        let built = build(&terms(&[
            "element=div",
            "id=main",
            "combinator=+",
            "element=table",
            "id=data",
            "combinator=>",
            "element=tr",
        ]))
        .unwrap();
        assert_eq!(built.selector.stringify(), "div#main + table#data > tr");
        assert_eq!(built.compounds, 3);
    }

    #[test]
    fn test_build_warns_on_unknown_combinator() {
        let built = build(&terms(&["class=a", "combinator=/deep/", "class=b"])).unwrap();
        assert_eq!(built.selector.stringify(), ".a /deep/ .b");
        assert!(has_warned("CLI", &unknown_combinator_warning("/deep/")));
        assert!(!has_warned("CLI", &unknown_combinator_warning("||")));

        let _ = build(&terms(&["element=col", "combinator=||", "element=td"])).unwrap();
        assert!(!has_warned("CLI", &unknown_combinator_warning("||")));
    }

    #[test]
    fn test_build_reports_order_error() {
        let err = build(&terms(&["class=a", "id=b"])).unwrap_err();
        assert_eq!(err.to_string(), "argument 2 (id=b)");
        assert!(format!("{err:#}").contains("must appear in the order"));
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build(&terms(&["combinator=>", "element=p"])).is_err());
        assert!(build(&terms(&["element=p", "combinator=>"])).is_err());
        assert!(build(&[]).is_err());
    }
}
