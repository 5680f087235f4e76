//! selkit - build CSS selectors from typed parts
//!
//! Each argument is `KIND=VALUE`. Parts accumulate into a compound selector
//! and a `combinator=` argument starts the next one.

mod terms;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::json;
use serde::Serialize;

use terms::{Term, build};

/// selkit - assemble order-checked CSS selectors
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"KINDS:
    element, id, class, attr, pseudo-class, pseudo-element, combinator

EXAMPLES:
    # div#main.a.b[x]:hover::before
    selkit element=div id=main class=a class=b attr=x pseudo-class=hover pseudo-element=before

    # div#main + table#data
    selkit element=div id=main combinator=+ element=table id=data

    # Descendant combinator, as JSON
    selkit --json element=ul "combinator= " element=li
"#)]
struct Cli {
    /// Selector parts and combinators, in order
    #[arg(value_name = "KIND=VALUE", required = true)]
    terms: Vec<Term>,

    /// Print a JSON object instead of the bare selector
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct Output {
    selector: String,
    compounds: usize,
}

fn run(cli: &Cli) -> Result<String> {
    let built = build(&cli.terms)?;
    if cli.json {
        let output = Output {
            selector: built.selector.stringify(),
            compounds: built.compounds,
        };
        return Ok(json::encode(&output)?);
    }
    Ok(built.selector.stringify())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
