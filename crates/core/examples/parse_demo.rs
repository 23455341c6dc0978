//! Parse a command line and print the resulting chart specification.
//!
//! Run from the repository root:
//! `cargo run -p vegaplot_core --example parse_demo -- MARK BAR COLOR RED X_FIELD sales`

use vegaplot_core::{DataFrame, ParseError, Trace, parse_tokens_with, to_pretty_json};

fn main() -> Result<(), ParseError> {
    let mut tokens: Vec<String> = std::env::args().skip(1).collect();
    if tokens.is_empty() {
        tokens = "MARK BAR COLOR RED X_FIELD sales TYPE QUANTITATIVE BIN TRUE"
            .split_whitespace()
            .map(str::to_owned)
            .collect();
    }

    let data = DataFrame::new(serde_json::json!([
        {"sales": 28}, {"sales": 55}, {"sales": 43},
    ]));

    let mut trace = Trace::default();
    let chart = parse_tokens_with(&tokens, data, &mut trace)?;

    for line in &trace.lines {
        eprintln!("{line}");
    }
    println!("{}", to_pretty_json(&chart));
    Ok(())
}
