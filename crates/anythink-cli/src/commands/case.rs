//! Case command
//!
//! Convert a phrase to camelCase, kebab-case or dot.case.

use anyhow::{Context, Result};
use anythink_core::casing::CaseStyle;
use clap::Args;
use std::io::Read;

/// Arguments for the case command
#[derive(Debug, Args)]
pub struct CaseArgs {
    /// Target style: camel, kebab or dot
    pub style: CaseStyle,

    /// Text to convert (read from stdin when omitted)
    pub input: Option<String>,

    /// Parse the input as a JSON value instead of raw text
    #[arg(long)]
    pub json: bool,
}

/// Execute the case command
pub fn execute(args: CaseArgs) -> Result<()> {
    let input = match args.input {
        Some(input) => input,
        None => read_stdin()?,
    };

    let converted = if args.json {
        let value: serde_json::Value =
            serde_json::from_str(&input).context("Input is not valid JSON")?;
        args.style.convert_value(&value)?
    } else {
        args.style.convert(&input)?
    };

    println!("{}", converted);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
