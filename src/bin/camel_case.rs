//! camel-case - lowercase the first word of a sentence, capitalize the rest
//!
//! Usage:
//!   camel-case i'm feeling lucky
//!   echo "i'm feeling lucky" | camel-case

use std::io::{self, BufRead, IsTerminal};

use anyhow::Context;
use clap::Parser;
use utilkit::casing::to_camel_case;

#[derive(Parser)]
#[command(name = "camel-case")]
#[command(about = "Lowercase the first word and capitalize every other word")]
struct Cli {
    /// Text to convert; one line is read from stdin when omitted
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    utilkit::telemetry::init("warn");
    let cli = Cli::parse();

    let input = if cli.text.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Enter string to camel case:");
        }
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        line
    } else {
        cli.text.join(" ")
    };

    println!("{}", to_camel_case(&input));
    Ok(())
}
