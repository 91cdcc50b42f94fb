/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod resolve;
use resolve::{resolve, Outcome};

const USAGE: &str = "
Currency Symbols

Usage:
  ccy [CODE_OR_SYMBOL]

Examples:
  ccy EUR     # Outputs: €
  ccy $       # Outputs: USD, CAD, AUD, ...
";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "ccy")]
struct Cli {
  /// Currency code or symbol to look up
  query: Option<String>,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  let Some(query) = cli.query else {
    println!("{USAGE}");
    return Ok(());
  };

  match resolve(&query) {
    Outcome::Symbol(symbol) => println!("{symbol}"),
    Outcome::Codes(codes) => println!("{}", codes.join(", ")),
    Outcome::NoMatch => {
      println!("No match found for '{query}'");
      std::process::exit(1);
    }
  }

  Ok(())
}
