// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "renum", // Command name users type
    author,
    version,
    about = "Turns a comma-separated list of snake_case values into serde-renamed enum variants.",
    long_about = None
)]
pub struct Cli {
  /// Comma-separated snake_case values (e.g., "foo_bar, baz_qux")
  pub input: Option<String>,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}
