// src/main.rs
mod casing;
mod cli;
mod error;
mod variants;

use clap::Parser;
use cli::Cli;
use error::RenumError;
use log::LevelFilter;
use std::io;

fn main() -> Result<(), RenumError> {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  // The advisory goes to stdout; the returned error reaches stderr with a
  // non-zero exit.
  let Some(input) = cli.input else {
    println!("you need to specify the input string");
    return Err(RenumError::MissingInput);
  };

  let stdout = io::stdout();
  variants::write_variants(&mut stdout.lock(), &input)?;

  Ok(())
}
