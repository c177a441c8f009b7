// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenumError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("no input string was provided")]
  MissingInput,
}
