// src/variants.rs
use std::io::Write;

use log::debug;

use crate::casing::pascal_identifier;

/// One rendered enum variant: the raw value for the rename attribute and the
/// PascalCase identifier for the declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
  pub raw: String,
  pub ident: String,
}

impl Variant {
  fn from_token(token: &str) -> Self {
    Variant {
      raw: token.to_string(),
      ident: pascal_identifier(token),
    }
  }
}

/// Splits `input` on `,`, trims each part, and renders one variant per token.
/// Tokens keep their input order; duplicates and empty tokens are kept as-is.
pub fn variants(input: &str) -> Vec<Variant> {
  input
    .split(',')
    .map(|part| Variant::from_token(part.trim()))
    .collect()
}

/// Writes the two generated lines for every token in `input`:
///
/// ```text
/// #[serde(rename = "<raw_token>")]
/// <PascalCaseToken>,
/// ```
///
/// The raw token lands in the attribute verbatim; embedded quotes or
/// backslashes are not escaped and produce an attribute that does not parse.
pub fn write_variants<W: Write>(out: &mut W, input: &str) -> std::io::Result<()> {
  let rendered = variants(input);
  debug!("Rendering {} variant(s)", rendered.len());
  for variant in &rendered {
    writeln!(out, "#[serde(rename = \"{}\")]", variant.raw)?;
    writeln!(out, "{},", variant.ident)?;
  }
  out.flush()
}
