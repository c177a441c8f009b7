// src/casing.rs

/// Builds a PascalCase identifier from a snake_case value.
///
/// Underscores and interior whitespace are word breaks. The first alphabetic
/// character of each word is ASCII-uppercased, the remainder of the word keeps
/// its case, and the words are joined with no separator. Non-alphabetic
/// characters leading a word pass through unchanged, so "1foo" becomes "1Foo".
pub fn pascal_identifier(value: &str) -> String {
  let mut ident = String::with_capacity(value.len());
  for word in value.split(|c: char| c == '_' || c.is_whitespace()) {
    let mut capitalized = false;
    for ch in word.chars() {
      if !capitalized && ch.is_alphabetic() {
        ident.push(ch.to_ascii_uppercase());
        capitalized = true;
      } else {
        ident.push(ch);
      }
    }
  }
  ident
}
