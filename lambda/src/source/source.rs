use std::path::Path;
use std::sync::Arc;

/// Padding to detect the end of code while tokenizing.
pub const PADDING: usize = 2;

/// Span element `(start, end)` in byte offsets.
pub type Span = (u32, u32);

/// Source code container to avoid large files duplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCode(pub Arc<SourceContainer>);

/// Internal source code container, used for ergonomics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceContainer {
  /// File path or 'inline'.
  pub source: String,
  /// Source code.
  pub code: String,
  /// Byte offsets at which lines start. `lines[0]` is always 0.
  pub lines: Vec<u32>,
}

impl SourceCode {
  /// Creates a [SourceContainer] instance wrapping a string.
  pub fn from_string(code: String, path: &str) -> Self {
    let mut code = code;

    // Line 1 starts at offset 0; a new line starts after every newline byte.
    let mut lines = vec![0];

    for (offset, byte) in code.bytes().enumerate() {
      if byte == b'\n' {
        lines.push(offset as u32 + 1);
      }
    }

    // This helps to avoid checks for the end of code before reading every character.
    for _ in 0..PADDING {
      code.push('\0');
    }

    SourceCode(Arc::new(SourceContainer {
      code,
      lines,
      source: path.to_string(),
    }))
  }

  /// Creates a [SourceContainer] instance *cloning* a string slice.
  #[allow(clippy::should_implement_trait)]
  pub fn from_str(code: &str) -> Self {
    Self::from_string(code.to_string(), "inline")
  }

  /// Creates a [SourceContainer] instance from a vector of bytes.
  ///
  /// NOTE: It uses `String::from_utf8_lossy`.
  pub fn from_bytes(bytes: Vec<u8>, path: &str) -> Self {
    Self::from_string(String::from_utf8_lossy(&bytes).to_string(), path)
  }

  /// Returns the real size of the `code`.
  pub fn len(&self) -> usize {
    self.0.code.len() - PADDING
  }

  /// Checks if the source code is empty.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns a bytes slice of the `code`, padding included.
  pub fn as_bytes(&self) -> &[u8] {
    self.0.code.as_bytes()
  }

  /// Returns a string slice of the `code`, padding included.
  pub fn as_str(&self) -> &str {
    self.0.code.as_str()
  }

  /// Returns the source text without the padding.
  pub fn text(&self) -> &str {
    &self.0.code[..self.len()]
  }

  /// Returns the 1-based line number containing the given offset.
  pub fn line_of(&self, offset: u32) -> u32 {
    self.0.lines.partition_point(|start| *start <= offset) as u32
  }

  /// Returns the 1-based column of the given offset within its line.
  pub fn column_of(&self, offset: u32) -> u32 {
    let line = self.line_of(offset);
    offset - self.0.lines[line as usize - 1] + 1
  }

  /// Resolves an offset to a 1-based `(line, column)` pair.
  pub fn locus(&self, offset: u32) -> (u32, u32) {
    (self.line_of(offset), self.column_of(offset))
  }

  /// Returns the file name of source.
  pub fn file_name(&self) -> &str {
    let path = self.0.source.as_str();

    Path::new(path)
      .file_name()
      .and_then(|filename| filename.to_str())
      .unwrap_or(path)
  }

  /// Returns the file path of source.
  pub fn file_path(&self) -> &str {
    self.0.source.as_str()
  }
}

#[cfg(test)]
mod tests {
  use indoc::indoc;

  use super::*;

  #[test]
  fn test_line_map() {
    let code = SourceCode::from_str(indoc! {"
      id = x
      y
    "});

    assert_eq!(code.locus(0), (1, 1));
    assert_eq!(code.locus(5), (1, 6));
    assert_eq!(code.locus(7), (2, 1));
  }

  #[test]
  fn test_locus_round_trip() {
    let text = "a\nbb\nccc\n";
    let code = SourceCode::from_str(text);

    for (offset, expected) in text.bytes().enumerate() {
      let (line, column) = code.locus(offset as u32);
      let line_start = code.0.lines[line as usize - 1] as usize;

      assert_eq!(text.as_bytes()[line_start + column as usize - 1], expected);
    }
  }

  #[test]
  fn test_single_line() {
    let code = SourceCode::from_str("abc");

    assert_eq!(code.locus(2), (1, 3));
    assert_eq!(code.len(), 3);
  }

  #[test]
  fn test_file_name() {
    let code = SourceCode::from_string("x".to_string(), "demos/identity.stlc");

    assert_eq!(code.file_name(), "identity.stlc");
    assert_eq!(code.file_path(), "demos/identity.stlc");
  }
}
