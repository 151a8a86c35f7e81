use anyhow::{Context, Result};
use std::path::Path;

/// An input line that does not encode one 32-bit word.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid instruction on line {line}: '{content}'")]
pub struct MalformedLine {
    pub line: usize,
    pub content: String,
}

/// Parses the binary-text source: one word per line, each line exactly 32
/// `'0'`/`'1'` characters, leftmost character = bit 31.
pub fn parse_words(text: &str) -> Result<Vec<u32>, MalformedLine> {
    let mut words = Vec::new();
    for (n, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        let malformed = || MalformedLine {
            line: n + 1,
            content: line.to_string(),
        };
        if line.len() != 32 {
            return Err(malformed());
        }
        // from_str_radix rejects anything outside '0'/'1' for us.
        words.push(u32::from_str_radix(line, 2).map_err(|_| malformed())?);
    }
    Ok(words)
}

pub fn load_words(path: &Path) -> Result<Vec<u32>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_words(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words_in_order() {
        let text = format!("{:032b}\n{:032b}\n", 0u32, 0xFEDE_FFE7u32);
        assert_eq!(parse_words(&text).unwrap(), vec![0, 0xFEDE_FFE7]);
    }

    #[test]
    fn short_line_cites_its_line_number() {
        // 4 good lines, then a 31-character line 5.
        let mut text = format!("{:032b}\n", 0u32).repeat(4);
        text.push_str(&"1".repeat(31));
        text.push('\n');
        let err = parse_words(&text).unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.content, "1".repeat(31));
    }

    #[test]
    fn non_binary_digit_is_malformed() {
        let mut line = "0".repeat(31);
        line.push('2');
        let err = parse_words(&line).unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let text = format!("{:032b}\r\n", 5u32);
        assert_eq!(parse_words(&text).unwrap(), vec![5]);
    }
}
