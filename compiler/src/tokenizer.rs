/// One non-blank input line: its indentation depth, trimmed text, and
/// 1-based source line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub indent: usize,
    pub text:   String,
    pub line:   usize,
}

/// Indentation depth of a raw line. Two leading spaces make one level.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count() / 2
}

/// Splits TOON text into tokens, one per non-blank line. Blank lines are
/// dropped but still advance the line counter. Malformed indentation is not
/// an error here; that is the validator's job.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        tokens.push(Token {
            indent: indent_level(raw),
            text:   raw.trim().to_string(),
            line:   index + 1,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        let input = "user:\n  name: Alice";
        let expected = vec![
            Token { indent: 0, text: "user:".into(), line: 1 },
            Token { indent: 1, text: "name: Alice".into(), line: 2 },
        ];
        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn test_tokenize_skips_blank_lines() {
        let input = "a:\n\n   \n  b: 1\n";
        let got = tokenize(input);
        assert_eq!(got.len(), 2);
        // Blank lines are dropped but line numbers stay 1-based source lines.
        assert_eq!(got[1].line, 4);
        assert_eq!(got[1].indent, 1);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let input = "a:\n  b: 1\n  c[2]: x,y\n";
        assert_eq!(tokenize(input), tokenize(input));
    }

    #[test]
    fn test_indent_level_uses_two_space_units() {
        assert_eq!(indent_level("key:"), 0);
        assert_eq!(indent_level("  key:"), 1);
        assert_eq!(indent_level("    key:"), 2);
        // Odd space counts round down; the validator rejects them separately.
        assert_eq!(indent_level("   key:"), 1);
    }
}
