use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ToonError;

lazy_static! {
    static ref SIMPLE_LIST: Regex = Regex::new(r"^.+\[\d+]:\s*.+$").unwrap();
    static ref OBJECT_LIST: Regex = Regex::new(r"^.+\[\d+].*\{.+}.*:$").unwrap();
}

/// True when the line introduces a simple list: `key[n]: a,b,c`.
pub(crate) fn is_simple_list(line: &str) -> bool {
    SIMPLE_LIST.is_match(line)
}

/// True when the line introduces an object list: `key[n]{h1,h2}:`.
pub(crate) fn is_object_list(line: &str) -> bool {
    OBJECT_LIST.is_match(line)
}

/// Whole-input structural validation, run before any parsing:
/// empty-input check, per-line indentation check, per-line shape check,
/// and a global bracket/brace balance check. Fails fast on the first
/// violation.
pub fn validate(input: &str) -> Result<(), ToonError> {
    if input.trim().is_empty() {
        return Err(ToonError::EmptyInput);
    }

    validate_indentation(input)?;
    validate_syntax(input)?;
    validate_balanced_brackets(input)
}

fn validate_indentation(input: &str) -> Result<(), ToonError> {
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let leading_spaces = line.chars().take_while(|&c| c == ' ').count();
        if leading_spaces % 2 != 0 {
            return Err(ToonError::InvalidIndentation {
                msg:  format!(
                    "indentation must be in multiples of 2 spaces (found {} spaces)",
                    leading_spaces
                ),
                line: index + 1,
            });
        }

        if line.contains('\t') {
            return Err(ToonError::InvalidIndentation {
                msg:  "tabs are not allowed, use spaces for indentation".to_string(),
                line: index + 1,
            });
        }
    }
    Ok(())
}

fn validate_syntax(input: &str) -> Result<(), ToonError> {
    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_object_decl = trimmed.ends_with(':') && !trimmed.contains('[');
        let is_property = trimmed.contains(':') && !trimmed.ends_with(':');

        if is_object_decl || is_property || is_simple_list(trimmed) || is_object_list(trimmed) {
            continue;
        }

        // Bracket-free comma-bearing lines are object-list data rows.
        let is_data_row = trimmed.contains(',') && !trimmed.contains(':');
        if !is_data_row {
            return Err(ToonError::InvalidSyntax {
                msg:  format!("line does not match any valid TOON pattern: {:?}", trimmed),
                line: index + 1,
            });
        }
    }
    Ok(())
}

fn validate_balanced_brackets(input: &str) -> Result<(), ToonError> {
    let mut square = 0i32;
    let mut curly = 0i32;
    let mut line = 1;

    for c in input.chars() {
        match c {
            '\n' => line += 1,
            '[' => square += 1,
            ']' => square -= 1,
            '{' => curly += 1,
            '}' => curly -= 1,
            _ => {}
        }

        if square < 0 {
            return Err(ToonError::InvalidSyntax {
                msg: "unmatched closing bracket ']'".to_string(),
                line,
            });
        }
        if curly < 0 {
            return Err(ToonError::InvalidSyntax {
                msg: "unmatched closing brace '}'".to_string(),
                line,
            });
        }
    }

    let last_line = input.lines().count().max(1);
    if square != 0 {
        return Err(ToonError::InvalidSyntax {
            msg:  "unmatched square brackets".to_string(),
            line: last_line,
        });
    }
    if curly != 0 {
        return Err(ToonError::InvalidSyntax {
            msg:  "unmatched curly braces".to_string(),
            line: last_line,
        });
    }
    Ok(())
}

/// Rejects blank keys and keys containing spaces without underscores.
pub fn validate_key(key: &str, line: usize) -> Result<(), ToonError> {
    if key.trim().is_empty() {
        return Err(ToonError::InvalidSyntax {
            msg: "key cannot be empty".to_string(),
            line,
        });
    }

    if key.contains(' ') && !key.contains('_') {
        return Err(ToonError::InvalidSyntax {
            msg: format!("key {:?} contains spaces, use underscores instead", key),
            line,
        });
    }
    Ok(())
}

/// Rejects a key already declared at the same nesting level.
pub fn check_duplicate_key(
    existing: &HashSet<String>,
    key: &str,
    line: usize,
) -> Result<(), ToonError> {
    if existing.contains(key) {
        return Err(ToonError::DuplicateKey { key: key.to_string(), line });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_input() {
        let input = "user:\n  name: Alice\n  tags[2]: a,b\n  hikes[1]{id,km}:\n    h1,5.2\n";
        assert!(validate(input).is_ok());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(validate(""), Err(ToonError::EmptyInput)));
        assert!(matches!(validate("  \n \n"), Err(ToonError::EmptyInput)));
    }

    #[test]
    fn test_odd_indentation_is_rejected() {
        let err = validate("user:\n   name: Alice\n").unwrap_err();
        assert!(matches!(err, ToonError::InvalidIndentation { line: 2, .. }));
    }

    #[test]
    fn test_tabs_are_rejected() {
        let err = validate("user:\n\t\tname: Alice\n").unwrap_err();
        assert!(matches!(err, ToonError::InvalidIndentation { .. }));
    }

    #[test]
    fn test_unrecognized_line_shape_is_rejected() {
        let err = validate("user:\n  just some words\n").unwrap_err();
        assert!(matches!(err, ToonError::InvalidSyntax { line: 2, .. }));
    }

    #[test]
    fn test_data_rows_pass_the_shape_check() {
        assert!(validate("hikes[1]{id,km}:\n  h1,5.2\n").is_ok());
    }

    #[test]
    fn test_unbalanced_brackets_are_rejected() {
        let err = validate("user:\n  tags[2: a,b\n").unwrap_err();
        assert!(matches!(err, ToonError::InvalidSyntax { .. }));

        let err = validate("user:\n  x]: 1,2\n").unwrap_err();
        assert!(matches!(err, ToonError::InvalidSyntax { line: 2, .. }));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("name", 1).is_ok());
        assert!(validate_key("first_name", 1).is_ok());
        assert!(matches!(
            validate_key("", 3),
            Err(ToonError::InvalidSyntax { line: 3, .. })
        ));
        assert!(validate_key("bad key", 1).is_err());
        // Spaces are tolerated when the key also carries an underscore.
        assert!(validate_key("odd_ key", 1).is_ok());
    }

    #[test]
    fn test_check_duplicate_key() {
        let mut seen = HashSet::new();
        seen.insert("name".to_string());
        assert!(check_duplicate_key(&seen, "age", 2).is_ok());
        let err = check_duplicate_key(&seen, "name", 4).unwrap_err();
        assert!(matches!(err, ToonError::DuplicateKey { line: 4, .. }));
    }
}
