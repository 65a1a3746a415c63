use indexmap::IndexMap;

use crate::{
    config::GenerationConfig,
    error::ToonError,
    generator::generate,
    parser::parse,
    types::Document,
};

/// Compile TOON text straight to generated Kotlin units.
/// Returns `Err(ToonError)` if validation or parsing fails; generation
/// itself has no input-dependent failure path.
pub fn compile_toon(
    text: &str,
    config: &GenerationConfig,
) -> Result<IndexMap<String, String>, ToonError> {
    let doc = parse(text)?;
    Ok(generate(&doc, config))
}

/// Parse TOON text into its AST without generating anything. Useful for
/// syntax checking and AST inspection.
pub fn check_toon(text: &str) -> Result<Document, ToonError> {
    parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_toon_end_to_end() {
        let units = compile_toon(
            "user:\n  name: Alice\n  age: 30\n",
            &GenerationConfig::default(),
        )
        .unwrap();
        assert_eq!(units.len(), 1);
        assert!(units["User"].contains("val name: String"));
    }

    #[test]
    fn test_compile_toon_propagates_parse_errors() {
        let err = compile_toon("a:\n  x: 1\n  x: 2\n", &GenerationConfig::default()).unwrap_err();
        assert!(matches!(err, ToonError::DuplicateKey { .. }));
    }

    #[test]
    fn test_check_toon() {
        let doc = check_toon("a:\n  x: 1\n").unwrap();
        assert_eq!(doc.len(), 1);
    }
}
