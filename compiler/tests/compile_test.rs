#![cfg(test)]

use toon_kotlin_compiler::{
    compile_toon, generate, infer_value, parse, tokenizer::tokenize, GenerationConfig, Node,
    Scalar, ToonError,
};

#[test]
fn test_parse_end_to_end() {
    let input = "user:\n  name: Alice\n  age: 30\n  tags[2]: admin,active\n";

    let doc = parse(input).expect("parse failed");
    assert_eq!(doc.len(), 1);

    let user = doc.get("user").expect("missing top-level object");
    assert_eq!(user.key, "user");
    assert_eq!(user.children.len(), 3);

    assert_eq!(
        user.children[0],
        Node::Property { key: "name".into(), value: Scalar::Str("Alice".into()) }
    );
    assert_eq!(
        user.children[1],
        Node::Property { key: "age".into(), value: Scalar::Int(30) }
    );
    assert_eq!(
        user.children[2],
        Node::List { key: "tags".into(), items: vec!["admin".into(), "active".into()] }
    );

    // Default configuration: constructor-style, non-nullable, no framework.
    let units = generate(&doc, &GenerationConfig::default());
    assert_eq!(units.len(), 1);
    let user_unit = &units["User"];
    assert!(user_unit.contains("data class User("));
    assert!(user_unit.contains("val name: String"));
    assert!(user_unit.contains("val age: Int"));
    assert!(user_unit.contains("val tags: List<String>"));
}

#[test]
fn test_one_root_per_zero_indent_declaration() {
    let input = "alpha:\n  x: 1\nbeta:\n  y: 2\ngamma:\n  z: 3\n";
    let doc = parse(input).expect("parse failed");
    assert_eq!(doc.len(), 3);
    for key in ["alpha", "beta", "gamma"] {
        assert!(doc.get(key).is_some(), "missing root {:?}", key);
    }
}

#[test]
fn test_tokenize_is_deterministic() {
    let input = "a:\n\n  b: 1\n  c[2]: x,y\n";
    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn test_infer_value_table() {
    assert_eq!(infer_value("true"), Scalar::Bool(true));
    assert_eq!(infer_value("42"), Scalar::Int(42));
    assert_eq!(infer_value("3.14"), Scalar::Double(3.14));
    assert_eq!(infer_value("42L"), Scalar::Long(42));
    assert_eq!(infer_value(""), Scalar::Str(String::new()));
    assert_eq!(infer_value("hello"), Scalar::Str("hello".into()));
}

#[test]
fn test_duplicate_key_error() {
    let err = parse("a:\n  x: 1\n  x: 2\n").unwrap_err();
    match err {
        ToonError::DuplicateKey { key, line } => {
            assert_eq!(key, "x");
            assert_eq!(line, 3);
        }
        other => panic!("expected DuplicateKey, got {:?}", other),
    }
}

#[test]
fn test_schema_mismatch_error() {
    let err = parse("root:\n  items[2]{id,name}:\n    1,foo,extra\n").unwrap_err();
    match err {
        ToonError::SchemaMismatch { expected, actual, .. } => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
}

#[test]
fn test_invalid_indentation_error() {
    let err = parse("a:\n   x: 1\n").unwrap_err();
    assert!(matches!(err, ToonError::InvalidIndentation { line: 2, .. }));
}

#[test]
fn test_empty_input_error() {
    assert!(matches!(parse(""), Err(ToonError::EmptyInput)));
}

#[test]
fn test_nested_object_layouts() {
    let input = "a:\n  b:\n    c: 1\n";

    // Separate units: A references B by type name, B is its own unit.
    let units = compile_toon(input, &GenerationConfig::default()).unwrap();
    assert_eq!(units.len(), 2);
    assert!(units["A"].contains("val b: B"));
    assert!(units["B"].contains("data class B("));

    // Inline layout: one unit, B nested inside A.
    let config = GenerationConfig { inner_classes: true, ..Default::default() };
    let units = compile_toon(input, &config).unwrap();
    assert_eq!(units.len(), 1);
    assert!(units["A"].contains("val b: B"));
    assert!(units["A"].contains("    data class B("));
}

#[test]
fn test_record_collection_generation() {
    let input = "plan:\n  hikes[1]{id,distance}:\n    h1,5.2\n";

    let doc = parse(input).unwrap();
    match &doc.get("plan").unwrap().children[0] {
        Node::ObjectList { headers, rows, .. } => {
            assert_eq!(headers, &vec!["id".to_string(), "distance".to_string()]);
            assert_eq!(rows, &vec![vec!["h1".to_string(), "5.2".to_string()]]);
        }
        other => panic!("expected object list, got {:?}", other),
    }

    let units = generate(&doc, &GenerationConfig::default());
    assert!(units["Plan"].contains("val hikes: List<Hike>"));
    assert!(units["Hike"].contains("val id: String"));
    assert!(units["Hike"].contains("val distance: Double"));
}

#[test]
fn test_generation_is_pure_over_ast_and_config() {
    let doc = parse("user:\n  name: Alice\n").unwrap();
    let config = GenerationConfig::default();
    assert_eq!(generate(&doc, &config), generate(&doc, &config));

    // A different configuration over the same AST is independent.
    let nullable = GenerationConfig {
        nullable: toon_kotlin_compiler::NullableMode::Nullable,
        ..Default::default()
    };
    assert!(generate(&doc, &nullable)["User"].contains("String?"));
    assert!(!generate(&doc, &config)["User"].contains("String?"));
}
