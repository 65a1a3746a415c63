use std::collections::{HashMap, HashSet};

use crate::{
    error::ToonError,
    infer::infer_value,
    tokenizer::{tokenize, Token},
    types::{Document, Node, ObjectNode},
    validator::{self, check_duplicate_key, validate_key},
};

/// An open object whose children are still being collected. The stack of
/// these replaces any single mutable "current parent" reference: a dedent can
/// close several levels at once, and each close hands ownership of the
/// finished node to the level below.
struct PendingObject {
    key:      String,
    children: Vec<Node>,
}

/// Parses TOON text into a `Document`. Runs the validator first; any
/// validator failure aborts before structural work begins. No partial result
/// is ever returned on error.
pub fn parse(input: &str) -> Result<Document, ToonError> {
    validator::validate(input)?;

    let tokens = tokenize(input);

    let mut doc = Document::default();
    let mut stack: Vec<PendingObject> = Vec::new();
    let mut last_indent = 0usize;

    // Keys seen per indentation level, reset whenever a new top-level object
    // starts (each top-level object is a fresh namespace).
    let mut keys_at_level: HashMap<usize, HashSet<String>> = HashMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let indent = token.indent;
        let line = token.text.as_str();

        // Close finished objects before classifying the line.
        while indent < last_indent {
            collapse(&mut stack, &mut doc);
            last_indent -= 1;
        }

        // Case 1 — object declaration: `key:`
        if line.ends_with(':') && !line.contains('[') {
            let key = line.strip_suffix(':').unwrap_or(line).to_string();
            validate_key(&key, token.line)?;

            if indent == 0 {
                while !stack.is_empty() {
                    collapse(&mut stack, &mut doc);
                }
                if doc.get(&key).is_some() {
                    return Err(ToonError::DuplicateKey { key, line: token.line });
                }

                keys_at_level.clear();
                stack.push(PendingObject { key, children: Vec::new() });
                last_indent = 1;
            } else {
                let level = keys_at_level.entry(indent).or_default();
                check_duplicate_key(level, &key, token.line)?;
                level.insert(key.clone());

                if stack.is_empty() {
                    return Err(ToonError::InvalidSyntax {
                        msg:  format!("nested object {:?} found without a parent object", key),
                        line: token.line,
                    });
                }
                stack.push(PendingObject { key, children: Vec::new() });
                last_indent = indent + 1;
            }

            i += 1;
            continue;
        }

        // Case 2 — scalar property: `key: value`
        if line.contains(':') && !line.contains('[') && !line.contains('{') {
            let (raw_key, raw_value) = line.split_once(':').unwrap_or((line, ""));
            let key = raw_key.trim().to_string();
            validate_key(&key, token.line)?;

            let level = keys_at_level.entry(indent).or_default();
            check_duplicate_key(level, &key, token.line)?;
            level.insert(key.clone());

            let value = infer_value(raw_value);
            if let Some(parent) = stack.last_mut() {
                parent.children.push(Node::Property { key, value });
            }

            last_indent = indent;
            i += 1;
            continue;
        }

        // Case 3 — simple list: `key[n]: a,b,c`
        if validator::is_simple_list(line) {
            let key = line[..line.find('[').unwrap_or(line.len())].to_string();
            validate_key(&key, token.line)?;

            let level = keys_at_level.entry(indent).or_default();
            check_duplicate_key(level, &key, token.line)?;
            level.insert(key.clone());

            let tail = line.split_once("]:").map(|(_, t)| t).unwrap_or("");
            let items: Vec<String> = tail.split(',').map(|item| item.trim().to_string()).collect();

            if let Some(parent) = stack.last_mut() {
                parent.children.push(Node::List { key, items });
            }

            last_indent = indent;
            i += 1;
            continue;
        }

        // Case 4 — object-list header: `key[n]{h1,h2}:`
        if validator::is_object_list(line) {
            let key = line[..line.find('[').unwrap_or(line.len())].to_string();
            validate_key(&key, token.line)?;

            let level = keys_at_level.entry(indent).or_default();
            check_duplicate_key(level, &key, token.line)?;
            level.insert(key.clone());

            let headers = parse_schema_headers(line, token.line)?;
            let (rows, next) = consume_rows(&tokens, i + 1, indent, headers.len())?;

            if let Some(parent) = stack.last_mut() {
                parent.children.push(Node::ObjectList { key, headers, rows });
            }

            last_indent = indent;
            i = next;
            continue;
        }

        // Anything else is a data row already consumed above, or a line the
        // validator's looser shape check let through. Skip it.
        i += 1;
    }

    while !stack.is_empty() {
        collapse(&mut stack, &mut doc);
    }

    Ok(doc)
}

/// Pops the innermost open object and attaches it to its parent, or to the
/// document roots when it was a top-level object.
fn collapse(stack: &mut Vec<PendingObject>, doc: &mut Document) {
    if let Some(finished) = stack.pop() {
        let node = ObjectNode {
            key:      finished.key,
            children: finished.children,
        };
        match stack.last_mut() {
            Some(parent) => parent.children.push(Node::Object(node)),
            None => doc.roots.push(node),
        }
    }
}

fn parse_schema_headers(line: &str, line_no: usize) -> Result<Vec<String>, ToonError> {
    let schema = line
        .split_once('{')
        .and_then(|(_, rest)| rest.split_once('}'))
        .map(|(schema, _)| schema)
        .unwrap_or("");

    let headers: Vec<String> = schema.split(',').map(|h| h.trim().to_string()).collect();
    if headers.is_empty() || headers.iter().any(|h| h.is_empty()) {
        return Err(ToonError::InvalidSyntax {
            msg:  "object list schema cannot be empty".to_string(),
            line: line_no,
        });
    }
    Ok(headers)
}

/// Greedily consumes all immediately-following, more-deeply-indented tokens
/// that contain a comma as data rows, enforcing the header column count on
/// each. Returns the rows and the index of the first unconsumed token.
fn consume_rows(
    tokens: &[Token],
    start: usize,
    header_indent: usize,
    expected: usize,
) -> Result<(Vec<Vec<String>>, usize), ToonError> {
    let mut rows = Vec::new();
    let mut j = start;

    while j < tokens.len() {
        let row_token = &tokens[j];
        if row_token.indent <= header_indent {
            break;
        }

        if row_token.text.contains(',') {
            let row: Vec<String> = row_token
                .text
                .split(',')
                .map(|cell| cell.trim().to_string())
                .collect();

            if row.len() != expected {
                return Err(ToonError::SchemaMismatch {
                    line:     row_token.line,
                    expected,
                    actual:   row.len(),
                });
            }
            rows.push(row);
        }

        j += 1;
    }

    Ok((rows, j))
}
