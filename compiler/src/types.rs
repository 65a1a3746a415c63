use serde::Serialize;

use crate::naming::kotlin_quote;

/// A scalar value classified by type inference. Every raw TOON value maps to
/// exactly one of these; unparseable numerics degrade to `Str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
}

impl Scalar {
    /// The Kotlin type name this scalar maps to.
    pub fn kotlin_type(&self) -> &'static str {
        match self {
            Scalar::Bool(_)   => "Boolean",
            Scalar::Int(_)    => "Int",
            Scalar::Long(_)   => "Long",
            Scalar::Float(_)  => "Float",
            Scalar::Double(_) => "Double",
            Scalar::Str(_)    => "String",
        }
    }

    /// True for Kotlin primitive types (everything except `String`).
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Scalar::Str(_))
    }

    /// True when the source value was empty or the literal `null`.
    /// Auto-nullability keys off this.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Scalar::Str(s) if s.is_empty())
    }

    /// A non-null Kotlin default expression for this scalar's type.
    pub fn type_default(&self) -> &'static str {
        match self {
            Scalar::Bool(_)   => "false",
            Scalar::Int(_)    => "0",
            Scalar::Long(_)   => "0L",
            Scalar::Float(_)  => "0f",
            Scalar::Double(_) => "0.0",
            Scalar::Str(_)    => "\"\"",
        }
    }

    /// The origin value rendered as a Kotlin literal.
    pub fn literal(&self) -> String {
        match self {
            Scalar::Bool(v)   => v.to_string(),
            Scalar::Int(v)    => v.to_string(),
            Scalar::Long(v)   => format!("{}L", v),
            // Formatted as f32; widening to f64 first would distort the
            // decimal digits (3.14f32 as f64 displays as 3.140000104904175).
            Scalar::Float(v)  => {
                if v.fract() == 0.0 {
                    format!("{:.1}f", v)
                } else {
                    format!("{}f", v)
                }
            }
            Scalar::Double(v) => decimal_repr(*v),
            Scalar::Str(v)    => kotlin_quote(v),
        }
    }
}

// `5.0f64` displays as "5"; Kotlin double literals need the point.
fn decimal_repr(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

/// One node of the TOON AST. The parser produces these; the generator
/// consumes them without mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// `key: value`
    Property { key: String, value: Scalar },

    /// `key:` followed by deeper-indented children
    Object(ObjectNode),

    /// `key[n]: a,b,c` — items stay raw strings by design
    List { key: String, items: Vec<String> },

    /// `key[n]{h1,h2}:` followed by comma-separated data rows
    ObjectList {
        key:     String,
        headers: Vec<String>,
        rows:    Vec<Vec<String>>,
    },
}

impl Node {
    /// The original, un-transformed TOON key of this node.
    pub fn key(&self) -> &str {
        match self {
            Node::Property { key, .. }
            | Node::List { key, .. }
            | Node::ObjectList { key, .. } => key,
            Node::Object(obj) => &obj.key,
        }
    }
}

/// A nested structure: `key:` plus its children in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectNode {
    pub key:      String,
    pub children: Vec<Node>,
}

impl ObjectNode {
    pub fn new(key: impl Into<String>) -> Self {
        ObjectNode { key: key.into(), children: Vec::new() }
    }
}

/// Parse result: one `ObjectNode` per zero-indent `key:` declaration, in
/// source order. Keys are unique by construction.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub roots: Vec<ObjectNode>,
}

impl Document {
    pub fn get(&self, key: &str) -> Option<&ObjectNode> {
        self.roots.iter().find(|node| node.key == key)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
