//! toon-kotlin-compiler
//!
//! This crate implements:
//!  1) A tokenizer + validator + parser for TOON (Tree Object-Oriented
//!     Notation) text,
//!  2) Scalar type inference with string fallback for ambiguous literals,
//!  3) A policy-driven Kotlin class generator (`generate` → one source blob
//!     per class, or nested inner-class layouts),
//!  4) The generation configuration model (`GenerationConfig`), and
//!  5) Error types (`ToonError`).
//!
//! The pipeline is strictly one-directional:
//! text → tokens → (validated) → AST → generated-class-text map.

pub mod annotations;
pub mod compiler;
pub mod config;
pub mod error;
pub mod generator;
pub mod infer;
pub mod naming;
pub mod parser;
pub mod tokenizer;
pub mod types;
pub mod validator;

pub use annotations::AnnotationFramework;
pub use compiler::{check_toon, compile_toon};
pub use config::{DefaultValueStrategy, GenerationConfig, NullableMode, Visibility};
pub use error::ToonError;
pub use generator::generate;
pub use infer::infer_value;
pub use parser::parse;
pub use types::{Document, Node, ObjectNode, Scalar};
pub use validator::validate;
