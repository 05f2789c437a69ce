//! Front-end core of an embeddable ECMAScript 5.1 engine: the source
//! lexer, the literal table it interns into, and the numeric bitwise
//! opcode family of the bytecode interpreter.
//!
//! This crate is deliberately narrow. The parser/AST stage, the code
//! generator, the ECMA object model, the garbage-collected heap, the
//! public embedding API and per-platform I/O all live outside it — this
//! crate only describes what it hands to them (a token stream, a literal
//! table) and what it expects back from them (an opcode stream and a
//! variable environment for the bitwise family).

pub mod lexer;
pub mod literal;
pub mod opcode;
pub mod position;
pub mod profiler;
pub mod unicode;
pub mod utf8;
