//! cls-extended - build-time responsive class expansion
//!
//! Rewrites `tw("base", { md: "..." })` call sites in JS/TS/JSX/TSX sources
//! into static class strings such as `"base md:..."`, with a source map back
//! to the original text. Used as a library by bundler hosts, or through the
//! `cls-extended` CLI and its MCP server.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, build, transform, init, serve)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, generator, rewriter and the transform entry point
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
