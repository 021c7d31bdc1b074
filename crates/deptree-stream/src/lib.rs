// Dweve DepTree - Gradle Dependency Report Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streaming parser for Gradle dependency reports.
//!
//! This crate recovers structured [`Project`] records from the tree-drawn
//! text a `gradle dependencies` invocation prints. Projects are yielded one
//! at a time: the parser pulls tokens from `deptree-core`'s scanner on
//! demand, looks ahead where the report grammar is ambiguous, and pushes
//! tokens back when a lookahead guess was wrong.
//!
//! # Basic Usage
//!
//! ```rust
//! use deptree_stream::ReportParser;
//! use std::io::Cursor;
//!
//! let report = "\
//! Project ':demo'
//!
//! api - API dependencies for source set 'main'.
//! +--- com.example:lib:1.2.3
//! \\--- junit:junit:4 -> 5
//! ";
//!
//! let mut parser = ReportParser::new(Cursor::new(report));
//! let project = parser.parse_next_project().unwrap().unwrap();
//!
//! assert_eq!(project.name_literal(), "demo");
//! assert_eq!(project.dependencies.len(), 2);
//! assert_eq!(project.dependencies[0].coordinate(), "com.example:lib");
//!
//! // Nothing left.
//! assert!(parser.parse_next_project().unwrap().is_none());
//! ```
//!
//! # Iterator Interface
//!
//! [`ReportParser`] also implements `Iterator<Item = ParseResult<Project>>`
//! so a whole report can be drained with standard combinators:
//!
//! ```rust
//! use deptree_stream::ReportParser;
//! use std::io::Cursor;
//!
//! let report = "Project ':a'\n\napi - x\n+--- g:a:1\n\nProject ':b'\n";
//! let parser = ReportParser::new(Cursor::new(report));
//!
//! let names: Vec<String> = parser
//!     .filter_map(|p| p.ok())
//!     .map(|p| p.name_literal().to_string())
//!     .collect();
//! assert_eq!(names, vec!["a", "b"]);
//! ```
//!
//! # Repeats and the Flat List
//!
//! Entries whose tree prefix contains `|` are references already expanded
//! earlier in the tree. They are omitted from each project's dependency
//! list but retained in the parser's flat accumulator:
//!
//! ```rust
//! use deptree_stream::ReportParser;
//! use std::io::Cursor;
//!
//! let report = "\
//! Project ':demo'
//!
//! api - API dependencies.
//! +--- com.example:top:1.0
//! |    \\--- com.example:inner:0.9 (*)
//! ";
//!
//! let mut parser = ReportParser::new(Cursor::new(report));
//! let project = parser.parse_next_project().unwrap().unwrap();
//!
//! assert_eq!(project.dependencies.len(), 1);
//! assert_eq!(parser.all_dependencies().len(), 2);
//! assert!(parser.all_dependencies()[1].repeat);
//! ```
//!
//! # Diagnostics
//!
//! The parser emits `tracing` events at its decision points (section
//! boundaries found, lookahead outcomes, blocks skipped). Install a
//! subscriber to see them; the library never installs one itself.

mod buffer;
mod error;
mod parser;

pub use buffer::TokenBuffer;
pub use error::{ParseError, ParseResult};
pub use parser::ReportParser;

/// Re-export core types for convenience.
pub use deptree_core::{ConfigurationVocabulary, Dependency, Project};
