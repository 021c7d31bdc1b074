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

//! Lexical analysis for Gradle dependency reports.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the [`TerminalSymbol`] unit produced by the
//!   scanner
//! - [`reader`] - Character-level reading with offset tracking and
//!   one-character pushback
//! - [`vocabulary`] - The closed set of configuration names recognized as
//!   keywords
//! - [`scanner`] - The tokenizer itself
//!
//! # Examples
//!
//! ```
//! use deptree_core::lex::{Scanner, TokenKind};
//! use std::io::Cursor;
//!
//! let mut scanner = Scanner::new(Cursor::new("api\n+--- junit"));
//!
//! let sym = scanner.scan();
//! assert_eq!(sym.kind, TokenKind::Configuration);
//! assert_eq!(sym.literal, "api");
//!
//! let sym = scanner.scan();
//! assert_eq!(sym.kind, TokenKind::Newline);
//! ```
//!
//! The scanner never fails: unrecognized characters come back as
//! [`TokenKind::Illegal`] tokens and the decision whether they are fatal is
//! deferred to the parser.

pub mod reader;
pub mod scanner;
pub mod token;
pub mod vocabulary;

pub use reader::CharReader;
pub use scanner::Scanner;
pub use token::{TerminalSymbol, TokenKind};
pub use vocabulary::ConfigurationVocabulary;
