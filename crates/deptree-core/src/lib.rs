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

//! Tokenizer and data model for Gradle dependency reports.
//!
//! This crate is the leaf layer of DepTree: it converts the raw character
//! stream of a `gradle dependencies` report into classified terminal symbols
//! and defines the record types the report parser assembles from them.
//!
//! # Lexical Analysis
//!
//! The [`lex`] module provides the complete lexical analysis infrastructure:
//!
//! - Token classification ([`lex::Scanner`]) with maximal-munch runs for
//!   whitespace, identifiers, numbers, and line terminators
//! - Character-offset tracking on every token ([`lex::TerminalSymbol`])
//! - The closed configuration-name vocabulary
//!   ([`lex::ConfigurationVocabulary`])
//!
//! The scanner has no knowledge of the report grammar; segmentation into
//! projects and dependency entries is the job of `deptree-stream`.
//!
//! # Data Model
//!
//! [`Project`] and [`Dependency`] record exactly what the report text says:
//! which project declared which coordinate, under which configuration, at
//! what requested and (if overridden) resolved version, and whether the
//! entry is a repeat reference already expanded elsewhere in the tree.

pub mod lex;
mod report;

pub use lex::{ConfigurationVocabulary, Scanner, TerminalSymbol, TokenKind};
pub use report::{Dependency, Project};
