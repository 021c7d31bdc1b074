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

//! Error types for the report parser.
//!
//! Every error is a structural grammar violation: an expected token was not
//! found at a position where the report grammar is unambiguous. Each
//! variant carries the offending literal and its character offset range.
//! Empty configurations ("no ... dependencies") and illegal characters the
//! grammar never inspects are not errors.
//!
//! # Examples
//!
//! ```rust
//! use deptree_stream::ReportParser;
//! use std::io::Cursor;
//!
//! // 'Project' without the required ':'.
//! let mut parser = ReportParser::new(Cursor::new("Project x"));
//! let err = parser.parse_next_project().unwrap_err();
//!
//! assert_eq!(err.literal(), "x");
//! let (start, end) = err.offsets();
//! assert_eq!(&"Project x"[start..end], "x");
//! ```

use deptree_core::TerminalSymbol;
use thiserror::Error;

/// Errors produced while parsing a dependency report.
///
/// All variants are fatal to the current parse: the parser makes no attempt
/// at partial recovery mid-entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The `Project` keyword was not followed by a colon.
    #[error("expected ':' after 'Project' keyword, found {literal:?} at {start}..{end}")]
    ExpectedColon {
        literal: String,
        start: usize,
        end: usize,
    },

    /// The colon after `Project` was not followed by a name.
    #[error("expected a project name after ':', found {literal:?} at {start}..{end}")]
    ExpectedProjectName {
        literal: String,
        start: usize,
        end: usize,
    },

    /// A configuration keyword (e.g. `api`, `runtimeOnly`) was expected.
    #[error("expected a configuration name, found {literal:?} at {start}..{end}")]
    ExpectedConfiguration {
        literal: String,
        start: usize,
        end: usize,
    },

    /// A dependency block announced entries but its first entry could not
    /// be read.
    #[error("expected a dependency coordinate, found {literal:?} at {start}..{end}")]
    ExpectedDependency {
        literal: String,
        start: usize,
        end: usize,
    },
}

impl ParseError {
    pub(crate) fn expected_colon(found: &TerminalSymbol) -> Self {
        Self::ExpectedColon {
            literal: found.literal.clone(),
            start: found.start,
            end: found.end,
        }
    }

    pub(crate) fn expected_project_name(found: &TerminalSymbol) -> Self {
        Self::ExpectedProjectName {
            literal: found.literal.clone(),
            start: found.start,
            end: found.end,
        }
    }

    pub(crate) fn expected_configuration(found: &TerminalSymbol) -> Self {
        Self::ExpectedConfiguration {
            literal: found.literal.clone(),
            start: found.start,
            end: found.end,
        }
    }

    pub(crate) fn expected_dependency(found: &TerminalSymbol) -> Self {
        Self::ExpectedDependency {
            literal: found.literal.clone(),
            start: found.start,
            end: found.end,
        }
    }

    /// The offending source text.
    pub fn literal(&self) -> &str {
        match self {
            Self::ExpectedColon { literal, .. }
            | Self::ExpectedProjectName { literal, .. }
            | Self::ExpectedConfiguration { literal, .. }
            | Self::ExpectedDependency { literal, .. } => literal,
        }
    }

    /// The half-open character range of the offending token.
    pub fn offsets(&self) -> (usize, usize) {
        match self {
            Self::ExpectedColon { start, end, .. }
            | Self::ExpectedProjectName { start, end, .. }
            | Self::ExpectedConfiguration { start, end, .. }
            | Self::ExpectedDependency { start, end, .. } => (*start, *end),
        }
    }
}

/// Result type for report parsing.
pub type ParseResult<T> = Result<T, ParseError>;
