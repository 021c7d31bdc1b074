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

//! The structured records recovered from a report.
//!
//! One [`Project`] per report section, one [`Dependency`] per entry line.
//! Records hold [`TerminalSymbol`]s rather than bare strings so the exact
//! source offsets stay available to callers (error overlays, report
//! rewriting).

use crate::lex::TerminalSymbol;
use std::fmt;

/// One report section: a project and the dependencies declared under it.
///
/// `dependencies` preserves report order and omits entries marked as
/// repeats; the parser keeps the full flat list (repeats included)
/// separately.
///
/// # Examples
///
/// ```
/// use deptree_core::lex::{TerminalSymbol, TokenKind};
/// use deptree_core::Project;
///
/// let name = TerminalSymbol::new(TokenKind::Name, "demo", 9, 13);
/// let project = Project::new(name);
/// assert_eq!(project.name_literal(), "demo");
/// assert!(project.dependencies.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    /// The project name symbol. May carry a hyphenated module suffix
    /// (`demo-lib`) concatenated by the parser.
    pub name: TerminalSymbol,
    /// First-occurrence dependencies in report order.
    pub dependencies: Vec<Dependency>,
}

impl Project {
    /// Create a project with no dependencies yet.
    #[inline]
    pub fn new(name: TerminalSymbol) -> Self {
        Self {
            name,
            dependencies: Vec::new(),
        }
    }

    /// The project name text.
    #[inline]
    pub fn name_literal(&self) -> &str {
        &self.name.literal
    }

    /// Dependencies declared under the given configuration, in report
    /// order.
    pub fn dependencies_in<'a>(
        &'a self,
        configuration: &'a str,
    ) -> impl Iterator<Item = &'a Dependency> + 'a {
        self.dependencies
            .iter()
            .filter(move |d| d.configuration.literal == configuration)
    }
}

/// One parsed dependency entry.
///
/// `version` is the requested version as printed; `resolved_version` is
/// present only when the report showed an override arrow
/// (`1.0 -> 2.0`). An entry annotated with `(*)` keeps
/// `resolved_version = None`; annotation and override are mutually
/// exclusive in the report grammar. `repeat` is true when the entry's
/// tree-drawing prefix contained `|`, marking a reference that was already
/// expanded earlier in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dependency {
    /// Name of the project this entry was declared under.
    pub project: String,
    /// The configuration keyword the entry appeared beneath.
    pub configuration: TerminalSymbol,
    /// The coordinate string, e.g. `com.example:lib`, with the trailing
    /// separator stripped.
    pub name: TerminalSymbol,
    /// The requested version, when the line carries one.
    pub version: Option<TerminalSymbol>,
    /// The resolved version, when the line carries an override arrow.
    /// Always accompanied by `version`.
    pub resolved_version: Option<TerminalSymbol>,
    /// True for continuation/already-expanded references.
    pub repeat: bool,
}

impl Dependency {
    /// The coordinate text.
    #[inline]
    pub fn coordinate(&self) -> &str {
        &self.name.literal
    }

    /// Returns `true` when resolution changed the version.
    #[inline]
    pub fn is_override(&self) -> bool {
        self.resolved_version.is_some()
    }

    /// The version that resolution actually selected: the resolved version
    /// if the entry was overridden, otherwise the requested one.
    pub fn effective_version(&self) -> Option<&str> {
        self.resolved_version
            .as_ref()
            .or(self.version.as_ref())
            .map(|v| v.literal.as_str())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.literal)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version.literal)?;
        }
        if let Some(resolved) = &self.resolved_version {
            write!(f, " -> {}", resolved.literal)?;
        }
        Ok(())
    }
}
