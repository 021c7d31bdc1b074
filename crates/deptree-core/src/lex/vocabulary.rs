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

//! The configuration-name vocabulary.
//!
//! Identifiers in a report are reclassified as configuration keywords by
//! exact, case-sensitive membership in this closed set. The vocabulary is a
//! configuration surface: build setups that define custom configurations
//! extend it here instead of touching the scanner or parser.

use std::collections::BTreeSet;

/// The authoritative set of configuration names, e.g. `api` or
/// `runtimeOnly`.
///
/// Membership is checked against the exact identifier text; `API` or
/// `Api` would stay plain names.
///
/// # Examples
///
/// ```
/// use deptree_core::lex::ConfigurationVocabulary;
///
/// let vocab = ConfigurationVocabulary::default();
/// assert!(vocab.contains("api"));
/// assert!(vocab.contains("compileClasspath"));
/// assert!(!vocab.contains("API"));
///
/// // Custom configurations are additions to the vocabulary, not parser
/// // changes.
/// let vocab = ConfigurationVocabulary::new()
///     .with_configuration("integrationTestImplementation");
/// assert!(vocab.contains("integrationTestImplementation"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationVocabulary {
    names: BTreeSet<String>,
}

/// The configuration names every report is expected to use.
const DEFAULT_CONFIGURATIONS: &[&str] = &[
    "allMain",
    "annotationProcessor",
    "api",
    "apiElements",
    "compileClasspath",
    "compileOnly",
    "implementation",
    "runtimeClasspath",
    "runtimeOnly",
    "testCompileClasspath",
    "testImplementation",
    "testRuntimeClasspath",
    "testRuntimeOnly",
];

impl ConfigurationVocabulary {
    /// Create a vocabulary with the default configuration names.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vocabulary.
    ///
    /// Useful when a build defines configurations from scratch; with an
    /// empty vocabulary no identifier is ever reclassified.
    #[inline]
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add a single configuration name.
    ///
    /// # Examples
    ///
    /// ```
    /// use deptree_core::lex::ConfigurationVocabulary;
    ///
    /// let vocab = ConfigurationVocabulary::new().with_configuration("shadow");
    /// assert!(vocab.contains("shadow"));
    /// ```
    #[inline]
    pub fn with_configuration(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Add several configuration names at once.
    pub fn with_configurations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Exact, case-sensitive membership test.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the vocabulary in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The number of known configuration names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ConfigurationVocabulary {
    fn default() -> Self {
        Self {
            names: DEFAULT_CONFIGURATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
