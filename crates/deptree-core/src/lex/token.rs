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

//! Token kinds and the terminal symbol type.
//!
//! A [`TerminalSymbol`] is one classified lexical unit: its kind, the exact
//! source text, and the half-open character range `[start, end)` it was read
//! from. Symbols are immutable once produced; the parser builds composite
//! symbols (dependency names and versions) by concatenating scanned ones.

use std::fmt;

/// The classification of a terminal symbol.
///
/// Kinds are partitioned by role: structural whitespace, literals,
/// tree-drawing punctuation, keyword-reclassified identifiers, the kinds the
/// parser assembles itself, and the end-of-stream / illegal sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// An unrecognized character. Never fatal at the lexical level; the
    /// parser decides whether it matters.
    Illegal,
    /// End of the character stream. Repeated scans keep returning it.
    Eof,

    /// A run of spaces and tabs.
    Whitespace,
    /// Exactly one line terminator.
    Newline,
    /// A run of two or more line terminators: the report's section break.
    SectionBreak,

    /// A run of ASCII letters that is neither `Project` nor a known
    /// configuration name.
    Name,
    /// A run of ASCII digits.
    Number,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `>`
    Gt,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `|`
    Pipe,
    /// `\`
    Backslash,
    /// `'`
    Quote,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `*`
    Star,

    /// The literal `Project`, heading a report section.
    ProjectKeyword,
    /// An identifier found in the configuration vocabulary, e.g. `api` or
    /// `runtimeOnly`.
    Configuration,

    /// A coordinate string assembled by the parser, e.g. `com.example:lib`.
    DependencyName,
    /// A version string assembled by the parser, e.g. `1.0-SNAPSHOT`.
    DependencyVersion,
}

impl TokenKind {
    /// Returns `true` for the tokens that begin a dependency entry's
    /// tree-drawing prefix (`+`, `|`, `\`).
    #[inline]
    pub const fn is_tree_drawing(self) -> bool {
        matches!(self, Self::Plus | Self::Pipe | Self::Backslash)
    }

    /// Returns `true` for tokens that terminate a report line.
    #[inline]
    pub const fn is_line_end(self) -> bool {
        matches!(self, Self::Newline | Self::SectionBreak | Self::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "illegal character",
            Self::Eof => "end of input",
            Self::Whitespace => "whitespace",
            Self::Newline => "line break",
            Self::SectionBreak => "section break",
            Self::Name => "name",
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Gt => "'>'",
            Self::Colon => "':'",
            Self::Dot => "'.'",
            Self::Pipe => "'|'",
            Self::Backslash => "'\\'",
            Self::Quote => "'''",
            Self::Comma => "','",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Star => "'*'",
            Self::ProjectKeyword => "'Project' keyword",
            Self::Configuration => "configuration name",
            Self::DependencyName => "dependency name",
            Self::DependencyVersion => "dependency version",
        };
        f.write_str(name)
    }
}

/// One classified lexical unit.
///
/// `literal` is the exact source text; `start` and `end` are character
/// offsets into the input forming the half-open range `[start, end)`. For
/// every symbol produced by the scanner, `literal` equals the input
/// substring between those offsets.
///
/// # Examples
///
/// ```
/// use deptree_core::lex::{TerminalSymbol, TokenKind};
///
/// let sym = TerminalSymbol::new(TokenKind::Name, "demo", 4, 8);
/// assert_eq!(sym.len(), 4);
/// assert!(!sym.is_eof());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalSymbol {
    /// The token classification.
    pub kind: TokenKind,
    /// The exact source text.
    pub literal: String,
    /// Start offset in characters (inclusive).
    pub start: usize,
    /// End offset in characters (exclusive).
    pub end: usize,
}

impl TerminalSymbol {
    /// Creates a new terminal symbol.
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            start,
            end,
        }
    }

    /// Creates the end-of-stream sentinel at the given offset.
    #[inline]
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", offset, offset)
    }

    /// Returns `true` if this is the end-of-stream sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The length of the symbol in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the symbol covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TerminalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}..{}", self.kind, self.literal, self.start, self.end)
    }
}
