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

//! The report tokenizer.
//!
//! [`Scanner`] turns the raw character stream of a dependency report into
//! [`TerminalSymbol`]s. Classification is purely lexical: the scanner knows
//! nothing about projects or dependency entries. Runs (whitespace,
//! identifiers, numbers, line terminators) are scanned maximal-munch via the
//! reader's one-character pushback.
//!
//! The load-bearing classification is the line-terminator run: exactly one
//! terminator is a [`TokenKind::Newline`], two or more are a
//! [`TokenKind::SectionBreak`], the parser's primary signal for project
//! boundaries.

use crate::lex::reader::CharReader;
use crate::lex::token::{TerminalSymbol, TokenKind};
use crate::lex::vocabulary::ConfigurationVocabulary;
use std::io::Read;

/// The project-section keyword, reclassified on exact match.
const PROJECT_KEYWORD: &str = "Project";

#[inline]
fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[inline]
fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Maps a member of the fixed punctuation set to its kind.
#[inline]
fn punctuation_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '>' => TokenKind::Gt,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        '|' => TokenKind::Pipe,
        '\\' => TokenKind::Backslash,
        '\'' => TokenKind::Quote,
        ',' => TokenKind::Comma,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '*' => TokenKind::Star,
        _ => return None,
    };
    Some(kind)
}

/// Tokenizer for Gradle dependency reports.
///
/// `scan()` is callable repeatedly until it returns the
/// [`TokenKind::Eof`] sentinel; thereafter it keeps returning it at the
/// same offset. Unrecognized characters come back as
/// [`TokenKind::Illegal`] tokens instead of aborting; whether they matter
/// is the parser's decision.
///
/// # Examples
///
/// ```
/// use deptree_core::lex::{Scanner, TokenKind};
/// use std::io::Cursor;
///
/// let mut scanner = Scanner::new(Cursor::new("+--- junit:junit:4"));
///
/// assert_eq!(scanner.scan().kind, TokenKind::Plus);
/// assert_eq!(scanner.scan().kind, TokenKind::Minus);
/// assert_eq!(scanner.scan().kind, TokenKind::Minus);
/// assert_eq!(scanner.scan().kind, TokenKind::Minus);
/// assert_eq!(scanner.scan().kind, TokenKind::Whitespace);
///
/// let sym = scanner.scan();
/// assert_eq!(sym.kind, TokenKind::Name);
/// assert_eq!(sym.literal, "junit");
/// assert_eq!((sym.start, sym.end), (5, 10));
/// ```
pub struct Scanner<R: Read> {
    reader: CharReader<R>,
    vocabulary: ConfigurationVocabulary,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner with the default configuration vocabulary.
    pub fn new(reader: R) -> Self {
        Self::with_vocabulary(reader, ConfigurationVocabulary::default())
    }

    /// Create a scanner with a caller-supplied configuration vocabulary.
    pub fn with_vocabulary(reader: R, vocabulary: ConfigurationVocabulary) -> Self {
        Self {
            reader: CharReader::new(reader),
            vocabulary,
        }
    }

    /// The vocabulary identifiers are classified against.
    #[inline]
    pub fn vocabulary(&self) -> &ConfigurationVocabulary {
        &self.vocabulary
    }

    /// Scan the next terminal symbol.
    pub fn scan(&mut self) -> TerminalSymbol {
        let start = self.reader.offset();
        let ch = match self.reader.read() {
            Some(ch) => ch,
            None => return TerminalSymbol::eof(start),
        };

        if is_whitespace(ch) {
            self.reader.unread(ch);
            return self.scan_whitespace();
        }
        if ch.is_ascii_alphabetic() {
            self.reader.unread(ch);
            return self.scan_ident();
        }
        if ch.is_ascii_digit() {
            self.reader.unread(ch);
            return self.scan_number();
        }
        if let Some(kind) = punctuation_kind(ch) {
            return TerminalSymbol::new(kind, ch, start, self.reader.offset());
        }
        if is_line_terminator(ch) {
            self.reader.unread(ch);
            return self.scan_terminators();
        }

        TerminalSymbol::new(TokenKind::Illegal, ch, start, self.reader.offset())
    }

    /// Scan a run of spaces and tabs.
    fn scan_whitespace(&mut self) -> TerminalSymbol {
        let start = self.reader.offset();
        let mut literal = String::new();
        while let Some(ch) = self.reader.read() {
            if is_whitespace(ch) {
                literal.push(ch);
            } else {
                self.reader.unread(ch);
                break;
            }
        }
        TerminalSymbol::new(TokenKind::Whitespace, literal, start, self.reader.offset())
    }

    /// Scan a letter run and reclassify keywords on completion.
    fn scan_ident(&mut self) -> TerminalSymbol {
        let start = self.reader.offset();
        let mut literal = String::new();
        while let Some(ch) = self.reader.read() {
            if ch.is_ascii_alphabetic() {
                literal.push(ch);
            } else {
                self.reader.unread(ch);
                break;
            }
        }

        let kind = if literal == PROJECT_KEYWORD {
            TokenKind::ProjectKeyword
        } else if self.vocabulary.contains(&literal) {
            TokenKind::Configuration
        } else {
            TokenKind::Name
        };
        TerminalSymbol::new(kind, literal, start, self.reader.offset())
    }

    /// Scan a digit run.
    fn scan_number(&mut self) -> TerminalSymbol {
        let start = self.reader.offset();
        let mut literal = String::new();
        while let Some(ch) = self.reader.read() {
            if ch.is_ascii_digit() {
                literal.push(ch);
            } else {
                self.reader.unread(ch);
                break;
            }
        }
        TerminalSymbol::new(TokenKind::Number, literal, start, self.reader.offset())
    }

    /// Scan a run of line terminators.
    ///
    /// `\n`, `\r\n`, and a lone `\r` each count as one terminator. One
    /// terminator is a line break; two or more are a section break.
    fn scan_terminators(&mut self) -> TerminalSymbol {
        let start = self.reader.offset();
        let mut literal = String::new();
        let mut count = 0usize;
        loop {
            match self.reader.read() {
                Some('\n') => {
                    literal.push('\n');
                    count += 1;
                }
                Some('\r') => {
                    literal.push('\r');
                    count += 1;
                    match self.reader.read() {
                        Some('\n') => literal.push('\n'),
                        Some(other) => self.reader.unread(other),
                        None => {}
                    }
                }
                Some(other) => {
                    self.reader.unread(other);
                    break;
                }
                None => break,
            }
        }

        let kind = if count == 1 {
            TokenKind::Newline
        } else {
            TokenKind::SectionBreak
        };
        TerminalSymbol::new(kind, literal, start, self.reader.offset())
    }
}
