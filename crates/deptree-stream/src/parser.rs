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

//! The report parser.
//!
//! [`ReportParser`] segments the token stream into projects,
//! dependency-configuration blocks, and individual entries. The grammar is
//! ambiguous at a few places (a hyphen can open a header underline, draw a
//! tree branch, join a coordinate, or begin an override arrow), so the
//! parser leans on two mechanisms:
//!
//! - **Lookahead with unwind.** Where a guess must be taken (is this
//!   underline followed by the next `Project` header?), tokens are consumed
//!   provisionally and fully restored through the pushback stack when the
//!   guess fails.
//! - **Offset adjacency.** A hyphen glued to the preceding token continues
//!   a coordinate or version literal (`slf4j-api`, `1.0-SNAPSHOT`); one
//!   separated by whitespace is arrow drawing. Token offsets make the
//!   distinction exact.
//!
//! One project section is scanned per [`parse_next_project`] call:
//!
//! ```text
//! AwaitingConfiguration -> ScanningEntries -> AwaitingConfiguration | SectionDone
//! ```
//!
//! terminating on a section break, end of input, or a detected next
//! `Project` header.
//!
//! [`parse_next_project`]: ReportParser::parse_next_project

use crate::buffer::TokenBuffer;
use crate::error::{ParseError, ParseResult};
use deptree_core::{
    ConfigurationVocabulary, Dependency, Project, Scanner, TerminalSymbol, TokenKind,
};
use std::io::Read;
use tracing::{debug, trace};

/// How a dependency block begins, as decided by the configuration scan.
enum BlockStart {
    /// A configuration keyword with entries following.
    Configuration(TerminalSymbol),
    /// A configuration with no entries ("no ... dependencies"); skipped.
    Empty,
    /// The current project section is finished.
    SectionDone,
}

/// Grow an assembled symbol by one scanned token.
fn extend_symbol(sym: &mut TerminalSymbol, tok: &TerminalSymbol) {
    if sym.literal.is_empty() {
        sym.start = tok.start;
    }
    sym.literal.push_str(&tok.literal);
    sym.end = tok.end;
}

/// Pull-based parser for Gradle dependency reports.
///
/// Owns its [`Scanner`], its pushback buffer, and the flat list of every
/// dependency encountered (repeats included). A parser is single-use per
/// input stream; there is no recovery after a structural error.
///
/// # Examples
///
/// ```rust
/// use deptree_stream::ReportParser;
/// use std::io::Cursor;
///
/// let report = "\
/// Project ':demo'
///
/// api - API dependencies for source set 'main'.
/// \\--- com.example:lib:1.0 (*)
/// ";
///
/// let mut parser = ReportParser::new(Cursor::new(report));
/// let project = parser.parse_next_project().unwrap().unwrap();
/// let dep = &project.dependencies[0];
///
/// assert_eq!(dep.coordinate(), "com.example:lib");
/// assert_eq!(dep.version.as_ref().unwrap().literal, "1.0");
/// assert!(dep.resolved_version.is_none());
/// ```
pub struct ReportParser<R: Read> {
    tokens: TokenBuffer<R>,
    all_dependencies: Vec<Dependency>,
    finished: bool,
}

impl<R: Read> ReportParser<R> {
    /// Create a parser with the default configuration vocabulary.
    pub fn new(reader: R) -> Self {
        Self::with_vocabulary(reader, ConfigurationVocabulary::default())
    }

    /// Create a parser with a caller-supplied configuration vocabulary.
    pub fn with_vocabulary(reader: R, vocabulary: ConfigurationVocabulary) -> Self {
        Self {
            tokens: TokenBuffer::new(Scanner::with_vocabulary(reader, vocabulary)),
            all_dependencies: Vec::new(),
            finished: false,
        }
    }

    /// Every dependency scanned so far, repeats included, in report order.
    #[inline]
    pub fn all_dependencies(&self) -> &[Dependency] {
        &self.all_dependencies
    }

    /// Consume the parser and take the flat dependency list.
    #[inline]
    pub fn into_all_dependencies(self) -> Vec<Dependency> {
        self.all_dependencies
    }

    /// Parse the next project section.
    ///
    /// Returns `Ok(None)` when the stream holds no further `Project`
    /// header; reaching end of input without one is not an error.
    pub fn parse_next_project(&mut self) -> ParseResult<Option<Project>> {
        let keyword = self.skip_to_project();
        if keyword.is_eof() {
            debug!("no further project section");
            return Ok(None);
        }

        let name = self.parse_project_name()?;
        self.skip_header_decoration();
        debug!(project = %name.literal, "parsing project section");

        let project_name = name.literal.clone();
        let dependencies = self.scan_dependencies(&project_name)?;

        Ok(Some(Project { name, dependencies }))
    }

    // ==================== token helpers ====================

    /// Next token, skipping whitespace and single line breaks.
    fn next_significant(&mut self) -> TerminalSymbol {
        loop {
            let tok = self.tokens.next();
            if !matches!(tok.kind, TokenKind::Whitespace | TokenKind::Newline) {
                return tok;
            }
        }
    }

    /// Next token, skipping whitespace only.
    fn next_nonblank(&mut self) -> TerminalSymbol {
        loop {
            let tok = self.tokens.next();
            if tok.kind != TokenKind::Whitespace {
                return tok;
            }
        }
    }

    /// Next token, skipping whitespace and the quotes around project names.
    fn next_skip_quotes(&mut self) -> TerminalSymbol {
        loop {
            let tok = self.tokens.next();
            if !matches!(tok.kind, TokenKind::Whitespace | TokenKind::Quote) {
                return tok;
            }
        }
    }

    /// True when a token carries identifier text.
    fn is_name_like(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Name | TokenKind::Configuration | TokenKind::ProjectKeyword
        )
    }

    /// True when a token introduces a project section.
    fn is_project_keyword(tok: &TerminalSymbol) -> bool {
        tok.kind == TokenKind::ProjectKeyword
            || (tok.kind == TokenKind::Name && tok.literal.eq_ignore_ascii_case("project"))
    }

    // ==================== section segmentation ====================

    /// Discard tokens until a project keyword or end of input.
    fn skip_to_project(&mut self) -> TerminalSymbol {
        loop {
            let tok = self.tokens.next();
            if Self::is_project_keyword(&tok) || tok.is_eof() {
                return tok;
            }
        }
    }

    /// Discard consecutive section breaks.
    fn skip_section_breaks(&mut self) {
        loop {
            let tok = self.tokens.next();
            if tok.kind != TokenKind::SectionBreak {
                self.tokens.push_back(tok);
                return;
            }
            trace!(start = tok.start, end = tok.end, "skipped section break");
        }
    }

    /// Parse the `':name'` part of a project header.
    ///
    /// A hyphen directly after the name followed by another name token is a
    /// module suffix and joins the project name (`demo-lib`); otherwise the
    /// hyphen is not part of the name and is pushed back.
    fn parse_project_name(&mut self) -> ParseResult<TerminalSymbol> {
        let colon = self.next_skip_quotes();
        if colon.kind != TokenKind::Colon {
            return Err(ParseError::expected_colon(&colon));
        }

        let tok = self.next_significant();
        if !Self::is_name_like(tok.kind) {
            return Err(ParseError::expected_project_name(&tok));
        }
        let mut name = TerminalSymbol::new(TokenKind::Name, tok.literal, tok.start, tok.end);

        let sep = self.next_significant();
        if sep.kind == TokenKind::Minus {
            let suffix = self.next_significant();
            if Self::is_name_like(suffix.kind) {
                name.literal.push_str(&sep.literal);
                name.literal.push_str(&suffix.literal);
                name.end = suffix.end;
            } else {
                self.tokens.push_back(suffix);
                self.tokens.push_back(sep);
            }
        } else {
            self.tokens.push_back(sep);
        }

        Ok(name)
    }

    /// Absorb the decoration after a project header: the closing quote,
    /// underline hyphens, and single line breaks. Stops (pushback) at the
    /// first section break or other token.
    fn skip_header_decoration(&mut self) {
        loop {
            let tok = self.tokens.next();
            match tok.kind {
                TokenKind::Quote
                | TokenKind::Minus
                | TokenKind::Newline
                | TokenKind::Whitespace => {}
                _ => {
                    self.tokens.push_back(tok);
                    return;
                }
            }
        }
    }

    /// Look ahead through a header underline for the next `Project`
    /// keyword.
    ///
    /// The pattern is hyphens, then a line break, then the keyword. Every
    /// provisionally consumed token is restored on success *and* failure,
    /// so the caller always resumes at the token it stood on.
    fn check_project_next(&mut self) -> bool {
        let mut consumed: Vec<TerminalSymbol> = Vec::new();
        let mut seen_rule = false;
        let mut seen_line_break = false;

        let matched = loop {
            let tok = self.tokens.next();
            let outcome = match tok.kind {
                TokenKind::Minus => {
                    seen_rule = true;
                    None
                }
                TokenKind::Whitespace => None,
                TokenKind::Newline if seen_rule => {
                    seen_line_break = true;
                    None
                }
                _ if seen_rule && seen_line_break && Self::is_project_keyword(&tok) => Some(true),
                _ => Some(false),
            };
            consumed.push(tok);
            if let Some(matched) = outcome {
                break matched;
            }
        };

        while let Some(tok) = consumed.pop() {
            self.tokens.push_back(tok);
        }
        debug!(matched, "project lookahead");
        matched
    }

    // ==================== dependency blocks ====================

    /// Scan every dependency block of the current section.
    fn scan_dependencies(&mut self, project: &str) -> ParseResult<Vec<Dependency>> {
        let mut dependencies = Vec::new();
        loop {
            let configuration = match self.scan_block_start()? {
                BlockStart::SectionDone => break,
                BlockStart::Empty => continue,
                BlockStart::Configuration(sym) => sym,
            };
            debug!(configuration = %configuration.literal, "scanning dependency block");

            loop {
                let dependency = self.scan_dependency(project, &configuration)?;
                trace!(entry = %dependency, repeat = dependency.repeat, "scanned entry");
                self.all_dependencies.push(dependency.clone());
                if !dependency.repeat {
                    dependencies.push(dependency);
                }
                if !self.entry_continues() {
                    break;
                }
            }

            if !self.more_tokens() {
                break;
            }
        }
        Ok(dependencies)
    }

    /// Decide how the next block begins: a configuration keyword, an empty
    /// configuration, or the end of the section.
    fn scan_block_start(&mut self) -> ParseResult<BlockStart> {
        self.skip_section_breaks();

        let tok = self.next_significant();
        if tok.is_eof() {
            return Ok(BlockStart::SectionDone);
        }
        if Self::is_project_keyword(&tok) {
            self.tokens.push_back(tok);
            return Ok(BlockStart::SectionDone);
        }
        if tok.kind == TokenKind::Minus {
            // Could be the underline of the next section header.
            self.tokens.push_back(tok);
            if self.check_project_next() {
                return Ok(BlockStart::SectionDone);
            }
            let tok = self.next_significant();
            return Err(ParseError::expected_configuration(&tok));
        }
        if tok.kind != TokenKind::Configuration {
            return Err(ParseError::expected_configuration(&tok));
        }

        if self.scan_to_entries() {
            Ok(BlockStart::Configuration(tok))
        } else {
            debug!(configuration = %tok.literal, "configuration has no dependencies");
            Ok(BlockStart::Empty)
        }
    }

    /// Skip the configuration's description up to its first entry.
    ///
    /// Returns `false` when the block has no entries: the literal sequence
    /// "no ... dependencies" was found, or a section break or end of input
    /// arrived before any tree-drawing token.
    fn scan_to_entries(&mut self) -> bool {
        let mut saw_no = false;
        loop {
            let tok = self.tokens.next();
            match tok.kind {
                TokenKind::Plus | TokenKind::Pipe | TokenKind::Backslash => {
                    self.tokens.push_back(tok);
                    return true;
                }
                kind if Self::is_name_like(kind) => {
                    if saw_no && tok.literal.eq_ignore_ascii_case("dependencies") {
                        return false;
                    }
                    saw_no = tok.literal.eq_ignore_ascii_case("no");
                }
                TokenKind::SectionBreak => {
                    self.tokens.push_back(tok);
                    return false;
                }
                TokenKind::Eof => return false,
                _ => {}
            }
        }
    }

    /// Decide whether the current block has another entry.
    ///
    /// A block ends at a section break or end of input; a lone line break
    /// followed immediately by end of input also ends it.
    fn entry_continues(&mut self) -> bool {
        let tok = self.next_nonblank();
        match tok.kind {
            TokenKind::SectionBreak => {
                self.tokens.push_back(tok);
                false
            }
            TokenKind::Eof => false,
            TokenKind::Newline => {
                let peek = self.next_nonblank();
                if peek.is_eof() {
                    false
                } else {
                    self.tokens.push_back(peek);
                    true
                }
            }
            _ => {
                self.tokens.push_back(tok);
                true
            }
        }
    }

    /// True when any token other than end of input remains.
    fn more_tokens(&mut self) -> bool {
        let tok = self.tokens.next();
        if tok.is_eof() {
            false
        } else {
            self.tokens.push_back(tok);
            true
        }
    }

    // ==================== dependency entries ====================

    /// Scan one dependency entry line.
    fn scan_dependency(
        &mut self,
        project: &str,
        configuration: &TerminalSymbol,
    ) -> ParseResult<Dependency> {
        let mut repeat = false;
        loop {
            let tok = self.next_significant();
            match tok.kind {
                TokenKind::Plus | TokenKind::Minus | TokenKind::Backslash => {}
                TokenKind::Pipe => repeat = true,
                _ => {
                    self.tokens.push_back(tok);
                    break;
                }
            }
        }

        let (name, version_head) = self.scan_coordinate()?;

        let mut version = None;
        let mut resolved_version = None;
        let mut annotated = false;
        if let Some(head) = version_head {
            let (sym, saw_annotation) = self.scan_version(head);
            version = Some(sym);
            annotated = saw_annotation;
        }

        // Annotation and override are mutually exclusive in the grammar.
        if !annotated {
            let tok = self.next_nonblank();
            if tok.kind == TokenKind::Minus {
                self.tokens.push_back(tok);
                let overridden = self.scan_override();
                match (version.is_some(), overridden) {
                    (true, Some(sym)) => resolved_version = Some(sym),
                    // An arrow with no requested version carries the
                    // entry's only version; an override is a change *from*
                    // something.
                    (false, Some(sym)) => version = Some(sym),
                    (_, None) => {}
                }
            } else {
                self.tokens.push_back(tok);
            }
        }

        Ok(Dependency {
            project: project.to_string(),
            configuration: configuration.clone(),
            name,
            version,
            resolved_version,
            repeat,
        })
    }

    /// Read the coordinate string up to its trailing separator.
    ///
    /// The separator is a colon immediately followed by a number; it is
    /// stripped from the stored literal and the number is handed back as
    /// the first token of the version. A colon followed by anything else
    /// stays part of the coordinate.
    fn scan_coordinate(
        &mut self,
    ) -> ParseResult<(TerminalSymbol, Option<TerminalSymbol>)> {
        let first = self.next_nonblank();
        if !Self::is_name_like(first.kind)
            && !matches!(first.kind, TokenKind::Number | TokenKind::Dot)
        {
            let err = ParseError::expected_dependency(&first);
            self.tokens.push_back(first);
            return Err(err);
        }

        let mut name =
            TerminalSymbol::new(TokenKind::DependencyName, String::new(), first.start, first.start);
        extend_symbol(&mut name, &first);
        let mut gap = false;
        let mut version_head = None;

        loop {
            let tok = self.tokens.next();
            match tok.kind {
                TokenKind::Whitespace => gap = true,
                TokenKind::Number | TokenKind::Dot => {
                    extend_symbol(&mut name, &tok);
                    gap = false;
                }
                kind if Self::is_name_like(kind) => {
                    extend_symbol(&mut name, &tok);
                    gap = false;
                }
                TokenKind::Minus => {
                    if gap {
                        // A free-standing hyphen starts the override arrow.
                        self.tokens.push_back(tok);
                        break;
                    }
                    extend_symbol(&mut name, &tok);
                }
                TokenKind::Colon => {
                    let peek = self.tokens.next();
                    if peek.kind == TokenKind::Number {
                        // Trailing separator: stripped, version begins.
                        version_head = Some(peek);
                        break;
                    }
                    extend_symbol(&mut name, &tok);
                    self.tokens.push_back(peek);
                    gap = false;
                }
                TokenKind::Eof => break,
                _ => {
                    self.tokens.push_back(tok);
                    break;
                }
            }
        }

        Ok((name, version_head))
    }

    /// Accumulate the requested-version literal.
    ///
    /// Stops at a line break or section break (pushed back), at a gapped
    /// hyphen (pushed back; the override scan takes over), or at a `(`
    /// opening a bracketed annotation, in which case the annotation is
    /// skipped and the caller leaves `resolved_version` unset.
    fn scan_version(&mut self, head: TerminalSymbol) -> (TerminalSymbol, bool) {
        let mut version = TerminalSymbol::new(
            TokenKind::DependencyVersion,
            String::new(),
            head.start,
            head.start,
        );
        extend_symbol(&mut version, &head);
        let mut gap = false;

        loop {
            let tok = self.tokens.next();
            match tok.kind {
                TokenKind::Whitespace => gap = true,
                TokenKind::Number | TokenKind::Dot | TokenKind::Name => {
                    extend_symbol(&mut version, &tok);
                    gap = false;
                }
                TokenKind::Minus => {
                    if gap {
                        self.tokens.push_back(tok);
                        return (version, false);
                    }
                    extend_symbol(&mut version, &tok);
                }
                TokenKind::LParen => {
                    self.tokens.push_back(tok);
                    self.skip_annotation();
                    return (version, true);
                }
                TokenKind::Eof => return (version, false),
                _ => {
                    self.tokens.push_back(tok);
                    return (version, false);
                }
            }
        }
    }

    /// Accumulate the resolved-version literal after an override arrow.
    ///
    /// Redundant `-`/`>` arrow tokens are skipped; a hyphen glued to the
    /// accumulated text belongs to the version (`2.0-rc1`). Interior
    /// bracketed annotations are skipped over.
    fn scan_override(&mut self) -> Option<TerminalSymbol> {
        let mut resolved: Option<TerminalSymbol> = None;
        loop {
            let tok = self.tokens.next();
            match tok.kind {
                TokenKind::Whitespace | TokenKind::Gt => {}
                TokenKind::Minus => {
                    if let Some(sym) = resolved.as_mut() {
                        if sym.end == tok.start {
                            extend_symbol(sym, &tok);
                        }
                    }
                }
                TokenKind::Number | TokenKind::Dot | TokenKind::Name => match resolved.as_mut() {
                    Some(sym) => extend_symbol(sym, &tok),
                    None => {
                        let mut sym = TerminalSymbol::new(
                            TokenKind::DependencyVersion,
                            String::new(),
                            tok.start,
                            tok.start,
                        );
                        extend_symbol(&mut sym, &tok);
                        resolved = Some(sym);
                    }
                },
                TokenKind::LParen => {
                    self.tokens.push_back(tok);
                    self.skip_annotation();
                }
                TokenKind::Eof => return resolved,
                _ => {
                    self.tokens.push_back(tok);
                    return resolved;
                }
            }
        }
    }

    /// Consume a balanced bracket annotation such as `(*)` or `(c)`.
    ///
    /// Annotations never span lines; a line break before the closing
    /// bracket ends the skip (pushed back).
    fn skip_annotation(&mut self) {
        let mut depth = 0usize;
        loop {
            let tok = self.next_nonblank();
            match tok.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                TokenKind::Newline | TokenKind::SectionBreak => {
                    self.tokens.push_back(tok);
                    return;
                }
                TokenKind::Eof => return,
                _ => {}
            }
        }
    }
}

impl<R: Read> Iterator for ReportParser<R> {
    type Item = ParseResult<Project>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.parse_next_project() {
            Ok(Some(project)) => Some(Ok(project)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
