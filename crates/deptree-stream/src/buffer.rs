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

//! Token pushback buffer.
//!
//! The parser's lookahead rules sometimes consume several tokens before
//! discovering the guess was wrong (most notably next-project detection,
//! which reads through a whole header underline). The buffer is therefore a
//! growable stack, not a single slot: "unwind N tokens" is a real,
//! verifiable operation. Tokens pushed back are returned in LIFO order, so
//! restoring a lookahead means pushing the consumed tokens back in reverse.

use deptree_core::{Scanner, TerminalSymbol};
use std::io::Read;

/// A pushback stack over the scanner.
///
/// # Examples
///
/// ```rust
/// use deptree_stream::TokenBuffer;
/// use deptree_core::Scanner;
/// use std::io::Cursor;
///
/// let mut tokens = TokenBuffer::new(Scanner::new(Cursor::new("a b")));
///
/// let a = tokens.next();
/// let ws = tokens.next();
///
/// // Multi-token unwind: restore in reverse consumption order.
/// tokens.push_back(ws);
/// tokens.push_back(a);
///
/// assert_eq!(tokens.next().literal, "a");
/// assert_eq!(tokens.next().literal, " ");
/// assert_eq!(tokens.next().literal, "b");
/// ```
pub struct TokenBuffer<R: Read> {
    scanner: Scanner<R>,
    pushed: Vec<TerminalSymbol>,
}

impl<R: Read> TokenBuffer<R> {
    /// Create a buffer over the given scanner.
    pub fn new(scanner: Scanner<R>) -> Self {
        Self {
            scanner,
            pushed: Vec::new(),
        }
    }

    /// The next token: the most recently pushed-back one if any, otherwise
    /// a fresh scan.
    pub fn next(&mut self) -> TerminalSymbol {
        match self.pushed.pop() {
            Some(sym) => sym,
            None => self.scanner.scan(),
        }
    }

    /// Push a token back to be returned by the next `next()` call.
    ///
    /// May be called repeatedly without intervening reads; tokens come back
    /// in LIFO order.
    #[inline]
    pub fn push_back(&mut self, sym: TerminalSymbol) {
        self.pushed.push(sym);
    }

    /// The number of tokens currently pushed back.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pushed.len()
    }
}
