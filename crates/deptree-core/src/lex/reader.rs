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

//! Character reader for the scanner.
//!
//! Provides buffered character-by-character reading over any [`Read`]
//! source, with a running character offset and one-character pushback. The
//! pushback slot is what lets the scanner do maximal-munch runs: it reads
//! one character too far, then puts it back.
//!
//! This module is primarily an internal detail of [`Scanner`], but is
//! exposed for advanced use cases.
//!
//! [`Scanner`]: crate::lex::Scanner

use std::io::{BufReader, Read};

/// Buffered character reader with offset tracking and one-character
/// pushback.
///
/// Offsets count characters, not bytes, so multi-byte UTF-8 sequences
/// advance the offset by one. Invalid UTF-8 decodes to U+FFFD, which the
/// scanner classifies as an illegal token; I/O errors end the stream. The
/// scan contract has no error channel, so neither condition aborts.
///
/// # Examples
///
/// ```
/// use deptree_core::lex::CharReader;
/// use std::io::Cursor;
///
/// let mut reader = CharReader::new(Cursor::new("ab"));
/// assert_eq!(reader.read(), Some('a'));
/// assert_eq!(reader.offset(), 1);
///
/// let ch = reader.read().unwrap();
/// reader.unread(ch);
/// assert_eq!(reader.offset(), 1);
/// assert_eq!(reader.read(), Some('b'));
/// assert_eq!(reader.read(), None);
/// ```
pub struct CharReader<R: Read> {
    reader: BufReader<R>,
    pushed: Option<char>,
    offset: usize,
}

impl<R: Read> CharReader<R> {
    /// Create a new character reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pushed: None,
            offset: 0,
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            pushed: None,
            offset: 0,
        }
    }

    /// The offset, in characters, of the next character to be read.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Read the next character, advancing the offset.
    ///
    /// Returns `None` at end of input and on I/O errors; once `None` has
    /// been returned, it keeps being returned.
    pub fn read(&mut self) -> Option<char> {
        let ch = match self.pushed.take() {
            Some(ch) => ch,
            None => self.decode_next()?,
        };
        self.offset += 1;
        Some(ch)
    }

    /// Push the most recently read character back, rewinding the offset.
    ///
    /// Only one character of pushback is held; the scanner never needs
    /// more.
    #[inline]
    pub fn unread(&mut self, ch: char) {
        debug_assert!(self.pushed.is_none(), "single-slot pushback already occupied");
        self.pushed = Some(ch);
        self.offset -= 1;
    }

    /// Decode one UTF-8 character from the underlying reader.
    fn decode_next(&mut self) -> Option<char> {
        let mut buf = [0u8; 4];
        if !self.fill_exact(&mut buf[..1]) {
            return None;
        }

        let width = match buf[0] {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            // Stray continuation or invalid leading byte.
            _ => return Some(char::REPLACEMENT_CHARACTER),
        };

        if width > 1 && !self.fill_exact(&mut buf[1..width]) {
            return Some(char::REPLACEMENT_CHARACTER);
        }

        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => s.chars().next(),
            Err(_) => Some(char::REPLACEMENT_CHARACTER),
        }
    }

    /// Fill `buf` from the reader, treating errors and EOF alike.
    fn fill_exact(&mut self, buf: &mut [u8]) -> bool {
        self.reader.read_exact(buf).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_chars() {
        let mut reader = CharReader::new(Cursor::new("abc"));
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.read(), Some('b'));
        assert_eq!(reader.read(), Some('c'));
        assert_eq!(reader.read(), None);
        assert_eq!(reader.read(), None);
    }

    #[test]
    fn test_offset_tracking() {
        let mut reader = CharReader::new(Cursor::new("xy"));
        assert_eq!(reader.offset(), 0);
        reader.read();
        assert_eq!(reader.offset(), 1);
        reader.read();
        assert_eq!(reader.offset(), 2);
        reader.read(); // EOF does not advance
        assert_eq!(reader.offset(), 2);
    }

    #[test]
    fn test_unread() {
        let mut reader = CharReader::new(Cursor::new("ab"));
        let ch = reader.read().unwrap();
        assert_eq!(reader.offset(), 1);
        reader.unread(ch);
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.read(), Some('b'));
    }

    #[test]
    fn test_empty_input() {
        let mut reader = CharReader::new(Cursor::new(""));
        assert_eq!(reader.read(), None);
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        let mut reader = CharReader::new(Cursor::new("a\u{00e9}b"));
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.read(), Some('\u{00e9}'));
        assert_eq!(reader.offset(), 2);
        assert_eq!(reader.read(), Some('b'));
    }

    #[test]
    fn test_invalid_utf8_yields_replacement() {
        let mut reader = CharReader::new(Cursor::new(&[b'a', 0xFF, b'b'][..]));
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.read(), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(reader.read(), Some('b'));
        assert_eq!(reader.read(), None);
    }

    #[test]
    fn test_truncated_utf8_at_eof() {
        // Leading byte of a 2-byte sequence with nothing after it.
        let mut reader = CharReader::new(Cursor::new(&[0xC3][..]));
        assert_eq!(reader.read(), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(reader.read(), None);
    }

    #[test]
    fn test_with_capacity() {
        let mut reader = CharReader::with_capacity(Cursor::new("ok"), 8);
        assert_eq!(reader.read(), Some('o'));
        assert_eq!(reader.read(), Some('k'));
    }
}
