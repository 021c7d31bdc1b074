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

//! Property tests for the scanner's offset bookkeeping.
//!
//! For every terminal symbol the scanner produces, `literal` must equal the
//! exact substring of the input between `start` and `end`, offsets must be
//! monotonically non-decreasing, and the token literals must reassemble the
//! input losslessly.

use deptree_core::lex::{Scanner, TerminalSymbol};
use proptest::prelude::*;
use std::io::Cursor;

fn scan_all(input: &str) -> Vec<TerminalSymbol> {
    let mut scanner = Scanner::new(Cursor::new(input));
    let mut symbols = Vec::new();
    loop {
        let sym = scanner.scan();
        let eof = sym.is_eof();
        symbols.push(sym);
        if eof {
            break;
        }
    }
    symbols
}

/// Strings drawn from the report alphabet, where every classification rule
/// gets exercised.
fn report_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            prop::sample::select(vec!['+', '-', '>', ':', '.', '|', '\\', '\'', ',', '(', ')', '*', '%', '@']),
        ],
        0..128,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn literals_match_offset_ranges(input in report_text()) {
        let chars: Vec<char> = input.chars().collect();
        for sym in scan_all(&input) {
            let expected: String = chars[sym.start..sym.end].iter().collect();
            prop_assert_eq!(&sym.literal, &expected);
        }
    }

    #[test]
    fn offsets_are_monotonic_and_contiguous(input in report_text()) {
        let symbols = scan_all(&input);
        for sym in &symbols {
            prop_assert!(sym.start <= sym.end);
        }
        for pair in symbols.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn literals_reassemble_the_input(input in report_text()) {
        let reassembled: String = scan_all(&input)
            .iter()
            .map(|s| s.literal.as_str())
            .collect();
        prop_assert_eq!(reassembled, input);
    }

    #[test]
    fn arbitrary_unicode_never_panics(input in "\\PC{0,64}") {
        let symbols = scan_all(&input);
        prop_assert!(symbols.last().unwrap().is_eof());
    }
}
