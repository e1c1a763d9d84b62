// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scanner for flat string-to-string JSON objects
//!
//! Language files are a single object whose values are all strings:
//!
//! ```json
//! { "key.shift": "MAYUS", "overlay.title": "Superposición", }
//! ```
//!
//! Accepted on top of strict JSON: a leading byte-order mark and one
//! trailing comma before `}`. Escapes `\" \\ \n \t \r \/ \uXXXX` are decoded;
//! any other escaped character is copied literally. Nested values, numbers
//! and literals are rejected. Text after the closing `}` is ignored.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::i18n::LocalizationError;

/// Extracts every `"key": "value"` pair in file order.
pub fn parse_flat_object(input: &str) -> Result<Vec<(String, String)>, LocalizationError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut scanner = Scanner::new(input);

    scanner.skip_whitespace();
    scanner.expect('{')?;

    let mut pairs = Vec::new();
    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            // Empty object, or the trailing comma case
            Some('}') => {
                scanner.bump();
                break;
            }
            Some('"') => {
                let key = scanner.string()?;
                scanner.skip_whitespace();
                scanner.expect(':')?;
                scanner.skip_whitespace();
                let value = scanner.string()?;
                pairs.push((key, value));

                scanner.skip_whitespace();
                match scanner.bump() {
                    Some(',') => {}
                    Some('}') => break,
                    _ => return Err(scanner.error("expected ',' or '}' after value")),
                }
            }
            _ => return Err(scanner.error("expected string key or '}'")),
        }
    }

    Ok(pairs)
}

struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    len: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.len, |(i, _)| *i)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.bump();
        }
    }

    fn expect(&mut self, wanted: char) -> Result<(), LocalizationError> {
        if self.peek() == Some(wanted) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(match wanted {
                '{' => "expected '{'",
                ':' => "expected ':'",
                _ => "unexpected character",
            }))
        }
    }

    fn error(&mut self, message: &'static str) -> LocalizationError {
        LocalizationError::Syntax {
            offset: self.offset(),
            message,
        }
    }

    /// A double-quoted string with escapes decoded.
    fn string(&mut self) -> Result<String, LocalizationError> {
        if self.peek() != Some('"') {
            return Err(self.error("expected string"));
        }
        self.bump();

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => {
                    let escaped = self.escape()?;
                    out.push(escaped);
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, LocalizationError> {
        match self.bump() {
            None => Err(self.error("unterminated escape")),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('u') => self.unicode_escape(),
            // '"', '\\', '/' and anything unknown copy through
            Some(other) => Ok(other),
        }
    }

    /// `\uXXXX`, Basic Multilingual Plane only. Surrogate halves cannot be
    /// represented on their own and become U+FFFD.
    fn unicode_escape(&mut self) -> Result<char, LocalizationError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("expected 4 hex digits after \\u"))?;
            code = code * 16 + digit;
        }
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
