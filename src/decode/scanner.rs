use memchr::{memchr, memchr2, memchr_iter};

use crate::constants::{ends_identifier, is_space};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Int,
    Float,
    String,
    Eq,
    SectionBegin,
    SectionEnd,
    ArrayBegin,
    ArrayEnd,
    Comma,
    Identifier,
    EndOfInput,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Eq => "'='",
            TokenKind::SectionBegin => "'{'",
            TokenKind::SectionEnd => "'}'",
            TokenKind::ArrayBegin => "'['",
            TokenKind::ArrayEnd => "']'",
            TokenKind::Comma => "','",
            TokenKind::Identifier => "identifier",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw token text. String tokens keep their quotes.
    pub text: &'a str,
    pub line: usize,
    /// False only for a string literal that ran into end of input.
    pub terminated: bool,
}

impl Token<'_> {
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier | TokenKind::Int | TokenKind::Float => {
                format!("{} `{}`", self.kind.describe(), self.text)
            }
            kind => kind.describe().to_string(),
        }
    }
}

pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_space();
        let bytes = self.input.as_bytes();
        let start = self.position;
        let line = self.line;
        let Some(&first) = bytes.get(start) else {
            return Token {
                kind: TokenKind::EndOfInput,
                text: "",
                line,
                terminated: true,
            };
        };

        let mut terminated = true;
        let kind = match first {
            b'{' => self.single(TokenKind::SectionBegin),
            b'}' => self.single(TokenKind::SectionEnd),
            b'[' => self.single(TokenKind::ArrayBegin),
            b']' => self.single(TokenKind::ArrayEnd),
            b',' => self.single(TokenKind::Comma),
            b'=' => self.single(TokenKind::Eq),
            b'"' => {
                terminated = self.scan_string();
                TokenKind::String
            }
            b'.' | b'0'..=b'9' => self.scan_number(first),
            _ => self.scan_identifier(),
        };

        Token {
            kind,
            text: &self.input[start..self.position],
            line,
            terminated,
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.position += 1;
        kind
    }

    fn skip_space(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(&byte) = bytes.get(self.position) {
            if byte == b'#' {
                // Leave the newline for the whitespace branch so it is counted once.
                self.position = match memchr(b'\n', &bytes[self.position..]) {
                    Some(offset) => self.position + offset,
                    None => bytes.len(),
                };
            } else if is_space(byte) {
                if byte == b'\n' {
                    self.line += 1;
                }
                self.position += 1;
            } else {
                return;
            }
        }
    }

    fn scan_string(&mut self) -> bool {
        let bytes = self.input.as_bytes();
        let start = self.position;
        let mut idx = start + 1;
        let mut terminated = false;
        while let Some(offset) = memchr2(b'"', b'\\', &bytes[idx..]) {
            idx += offset;
            if bytes[idx] == b'"' {
                idx += 1;
                terminated = true;
                break;
            }
            idx = (idx + 2).min(bytes.len());
        }
        if !terminated {
            idx = bytes.len();
        }
        self.line += memchr_iter(b'\n', &bytes[start..idx]).count();
        self.position = idx;
        terminated
    }

    fn scan_number(&mut self, first: u8) -> TokenKind {
        let bytes = self.input.as_bytes();
        let mut kind = if first == b'.' {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.position += 1;
        while let Some(&byte) = bytes.get(self.position) {
            if byte == b'.' {
                if kind == TokenKind::Float {
                    break;
                }
                kind = TokenKind::Float;
            } else if !byte.is_ascii_digit() {
                break;
            }
            self.position += 1;
        }
        kind
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let bytes = self.input.as_bytes();
        self.position += bytes[self.position..]
            .iter()
            .position(|&byte| ends_identifier(byte))
            .unwrap_or(bytes.len() - self.position);
        TokenKind::Identifier
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}
