use smallvec::SmallVec;
use tracing::error;

use crate::arena::{Arena, Span, ValueData};
use crate::num::number::{parse_float, parse_int};
use crate::text::string::unescape_quotes;
use crate::{DecodeOptions, Error, Result};

use super::scanner::{Scanner, Token, TokenKind};

type NodeBuf = SmallVec<[usize; 16]>;
type ValueBuf = SmallVec<[ValueData; 4]>;

/// Parses `input` into `arena` and returns the span of top-level nodes.
pub fn parse_into(arena: &mut Arena, input: &str, options: &DecodeOptions) -> Result<Span> {
    let mut parser = Parser::new(arena, input, options);
    parser.parse_file()
}

struct Parser<'a, 'b> {
    scanner: Scanner<'a>,
    current: Token<'a>,
    arena: &'b mut Arena,
    depth: usize,
    max_depth: usize,
}

impl<'a, 'b> Parser<'a, 'b> {
    fn new(arena: &'b mut Arena, input: &'a str, options: &DecodeOptions) -> Self {
        let mut scanner = Scanner::new(input);
        let current = scanner.next_token();
        Self {
            scanner,
            current,
            arena,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    // File := Section*
    fn parse_file(&mut self) -> Result<Span> {
        let mut roots = NodeBuf::new();
        while self.current.kind != TokenKind::EndOfInput {
            roots.push(self.parse_section()?);
        }
        self.arena.push_children(&roots)
    }

    // Section := Identifier ( '{' Section* '}' | '=' Value )
    fn parse_section(&mut self) -> Result<usize> {
        let key_text = self.current.text;
        self.expect(TokenKind::Identifier)?;
        let key = self.arena.alloc_key(key_text)?;

        if self.current.kind == TokenKind::SectionBegin {
            self.enter_section()?;
            let mut children = NodeBuf::new();
            while self.current.kind != TokenKind::SectionEnd {
                if self.current.kind == TokenKind::EndOfInput {
                    return Err(self.unexpected("'}'"));
                }
                children.push(self.parse_section()?);
            }
            self.expect(TokenKind::SectionEnd)?;
            self.depth -= 1;
            return self.arena.push_section(key, &children);
        }

        self.expect(TokenKind::Eq)?;
        let values = self.parse_value()?;
        self.arena.push_binding(key, &values)
    }

    // Value := '[' Type (',' Type)* ']' | Type
    fn parse_value(&mut self) -> Result<ValueBuf> {
        let mut values = ValueBuf::new();
        if self.current.kind != TokenKind::ArrayBegin {
            values.push(self.parse_type()?);
            return Ok(values);
        }
        self.advance();
        values.push(self.parse_type()?);
        while self.current.kind == TokenKind::Comma {
            self.advance();
            values.push(self.parse_type()?);
        }
        self.expect(TokenKind::ArrayEnd)?;
        Ok(values)
    }

    // Type := Int | Float | String
    fn parse_type(&mut self) -> Result<ValueData> {
        let token = self.current;
        let value = match token.kind {
            TokenKind::Int => match parse_int(token.text) {
                Some(value) => ValueData::Int(value),
                None => return Err(self.fail(token.line, "integer out of range")),
            },
            TokenKind::Float => match parse_float(token.text) {
                Some(value) => ValueData::Float(value),
                None => return Err(self.fail(token.line, "float out of range")),
            },
            TokenKind::String => {
                if !token.terminated {
                    return Err(self.fail(token.line, "unterminated string"));
                }
                let inner = &token.text[1..token.text.len() - 1];
                let id = self.arena.alloc_string(&unescape_quotes(inner))?;
                ValueData::String(id)
            }
            _ => return Err(self.unexpected("a value")),
        };
        self.advance();
        Ok(value)
    }

    fn enter_section(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.fail(self.current.line, "nesting too deep"));
        }
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.current = self.scanner.next_token();
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.current.kind != kind {
            return Err(self.unexpected(kind.describe()));
        }
        self.advance();
        Ok(())
    }

    fn unexpected(&self, expected: &str) -> Error {
        let message = format!("expected {expected}, found {}", self.current.describe());
        self.fail(self.current.line, &message)
    }

    fn fail(&self, line: usize, message: &str) -> Error {
        error!(line, "parse error: {message}");
        Error::parse(line, message)
    }
}
