use super::error::ParseError;
use super::lexer::{Lexer, Spanned, Token};

// ── AST ───────────────────────────────────────────────────────────────────

/// A literal property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f32),
    /// Straight-alpha RGBA bytes.
    Color([u8; 4]),
    Ident(String),
}

/// `key: value` inside the root block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key.
    pub line: usize,
}

/// `Name { prop* }`, the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub props: Vec<Prop>,
}

// ── Parser ────────────────────────────────────────────────────────────────

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn position(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.position();
        ParseError::new(msg, line, col)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Token::Ident(_) => match self.advance() {
                Token::Ident(s) => Ok(s),
                _ => unreachable!("peeked an identifier"),
            },
            tok => Err(self.err(format!("expected identifier, got {tok:?}"))),
        }
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let name = self.expect_ident()?;
        self.expect(&Token::LBrace)?;

        let mut props = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => props.push(self.parse_prop()?),
                tok => return Err(self.err(format!("expected a property (key: value), got {tok:?}"))),
            }
        }

        if self.peek() != &Token::Eof {
            return Err(self.err("unexpected content after the closing '}'"));
        }
        Ok(Block { name, props })
    }

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, _) = self.position();
        let key = self.expect_ident()?;
        self.expect(&Token::Colon)?;
        let value = match self.peek() {
            Token::Str(_) | Token::Number(_) | Token::Color(_) | Token::Ident(_) => match self.advance() {
                Token::Str(s) => Value::Str(s),
                Token::Number(n) => Value::Number(n),
                Token::Color(c) => Value::Color(c),
                Token::Ident(s) => Value::Ident(s),
                _ => unreachable!("peeked a value token"),
            },
            tok => return Err(self.err(format!("expected a value, got {tok:?}"))),
        };
        Ok(Prop { key, value, line })
    }
}

/// Parses a style document into its single root [`Block`].
pub fn parse_str(src: &str) -> Result<Block, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser { tokens, pos: 0 }.parse_block()
}
