use super::{Kind, Token};
use crate::report::Reporter;
use crate::value::Value;
use thiserror::Error;

/// A malformed lexeme. The lexer skips past it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] {message}")]
pub struct LexError {
    pub line: usize,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    unread: &'a str,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            unread: source,
            line: 1,
        }
    }

    /// Line the lexer is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    fn peek(&self) -> Option<char> {
        self.unread.chars().next()
    }

    fn advance(&mut self, count: usize) -> &'a str {
        let s = &self.unread[..count];
        self.line += s.matches('\n').count();
        self.unread = &self.unread[count..];
        s
    }

    fn advance_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let i = self
            .unread
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map(|(i, _)| i)
            .unwrap_or(self.unread.len());
        self.advance(i)
    }

    fn match_char(&mut self, c: char) -> bool {
        let ret = self.peek() == Some(c);
        if ret {
            self.advance(c.len_utf8());
        }
        ret
    }

    fn skip_trivia(&mut self) {
        loop {
            self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
            if self.unread.starts_with("//") {
                self.advance_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    fn number(&mut self) -> Result<(Kind, Option<Value>), &'static str> {
        let start = self.unread;
        self.advance_while(|c| c.is_ascii_digit());
        let mut rest = self.unread.chars();
        if let (Some('.'), Some(d)) = (rest.next(), rest.next()) {
            if d.is_ascii_digit() {
                self.advance(1);
                self.advance_while(|c| c.is_ascii_digit());
            }
        }
        let text = &start[..start.len() - self.unread.len()];
        let num = text.parse::<f64>().map_err(|_| "Invalid number.")?;
        Ok((Kind::Number, Some(Value::Num(num))))
    }

    fn string(&mut self) -> Result<(Kind, Option<Value>), &'static str> {
        let s = self.advance_while(|c| c != '"');
        if !self.match_char('"') {
            return Err("Unterminated string.");
        }
        Ok((Kind::String, Some(Value::Str(s.to_owned()))))
    }

    fn scan(&mut self, c: char) -> Result<(Kind, Option<Value>), &'static str> {
        if c.is_ascii_digit() {
            return self.number();
        }
        if c.is_ascii_alphabetic() || c == '_' {
            let s = self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
            return Ok((Kind::keyword(s).unwrap_or(Kind::Identifier), None));
        }
        self.advance(c.len_utf8());
        let kind = match c {
            '(' => Kind::LeftParen,
            ')' => Kind::RightParen,
            '{' => Kind::LeftBrace,
            '}' => Kind::RightBrace,
            ',' => Kind::Comma,
            '.' => Kind::Dot,
            '-' => Kind::Minus,
            '+' => Kind::Plus,
            ';' => Kind::Semicolon,
            '/' => Kind::Slash,
            '*' => Kind::Star,
            '"' => return self.string(),
            '!' => {
                if self.match_char('=') {
                    Kind::BangEqual
                } else {
                    Kind::Bang
                }
            }
            '=' => {
                if self.match_char('=') {
                    Kind::EqualEqual
                } else {
                    Kind::Equal
                }
            }
            '>' => {
                if self.match_char('=') {
                    Kind::GreaterEqual
                } else {
                    Kind::Greater
                }
            }
            '<' => {
                if self.match_char('=') {
                    Kind::LessEqual
                } else {
                    Kind::Less
                }
            }
            _ => return Err("Unexpected character."),
        };
        Ok((kind, None))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();
        let c = self.peek()?;
        let line = self.line;
        let start = self.unread;
        let item = match self.scan(c) {
            Ok((kind, literal)) => {
                let lexeme = &start[..start.len() - self.unread.len()];
                let mut token = Token::new(kind, lexeme, line);
                token.literal = literal;
                Ok(token)
            }
            Err(message) => Err(LexError { line, message }),
        };
        Some(item)
    }
}

/// Scans all of `source`, reporting every malformed lexeme along the way.
/// The returned tokens always end with the end-of-stream sentinel.
pub fn scan_tokens(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    for item in lexer.by_ref() {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => reporter.error(err.line, err.message),
        }
    }
    tokens.push(Token::eof(lexer.line()));
    tokens
}
