use crate::expr::Expression;
use crate::report::Reporter;
use crate::token::{Kind, Token};
use crate::value::Value;
use std::iter::Peekable;
use std::vec;

/// A syntax error, not yet reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub token: Token,
    pub message: &'static str,
}

type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser {
    iter: Peekable<vec::IntoIter<Token>>,
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        let line = tokens.last().map_or(1, |t| t.line);
        Parser {
            iter: tokens.into_iter().peekable(),
            eof: Token::eof(line),
        }
    }

    /// Parses a single expression spanning the whole token sequence.
    /// Returns `None` once a syntax error has been reported.
    pub fn parse(mut self, reporter: &mut Reporter) -> Option<Expression> {
        match self.program() {
            Ok(expr) => Some(expr),
            Err(err) => {
                reporter.token_error(&err.token, err.message);
                None
            }
        }
    }

    fn program(&mut self) -> Result<Expression> {
        let expr = self.expression()?;
        if self.peek().is_eof() {
            Ok(expr)
        } else {
            Err(self.error("Expect end of expression."))
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expression> {
        let mut expr = self.comparison()?;
        while let Some(op) = self.matching(&[Kind::BangEqual, Kind::EqualEqual]) {
            let right = self.comparison()?;
            expr = Expression::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expression> {
        let mut expr = self.term()?;
        while let Some(op) = self.matching(&[
            Kind::Greater,
            Kind::GreaterEqual,
            Kind::Less,
            Kind::LessEqual,
        ]) {
            let right = self.term()?;
            expr = Expression::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expression> {
        let mut expr = self.factor()?;
        while let Some(op) = self.matching(&[Kind::Minus, Kind::Plus]) {
            let right = self.factor()?;
            expr = Expression::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expression> {
        let mut expr = self.unary()?;
        while let Some(op) = self.matching(&[Kind::Slash, Kind::Star]) {
            let right = self.unary()?;
            expr = Expression::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expression> {
        match self.matching(&[Kind::Bang, Kind::Minus]) {
            Some(op) => Ok(Expression::Unary(op, Box::new(self.unary()?))),
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        let kind = self.peek().kind;
        let literal = match kind {
            Kind::False => Some(Value::Bool(false)),
            Kind::True => Some(Value::Bool(true)),
            Kind::Nil => Some(Value::Nil),
            Kind::Number | Kind::String => self.peek().literal.clone(),
            _ => None,
        };
        if let Some(value) = literal {
            self.iter.next();
            return Ok(Expression::Literal(value));
        }
        if self.matching(&[Kind::LeftParen]).is_some() {
            let expr = self.expression()?;
            self.consume(Kind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expression::Grouping(Box::new(expr)));
        }
        Err(self.error("Expect expression."))
    }

    fn peek(&mut self) -> &Token {
        self.iter.peek().unwrap_or(&self.eof)
    }

    fn matching(&mut self, kinds: &[Kind]) -> Option<Token> {
        self.iter.next_if(|t| kinds.contains(&t.kind))
    }

    fn consume(&mut self, kind: Kind, message: &'static str) -> Result<Token> {
        self.matching(&[kind]).ok_or_else(|| self.error(message))
    }

    fn error(&mut self, message: &'static str) -> ParseError {
        ParseError {
            token: self.peek().clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ErrorState;
    use crate::token::scan_tokens;

    fn parse(source: &str) -> (Option<Expression>, ErrorState, String) {
        let mut state = ErrorState::default();
        let mut diag = Vec::new();
        let expr = {
            let mut reporter = Reporter::new(&mut state, &mut diag);
            let tokens = scan_tokens(source, &mut reporter);
            Parser::new(tokens).parse(&mut reporter)
        };
        (expr, state, String::from_utf8(diag).unwrap())
    }

    fn printed(source: &str) -> String {
        parse(source).0.expect("parse failed").to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(printed("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(printed("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(printed("8 / 4 / 2"), "(/ (/ 8 4) 2)");
        assert_eq!(printed("1 < 2 == true"), "(== (< 1 2) true)");
        assert_eq!(printed("-(1.5) * !nil"), "(* (- (group 1.5)) (! nil))");
        assert_eq!(printed("\"a\" + \"b\""), "(+ \"a\" \"b\")");
    }

    #[test]
    fn missing_operand_reports_at_end() {
        let (expr, state, diag) = parse("1 +");
        assert!(expr.is_none());
        assert!(state.had_error);
        assert_eq!(diag, "[line 1] Error at end: Expect expression.\n");
    }

    #[test]
    fn end_of_stream_error_uses_last_line() {
        let (_, _, diag) = parse("\n\n\n\n\n\n(1 +");
        assert_eq!(diag, "[line 7] Error at end: Expect expression.\n");
    }

    #[test]
    fn unclosed_group() {
        let (_, _, diag) = parse("(1 + 2");
        assert_eq!(diag, "[line 1] Error at end: Expect ')' after expression.\n");
    }

    #[test]
    fn unexpected_token_is_quoted() {
        let (_, _, diag) = parse("1 + )");
        assert_eq!(diag, "[line 1] Error at ')': Expect expression.\n");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let (expr, _, diag) = parse("1 2");
        assert!(expr.is_none());
        assert_eq!(diag, "[line 1] Error at '2': Expect end of expression.\n");
    }

    #[test]
    fn only_first_syntax_error_is_reported() {
        let (_, _, diag) = parse("(1 + ) + )");
        assert_eq!(diag.lines().count(), 1);
    }

    #[test]
    fn missing_sentinel_is_tolerated() {
        let tokens = vec![Token::new(Kind::LeftParen, "(", 2)];
        let mut state = ErrorState::default();
        let mut diag = Vec::new();
        let expr = Parser::new(tokens).parse(&mut Reporter::new(&mut state, &mut diag));
        assert!(expr.is_none());
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "[line 2] Error at end: Expect expression.\n"
        );
    }
}
