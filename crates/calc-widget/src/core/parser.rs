//! Expression grammar: lexer and recursive descent parser
//!
//! Input is the sanitized buffer, so the lexer only has to handle digits,
//! `.`, parentheses and the five operator characters. Any other
//! character (whitespace included) is a parse error.

use std::collections::VecDeque;

use crate::core::{CalcError, CalcResult, Operation};

/// Lexical unit of an expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Finite numeric literal
    Num(f64),
    /// Operator character; `+`/`-` double as sign prefixes
    Op(Operation),
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Literal(f64),
    /// Sign flip
    Neg(Box<Expr>),
    /// `lhs op rhs`
    Binary(Operation, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn binary(op: Operation, lhs: Self, rhs: Self) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }
}

/// Iterator of tokens over a sanitized expression
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    /// Starts lexing `input`
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Scans a literal. A second `.` ends it and starts the next one.
    fn number(&mut self) -> CalcResult<Token> {
        let mut seen_dot = false;
        let end = self
            .rest
            .find(|c: char| match c {
                '0'..='9' => false,
                '.' if !seen_dot => {
                    seen_dot = true;
                    false
                }
                _ => true,
            })
            .unwrap_or(self.rest.len());

        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;

        let value: f64 = literal
            .parse()
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{literal}'")))?;
        if value.is_infinite() {
            return Err(CalcError::Overflow);
        }
        Ok(Token::Num(value))
    }
}

impl Iterator for Lexer<'_> {
    type Item = CalcResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.rest.chars().next()?;
        if ch.is_ascii_digit() || ch == '.' {
            return Some(self.number());
        }

        self.rest = &self.rest[ch.len_utf8()..];
        let token = match ch {
            '(' => Ok(Token::Open),
            ')' => Ok(Token::Close),
            // `++` and `--` are never a sign followed by an operator
            '+' | '-' if self.rest.starts_with(ch) => {
                Err(CalcError::ParseError(format!("Unexpected '{ch}{ch}'")))
            }
            _ => Operation::from_char(ch)
                .map(Token::Op)
                .ok_or_else(|| CalcError::ParseError(format!("Unexpected character: '{ch}'"))),
        };
        Some(token)
    }
}

/// Recursive descent parser
///
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= factor (('*' | '/' | '%') factor)*
/// factor     ::= ('-' | '+') factor | atom
/// atom       ::= NUMBER | '(' expression ')'
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: VecDeque<Token>,
}

impl Parser {
    /// Lexes and parses a sanitized expression
    pub fn parse_str(input: &str) -> CalcResult<Expr> {
        let tokens = Lexer::new(input).collect::<CalcResult<VecDeque<_>>>()?;
        Self { tokens }.parse()
    }

    fn parse(mut self) -> CalcResult<Expr> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        let expr = self.expression()?;
        match self.tokens.front() {
            None => Ok(expr),
            Some(token) => Err(CalcError::ParseError(format!(
                "Unexpected trailing {token:?}"
            ))),
        }
    }

    /// Consumes the next token if it is one of `ops`
    fn take_op(&mut self, ops: &[Operation]) -> Option<Operation> {
        match self.tokens.front() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.tokens.pop_front();
                Some(op)
            }
            _ => None,
        }
    }

    fn expression(&mut self) -> CalcResult<Expr> {
        let mut lhs = self.term()?;
        while let Some(op) = self.take_op(&[Operation::Add, Operation::Subtract]) {
            lhs = Expr::binary(op, lhs, self.term()?);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> CalcResult<Expr> {
        let mut lhs = self.factor()?;
        while let Some(op) =
            self.take_op(&[Operation::Multiply, Operation::Divide, Operation::Modulo])
        {
            lhs = Expr::binary(op, lhs, self.factor()?);
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> CalcResult<Expr> {
        match self.take_op(&[Operation::Add, Operation::Subtract]) {
            Some(Operation::Subtract) => Ok(Expr::Neg(Box::new(self.factor()?))),
            Some(_) => self.factor(),
            None => self.atom(),
        }
    }

    fn atom(&mut self) -> CalcResult<Expr> {
        match self.tokens.pop_front() {
            Some(Token::Num(n)) => Ok(Expr::Literal(n)),
            Some(Token::Open) => {
                let inner = self.expression()?;
                match self.tokens.pop_front() {
                    Some(Token::Close) => Ok(inner),
                    Some(t) => Err(CalcError::ParseError(format!("Expected ')', found {t:?}"))),
                    None => Err(CalcError::ParseError("Unclosed parenthesis".into())),
                }
            }
            Some(t) => Err(CalcError::ParseError(format!("Unexpected {t:?}"))),
            None => Err(CalcError::ParseError("Unexpected end of expression".into())),
        }
    }
}
