//! CLDR plural condition syntax.
//!
//! Grammar (UTS #35, Language Plural Rules), samples after `@` ignored:
//!
//! ```text
//! condition     = and_condition ('or' and_condition)*
//! and_condition = relation ('and' relation)*
//! relation      = expr ('=' | '!=' | 'is' 'not'? | 'not'? 'in' | 'not'? 'within') range_list
//! expr          = operand (('mod' | '%') value)?
//! operand       = 'n' | 'i' | 'v' | 'w' | 'f' | 't' | 'e' | 'c'
//! range_list    = (value | value '..' value) (',' range_list)*
//! ```
//!
//! `=`, `is` and `in` only match integers: `n = 1..3` is false for `n = 1.5`.
//! `within` matches anything in the closed interval.

use crate::PluralOperands;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// A condition that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {position}")]
pub struct ConditionParseError {
    /// Byte offset into the rule text
    pub position: usize,
    /// What went wrong
    pub message: String,
}

impl ConditionParseError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// A plural operand symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    N,
    I,
    V,
    W,
    F,
    T,
    /// Compact exponent, written `e` or `c`
    E,
}

impl Operand {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "n" => Some(Self::N),
            "i" => Some(Self::I),
            "v" => Some(Self::V),
            "w" => Some(Self::W),
            "f" => Some(Self::F),
            "t" => Some(Self::T),
            "e" | "c" => Some(Self::E),
            _ => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Self::N => 'n',
            Self::I => 'i',
            Self::V => 'v',
            Self::W => 'w',
            Self::F => 'f',
            Self::T => 't',
            Self::E => 'e',
        }
    }
}

/// An operand, optionally reduced by a modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expr {
    pub operand: Operand,
    pub modulus: Option<u64>,
}

impl Expr {
    fn evaluate(&self, ops: &PluralOperands) -> f64 {
        let integral = |value: u64| match self.modulus {
            Some(m) => (value % m) as f64,
            None => value as f64,
        };
        match self.operand {
            // `i` keeps the low integer digits exactly; `n` may not.
            Operand::N => match self.modulus {
                Some(m) => (ops.i % m) as f64 + fraction(ops),
                None => ops.n,
            },
            Operand::I => integral(ops.i),
            Operand::V => integral(ops.v as u64),
            Operand::W => integral(ops.w as u64),
            Operand::F => integral(ops.f),
            Operand::T => integral(ops.t),
            Operand::E => integral(u64::from(ops.e)),
        }
    }
}

/// Fractional part of the value, rebuilt from its visible digits.
fn fraction(ops: &PluralOperands) -> f64 {
    if ops.v == 0 {
        0.0
    } else {
        ops.f as f64 / 10f64.powi(ops.v as i32)
    }
}

/// How a relation compares its expression with the range list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `=`, `is`, `in`: integer membership
    In,
    /// `within`: interval membership
    Within,
}

/// One comparison, e.g. `n % 100 != 11..19`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub expr: Expr,
    pub kind: RelationKind,
    pub negated: bool,
    pub ranges: Vec<RangeInclusive<u64>>,
}

impl Relation {
    fn matches(&self, ops: &PluralOperands) -> bool {
        let value = self.expr.evaluate(ops);
        let contained = match self.kind {
            RelationKind::In => {
                value.fract() == 0.0
                    && self
                        .ranges
                        .iter()
                        .any(|r| value >= *r.start() as f64 && value <= *r.end() as f64)
            }
            RelationKind::Within => self
                .ranges
                .iter()
                .any(|r| value >= *r.start() as f64 && value <= *r.end() as f64),
        };
        contained != self.negated
    }
}

/// A parsed plural condition: a disjunction of conjunctions of relations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    alternatives: Vec<Vec<Relation>>,
}

impl Condition {
    /// Parse rule text. Samples (`@integer ...`) are ignored.
    pub fn parse(source: &str) -> Result<Self, ConditionParseError> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Err(ConditionParseError::new(0, "empty condition"));
        }
        Parser {
            tokens,
            pos: 0,
            end: source.find('@').unwrap_or(source.len()),
        }
        .parse()
    }

    /// Whether the operands satisfy the condition.
    pub fn matches(&self, ops: &PluralOperands) -> bool {
        self.alternatives
            .iter()
            .any(|relations| relations.iter().all(|r| r.matches(ops)))
    }

    /// The `or`-separated alternatives.
    pub fn alternatives(&self) -> &[Vec<Relation>] {
        &self.alternatives
    }
}

impl FromStr for Condition {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::parse(s)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, relations) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            for (j, relation) in relations.iter().enumerate() {
                if j > 0 {
                    f.write_str(" and ")?;
                }
                write!(f, "{}", relation)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr.operand.symbol())?;
        if let Some(m) = self.expr.modulus {
            write!(f, " % {}", m)?;
        }
        let op = match (self.kind, self.negated) {
            (RelationKind::In, false) => "=",
            (RelationKind::In, true) => "!=",
            (RelationKind::Within, false) => "within",
            (RelationKind::Within, true) => "not within",
        };
        write!(f, " {} ", op)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}..{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Number(u64),
    Equals,
    NotEquals,
    Percent,
    Comma,
    DotDot,
}

fn tokenize(source: &str) -> Result<Vec<(usize, Token)>, ConditionParseError> {
    let text = &source[..source.find('@').unwrap_or(source.len())];
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        match bytes[pos] {
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b if b.is_ascii_digit() => {
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                let value = text[start..pos]
                    .parse()
                    .map_err(|_| ConditionParseError::new(start, "number out of range"))?;
                tokens.push((start, Token::Number(value)));
            }
            b if b.is_ascii_alphabetic() => {
                while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                tokens.push((start, Token::Word(text[start..pos].to_ascii_lowercase())));
            }
            b'=' => {
                pos += 1;
                tokens.push((start, Token::Equals));
            }
            b'!' if bytes.get(pos + 1) == Some(&b'=') => {
                pos += 2;
                tokens.push((start, Token::NotEquals));
            }
            b'%' => {
                pos += 1;
                tokens.push((start, Token::Percent));
            }
            b',' => {
                pos += 1;
                tokens.push((start, Token::Comma));
            }
            b'.' if bytes.get(pos + 1) == Some(&b'.') => {
                pos += 2;
                tokens.push((start, Token::DotDot));
            }
            _ => {
                let found = text[start..].chars().next().unwrap_or('?');
                return Err(ConditionParseError::new(
                    start,
                    format!("unexpected character {:?}", found),
                ));
            }
        }
    }

    Ok(tokens)
}

// ============================================================================
// Parser
// ============================================================================

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn parse(mut self) -> Result<Condition, ConditionParseError> {
        let mut alternatives = vec![self.and_condition()?];
        while self.eat_word("or") {
            alternatives.push(self.and_condition()?);
        }
        if let Some((offset, token)) = self.tokens.get(self.pos) {
            return Err(ConditionParseError::new(
                *offset,
                format!("unexpected {:?}", token),
            ));
        }
        Ok(Condition { alternatives })
    }

    fn and_condition(&mut self) -> Result<Vec<Relation>, ConditionParseError> {
        let mut relations = vec![self.relation()?];
        while self.eat_word("and") {
            relations.push(self.relation()?);
        }
        Ok(relations)
    }

    fn relation(&mut self) -> Result<Relation, ConditionParseError> {
        let expr = self.expr()?;

        let (kind, negated, single) = match self.next() {
            Some((_, Token::Equals)) => (RelationKind::In, false, false),
            Some((_, Token::NotEquals)) => (RelationKind::In, true, false),
            Some((_, Token::Word(w))) if w == "is" => {
                let negated = self.eat_word("not");
                (RelationKind::In, negated, true)
            }
            Some((_, Token::Word(w))) if w == "in" => (RelationKind::In, false, false),
            Some((_, Token::Word(w))) if w == "within" => (RelationKind::Within, false, false),
            Some((offset, Token::Word(w))) if w == "not" => match self.next() {
                Some((_, Token::Word(w))) if w == "in" => (RelationKind::In, true, false),
                Some((_, Token::Word(w))) if w == "within" => (RelationKind::Within, true, false),
                _ => {
                    return Err(ConditionParseError::new(
                        offset,
                        "expected 'in' or 'within' after 'not'",
                    ));
                }
            },
            Some((offset, token)) => {
                return Err(ConditionParseError::new(
                    offset,
                    format!("expected a comparison, found {:?}", token),
                ));
            }
            None => return Err(self.eof("expected a comparison")),
        };

        let ranges = if single {
            let value = self.number()?;
            vec![value..=value]
        } else {
            self.range_list()?
        };

        Ok(Relation {
            expr,
            kind,
            negated,
            ranges,
        })
    }

    fn expr(&mut self) -> Result<Expr, ConditionParseError> {
        let operand = match self.next() {
            Some((offset, Token::Word(w))) => Operand::from_symbol(&w).ok_or_else(|| {
                ConditionParseError::new(offset, format!("unknown operand {:?}", w))
            })?,
            Some((offset, token)) => {
                return Err(ConditionParseError::new(
                    offset,
                    format!("expected an operand, found {:?}", token),
                ));
            }
            None => return Err(self.eof("expected an operand")),
        };

        let has_modulus = matches!(self.peek(), Some(Token::Percent))
            || matches!(self.peek(), Some(Token::Word(w)) if w == "mod");
        let modulus = if has_modulus {
            self.pos += 1;
            let offset = self.offset();
            match self.number()? {
                0 => return Err(ConditionParseError::new(offset, "modulus must be positive")),
                m => Some(m),
            }
        } else {
            None
        };

        Ok(Expr { operand, modulus })
    }

    fn range_list(&mut self) -> Result<Vec<RangeInclusive<u64>>, ConditionParseError> {
        let mut ranges = Vec::new();
        loop {
            let offset = self.offset();
            let start = self.number()?;
            let end = if matches!(self.peek(), Some(Token::DotDot)) {
                self.pos += 1;
                self.number()?
            } else {
                start
            };
            if end < start {
                return Err(ConditionParseError::new(offset, "range end before start"));
            }
            ranges.push(start..=end);

            if !matches!(self.peek(), Some(Token::Comma)) {
                return Ok(ranges);
            }
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Result<u64, ConditionParseError> {
        match self.next() {
            Some((_, Token::Number(n))) => Ok(n),
            Some((offset, token)) => Err(ConditionParseError::new(
                offset,
                format!("expected a number, found {:?}", token),
            )),
            None => Err(self.eof("expected a number")),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if matches!(self.peek(), Some(Token::Word(w)) if w == word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.end)
    }

    fn eof(&self, message: &str) -> ConditionParseError {
        ConditionParseError::new(self.end, format!("{} at end of condition", message))
    }
}
