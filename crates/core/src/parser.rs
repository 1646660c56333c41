//! Recursive-descent parser for abstract UCCA pattern strings.
//!
//! Grammar:
//!
//! ```text
//! pattern := clause (AND clause)*
//! clause  := NOT name
//!          | "any" "of" "{" name ("," name)* "}"
//!          | name
//! name    := Word+        (adjacent words joined with a single space)
//! ```
//!
//! Names inside an `any of {...}` clause are consumed structurally by the
//! parse, so a name can never double-emit as both a set member and a bare
//! requirement. Like the lexer, the parser is lenient: unexpected tokens
//! are skipped and a malformed pattern simply yields fewer terms.

use crate::lexer::{lex, Token};
use serde::Serialize;

/// One term of a parsed pattern. Names are unresolved at this level;
/// resolution against the control-action list happens downstream.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatternTerm {
    /// The named action must be performed.
    Require(String),
    /// The named action must NOT be performed.
    Negate(String),
    /// At least the listed actions are candidates; membership is narrowed
    /// against the abstract UCCA's relevant-action set downstream.
    AnyOf(Vec<String>),
}

/// A parsed abstract pattern: an ordered conjunction of terms.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pattern {
    pub terms: Vec<PatternTerm>,
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        &self.tokens[(self.pos + offset).min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let t = self.tokens[self.pos.min(self.tokens.len() - 1)].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    /// Collect a maximal run of Word tokens into one space-joined name.
    /// Returns None when the current token is not a Word.
    fn parse_name(&mut self) -> Option<String> {
        let mut words: Vec<String> = Vec::new();
        while let Token::Word(w) = self.peek() {
            words.push(w.clone());
            self.advance();
        }
        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    /// Whether the cursor sits on the head of an `any of {` clause.
    fn at_any_of(&self) -> bool {
        match (self.peek(), self.peek_at(1), self.peek_at(2)) {
            (Token::Word(a), Token::Word(b), Token::LBrace) => {
                a.eq_ignore_ascii_case("any") && b.eq_ignore_ascii_case("of")
            }
            _ => false,
        }
    }

    fn parse_any_of(&mut self) -> PatternTerm {
        self.advance(); // any
        self.advance(); // of
        self.advance(); // {
        let mut names = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => break,
                Token::Comma => {
                    self.advance();
                }
                Token::Word(_) => {
                    if let Some(name) = self.parse_name() {
                        names.push(name);
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        PatternTerm::AnyOf(names)
    }

    fn parse_pattern(&mut self) -> Pattern {
        let mut terms = Vec::new();
        loop {
            match self.peek() {
                Token::Eof => break,
                Token::And => {
                    self.advance();
                }
                Token::Not => {
                    self.advance();
                    if let Some(name) = self.parse_name() {
                        terms.push(PatternTerm::Negate(name));
                    }
                }
                Token::Word(_) => {
                    if self.at_any_of() {
                        terms.push(self.parse_any_of());
                    } else if let Some(name) = self.parse_name() {
                        terms.push(PatternTerm::Require(name));
                    }
                }
                // Stray punctuation outside a clause; skip.
                _ => {
                    self.advance();
                }
            }
        }
        Pattern { terms }
    }
}

/// Parse an abstract pattern string into its ordered term list.
pub fn parse(src: &str) -> Pattern {
    Parser::new(lex(src)).parse_pattern()
}
