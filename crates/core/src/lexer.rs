//! Tokenizer for abstract UCCA pattern strings.
//!
//! Patterns are short one-line expressions over control-action names, e.g.
//! `"¬Deploy ∧ Retract"` or `"any of {Brake, Steer} ∧ ¬Accelerate"`.
//! The grammar is deliberately lenient: characters outside the token set
//! are skipped, so a malformed pattern under-generates requirements rather
//! than failing the refinement.

/// Tokens of the pattern grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A name fragment. Adjacent words form multi-word action names.
    Word(String),
    /// Negation: `¬` or `!`.
    Not,
    /// Conjunction: `∧`, `&`, or the bare word `and`.
    And,
    LBrace,
    RBrace,
    Comma,
    Eof,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Tokenize a pattern string. Never fails; unrecognized characters act as
/// separators.
pub fn lex(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = src.chars().collect();
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        match c {
            '\u{00AC}' | '!' => {
                tokens.push(Token::Not);
                pos += 1;
                continue;
            }
            '\u{2227}' | '&' => {
                tokens.push(Token::And);
                pos += 1;
                // Tolerate the ASCII digraph `&&`
                if pos < chars.len() && chars[pos] == '&' {
                    pos += 1;
                }
                continue;
            }
            '{' => {
                tokens.push(Token::LBrace);
                pos += 1;
                continue;
            }
            '}' => {
                tokens.push(Token::RBrace);
                pos += 1;
                continue;
            }
            ',' => {
                tokens.push(Token::Comma);
                pos += 1;
                continue;
            }
            _ => {}
        }

        if is_word_char(c) {
            let mut word = String::new();
            while pos < chars.len() && is_word_char(chars[pos]) {
                word.push(chars[pos]);
                pos += 1;
            }
            if word.eq_ignore_ascii_case("and") {
                tokens.push(Token::And);
            } else {
                tokens.push(Token::Word(word));
            }
            continue;
        }

        // Anything else is noise; skip it.
        pos += 1;
    }

    tokens.push(Token::Eof);
    tokens
}
