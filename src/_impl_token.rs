use super::*;
use std::fmt::{Display, Error, Formatter};

/// For display purposes, token kind is its canonical spelling (`VAR` for variables).
impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.canonical_spelling().unwrap_or("VAR"))
    }
}

/// For display purposes, token is just its lexeme.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.lexeme)
    }
}

impl TokenKind {
    /// The fixed spelling of keyword and parenthesis tokens. Returns `None` for `TokenKind::Var`.
    pub fn canonical_spelling(&self) -> Option<&'static str> {
        match self {
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Var => None,
            keyword => KEYWORDS
                .iter()
                .find(|(_, kind)| kind == keyword)
                .map(|(spelling, _)| *spelling),
        }
    }

    /// Resolve an identifier to a keyword token kind, if it is one of the reserved words.
    ///
    /// The comparison is case-sensitive, so `and` or `True` are not keywords.
    pub fn keyword(identifier: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == identifier)
            .map(|(_, kind)| *kind)
    }
}

impl Token {
    /// Create a keyword or parenthesis token. Its lexeme is the canonical spelling of `kind`.
    ///
    /// *Panics*: `kind` must not be `TokenKind::Var` (use `Token::var` instead).
    pub fn new(kind: TokenKind) -> Token {
        match kind.canonical_spelling() {
            Some(spelling) => Token {
                kind,
                lexeme: spelling.to_string(),
            },
            None => panic!("Variable token needs an explicit name."),
        }
    }

    /// Create a variable token with the given identifier.
    pub fn var(name: &str) -> Token {
        Token {
            kind: TokenKind::Var,
            lexeme: name.to_string(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}
