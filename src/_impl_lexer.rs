use super::*;

/// Takes a `&str` and splits it into `Token`s, or returns the first lexical error.
///
/// Use `Lexer` directly if you also need token positions or want to process tokens lazily.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(text)
        .map(|item| item.map(|(_, token)| token))
        .collect()
}

/// **(internal)** Characters that are skipped between tokens.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// **(internal)** Characters that can start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// **(internal)** Characters that can continue an identifier.
fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check that `name` can appear as a variable in a boolean formula, i.e. that it matches
/// `[A-Za-z_][A-Za-z0-9_]*` and is not a reserved keyword.
pub(crate) fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => {
            chars.all(is_identifier_part) && TokenKind::keyword(name).is_none()
        }
        _ => false,
    }
}

impl<'a> Lexer<'a> {
    /// Create a new lexer reading the given `text` from left to right.
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer {
            input: text.chars().peekable(),
            position: 0,
            failed: false,
        }
    }

    /// **(internal)** Consume the next character, keeping track of the current position.
    fn bump(&mut self) -> Option<char> {
        let c = self.input.next()?;
        self.position += 1;
        Some(c)
    }

    /// **(internal)** Consume the rest of an identifier whose first character is `first`.
    fn identifier(&mut self, first: char) -> String {
        let mut name = String::new();
        name.push(first);
        while let Some(c) = self.input.peek() {
            if is_identifier_part(*c) {
                name.push(*c);
                self.bump();
            } else {
                break;
            }
        }
        name
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(usize, Token), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(c) = self.input.peek() {
            if is_blank(*c) {
                self.bump();
            } else {
                break;
            }
        }
        let start = self.position;
        let c = self.bump()?;
        let token = match c {
            '(' => Token::new(TokenKind::LParen),
            ')' => Token::new(TokenKind::RParen),
            c if is_identifier_start(c) => {
                let name = self.identifier(c);
                match TokenKind::keyword(&name) {
                    Some(kind) => Token { kind, lexeme: name },
                    None => Token {
                        kind: TokenKind::Var,
                        lexeme: name,
                    },
                }
            }
            c => {
                log::trace!("Invalid character {:?} at position {}.", c, start);
                self.failed = true;
                return Some(Err(ParseError::InvalidCharacter(c, start)));
            }
        };
        Some(Ok((start, token)))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
