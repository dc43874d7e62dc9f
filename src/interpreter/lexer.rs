use logos::Logos;

/// Represents a raw lexical unit of an expression line.
///
/// Lexemes sit one level below [`Token`](crate::interpreter::token::Token):
/// digit runs are not yet converted to numbers, names are not yet resolved,
/// and `+`/`-` have not yet been classified as unary or binary. The
/// normalizer turns a stream of lexemes into tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Digits(String),
    /// A run of ASCII letters naming a variable, such as `total`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_owned())]
    Name(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lex(source: &str) -> Vec<Result<Lexeme, ()>> {
        Lexeme::lexer(source).collect()
    }

    #[test]
    fn splits_names_digits_and_symbols() {
        assert_eq!(lex("ab12+(c)"),
                   vec![Ok(Lexeme::Name("ab".to_owned())),
                        Ok(Lexeme::Digits("12".to_owned())),
                        Ok(Lexeme::Plus),
                        Ok(Lexeme::LParen),
                        Ok(Lexeme::Name("c".to_owned())),
                        Ok(Lexeme::RParen)]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(lex(" 5 \t 3 "),
                   vec![Ok(Lexeme::Digits("5".to_owned())), Ok(Lexeme::Digits("3".to_owned()))]);
    }

    #[test]
    fn unknown_characters_are_errors() {
        assert!(lex("1 % 2").iter().any(Result::is_err));
        assert!(lex("x_1").iter().any(Result::is_err));
        assert!(lex("é").iter().any(Result::is_err));
    }
}
