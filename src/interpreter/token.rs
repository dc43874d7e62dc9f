/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// `+` and `-` bind loosest, `*` and `/` tighter, and `^` tightest.
    /// Operators of equal precedence are resolved left to right.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One indivisible unit of a processed expression.
///
/// Tokens are produced by the normalizer in infix order, reordered into
/// postfix order by the shunting-yard converter and finally consumed by the
/// evaluator. Variables never appear as tokens: they are resolved to `Number`
/// while normalizing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An integer operand.
    Number(i64),
    /// A binary operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as space separated text, e.g. `1 2 +`.
///
/// # Example
/// ```
/// use reckon::interpreter::token::{Operator, Token, render};
///
/// let tokens = [Token::Number(1), Token::Number(2), Token::Operator(Operator::Add)];
/// assert_eq!(render(&tokens), "1 2 +");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
