use logos::Logos;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        lexer::Lexeme,
        scope::VariableScope,
        token::{Operator, Token},
    },
};

/// Position of the normalizer within the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Start of the expression, or right after `(` or one of `* / ^`.
    Start,
    /// Inside a run of `+`/`-` characters.
    ///
    /// `binary` is set when the run follows an operand, in which case the run
    /// collapses into a single binary operator.
    InSignRun { plus: usize, minus: usize, binary: bool },
    /// Accumulating the digits of an integer literal.
    InNumber { negative: bool, digits: String },
    /// Right after a `)`.
    AfterOperand,
}

/// Returns the single sign a run of `+`/`-` characters collapses to.
///
/// Mixed runs are rejected before they reach this point, so a run containing
/// any `+` is all pluses.
const fn effective_sign(plus: usize, minus: usize) -> Operator {
    if plus == 0 && minus % 2 == 1 { Operator::Sub } else { Operator::Add }
}

/// Turns expression text into an infix token sequence.
///
/// Holds the emitted tokens and the current [`State`]. `groups` records, for
/// every `(` that has not been closed yet, whether it opened a negated group
/// that needs an extra `)` when it is closed.
struct Normalizer<'a> {
    scope:  &'a VariableScope,
    tokens: Vec<Token>,
    state:  State,
    groups: Vec<bool>,
}

impl<'a> Normalizer<'a> {
    fn new(scope: &'a VariableScope, capacity: usize) -> Self {
        Self { scope,
               tokens: Vec::with_capacity(capacity),
               state: State::Start,
               groups: Vec::new() }
    }

    fn feed(&mut self, lexeme: Lexeme) -> CalcResult<()> {
        match lexeme {
            Lexeme::Digits(digits) => self.digits(&digits),
            Lexeme::Name(name) => {
                let value = self.scope.get(&name)?;
                self.splice(value)
            },
            Lexeme::Plus => self.sign(Operator::Add),
            Lexeme::Minus => self.sign(Operator::Sub),
            Lexeme::Star => self.infix(Operator::Mul),
            Lexeme::Slash => self.infix(Operator::Div),
            Lexeme::Caret => self.infix(Operator::Pow),
            Lexeme::LParen => self.open_group(),
            Lexeme::RParen => self.close_group(),
            Lexeme::Ignored => Ok(()),
        }
    }

    /// Takes the current state, leaving `Start` in its place.
    fn take_state(&mut self) -> State {
        std::mem::replace(&mut self.state, State::Start)
    }

    /// Finishes a literal and emits it as a number.
    fn close_number(&mut self, negative: bool, digits: &str) -> CalcResult<()> {
        let literal = if negative { format!("-{digits}") } else { digits.to_owned() };
        let Ok(value) = literal.parse::<i64>() else {
            tracing::debug!(%literal, "literal out of range");
            return Err(CalcError::invalid("integer literal out of range"));
        };
        self.tokens.push(Token::Number(value));
        Ok(())
    }

    fn digits(&mut self, digits: &str) -> CalcResult<()> {
        self.state = match self.take_state() {
            State::Start => State::InNumber { negative: false,
                                              digits:   digits.to_owned(), },
            State::InSignRun { plus, minus, binary } => {
                let sign = effective_sign(plus, minus);
                if binary {
                    self.tokens.push(Token::Operator(sign));
                    State::InNumber { negative: false,
                                      digits:   digits.to_owned(), }
                } else {
                    State::InNumber { negative: sign == Operator::Sub,
                                      digits:   digits.to_owned(), }
                }
            },
            State::InNumber { negative, digits: mut accumulated } => {
                accumulated.push_str(digits);
                State::InNumber { negative,
                                  digits: accumulated }
            },
            State::AfterOperand => return Err(CalcError::invalid("number follows an operand")),
        };
        Ok(())
    }

    /// Splices the value of a resolved variable into the stream.
    ///
    /// The value is fed as its decimal text: a negative value contributes a
    /// `-` sign followed by its digits. A variable next to digits or another
    /// variable therefore continues the same literal, so with `a = 5` the
    /// text `a5` reads as `55`.
    fn splice(&mut self, value: i64) -> CalcResult<()> {
        if value < 0 {
            self.sign(Operator::Sub)?;
        }
        self.digits(&value.unsigned_abs().to_string())
    }

    fn sign(&mut self, op: Operator) -> CalcResult<()> {
        let plus = usize::from(op == Operator::Add);
        let minus = usize::from(op == Operator::Sub);
        self.state = match self.take_state() {
            State::Start => State::InSignRun { plus,
                                               minus,
                                               binary: false },
            State::InNumber { negative, digits } => {
                self.close_number(negative, &digits)?;
                State::InSignRun { plus,
                                   minus,
                                   binary: true }
            },
            State::AfterOperand => State::InSignRun { plus,
                                                      minus,
                                                      binary: true },
            State::InSignRun { plus: seen_plus,
                               minus: seen_minus,
                               binary, } => {
                if (plus > 0 && seen_minus > 0) || (minus > 0 && seen_plus > 0) {
                    return Err(CalcError::invalid("mixed run of '+' and '-'"));
                }
                State::InSignRun { plus: seen_plus + plus,
                                   minus: seen_minus + minus,
                                   binary }
            },
        };
        Ok(())
    }

    /// Handles `*`, `/` and `^`, which always need a left operand.
    fn infix(&mut self, op: Operator) -> CalcResult<()> {
        match self.take_state() {
            State::InNumber { negative, digits } => self.close_number(negative, &digits)?,
            State::AfterOperand => {},
            State::Start | State::InSignRun { .. } => {
                return Err(CalcError::invalid("operator without left operand"));
            },
        }
        self.tokens.push(Token::Operator(op));
        self.state = State::Start;
        Ok(())
    }

    fn open_group(&mut self) -> CalcResult<()> {
        let negated = match self.take_state() {
            State::Start => false,
            State::InSignRun { plus, minus, binary } => {
                let sign = effective_sign(plus, minus);
                if binary {
                    self.tokens.push(Token::Operator(sign));
                    false
                } else {
                    sign == Operator::Sub
                }
            },
            State::InNumber { .. } | State::AfterOperand => {
                return Err(CalcError::invalid("parenthesis follows an operand"));
            },
        };
        if negated {
            // -( x ) is emitted as ( 0 - ( x ) )
            self.tokens.extend([Token::LeftParen,
                                Token::Number(0),
                                Token::Operator(Operator::Sub),
                                Token::LeftParen]);
        } else {
            self.tokens.push(Token::LeftParen);
        }
        self.groups.push(negated);
        self.state = State::Start;
        Ok(())
    }

    fn close_group(&mut self) -> CalcResult<()> {
        match self.take_state() {
            State::InNumber { negative, digits } => self.close_number(negative, &digits)?,
            State::AfterOperand => {},
            State::Start | State::InSignRun { .. } => {
                return Err(CalcError::invalid("closing parenthesis without operand"));
            },
        }
        // An unmatched `)` is passed through; the postfix converter reports it.
        if self.groups.pop() == Some(true) {
            self.tokens.extend([Token::RightParen, Token::RightParen]);
        } else {
            self.tokens.push(Token::RightParen);
        }
        self.state = State::AfterOperand;
        Ok(())
    }

    fn finish(mut self) -> CalcResult<Vec<Token>> {
        match self.take_state() {
            State::InNumber { negative, digits } => self.close_number(negative, &digits)?,
            State::AfterOperand => {},
            State::Start => return Err(CalcError::invalid("expression ends without operand")),
            State::InSignRun { .. } => {
                return Err(CalcError::invalid("expression ends with a sign"));
            },
        }
        Ok(self.tokens)
    }
}

/// Normalizes raw expression text into an infix token sequence.
///
/// Whitespace is skipped, variable names are resolved through `scope`, runs
/// of unary signs are folded into the operand that follows them, and every
/// structural rule about operator and parenthesis placement is checked.
/// Parenthesis balance is left to [`to_postfix`](crate::interpreter::postfix::to_postfix).
///
/// # Parameters
/// - `source`: The expression text, without any assignment.
/// - `scope`: Variables visible to the expression.
///
/// # Returns
/// The infix token sequence, `UnknownVariable` for an unbound name, or
/// `InvalidExpression` for malformed input.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     normalizer::normalize,
///     scope::VariableScope,
///     token::{Operator, Token},
/// };
///
/// let mut scope = VariableScope::new();
/// scope.set("a", 4);
///
/// let tokens = normalize("a - -2", &scope).unwrap();
/// assert_eq!(tokens, vec![Token::Number(4), Token::Operator(Operator::Add), Token::Number(2)]);
/// ```
#[tracing::instrument(level = "trace", skip(scope))]
pub fn normalize(source: &str, scope: &VariableScope) -> CalcResult<Vec<Token>> {
    let mut normalizer = Normalizer::new(scope, source.len());
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            tracing::debug!(slice = lexer.slice(), "unexpected character");
            return Err(CalcError::invalid("unexpected character"));
        };
        normalizer.feed(lexeme)?;
    }

    normalizer.finish()
}
