use crate::{
    error::{CalcError, CalcResult},
    interpreter::token::Token,
};

/// Converts an infix token sequence to postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm: numbers go straight to the output,
/// operators wait on a stack until an operator of lower precedence (or a
/// closing parenthesis) forces them out. Operators of equal precedence leave
/// the stack left to right, so `2 ^ 3 ^ 2` becomes `2 3 ^ 2 ^`.
///
/// # Parameters
/// - `infix`: Tokens as produced by
///   [`normalize`](crate::interpreter::normalizer::normalize).
///
/// # Returns
/// The postfix sequence, which contains no parentheses, or
/// `InvalidExpression` if the parentheses do not match.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     postfix::to_postfix,
///     token::{Operator, Token, render},
/// };
///
/// let infix = [Token::LeftParen,
///              Token::Number(1),
///              Token::Operator(Operator::Add),
///              Token::Number(2),
///              Token::RightParen,
///              Token::Operator(Operator::Mul),
///              Token::Number(3)];
///
/// assert_eq!(render(&to_postfix(&infix).unwrap()), "1 2 + 3 *");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = infix.len()))]
pub fn to_postfix(infix: &[Token]) -> CalcResult<Vec<Token>> {
    let mut output = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in infix {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(CalcError::invalid("unmatched closing parenthesis")),
                }
            },
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last()
                      && top.precedence() >= op.precedence()
                {
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LeftParen {
            return Err(CalcError::invalid("unmatched opening parenthesis"));
        }
        output.push(token);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{
        normalizer::normalize,
        scope::VariableScope,
        token::render,
    };

    fn postfix(source: &str) -> CalcResult<String> {
        let infix = normalize(source, &VariableScope::new())?;
        to_postfix(&infix).map(|tokens| render(&tokens))
    }

    #[test]
    fn precedence_orders_operators() {
        assert_eq!(postfix("1 + 2 * 3").unwrap(), "1 2 3 * +");
        assert_eq!(postfix("1 * 2 + 3").unwrap(), "1 2 * 3 +");
        assert_eq!(postfix("2 * 3 ^ 2").unwrap(), "2 3 2 ^ *");
    }

    #[test]
    fn equal_precedence_is_left_to_right() {
        assert_eq!(postfix("8 - 3 - 2").unwrap(), "8 3 - 2 -");
        assert_eq!(postfix("2 ^ 3 ^ 2").unwrap(), "2 3 ^ 2 ^");
        assert_eq!(postfix("8 / 4 * 2").unwrap(), "8 4 / 2 *");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(1 + 2) * 3").unwrap(), "1 2 + 3 *");
        assert_eq!(postfix("2 * ((3 - 1) + 4)").unwrap(), "2 3 1 - 4 + *");
    }

    #[test]
    fn unmatched_parentheses() {
        assert_eq!(postfix("1 + (2"), Err(CalcError::invalid("unmatched opening parenthesis")));
        assert_eq!(postfix("1 + 2)"), Err(CalcError::invalid("unmatched closing parenthesis")));
    }

    #[test]
    fn output_has_no_parentheses() {
        let infix = normalize("-((1) - (2 ^ (3)))", &VariableScope::new()).unwrap();
        let output = to_postfix(&infix).unwrap();

        assert!(!output.iter().any(|t| matches!(t, Token::LeftParen | Token::RightParen)));
    }
}
