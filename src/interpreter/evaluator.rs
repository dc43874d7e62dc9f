use crate::{
    error::{CalcError, CalcResult},
    interpreter::token::{Operator, Token},
};

/// Evaluates a postfix token sequence with a value stack.
///
/// Numbers are pushed; each operator pops its right operand, then its left
/// operand, and pushes the result. Exactly one value has to remain at the
/// end.
///
/// # Parameters
/// - `postfix`: Tokens in Reverse Polish order, as produced by
///   [`to_postfix`](crate::interpreter::postfix::to_postfix).
///
/// # Returns
/// The value of the expression, `InvalidExpression` when the sequence is
/// malformed, or an arithmetic error from [`apply`].
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::eval_postfix,
///     token::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(10), Token::Number(3), Token::Operator(Operator::Div)];
/// assert_eq!(eval_postfix(&postfix), Ok(3));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = postfix.len()))]
pub fn eval_postfix(postfix: &[Token]) -> CalcResult<i64> {
    let mut stack: Vec<i64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                let right = stack.pop().ok_or(CalcError::invalid("missing right operand"))?;
                let left = stack.pop().ok_or(CalcError::invalid("missing left operand"))?;
                stack.push(apply(op, left, right)?);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(CalcError::invalid("parenthesis in postfix sequence"));
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(CalcError::invalid("nothing to evaluate")),
        _ => Err(CalcError::invalid("operands left without operator")),
    }
}

/// Applies a binary operator to two integers.
///
/// `+`, `-` and `*` are exact and fail with `Overflow` instead of wrapping.
/// `/` truncates toward zero and fails with `DivisionByZero` for a zero
/// divisor. See [`pow`] for `^`.
pub fn apply(op: Operator, left: i64, right: i64) -> CalcResult<i64> {
    let overflow = CalcError::Overflow { op: op.symbol() };
    match op {
        Operator::Add => left.checked_add(right).ok_or(overflow),
        Operator::Sub => left.checked_sub(right).ok_or(overflow),
        Operator::Mul => left.checked_mul(right).ok_or(overflow),
        Operator::Div => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            left.checked_div(right).ok_or(overflow)
        },
        Operator::Pow => pow(left, right),
    }
}

/// Raises `base` to `exponent`.
///
/// Non-negative exponents use checked integer arithmetic. Negative exponents
/// are computed in floating point and truncated toward zero, so the result is
/// `0` unless the base is `1` or `-1`. A zero base with a negative exponent
/// is a division by zero.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::pow;
///
/// assert_eq!(pow(2, 10), Ok(1024));
/// assert_eq!(pow(2, -1), Ok(0));
/// assert_eq!(pow(-1, -3), Ok(-1));
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn pow(base: i64, exponent: i64) -> CalcResult<i64> {
    if exponent < 0 {
        if base == 0 {
            return Err(CalcError::DivisionByZero);
        }
        // |result| <= 1 here, so the cast cannot saturate.
        return Ok((base as f64).powf(exponent as f64).trunc() as i64);
    }

    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e).ok_or(CalcError::Overflow { op: '^' }),
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Err(CalcError::Overflow { op: '^' }),
        },
    }
}
