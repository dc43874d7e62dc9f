/// The assignment module handles `name = value` lines.
///
/// Assignments bypass the expression pipeline entirely: they validate the
/// target name, resolve the right-hand side (a literal or another variable)
/// and write the result into the scope.
pub mod assignment;
/// The evaluator module runs postfix token sequences on a value stack.
///
/// # Responsibilities
/// - Applies each operator to the two most recent operands.
/// - Reports stack underflow and leftover operands as invalid expressions.
/// - Reports division by zero and integer overflow.
pub mod evaluator;
/// The lexer module splits expression text into raw lexemes.
///
/// Digit runs, letter runs and single-character operators are recognized;
/// whitespace is skipped and anything else is a lexical error.
pub mod lexer;
/// The normalizer module turns expression text into infix tokens.
///
/// # Responsibilities
/// - Resolves variable names through the scope.
/// - Classifies `+`/`-` as unary or binary and collapses sign runs.
/// - Rejects misplaced operators, operands and parentheses.
pub mod normalizer;
/// The postfix module reorders infix tokens with the shunting-yard algorithm.
pub mod postfix;
/// Variable storage for a session.
pub mod scope;
/// The token types shared by every pipeline stage.
pub mod token;
