/// The evaluator module computes the value of parsed lines.
///
/// The evaluator walks the AST produced by the parser, applies operators and
/// builtin functions, and returns either a value or a command outcome. It
/// owns the per-session state: the angle mode and the random source.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports evaluation errors such as division by zero or domain errors.
/// - Runs the full lex, parse and evaluate cycle for one input line.
pub mod evaluator;
/// The lexer module tokenizes input lines for further parsing.
///
/// The lexer reads the raw line and produces a stream of tokens, each
/// corresponding to a number, an operator, a delimiter, a function keyword
/// or a command keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens tagged with byte offsets.
/// - Matches keywords case-insensitively.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// Angle units for the trigonometric functions.
pub mod mode;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs either a command or an expression tree that respects operator
/// precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and function arity, reporting errors with positions.
pub mod parser;
/// Injectable randomness for `rand` and `randint`.
pub mod random;
