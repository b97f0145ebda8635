use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a calculator input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords are matched case-insensitively, so `SIN`, `Sin` and `sin` all
/// produce [`Token::Sin`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Unsigned numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or
    /// `2.1e-10`. A leading `-` is always a separate [`Token::Minus`].
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
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
    /// `,`
    #[token(",")]
    Comma,

    /// `sqrt`
    #[token("sqrt", ignore(ascii_case))]
    Sqrt,
    /// `sin`
    #[token("sin", ignore(ascii_case))]
    Sin,
    /// `cos`
    #[token("cos", ignore(ascii_case))]
    Cos,
    /// `tan`
    #[token("tan", ignore(ascii_case))]
    Tan,
    /// `csc`
    #[token("csc", ignore(ascii_case))]
    Csc,
    /// `sec`
    #[token("sec", ignore(ascii_case))]
    Sec,
    /// `cot`
    #[token("cot", ignore(ascii_case))]
    Cot,
    /// `asin`
    #[token("asin", ignore(ascii_case))]
    Asin,
    /// `acos`
    #[token("acos", ignore(ascii_case))]
    Acos,
    /// `atan`
    #[token("atan", ignore(ascii_case))]
    Atan,
    /// `acsc`
    #[token("acsc", ignore(ascii_case))]
    Acsc,
    /// `asec`
    #[token("asec", ignore(ascii_case))]
    Asec,
    /// `acot`
    #[token("acot", ignore(ascii_case))]
    Acot,
    /// `mod`, usable both infix (`7 mod 3`) and as a call (`mod(7, 3)`).
    #[token("mod", ignore(ascii_case))]
    Mod,
    /// `round`
    #[token("round", ignore(ascii_case))]
    Round,
    /// `floor`
    #[token("floor", ignore(ascii_case))]
    Floor,
    /// `ceil`
    #[token("ceil", ignore(ascii_case))]
    Ceil,
    /// `fact`
    #[token("fact", ignore(ascii_case))]
    Fact,
    /// `abs`
    #[token("abs", ignore(ascii_case))]
    Abs,
    /// `log`
    #[token("log", ignore(ascii_case))]
    Log,
    /// `ln`
    #[token("ln", ignore(ascii_case))]
    Ln,
    /// `min`
    #[token("min", ignore(ascii_case))]
    Min,
    /// `max`
    #[token("max", ignore(ascii_case))]
    Max,
    /// `rand`
    #[token("rand", ignore(ascii_case))]
    Rand,
    /// `randint`
    #[token("randint", ignore(ascii_case))]
    RandInt,
    /// `root`, usable both infix (`3 root 27`) and as a call (`root(3, 27)`).
    #[token("root", ignore(ascii_case))]
    Root,

    /// `rad` command.
    #[token("rad", ignore(ascii_case))]
    Rad,
    /// `deg` command.
    #[token("deg", ignore(ascii_case))]
    Deg,
    /// `exit` command.
    #[token("exit", ignore(ascii_case))]
    Exit,
    /// `help` command.
    #[token("help", ignore(ascii_case))]
    Help,

    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,

    /// End-of-line marker. Never matched from text; [`Lexer`] emits it once
    /// the input is exhausted.
    Eol,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Csc => "csc",
            Self::Sec => "sec",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Acsc => "acsc",
            Self::Asec => "asec",
            Self::Acot => "acot",
            Self::Mod => "mod",
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Fact => "fact",
            Self::Abs => "abs",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Min => "min",
            Self::Max => "max",
            Self::Rand => "rand",
            Self::RandInt => "randint",
            Self::Root => "root",
            Self::Rad => "rad",
            Self::Deg => "deg",
            Self::Exit => "exit",
            Self::Help => "help",
            Self::Ignored => "whitespace",
            Self::Eol => "end of line",
        };
        f.write_str(text)
    }
}

/// A token paired with the byte offset at which it starts in the line.
pub type Spanned = (Token, usize);

/// Lazy tokenizer over a single input line.
///
/// Yields `Ok((token, position))` for every token in the line, followed by
/// exactly one [`Token::Eol`] positioned at the end of the input. After the
/// end marker, or after the first lexical error, the iterator is exhausted.
/// A lexer is consumed by iterating it; create a fresh one for every line.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("2 * SIN(x").collect();
///
/// assert_eq!(tokens[0], Ok((Token::Number(2.0), 0)));
/// assert_eq!(tokens[2], Ok((Token::Sin, 4)));
/// assert!(tokens[4].is_err());
/// assert_eq!(tokens.len(), 5);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `line`.
    #[must_use]
    pub fn new(line: &'src str) -> Self {
        Self { inner:    Token::lexer(line),
               finished: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(token)) => Some(Ok((token, self.inner.span().start))),
            Some(Err(())) => {
                self.finished = true;
                let position = self.inner.span().start;
                let character = self.inner.slice().chars().next().unwrap_or('\u{FFFD}');
                Some(Err(LexError::UnrecognizedCharacter { character, position }))
            },
            None => {
                self.finished = true;
                Some(Ok((Token::Eol, self.inner.source().len())))
            },
        }
    }
}

/// Tokenizes a whole line eagerly.
///
/// The returned vector always ends with [`Token::Eol`].
///
/// # Errors
/// Returns the first [`LexError`] encountered in the line.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("ln(2)").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Ln, Token::LParen, Token::Number(2.0), Token::RParen, Token::Eol]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Spanned>, LexError> {
    Lexer::new(line).collect()
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
