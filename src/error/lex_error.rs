#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// A character matched no token pattern.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the line.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => write!(f,
                                                                          "Unrecognized character '{character}' at position {position}."),
        }
    }
}

impl std::error::Error for LexError {}
