#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character outside the expression alphabet was found.
    InvalidCharacter {
        /// Zero-based character index of the offending character.
        position:  usize,
        /// The offending character.
        character: char,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { position, character } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
