//! Error types for location-path translation.
//!
//! Every failure in the crate is one of three classes: lexical (the input
//! contains characters that do not form tokens), syntax (the tokens do not
//! match the grammar), or translation (the path parsed but a construct has
//! no CSS counterpart). All are fatal to the call that raised them; nothing
//! in the pipeline recovers or retries.
//!
//! Lexical and syntax errors carry the 0-based byte offset of the offending
//! character or token. Translation errors have no offset: they are detected
//! on the AST, after positions have been folded away.

use thiserror::Error;

/// An error from translating a location path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be split into tokens.
    #[error("lexical error at offset {position}: {message}")]
    Lexical {
        /// Human-readable description of the defect.
        message: String,
        /// 0-based byte offset where the defect was detected.
        position: usize,
    },

    /// The token stream does not match the location-path grammar.
    #[error("syntax error at offset {position}: {message}")]
    Syntax {
        /// Human-readable description of the defect.
        message: String,
        /// 0-based byte offset of the offending token.
        position: usize,
    },

    /// The path parsed, but contains a construct with no CSS counterpart.
    #[error("translation error: {message}")]
    Translation {
        /// Human-readable description of the unsupported construct.
        message: String,
    },
}

impl Error {
    /// Returns the byte offset where the error was detected, when known.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lexical { position, .. } | Self::Syntax { position, .. } => Some(*position),
            Self::Translation { .. } => None,
        }
    }

    /// Returns the message without the error-class prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. }
            | Self::Syntax { message, .. }
            | Self::Translation { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offset() {
        let err = Error::Lexical {
            message: "unexpected character '%'".to_string(),
            position: 5,
        };
        assert_eq!(
            err.to_string(),
            "lexical error at offset 5: unexpected character '%'"
        );

        let err = Error::Syntax {
            message: "expected ']', found 'and'".to_string(),
            position: 11,
        };
        assert_eq!(
            err.to_string(),
            "syntax error at offset 11: expected ']', found 'and'"
        );
    }

    #[test]
    fn test_translation_has_no_offset() {
        let err = Error::Translation {
            message: "unsupported function 'concat'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "translation error: unsupported function 'concat'"
        );
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_accessors() {
        let err = Error::Syntax {
            message: "expected an axis, found 'div'".to_string(),
            position: 0,
        };
        assert_eq!(err.position(), Some(0));
        assert_eq!(err.message(), "expected an axis, found 'div'");
    }
}
