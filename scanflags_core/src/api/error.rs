use thiserror::Error;

/// The flag could not be registered; the registry is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The flag name is empty.
    #[error("Config error: empty name in creation of flag.")]
    EmptyName,
    /// The flag name is one of the help tokens (`-h`, `-help`).
    #[error("Config error: help name '{name}' in creation of flag.")]
    ReservedName {
        /// The offending (normalized) name.
        name: String,
    },
}

/// A fatal error in the command line input.
///
/// [`FlagSet::parse`](crate::FlagSet::parse) terminates the process on these, with [`ParseError::exit_code`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag name was given without an attached value (ex: `-verbose` instead of `-verbose=true`).
    #[error("flag provided but not defined: {name}")]
    UndefinedFlagProvided {
        /// The flag name.
        name: String,
    },
    /// The text attached to a flag cannot be converted to the type of its default.
    #[error("Parse error: cannot convert '{token}' to {type_name} for flag '{name}'.")]
    ConversionFailure {
        /// The flag name.
        name: String,
        /// The raw text.
        token: String,
        /// The target type.
        type_name: &'static str,
    },
}

impl ParseError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::UndefinedFlagProvided { .. } => 2,
            ParseError::ConversionFailure { .. } => 1,
        }
    }
}
