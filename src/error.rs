use std::path::PathBuf;

use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_option {
    ($name:expr, $msg:expr) => {
        crate::Error::InvalidOption {
            name: $name,
            message: $msg.to_string(),
        }
    };

    ($name:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidOption {
            name: $name,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Documentation generation itself is infallible in the ordinary sense: a symbol without a
/// documentation comment, a type without a base type or an external symbol without a known URL
/// all produce a reduced rendering instead of an error. The variants below cover the few places
/// where input is genuinely rejected.
///
/// # Error Categories
///
/// ## Configuration Errors
/// - [`Error::InvalidOption`] - An option value is outside of its valid range
///
/// ## Symbol Graph Errors
/// - [`Error::InvalidSymbol`] - A builder was asked to attach a symbol where it cannot live
///
/// ## External Input Errors
/// - [`Error::Xml`] - An XML documentation or source-reference file could not be parsed
/// - [`Error::Malformed`] - An XML file parsed, but its structure is not the expected one
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// Invariant violations inside the generator (an unknown documentation part, a symbol kind that
/// can never reach a given code path) are not represented here. They panic.
///
/// # Examples
///
/// ```rust
/// use cildoc::{DocumentationOptions, Error};
///
/// match DocumentationOptions::builder().max_derived_types(-1).build() {
///     Err(Error::InvalidOption { name, .. }) => assert_eq!(name, "max_derived_types"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value was rejected while the options object was constructed.
    ///
    /// # Fields
    ///
    /// * `name` - Name of the offending option
    /// * `message` - Description of the accepted range
    #[error("Invalid option '{name}': {message}")]
    InvalidOption {
        /// The option that was rejected
        name: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// A symbol could not be added to the registry.
    ///
    /// Raised by the builders when a member is attached to a symbol that cannot contain it,
    /// e.g. a method added to a namespace.
    #[error("Invalid symbol - {0}")]
    InvalidSymbol(String),

    /// An external XML file could not be parsed.
    ///
    /// The underlying parser error is kept as the source so the caller sees the exact position
    /// of the failure.
    #[error("XML error in '{}': {source}", path.display())]
    Xml {
        /// The file that failed to parse
        path: PathBuf,
        /// The error reported by the XML reader
        source: quick_xml::Error,
    },

    /// An XML file was well-formed but its content did not match the expected schema.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading XML documentation files.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
