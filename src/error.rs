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

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Identity comparison itself never fails: a reference that is not satisfied by a definition is
/// reported through [`crate::unification::NotEquivalent`] or
/// [`crate::unification::ComparisonResult::NotEquivalent`], both of which are ordinary outcomes.
/// The variants here cover the fallible edges around the comparison path: parsing display names
/// and versions, converting metadata version numbers and loading portability policy documents.
///
/// # Error Categories
///
/// ## Parsing Errors
/// - [`Error::Malformed`] - A display name, version string or token could not be parsed
/// - [`Error::VersionComponentOutOfRange`] - A version component does not fit into 16 bits
/// - [`Error::InvalidArgument`] - An identity was constructed from invalid parts
///
/// ## Policy Errors
/// - [`Error::MalformedPolicyDocument`] - The portability policy XML is not well-formed
/// - [`Error::FileError`] - The policy document could not be read
///
/// # Examples
///
/// ```rust
/// use dotbind::{identity::{AssemblyVersion, RawVersion}, Error};
///
/// match AssemblyVersion::try_from(RawVersion::new(4, 0, 70000, 0)) {
///     Ok(version) => println!("version {version}"),
///     Err(Error::VersionComponentOutOfRange { component, value }) => {
///         eprintln!("{component} = {value} does not fit");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be parsed.
    ///
    /// Raised for display names, version strings and public key tokens that do not follow the
    /// expected format. The error includes the source location where the malformation was
    /// detected for debugging purposes.
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

    /// A version component exceeds the 16-bit range of an assembly version.
    ///
    /// Metadata stores version components as 32-bit values, while the binder compares packed
    /// 16-bit components. Values above 65535 are rejected instead of being truncated, as a
    /// truncated component would silently reorder versions.
    #[error("Version component {component} is out of range: {value} > 65535")]
    VersionComponentOutOfRange {
        /// Name of the offending component (`major`, `minor`, `build` or `revision`)
        component: &'static str,
        /// The value that did not fit
        value: u32,
    },

    /// The portability policy document is not well-formed XML.
    ///
    /// A document that is well-formed but does not contain the expected
    /// `configuration/runtime/assemblyBinding/supportPortability` shape is not an error; it
    /// yields the default policy instead.
    #[error("Malformed policy document: {0}")]
    MalformedPolicyDocument(String),

    /// An argument passed to a constructor was invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading a policy document from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
