use thiserror::Error;

/// Failure kinds for changelog extraction.
///
/// Only two things can go wrong once the document is in memory: the
/// requested version is malformed, or no section heading carries it.
/// File-access errors stay at the CLI boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("no section for version {0} in changelog")]
    VersionNotFound(String),
}
