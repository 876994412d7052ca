//! The error type shared by both structures.

use thiserror::Error;

/// The single failure mode of this crate.
///
/// Both structures are addressed by identifiers that must fall inside the
/// fixed range chosen at construction. An identifier outside that range, or
/// a lookup that addresses no live element, is an [`OutOfRange`] error.
/// Semantically valid "nothing to do" outcomes such as a duplicate push or
/// a redundant join are not errors and are reported as `bool` returns
/// instead.
///
/// [`OutOfRange`]: enum.Error.html#variant.OutOfRange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The identifier does not address a valid element.
    #[error("identifier {0} out of range")]
    OutOfRange(usize),
}

/// A specialized `Result` type for operations on the structures of this
/// crate.
pub type Result<T> = std::result::Result<T, Error>;
