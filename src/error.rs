//! Error type shared by every sequence in this crate.
//!
//! Exhaustion is not a fault: a sequence that has produced all of its
//! elements reports [`Error::Exhausted`], and callers are expected to test
//! for it by kind — never by message text — before treating a failure as a
//! real error.
//!
//! # Examples
//!
//! ```rust
//! use reseq::prelude::*;
//!
//! let mut seq = VecSeq::new(vec![1]);
//! assert_eq!(seq.produce().unwrap(), 1);
//! assert!(seq.produce().unwrap_err().is_exhausted());
//! ```

/// Boxed payload of a data-source fault.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure modes of [`Sequence::produce`](crate::Sequence::produce).
///
/// `Exhausted` is the distinguished graceful-termination signal; everything
/// else travels as an opaque `Source` payload, carried unchanged through any
/// number of flattening adapters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sequence has no more elements. Repeated calls keep returning this
    /// until the sequence is reset.
    #[error("sequence is exhausted")]
    Exhausted,

    /// The underlying data source failed. This is never produced for mere
    /// end-of-data and is never retried by the adapters in this crate.
    #[error("sequence source failed: {0}")]
    Source(#[source] SourceError),
}

impl Error {
    /// Wrap a data-source fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::Error;
    ///
    /// let err = Error::source("disk on fire");
    /// assert!(!err.is_exhausted());
    /// ```
    pub fn source(err: impl Into<SourceError>) -> Self {
        Error::Source(err.into())
    }

    /// Returns `true` for the graceful end-of-data signal.
    ///
    /// This is the kind test callers use in place of identity comparison;
    /// message text is not part of the contract.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Error::Exhausted)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
