//! Adapters that flatten a sequence of producers into one linear sequence.
//!
//! All three adapters drive the same state machine: hold the current inner
//! sequence, drain it, and when it reports [`Error::Exhausted`] pull the
//! next element from the outer sequence to derive a fresh inner one. Empty
//! inner sequences are skipped transparently; the composition only ends when
//! the *outer* sequence exhausts. Any non-exhaustion error — from either
//! cursor — propagates to the caller untouched.
//!
//! They differ only in how an inner sequence is obtained from an outer
//! element:
//!
//! - [`Flatten`] applies a caller-supplied transition function
//! - [`FlattenInto`] asks the element itself, via [`IntoSequence`]
//! - [`FlattenVecs`] wraps a produced `Vec` straight into a [`VecSeq`]
//!
//! [`Error::Exhausted`]: crate::Error::Exhausted
//! [`IntoSequence`]: crate::IntoSequence
//! [`VecSeq`]: crate::VecSeq

mod dynamic;
mod into;
mod vecs;

pub use dynamic::{Flatten, flatten};
pub use into::{FlattenInto, flatten_into};
pub use vecs::{FlattenVecs, flatten_vecs};
