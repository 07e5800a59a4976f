//! # Reseq: Resettable Pull-Based Sequence Composition
//!
//! Build lazy sequences that produce elements on demand, rewind to the
//! start, and flatten nested or derived sequences into one linear stream.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: a resumable cursor — `produce()` the next element or
//!   fail with [`Error::Exhausted`], `reset()` back to the start
//! - **[`IntoSequence`]**: elements that can hand out their own sequence
//!
//! ## Key Features
//!
//! - **Composable**: flatten derived sequences with `.flatten_with()`,
//!   `.flatten_into()`, `.flatten_vecs()`
//! - **Error-honest**: graceful exhaustion is a distinguished kind, never
//!   conflated with a genuine source fault
//! - **Bridged**: move between [`Sequence`] and [`std::iter::Iterator`] in
//!   both directions with `.into_iter()` and [`from_iter`]
//!
//! ## Example
//!
//! ```
//! use reseq::prelude::*;
//!
//! // Flatten a sequence of batches; empty batches are skipped transparently
//! let mut seq = VecSeq::new(vec![vec![1, 2], vec![], vec![3]]).flatten_vecs();
//!
//! assert_eq!(seq.produce().unwrap(), 1);
//! assert_eq!(seq.produce().unwrap(), 2);
//! assert_eq!(seq.produce().unwrap(), 3);
//! assert!(seq.produce().unwrap_err().is_exhausted());
//!
//! // ...and replay from the top
//! seq.reset();
//! assert_eq!(seq.produce().unwrap(), 1);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`VecSeq::new(values)`](VecSeq::new) - cursor over a vector, shared backing
//! - [`from_iter(iterable)`] - resettable sequence from a cloneable iterator
//!
//! **Flattening:**
//! - [`flatten(outer, f)`] - derive each inner sequence with a transition function
//! - [`flatten_into(outer)`] - let each element expose its own inner sequence
//! - [`flatten_vecs(outer)`] - outer sequence yields plain vectors

mod error;
mod flatten;
mod iter;
mod seq;
mod vec_seq;

pub mod prelude;

pub use error::{Error, Result, SourceError};
pub use flatten::{Flatten, FlattenInto, FlattenVecs, flatten, flatten_into, flatten_vecs};
pub use iter::{IterSeq, SeqIter, from_iter};
pub use seq::{IntoSequence, Sequence};
pub use vec_seq::VecSeq;
