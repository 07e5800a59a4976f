//! Commonly used imports
//!
//! Use `use reseq::prelude::*;` for quick access to the most common types and functions.

// Core protocol
pub use crate::{Error, IntoSequence, Result, Sequence};

// Concrete sequences
pub use crate::{IterSeq, VecSeq};

// Flattening adapters and their constructors
pub use crate::flatten::{flatten, flatten_into, flatten_vecs};
pub use crate::{Flatten, FlattenInto, FlattenVecs};

// Iterator bridge
pub use crate::iter::from_iter;
pub use crate::SeqIter;
