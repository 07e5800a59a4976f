//! Bridges between [`Sequence`] and [`std::iter::Iterator`].
//!
//! [`SeqIter`] drives a sequence as a std iterator over `Result` values, and
//! [`IterSeq`] adapts any cloneable iterator into a resettable sequence.
//!
//! # Examples
//!
//! ```rust
//! use reseq::prelude::*;
//!
//! let values: Vec<u32> = VecSeq::new(vec![1, 2, 3])
//!     .into_iter()
//!     .map(Result::unwrap)
//!     .collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

use crate::{Error, Result, Sequence};

/// Iterator adapter over a [`Sequence`].
///
/// Graceful exhaustion becomes `None`; a genuine source fault is yielded as
/// `Some(Err(..))` and iteration continues to mirror the underlying
/// sequence. Obtained via [`Sequence::into_iter`].
pub struct SeqIter<S> {
    seq: S,
}

impl<S: Sequence> SeqIter<S> {
    /// Wrap a sequence for std-iterator consumption.
    pub fn new(seq: S) -> Self {
        SeqIter { seq }
    }

    /// Recover the underlying sequence, e.g. to `reset` and replay it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::prelude::*;
    ///
    /// let mut iter = VecSeq::new(vec![1, 2]).into_iter();
    /// assert_eq!(iter.by_ref().flatten().count(), 2);
    ///
    /// let mut seq = iter.into_inner();
    /// seq.reset();
    /// assert_eq!(seq.produce().unwrap(), 1);
    /// ```
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.seq.produce() {
            Ok(value) => Some(Ok(value)),
            Err(Error::Exhausted) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// A resettable [`Sequence`] backed by a cloneable std iterator.
///
/// A pristine copy of the iterator is kept so [`reset`](Sequence::reset) can
/// restore the initial position. The live side is fused, keeping exhaustion
/// sticky even for iterators that would otherwise resume after `None`.
pub struct IterSeq<I: Iterator> {
    pristine: I,
    current: std::iter::Fuse<I>,
}

impl<I> IterSeq<I>
where
    I: Iterator + Clone,
{
    /// Adapt an iterator into a sequence.
    pub fn new(iter: I) -> Self {
        IterSeq {
            current: iter.clone().fuse(),
            pristine: iter,
        }
    }
}

/// Adapt anything iterable (with a cloneable iterator) into a sequence.
///
/// # Examples
///
/// ```rust
/// use reseq::prelude::*;
///
/// let mut seq = from_iter(1..=3);
/// assert_eq!(seq.produce().unwrap(), 1);
/// seq.reset();
/// assert_eq!(seq.produce().unwrap(), 1);
/// ```
pub fn from_iter<I>(iterable: I) -> IterSeq<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterSeq::new(iterable.into_iter())
}

impl<I> Sequence for IterSeq<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn produce(&mut self) -> Result<I::Item> {
        self.current.next().ok_or(Error::Exhausted)
    }

    fn reset(&mut self) {
        self.current = self.pristine.clone().fuse();
    }
}
