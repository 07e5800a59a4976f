//! Core traits for resettable pull-based sequences.
//!
//! This module defines the [`Sequence`] trait, the contract every cursor in
//! this crate implements, and [`IntoSequence`], the capability an element
//! type implements when it can hand out its own sequence.
//!
//! # The Sequence trait
//!
//! A [`Sequence`] is a resumable cursor over a backing source:
//! - [`produce`](Sequence::produce) pulls the next element, failing with
//!   [`Error::Exhausted`] once the source runs dry
//! - [`reset`](Sequence::reset) rewinds the cursor to the start
//!
//! # Examples
//!
//! ```rust
//! use reseq::prelude::*;
//!
//! let mut seq = VecSeq::new(vec!['a', 'b']);
//! assert_eq!(seq.produce().unwrap(), 'a');
//! assert_eq!(seq.produce().unwrap(), 'b');
//! assert!(seq.produce().unwrap_err().is_exhausted());
//!
//! seq.reset();
//! assert_eq!(seq.produce().unwrap(), 'a');
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    Error, Result,
    flatten::{Flatten, FlattenInto, FlattenVecs, flatten, flatten_into, flatten_vecs},
    iter::SeqIter,
    vec_seq::VecSeq,
};

/// A resettable cursor that produces elements on demand.
///
/// Exhaustion is sticky: once `produce` has returned
/// [`Error::Exhausted`], it keeps doing so until [`reset`](Sequence::reset)
/// is called. A single instance has exactly one logical owner; concurrent
/// use from multiple threads is not supported.
pub trait Sequence {
    /// Element type produced by this sequence.
    type Item;

    /// Advance the cursor and return the element it passed over.
    ///
    /// Fails with [`Error::Exhausted`] at graceful end-of-data, or with
    /// [`Error::Source`] when the backing source is genuinely broken.
    fn produce(&mut self) -> Result<Self::Item>;

    /// Rewind to the initial position.
    ///
    /// Always succeeds; the next `produce` behaves as if the sequence were
    /// newly constructed. Adapters discard any in-progress inner state.
    fn reset(&mut self);

    /// Flatten via a transition function that derives an inner sequence
    /// from each element of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::prelude::*;
    ///
    /// // every n becomes the run [n, n+1]
    /// let mut seq = VecSeq::new(vec![1, 10])
    ///     .flatten_with(|n| VecSeq::new(vec![n, n + 1]));
    ///
    /// assert_eq!(seq.produce().unwrap(), 1);
    /// assert_eq!(seq.produce().unwrap(), 2);
    /// assert_eq!(seq.produce().unwrap(), 10);
    /// assert_eq!(seq.produce().unwrap(), 11);
    /// assert!(seq.produce().unwrap_err().is_exhausted());
    /// ```
    fn flatten_with<F, Q>(self, transition: F) -> Flatten<Self, F, Q>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Q,
        Q: Sequence,
    {
        flatten(self, transition)
    }

    /// Flatten a sequence whose elements expose their own sequences.
    fn flatten_into(self) -> FlattenInto<Self>
    where
        Self: Sized,
        Self::Item: IntoSequence,
    {
        flatten_into(self)
    }

    /// Flatten a sequence of vectors into a sequence of their elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::prelude::*;
    ///
    /// let mut seq = VecSeq::new(vec![vec![1, 2], vec![], vec![3]]).flatten_vecs();
    /// assert_eq!(seq.produce().unwrap(), 1);
    /// assert_eq!(seq.produce().unwrap(), 2);
    /// assert_eq!(seq.produce().unwrap(), 3);
    /// assert!(seq.produce().unwrap_err().is_exhausted());
    /// ```
    fn flatten_vecs<T>(self) -> FlattenVecs<Self, T>
    where
        Self: Sized + Sequence<Item = Vec<T>>,
        T: Clone,
    {
        flatten_vecs(self)
    }

    /// Erase the concrete type for dynamic composition.
    fn boxed(self) -> Box<dyn Sequence<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Bridge into a [`std::iter::Iterator`] over `Result` values.
    ///
    /// See [`SeqIter`] for the exhaustion/error mapping.
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

/// Conversion of an element into its own sequence.
///
/// The counterpart of [`std::iter::IntoIterator`] for this crate's protocol:
/// an outer element implementing `IntoSequence` carries everything needed to
/// iterate its contents, so [`FlattenInto`] needs no caller-supplied
/// transition function.
pub trait IntoSequence {
    /// Element type of the exposed sequence.
    type Item;
    /// Concrete sequence type handed out.
    type Seq: Sequence<Item = Self::Item>;

    /// Consume the element and return a sequence over its contents.
    fn into_sequence(self) -> Self::Seq;
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Item = T;
    type Seq = VecSeq<T>;

    fn into_sequence(self) -> VecSeq<T> {
        VecSeq::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn produce(&mut self) -> Result<S::Item> {
        (**self).produce()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn produce(&mut self) -> Result<S::Item> {
        (**self).produce()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<S: Sequence> Sequence for Rc<RefCell<S>> {
    type Item = S::Item;

    fn produce(&mut self) -> Result<S::Item> {
        self.as_ref().borrow_mut().produce()
    }

    fn reset(&mut self) {
        self.as_ref().borrow_mut().reset()
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn produce(&mut self) -> Result<L::Item> {
        match self {
            either::Either::Left(l) => l.produce(),
            either::Either::Right(r) => r.produce(),
        }
    }

    fn reset(&mut self) {
        match self {
            either::Either::Left(l) => l.reset(),
            either::Either::Right(r) => r.reset(),
        }
    }
}

/// An absent sequence behaves as an empty one: exhausted from the start.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn produce(&mut self) -> Result<S::Item> {
        match self {
            Some(s) => s.produce(),
            None => Err(Error::Exhausted),
        }
    }

    fn reset(&mut self) {
        if let Some(s) = self {
            s.reset()
        }
    }
}
