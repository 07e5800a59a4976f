use super::Flatten;
use crate::{Result, Sequence, VecSeq};

/// Flattens an outer sequence of vectors into a sequence of their elements.
///
/// The no-indirection specialization of [`Flatten`]: each produced `Vec<T>`
/// is wrapped straight into a [`VecSeq`] to serve as the inner sequence, so
/// neither a transition function nor an element capability is needed.
///
/// # Examples
///
/// ```rust
/// use reseq::prelude::*;
///
/// let mut seq = flatten_vecs(VecSeq::new(vec![vec![1, 2], vec![], vec![3]]));
///
/// assert_eq!(seq.produce().unwrap(), 1);
/// assert_eq!(seq.produce().unwrap(), 2);
/// assert_eq!(seq.produce().unwrap(), 3);
/// assert!(seq.produce().unwrap_err().is_exhausted());
/// ```
pub struct FlattenVecs<S, T> {
    core: Flatten<S, fn(Vec<T>) -> VecSeq<T>, VecSeq<T>>,
}

impl<S, T> FlattenVecs<S, T>
where
    S: Sequence<Item = Vec<T>>,
    T: Clone,
{
    /// Flatten an outer sequence of vectors.
    pub fn new(outer: S) -> Self {
        let wrap: fn(Vec<T>) -> VecSeq<T> = VecSeq::new;
        FlattenVecs {
            core: Flatten::new(outer, wrap),
        }
    }

    /// Checked construction: an absent outer sequence yields `None`.
    pub fn from_parts(outer: Option<S>) -> Option<Self> {
        Some(Self::new(outer?))
    }
}

/// Free-function form of [`Sequence::flatten_vecs`].
pub fn flatten_vecs<S, T>(outer: S) -> FlattenVecs<S, T>
where
    S: Sequence<Item = Vec<T>>,
    T: Clone,
{
    FlattenVecs::new(outer)
}

impl<S, T> Sequence for FlattenVecs<S, T>
where
    S: Sequence<Item = Vec<T>>,
    T: Clone,
{
    type Item = T;

    fn produce(&mut self) -> Result<T> {
        self.core.produce()
    }

    fn reset(&mut self) {
        self.core.reset()
    }
}
