use super::Flatten;
use crate::{IntoSequence, Result, Sequence};

/// Flattens an outer sequence whose elements expose their own sequences.
///
/// The capability-based sibling of [`Flatten`]: instead of a caller-supplied
/// transition function, each outer element's [`IntoSequence::into_sequence`]
/// provides the inner sequence. The state machine is shared with [`Flatten`];
/// this type merely fixes the transition to the element's own capability.
///
/// # Examples
///
/// ```rust
/// use reseq::prelude::*;
///
/// // `Vec<T>` exposes its own sequence, so nested vectors flatten directly
/// let mut seq = VecSeq::new(vec![vec!['x', 'y'], vec![], vec!['z']]).flatten_into();
///
/// assert_eq!(seq.produce().unwrap(), 'x');
/// assert_eq!(seq.produce().unwrap(), 'y');
/// assert_eq!(seq.produce().unwrap(), 'z');
/// assert!(seq.produce().unwrap_err().is_exhausted());
/// ```
pub struct FlattenInto<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    core: Flatten<
        S,
        fn(S::Item) -> <S::Item as IntoSequence>::Seq,
        <S::Item as IntoSequence>::Seq,
    >,
}

impl<S> FlattenInto<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    /// Flatten an outer sequence of self-sequencing elements.
    pub fn new(outer: S) -> Self {
        let transition: fn(S::Item) -> <S::Item as IntoSequence>::Seq =
            <S::Item as IntoSequence>::into_sequence;
        FlattenInto {
            core: Flatten::new(outer, transition),
        }
    }

    /// Checked construction: an absent outer sequence yields `None`.
    pub fn from_parts(outer: Option<S>) -> Option<Self> {
        Some(Self::new(outer?))
    }
}

/// Free-function form of [`Sequence::flatten_into`].
pub fn flatten_into<S>(outer: S) -> FlattenInto<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    FlattenInto::new(outer)
}

impl<S> Sequence for FlattenInto<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    type Item = <S::Item as IntoSequence>::Item;

    fn produce(&mut self) -> Result<Self::Item> {
        self.core.produce()
    }

    fn reset(&mut self) {
        self.core.reset()
    }
}
