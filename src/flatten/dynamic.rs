use crate::{Error, Result, Sequence};

/// Flattens an outer sequence through a transition function.
///
/// Each element pulled from the outer sequence is mapped to an inner
/// sequence, which is drained before the outer sequence advances again. The
/// inner sequence is derived lazily, on the first `produce` call after
/// construction or a reset.
///
/// # Examples
///
/// ```rust
/// use reseq::prelude::*;
///
/// let mut seq = flatten(VecSeq::new(vec![2u32, 0, 3]), |n| {
///     VecSeq::new((0..n).collect())
/// });
///
/// // 0 maps to an empty inner sequence and is skipped transparently
/// let values: Vec<u32> = (&mut seq).into_iter().map(Result::unwrap).collect();
/// assert_eq!(values, vec![0, 1, 0, 1, 2]);
/// assert!(seq.produce().unwrap_err().is_exhausted());
/// ```
pub struct Flatten<S, F, Q> {
    outer: S,
    inner: Option<Q>,
    transition: F,
}

impl<S, F, Q> Flatten<S, F, Q>
where
    S: Sequence,
    F: FnMut(S::Item) -> Q,
    Q: Sequence,
{
    /// Compose an outer sequence with a transition function.
    pub fn new(outer: S, transition: F) -> Self {
        Flatten {
            outer,
            inner: None,
            transition,
        }
    }

    /// Checked construction from optional parts.
    ///
    /// Returns `None` when either collaborator is absent, so a
    /// half-configured adapter can never be driven.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::prelude::*;
    ///
    /// let seq = Flatten::from_parts(
    ///     Some(VecSeq::new(vec![1u32])),
    ///     None::<fn(u32) -> VecSeq<u32>>,
    /// );
    /// assert!(seq.is_none());
    /// ```
    pub fn from_parts(outer: Option<S>, transition: Option<F>) -> Option<Self> {
        Some(Self::new(outer?, transition?))
    }
}

/// Free-function form of [`Sequence::flatten_with`].
pub fn flatten<S, F, Q>(outer: S, transition: F) -> Flatten<S, F, Q>
where
    S: Sequence,
    F: FnMut(S::Item) -> Q,
    Q: Sequence,
{
    Flatten::new(outer, transition)
}

impl<S, F, Q> Sequence for Flatten<S, F, Q>
where
    S: Sequence,
    F: FnMut(S::Item) -> Q,
    Q: Sequence,
{
    type Item = Q::Item;

    fn produce(&mut self) -> Result<Q::Item> {
        // An absent inner sequence produces `Exhausted` (see the `Option`
        // impl of `Sequence`), so first use and inner exhaustion take the
        // same path: pull the next outer element and re-derive the inner.
        loop {
            match self.inner.produce() {
                Ok(value) => return Ok(value),
                Err(Error::Exhausted) => {
                    // The outer's own failure, exhaustion included, is this
                    // adapter's terminal condition.
                    let element = self.outer.produce()?;
                    self.inner = Some((self.transition)(element));
                }
                // A genuine fault is never mistaken for exhaustion and is
                // never retried here.
                Err(err) => return Err(err),
            }
        }
    }

    fn reset(&mut self) {
        self.inner = None;
        self.outer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecSeq;

    #[derive(Debug, PartialEq)]
    struct TestFault(&'static str);

    impl std::fmt::Display for TestFault {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "test fault: {}", self.0)
        }
    }

    impl std::error::Error for TestFault {}

    /// Produces its elements in order, then one source fault, then exhausts.
    struct Faulty {
        values: VecSeq<u32>,
        tripped: bool,
    }

    impl Faulty {
        fn new(values: Vec<u32>) -> Self {
            Faulty {
                values: VecSeq::new(values),
                tripped: false,
            }
        }
    }

    impl Sequence for Faulty {
        type Item = u32;

        fn produce(&mut self) -> Result<u32> {
            match self.values.produce() {
                Err(Error::Exhausted) if !self.tripped => {
                    self.tripped = true;
                    Err(Error::source(TestFault("source broke")))
                }
                other => other,
            }
        }

        fn reset(&mut self) {
            self.values.reset();
            self.tripped = false;
        }
    }

    fn expect_fault(err: Error) {
        match err {
            Error::Source(payload) => {
                assert_eq!(
                    payload.downcast_ref::<TestFault>(),
                    Some(&TestFault("source broke"))
                );
            }
            Error::Exhausted => panic!("fault was reported as exhaustion"),
        }
    }

    fn runs(n: u32) -> VecSeq<u32> {
        VecSeq::new((0..n).collect())
    }

    #[test]
    fn test_empty_inner_sequences_are_skipped() {
        // outer [e1, e2, e3] with inners [a, b], [], [c]
        let mut seq = flatten(VecSeq::new(vec![2u32, 0, 1]), runs);

        assert_eq!(seq.produce().unwrap(), 0);
        assert_eq!(seq.produce().unwrap(), 1);
        assert_eq!(seq.produce().unwrap(), 0);
        assert!(seq.produce().unwrap_err().is_exhausted());
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_all_empty_inners_exhaust_without_values() {
        let mut seq = flatten(VecSeq::new(vec![0u32, 0, 0]), runs);
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_empty_outer_exhausts_immediately() {
        let mut seq = flatten(VecSeq::new(Vec::<u32>::new()), runs);
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_outer_fault_propagates_verbatim() {
        let mut seq = flatten(Faulty::new(vec![1]), runs);

        assert_eq!(seq.produce().unwrap(), 0);
        expect_fault(seq.produce().unwrap_err());
        // after the fault the outer exhausts, and so does the adapter
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_inner_fault_propagates_without_advancing_outer() {
        let mut seq = flatten(VecSeq::new(vec![1u32, 2]), |n| Faulty::new(vec![n]));

        assert_eq!(seq.produce().unwrap(), 1);
        expect_fault(seq.produce().unwrap_err());
        // the faulty inner is now exhausted, so the adapter moves on
        assert_eq!(seq.produce().unwrap(), 2);
    }

    #[test]
    fn test_reset_discards_inner_and_replays() {
        let mut seq = flatten(VecSeq::new(vec![2u32, 1]), runs);

        assert_eq!(seq.produce().unwrap(), 0);
        seq.reset();

        let mut replay = Vec::new();
        while let Ok(value) = seq.produce() {
            replay.push(value);
        }
        assert_eq!(replay, vec![0, 1, 0]);
    }

    #[test]
    fn test_from_parts_rejects_absent_collaborators() {
        type Transition = fn(u32) -> VecSeq<u32>;

        assert!(Flatten::from_parts(None::<VecSeq<u32>>, Some(runs as Transition)).is_none());
        assert!(Flatten::from_parts(Some(VecSeq::new(vec![1u32])), None::<Transition>).is_none());

        let seq = Flatten::from_parts(Some(VecSeq::new(vec![1u32])), Some(runs as Transition));
        assert!(seq.is_some());
    }

    #[test]
    fn test_transition_is_applied_lazily() {
        let mut calls = 0u32;
        let mut seq = flatten(VecSeq::new(vec![1u32, 1]), |n| {
            calls += 1;
            runs(n)
        });
        // nothing pulled yet, nothing derived yet
        assert_eq!(seq.produce().unwrap(), 0);
        drop(seq);
        assert_eq!(calls, 1);
    }
}
