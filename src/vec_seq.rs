//! Cursor over a shared backing vector.
//!
//! [`VecSeq`] is the simplest [`Sequence`]: it walks an ordered collection
//! front to back and can be rewound. The backing vector is shared, not
//! copied — a second handle obtained from [`VecSeq::backing`] (or passed to
//! [`VecSeq::shared`]) can mutate the collection mid-iteration, and later
//! `produce` calls observe the change.
//!
//! # Examples
//!
//! ```rust
//! use reseq::prelude::*;
//!
//! let mut seq = VecSeq::new(vec![1, 2, 3]);
//! let handle = seq.backing();
//!
//! assert_eq!(seq.produce().unwrap(), 1);
//! handle.borrow_mut().push(4); // visible below, no defensive snapshot
//! assert_eq!(seq.produce().unwrap(), 2);
//! assert_eq!(seq.produce().unwrap(), 3);
//! assert_eq!(seq.produce().unwrap(), 4);
//! assert!(seq.produce().unwrap_err().is_exhausted());
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{Error, Result, Sequence};

/// A resettable cursor over a shared vector of elements.
///
/// Elements are cloned out on `produce`; the vector itself is never copied.
/// Sharing is single-threaded by construction (`Rc`), matching the
/// one-owner-at-a-time discipline of the sequence protocol.
#[derive(Debug, Clone)]
pub struct VecSeq<T> {
    values: Rc<RefCell<Vec<T>>>,
    cursor: usize,
}

impl<T> VecSeq<T> {
    /// Wrap an owned vector.
    pub fn new(values: Vec<T>) -> Self {
        Self::shared(Rc::new(RefCell::new(values)))
    }

    /// Attach to an existing shared backing vector.
    ///
    /// Mutations through other handles remain visible to this cursor.
    pub fn shared(values: Rc<RefCell<Vec<T>>>) -> Self {
        VecSeq { values, cursor: 0 }
    }

    /// Wrap an optional vector, treating an absent one as empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reseq::prelude::*;
    ///
    /// let mut seq: VecSeq<u8> = VecSeq::from_option(None);
    /// assert!(seq.produce().unwrap_err().is_exhausted());
    /// ```
    pub fn from_option(values: Option<Vec<T>>) -> Self {
        Self::new(values.unwrap_or_default())
    }

    /// A second handle to the backing vector, for external mutation.
    pub fn backing(&self) -> Rc<RefCell<Vec<T>>> {
        Rc::clone(&self.values)
    }

    /// Number of elements currently in the backing vector.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether the backing vector is currently empty.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl<T> From<Vec<T>> for VecSeq<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for VecSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for VecSeq<T> {
    type Item = T;

    fn produce(&mut self) -> Result<T> {
        // Length is re-read on every call so growth and truncation through
        // other handles take effect immediately.
        let value = self.values.borrow().get(self.cursor).cloned();
        match value {
            Some(value) => {
                self.cursor += 1;
                Ok(value)
            }
            None => Err(Error::Exhausted),
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: Sequence>(seq: &mut S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Ok(value) = seq.produce() {
            out.push(value);
        }
        out
    }

    #[test]
    fn test_produces_elements_in_order_then_exhausts() {
        let mut seq = VecSeq::new(vec![10, 20, 30]);
        assert_eq!(drain(&mut seq), vec![10, 20, 30]);
        // exhaustion is sticky
        assert!(seq.produce().unwrap_err().is_exhausted());
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_empty_vector_exhausts_immediately() {
        let mut seq: VecSeq<u8> = VecSeq::new(vec![]);
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_reset_restores_exact_replay() {
        let mut seq = VecSeq::new(vec!["a", "b"]);
        let first = drain(&mut seq);
        seq.reset();
        let second = drain(&mut seq);
        assert_eq!(first, second);

        // reset is idempotent
        seq.reset();
        seq.reset();
        assert_eq!(seq.produce().unwrap(), "a");
    }

    #[test]
    fn test_mutation_through_backing_handle_is_visible() {
        let mut seq = VecSeq::new(vec![1, 2]);
        let handle = seq.backing();

        assert_eq!(seq.produce().unwrap(), 1);
        handle.borrow_mut().push(3);
        assert_eq!(seq.produce().unwrap(), 2);
        assert_eq!(seq.produce().unwrap(), 3);
        assert!(seq.produce().unwrap_err().is_exhausted());

        // growth after exhaustion un-exhausts the cursor
        handle.borrow_mut().push(4);
        assert_eq!(seq.produce().unwrap(), 4);
    }

    #[test]
    fn test_truncation_below_cursor_exhausts() {
        let mut seq = VecSeq::new(vec![1, 2, 3]);
        let handle = seq.backing();

        assert_eq!(seq.produce().unwrap(), 1);
        assert_eq!(seq.produce().unwrap(), 2);
        handle.borrow_mut().truncate(1);
        assert!(seq.produce().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_two_cursors_share_one_backing() {
        let mut a = VecSeq::new(vec![7, 8]);
        let mut b = VecSeq::shared(a.backing());

        assert_eq!(a.produce().unwrap(), 7);
        // b has its own cursor
        assert_eq!(b.produce().unwrap(), 7);
        assert_eq!(a.produce().unwrap(), 8);
        assert_eq!(b.produce().unwrap(), 8);
    }

    #[test]
    fn test_from_option_absent_is_empty() {
        let mut seq: VecSeq<u8> = VecSeq::from_option(None);
        assert!(seq.is_empty());
        assert!(seq.produce().unwrap_err().is_exhausted());

        let mut seq = VecSeq::from_option(Some(vec![1]));
        assert_eq!(seq.produce().unwrap(), 1);
    }
}
