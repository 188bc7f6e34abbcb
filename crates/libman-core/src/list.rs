//! Singly-linked record list.
//!
//! [`RecordList`] is the collection every store is built on. It keeps the
//! insertion discipline of its caller: clients and books go through
//! [`RecordList::insert_sorted_by`], borrows through
//! [`RecordList::push_front`] so the newest loan comes first.
//!
//! Lookups hand out references into the list, never copies. A filtered view
//! is itself a `RecordList<&T>` over the same entities.

use std::{cmp::Ordering, fmt, iter::FusedIterator};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked sequence of records.
pub struct RecordList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> RecordList<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepend a record in O(1).
    pub fn push_front(&mut self, value: T) -> &mut T {
        let next = self.head.take();
        self.len += 1;
        let node = self.head.insert(Box::new(Node { value, next }));
        &mut node.value
    }

    /// Remove and return the first record.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Insert a record before the first one that does not compare less.
    ///
    /// The scan only advances past records strictly less than `value`, so a
    /// record with a key equal to existing ones lands in front of the first of
    /// them. On a list sorted by `compare` the result stays sorted.
    pub fn insert_sorted_by<F>(&mut self, value: T, mut compare: F) -> &mut T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| compare(&node.value, &value) == Ordering::Less) {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }

        let next = cursor.take();
        let node = cursor.insert(Box::new(Node { value, next }));
        self.len += 1;
        &mut node.value
    }

    /// First record matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// First record matching `predicate`, mutably.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(value))
    }

    /// References to every record matching `predicate`, in list order.
    pub fn filter<P>(&self, mut predicate: P) -> RecordList<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(value)).collect()
    }

    /// Unlink the first record matching `predicate` and hand it back.
    ///
    /// Returns `None` and leaves the list untouched when nothing matches.
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !predicate(&node.value)) {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }

        let removed = cursor.take()?;
        let Node { value, next } = *removed;
        *cursor = next;
        self.len -= 1;
        Some(value)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Iterate records front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref(), remaining: self.len }
    }

    /// Iterate records front to back, mutably.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head.as_deref_mut(), remaining: self.len }
    }
}

impl<T> Drop for RecordList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long lists
        self.clear();
    }
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RecordList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for RecordList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RecordList<T> {}

impl<T: fmt::Debug> fmt::Debug for RecordList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RecordList<T> {
    /// Build a list in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut len = 0;
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            len += 1;
        }
        list.len = len;
        list
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RecordList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over a [`RecordList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`RecordList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`RecordList`].
pub struct IntoIter<T> {
    list: RecordList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[i32]) -> RecordList<i32> {
        let mut list = RecordList::new();
        for value in values {
            list.insert_sorted_by(*value, Ord::cmp);
        }
        list
    }

    #[test]
    fn insert_sorted_keeps_ascending_order() {
        let list = sorted(&[5, 1, 4, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn insert_sorted_places_equal_keys_before_existing() {
        let mut list = RecordList::new();
        list.insert_sorted_by((1, "first"), |a, b| a.0.cmp(&b.0));
        list.insert_sorted_by((2, "other"), |a, b| a.0.cmp(&b.0));
        list.insert_sorted_by((1, "second"), |a, b| a.0.cmp(&b.0));

        let tags: Vec<_> = list.iter().map(|(_, tag)| *tag).collect();
        assert_eq!(tags, vec!["second", "first", "other"]);
    }

    #[test]
    fn insert_sorted_appends_at_tail() {
        let mut list = sorted(&[1, 2]);
        list.insert_sorted_by(9, Ord::cmp);
        assert_eq!(list.iter().last(), Some(&9));
    }

    #[test]
    fn push_front_prepends() {
        let mut list = RecordList::new();
        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn find_returns_reference_into_list() {
        let list = sorted(&[1, 2, 3]);
        let found = list.find(|v| *v == 2);
        let direct = list.iter().nth(1);
        assert!(matches!((found, direct), (Some(a), Some(b)) if std::ptr::eq(a, b)));
        assert!(list.find(|v| *v == 7).is_none());
    }

    #[test]
    fn filter_preserves_order_without_copying() {
        let list = sorted(&[1, 2, 3, 4, 5, 6]);
        let even = list.filter(|v| v % 2 == 0);
        assert_eq!(even.iter().map(|v| **v).collect::<Vec<_>>(), vec![2, 4, 6]);
        assert!(even.iter().zip(list.iter().skip(1).step_by(2)).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn remove_first_unlinks_only_first_match() {
        let mut list: RecordList<i32> = [3, 1, 3, 2].into_iter().collect();
        assert_eq!(list.remove_first(|v| *v == 3), Some(3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_first_missing_is_noop() {
        let mut list: RecordList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.remove_first(|v| *v == 9), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_last_record_empties_list() {
        let mut list: RecordList<i32> = std::iter::once(4).collect();
        assert_eq!(list.remove_first(|_| true), Some(4));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn from_iter_preserves_order() {
        let list: RecordList<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn long_list_drops_without_overflow() {
        let list: RecordList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
