//! Singly linked list of integers.
//!
//! Every edge is an owning [Box], so a list has exactly one head and no node
//! is shared. Algorithms take the list by value and relink nodes freely.

/// Owning reference to the next node; `None` terminates the list.
pub type Link = Option<Box<ListNode>>;

// =#========================================================================#=
// LIST NODE
// =#========================================================================#=
/// A node of a singly linked list.
///
/// # Example
/// ```
/// use katacheck::model::list::{build_list, list_values};
///
/// let head = build_list(&[1, 2, 3]);
/// assert_eq!(head.as_ref().unwrap().val, 1);
/// assert_eq!(list_values(&head), vec![1, 2, 3]);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ListNode {
    pub val: i64,
    pub next: Link,
}

impl ListNode {
    /// Creates a detached node.
    pub fn new(val: i64) -> Self {
        ListNode { val, next: None }
    }
}

// Default drop recurses once per node and overflows the stack on long lists
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Builds a list holding `values` in order; an empty slice gives `None`.
pub fn build_list(values: &[i64]) -> Link {
    // Prepending from the back avoids keeping a tail pointer
    let mut head = None;
    for &val in values.iter().rev() {
        head = Some(Box::new(ListNode { val, next: head }));
    }
    head
}

/// Collects the values of the list starting at `head`, in order.
pub fn list_values(head: &Link) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = head.as_deref();
    while let Some(node) = current {
        values.push(node.val);
        current = node.next.as_deref();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_list_drops_without_overflow() {
        let values: Vec<i64> = (0..200_000).collect();
        let head = build_list(&values);
        assert_eq!(list_values(&head).len(), 200_000);
        drop(head);
    }

    #[test]
    fn test_empty_list_has_no_head() {
        assert!(build_list(&[]).is_none());
        assert!(list_values(&None).is_empty());
    }
}
