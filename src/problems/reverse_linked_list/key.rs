use crate::model::Link;

/// Reverses a singly linked list by relinking its nodes in place.
///
/// `O(n)` time, `O(1)` extra space; the returned list reuses the original nodes.
pub fn reverse_list_key(head: Link) -> Link {
    let mut prev: Link = None;
    let mut current = head;
    while let Some(mut node) = current {
        current = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}
