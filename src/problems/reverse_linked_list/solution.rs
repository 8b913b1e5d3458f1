use crate::model::Link;

/// Learner's attempt at reversing a linked list: detach every node,
/// then relink them back to front.
pub fn reverse_list(head: Link) -> Link {
    let mut nodes = Vec::new();
    let mut current = head;
    while let Some(mut node) = current {
        current = node.next.take();
        nodes.push(node);
    }

    let mut reversed: Link = None;
    for mut node in nodes {
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}
