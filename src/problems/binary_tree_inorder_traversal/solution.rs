use crate::model::{BinaryTree, TreeIndex};

/// Learner's attempt at inorder traversal.
///
/// Every vertex is pushed twice: first to schedule its subtrees around it,
/// then (marked as expanded) to emit its value.
pub fn inorder_traversal(tree: &BinaryTree) -> Vec<i64> {
    let mut values = Vec::with_capacity(tree.num_vertices());
    let mut stack: Vec<(TreeIndex, bool)> =
        tree.root_index().map(|root| (root, false)).into_iter().collect();

    while let Some((index, expanded)) = stack.pop() {
        let vertex = &tree[index];
        if expanded {
            values.push(vertex.value());
            continue;
        }
        // Popped in reverse: left subtree, vertex, right subtree
        stack.extend(tree.right_of(vertex).map(|right| (right.index(), false)));
        stack.push((index, true));
        stack.extend(tree.left_of(vertex).map(|left| (left.index(), false)));
    }

    values
}
