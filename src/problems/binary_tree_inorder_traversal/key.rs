use crate::model::{BinaryTree, TreeIndex};

/// Returns the values of `tree` in inorder (left subtree, vertex, right subtree).
///
/// Uses an explicit stack instead of recursion, so deep trees cannot overflow
/// the call stack.
pub fn inorder_traversal_key(tree: &BinaryTree) -> Vec<i64> {
    let mut values = Vec::with_capacity(tree.num_vertices());
    let mut stack: Vec<TreeIndex> = Vec::new();
    let mut current = tree.root_index();

    while current.is_some() || !stack.is_empty() {
        // Descend as far left as possible
        while let Some(index) = current {
            stack.push(index);
            current = tree[index].left();
        }

        let Some(index) = stack.pop() else { break };
        let vertex = &tree[index];
        values.push(vertex.value());
        current = vertex.right();
    }

    values
}
