use katacheck::model::BinaryTree;
use katacheck::model::list::{build_list, list_values};
use katacheck::parser::ParsingErrorType;
use katacheck::problems::binary_tree_inorder_traversal::{inorder_traversal, inorder_traversal_key};
use katacheck::problems::reverse_linked_list::{reverse_list, reverse_list_key};
use katacheck::problems::two_sum::{TwoSumInput, two_sum, two_sum_key};
use katacheck::problems::{
    Answer, BinaryTreeInorderTraversal, Problem, ProblemKind, ReverseLinkedList, TwoSum,
};
use std::path::PathBuf;

// --- TWO SUM ---
#[test]
fn test_two_sum_examples() {
    assert_eq!(two_sum_key(&[2, 7, 11, 15], 9), Some((0, 1)));
    assert_eq!(two_sum_key(&[3, 2, 4], 6), Some((1, 2)));
    assert_eq!(two_sum_key(&[3, 3], 6), Some((0, 1)));
    assert_eq!(two_sum_key(&[1, 2, 3], 100), None);
    assert_eq!(two_sum_key(&[], 0), None);

    assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
    assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
    assert_eq!(two_sum(&[5], 10), None);
}

#[test]
fn test_two_sum_does_not_overflow() {
    assert_eq!(two_sum_key(&[i64::MAX, 1, -1], i64::MIN), None);
    assert_eq!(two_sum(&[i64::MAX, 1, -1], i64::MIN), None);
}

#[test]
fn test_two_sum_adapter() {
    let input = TwoSum.parse_input("nums=[2,7,11,15];target=9").unwrap();
    assert_eq!(
        input,
        TwoSumInput {
            nums: vec![2, 7, 11, 15],
            target: 9
        }
    );
    let structure = TwoSum.build(&input);
    assert_eq!(TwoSum.key(structure.clone()), Answer::Values(vec![0, 1]));
    assert_eq!(TwoSum.candidate(structure), Answer::Values(vec![0, 1]));

    let no_pair = TwoSum.build(&TwoSum.parse_input("nums=[1,2];target=7").unwrap());
    assert_eq!(TwoSum.key(no_pair), Answer::NotFound);
}

#[test]
fn test_two_sum_expected_literals() {
    assert_eq!(TwoSum.parse_expected("[0,1]").unwrap(), Answer::Values(vec![0, 1]));
    assert_eq!(TwoSum.parse_expected("[]").unwrap(), Answer::NotFound);
    assert_ne!(Answer::NotFound, Answer::Values(vec![]));
}

#[test]
fn test_two_sum_field_count() {
    let err = TwoSum.parse_input("nums=[2,7,11,15]").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParsingErrorType::InvalidFieldCount { expected: 2, found: 1 }
    );
    let err = TwoSum.parse_input("nums=[1];target=x").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("x".to_string()));
}

// --- REVERSE LINKED LIST ---
#[test]
fn test_reverse_examples() {
    assert_eq!(list_values(&reverse_list_key(build_list(&[1, 2, 3]))), vec![3, 2, 1]);
    assert_eq!(list_values(&reverse_list_key(build_list(&[]))), Vec::<i64>::new());
    assert_eq!(list_values(&reverse_list_key(build_list(&[4]))), vec![4]);
    assert_eq!(list_values(&reverse_list(build_list(&[1, 2, 3]))), vec![3, 2, 1]);
    assert!(reverse_list(None).is_none());
}

#[test]
fn test_reverse_adapter() {
    let input = ReverseLinkedList.parse_input("head=[1,2,3,4,5]").unwrap();
    let key = ReverseLinkedList.key(ReverseLinkedList.build(&input));
    let candidate = ReverseLinkedList.candidate(ReverseLinkedList.build(&input));
    assert_eq!(key, Answer::Values(vec![5, 4, 3, 2, 1]));
    assert_eq!(candidate, key);
    assert_eq!(
        ReverseLinkedList.parse_expected("[5,4,3,2,1]").unwrap(),
        key
    );
    assert_eq!(ReverseLinkedList.parse_expected("[]").unwrap(), Answer::Values(vec![]));
}

// --- BINARY TREE INORDER TRAVERSAL ---
#[test]
fn test_inorder_examples() {
    let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2)]);
    assert_eq!(inorder_traversal_key(&tree), vec![1, 2]);
    assert_eq!(inorder_traversal(&tree), vec![1, 2]);

    let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
    assert_eq!(inorder_traversal_key(&tree), vec![1, 3, 2]);

    assert!(inorder_traversal_key(&BinaryTree::new()).is_empty());
    assert!(inorder_traversal(&BinaryTree::new()).is_empty());
}

#[test]
fn test_inorder_adapter() {
    let problem = BinaryTreeInorderTraversal;
    let input = problem.parse_input("root=[4,2,6,1,3,5,7]").unwrap();
    let key = problem.key(problem.build(&input));
    assert_eq!(key, Answer::Values((1..=7).collect()));
    assert_eq!(problem.candidate(problem.build(&input)), key);
    assert!(problem.parse_input("root=[1,x]").is_err());
}

#[test]
fn test_inorder_of_right_child_only_tree() {
    let problem = BinaryTreeInorderTraversal;
    let input = problem.parse_input("root=[1,null,2]").unwrap();
    assert_eq!(input, vec![Some(1), None, Some(2)]);
    assert_eq!(problem.key(problem.build(&input)), Answer::Values(vec![1, 2]));
    assert_eq!(problem.candidate(problem.build(&input)), Answer::Values(vec![1, 2]));
    assert_eq!(problem.parse_expected("[1,2]").unwrap(), Answer::Values(vec![1, 2]));
}

// --- PROBLEM KIND ---
#[test]
fn test_problem_kinds() {
    assert_eq!(ProblemKind::TwoSum.slug(), TwoSum.slug());
    assert_eq!(ProblemKind::ReverseLinkedList.to_string(), "reverse-linked-list");
    assert_eq!(
        ProblemKind::BinaryTreeInorderTraversal.default_tests_path(),
        PathBuf::from("problems/binary-tree-inorder-traversal/tests.csv")
    );
}
