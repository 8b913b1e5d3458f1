use katacheck::model::list::{build_list, list_values};
use katacheck::model::{Link, ListNode};

#[test]
fn test_build_list_links_in_order() {
    let head = build_list(&[1, 2, 3]);
    let first = head.as_deref().unwrap();
    assert_eq!(first.val, 1);
    let second = first.next.as_deref().unwrap();
    assert_eq!(second.val, 2);
    let third = second.next.as_deref().unwrap();
    assert_eq!(third.val, 3);
    assert!(third.next.is_none());
}

#[test]
fn test_manual_list() {
    let mut head = Box::new(ListNode::new(5));
    head.next = Some(Box::new(ListNode::new(-1)));
    let link: Link = Some(head);
    assert_eq!(list_values(&link), vec![5, -1]);
    assert_eq!(link, build_list(&[5, -1]));
}

#[test]
fn test_single_and_empty_lists() {
    assert_eq!(list_values(&build_list(&[7])), vec![7]);
    assert!(build_list(&[]).is_none());
}
