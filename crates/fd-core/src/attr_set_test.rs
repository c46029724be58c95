use super::*;

#[test]
fn test_add_reports_insertion() {
    let mut s = AttrSet::new();
    assert!(s.add(Attr::new("A")));
    assert!(!s.add(Attr::new("A")));
    assert_eq!(s.len(), 1);
}

#[test]
fn test_remove_reports_removal() {
    let mut s = attrs(["A", "B"]);
    assert!(s.remove("A"));
    assert!(!s.remove("A"));
    assert!(!s.remove("Z"));
    assert_eq!(s, attrs(["B"]));
}

#[test]
fn test_remove_last_member_leaves_empty() {
    let mut s = attrs(["A"]);
    assert!(s.remove("A"));
    assert!(s.is_empty());
}

#[test]
fn test_add_all_merges_many() {
    let mut s = attrs(["A"]);
    s.add_all([&attrs(["B", "A"]), &attrs(["C"])]);
    assert_eq!(s, attrs(["A", "B", "C"]));
}

#[test]
fn test_contains_is_subset_test() {
    let s = attrs(["A", "B", "C"]);
    assert!(s.contains(&attrs(["A", "C"])));
    assert!(s.contains(&s));
    assert!(!s.contains(&attrs(["A", "D"])));
}

#[test]
fn test_contains_empty_is_true() {
    assert!(attrs(["A"]).contains(&AttrSet::new()));
    assert!(AttrSet::new().contains(&AttrSet::new()));
}

#[test]
fn test_union_is_pure() {
    let a = attrs(["A", "B"]);
    let b = attrs(["B", "C"]);
    let u = a.union([&b]);
    assert_eq!(u, attrs(["A", "B", "C"]));
    assert_eq!(a, attrs(["A", "B"]));
}

#[test]
fn test_union_with_no_others_is_copy() {
    let a = attrs(["A"]);
    assert_eq!(a.union(Vec::<&AttrSet>::new()), a);
}

#[test]
fn test_intersection_over_many() {
    let a = attrs(["A", "B", "C"]);
    let i = a.intersection([&attrs(["A", "B", "D"]), &attrs(["B", "C", "A"])]);
    assert_eq!(i, attrs(["A", "B"]));
}

#[test]
fn test_intersection_disjoint_is_empty() {
    let i = attrs(["A"]).intersection([&attrs(["B"]), &attrs(["A"])]);
    assert!(i.is_empty());
}

#[test]
fn test_difference_removes_members_of_all_others() {
    let a = attrs(["A", "B", "C", "D"]);
    let d = a.difference([&attrs(["A"]), &attrs(["C", "X"])]);
    assert_eq!(d, attrs(["B", "D"]));
}

#[test]
fn test_difference_short_circuits_to_empty() {
    let a = attrs(["A", "B"]);
    let d = a.difference([&attrs(["B", "A", "Q"]), &attrs(["Z"])]);
    assert!(d.is_empty());
}

#[test]
fn test_display_is_sorted_regardless_of_insertion() {
    let mut s = AttrSet::new();
    s.add(Attr::new("C"));
    s.add(Attr::new("A"));
    s.add(Attr::new("B"));
    assert_eq!(s.to_string(), "A,B,C");
}

#[test]
fn test_join_with_custom_and_empty_separator() {
    let s = attrs(["C", "A", "B"]);
    assert_eq!(s.join(" | "), "A | B | C");
    assert_eq!(s.join(""), "ABC");
}

#[test]
fn test_equal_membership_is_order_independent() {
    let a: AttrSet = vec![Attr::new("Y"), Attr::new("X")].into_iter().collect();
    let b: AttrSet = vec![Attr::new("X"), Attr::new("Y")].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.join("\u{1f}"), b.join("\u{1f}"));
}

#[test]
fn test_sets_with_equal_rendering_stay_distinct() {
    let joined = attrs(["A\u{1f}B"]);
    let split = attrs(["A", "B"]);
    assert_eq!(joined.join("\u{1f}"), split.join("\u{1f}"));
    assert_ne!(joined, split);
}

#[test]
fn test_serializes_as_sorted_list() {
    let s = attrs(["b", "a"]);
    assert_eq!(serde_json::to_string(&s).unwrap(), r#"["a","b"]"#);
}
