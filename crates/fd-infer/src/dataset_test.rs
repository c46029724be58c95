use super::*;
use fd_core::attrs;
use std::io::Write;
use tempfile::TempDir;

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// id determines everything; dept determines dept_name and back
fn employees() -> DataSet {
    DataSet::from_rows(
        "emp",
        header(&["id", "dept", "dept_name", "salary"]),
        rows(&[
            &["1", "10", "Sales", "100"],
            &["2", "10", "Sales", "200"],
            &["3", "20", "Ops", "100"],
            &["4", "30", "Dev", "300"],
        ]),
    )
    .unwrap()
}

#[test]
fn test_analyze_finds_pairwise_dependencies() {
    let rel = employees().analyze().unwrap();
    assert_eq!(rel.name(), "emp");
    assert_eq!(rel.attrs(), &attrs(["dept", "dept_name", "id", "salary"]));

    assert!(rel.implies(&FuncDep::new(attrs(["id"]), attrs(["dept", "dept_name", "salary"]))));
    assert!(rel.implies(&FuncDep::new(attrs(["dept"]), attrs(["dept_name"]))));
    assert!(rel.implies(&FuncDep::new(attrs(["dept_name"]), attrs(["dept"]))));
    assert!(!rel.implies(&FuncDep::new(attrs(["salary"]), attrs(["dept"]))));
    assert!(!rel.implies(&FuncDep::new(attrs(["dept"]), attrs(["id"]))));
}

#[test]
fn test_analyze_coalesces_by_left_side() {
    let rel = employees().analyze().unwrap();
    let from_id: Vec<_> = rel
        .func_deps()
        .iter()
        .filter(|fd| fd.left == attrs(["id"]))
        .collect();
    assert_eq!(from_id.len(), 1);
    assert_eq!(from_id[0].right, attrs(["dept", "dept_name", "salary"]));
}

#[test]
fn test_analyze_key_is_id() {
    let rel = employees().analyze().unwrap();
    assert_eq!(rel.candidate_keys_bf(), vec![attrs(["id"])]);
}

#[test]
fn test_exclude_removes_column_from_domain() {
    let mut ds = employees();
    assert_eq!(ds.exclude(&["salary", "missing"]), 1);
    let rel = ds.analyze().unwrap();
    assert_eq!(rel.attrs(), &attrs(["dept", "dept_name", "id"]));
    assert!(rel.func_deps().iter().all(|fd| !fd.attrs().has("salary")));
    assert!(ds.skipped().any(|(i, why)| i == 3 && why == "salary"));
}

#[test]
fn test_empty_and_duplicate_headers_skipped() {
    let ds = DataSet::from_rows(
        "t",
        header(&["a", "", "a", "b"]),
        rows(&[&["1", "x", "1", "2"], &["2", "y", "2", "2"]]),
    )
    .unwrap();
    assert_eq!(ds.attrs(), attrs(["a", "b"]));
    assert_eq!(ds.skipped().count(), 2);
    let rel = ds.analyze().unwrap();
    assert_eq!(rel.func_deps(), &[FuncDep::new(attrs(["a"]), attrs(["b"]))]);
}

#[test]
fn test_ragged_row_rejected() {
    let result = DataSet::from_rows("t", header(&["a", "b"]), rows(&[&["1", "2"], &["3"]]));
    assert!(matches!(
        result,
        Err(InferError::RaggedRow {
            row: 2,
            found: 1,
            expected: 2,
            ..
        })
    ));
}

#[test]
fn test_read_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "order_id,customer,\"customer name\"").unwrap();
    writeln!(f, "1,c1,\"Smith, Ann\"").unwrap();
    writeln!(f, "2,c1,\"Smith, Ann\"").unwrap();
    writeln!(f, "3,c2,Bo").unwrap();
    drop(f);

    let ds = DataSet::read(&path).unwrap();
    assert_eq!(ds.name(), "orders");
    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.header()[2], "customer name");
    let rel = ds.analyze().unwrap();
    assert!(rel.implies(&FuncDep::new(attrs(["customer"]), attrs(["customer name"]))));
}

#[test]
fn test_read_tab_delimited() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pairs.tsv");
    std::fs::write(&path, "x\ty\n1\ta\n2\ta\n3\tb\n").unwrap();

    let ds = DataSet::read(&path).unwrap();
    assert_eq!(ds.name(), "pairs");
    let rel = ds.analyze().unwrap();
    assert_eq!(rel.func_deps(), &[FuncDep::new(attrs(["x"]), attrs(["y"]))]);
}

#[test]
fn test_read_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();
    assert!(matches!(
        DataSet::read(&path),
        Err(InferError::MissingHeader { .. })
    ));
}

#[test]
fn test_read_missing_file() {
    let result = DataSet::read(Path::new("/nonexistent/data.csv"));
    assert!(matches!(result, Err(InferError::Io { .. })));
}
