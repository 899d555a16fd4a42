use std::{fs, path::PathBuf};

use halfrpn::{CalcError, batch::Batch};

/// Creates an empty scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("halfrpn-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn lines_share_one_session_and_failures_do_not_stop_the_batch() {
    let mut batch = Batch::new();
    let outcomes = batch.run_source("  3 4 +\n# comment\n\n4 0 /\n(1 RES) (0 RES) *\n2..5\n(MEM)");

    let lines: Vec<_> = outcomes.iter().map(|o| o.line).collect();
    assert_eq!(lines, [1, 4, 5, 6, 7]);
    assert_eq!(outcomes[0].source, "3 4 +");
    assert!(matches!(outcomes[1].result, Err(CalcError::Eval(_))));
    assert!(matches!(outcomes[2].result, Err(CalcError::Eval(_))));
    assert!(matches!(outcomes[3].result, Err(CalcError::Lex(_))));
    assert_eq!(outcomes[4].result.as_ref().ok(), Some(&0.0));

    let results: Vec<_> = batch.session().results().collect();
    assert_eq!(results, [7.0, 0.0]);
}

#[test]
fn missing_file_is_an_io_error() {
    let mut batch = Batch::new();
    let path = scratch_dir("missing").join("nope.txt");

    match batch.run_path(&path) {
        Err(CalcError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn directory_files_run_in_name_order_with_one_session() {
    let dir = scratch_dir("walk");
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("a.txt"), "(2 MEM)\n1 1 +\n").unwrap();
    fs::write(dir.join("b.txt"), "(MEM) (0 RES) *\n").unwrap();
    fs::write(dir.join("nested").join("c.txt"), "(0 RES) 1 -\n").unwrap();
    fs::write(dir.join("skipped.rpn"), "9 9 +\n").unwrap();

    let mut batch = Batch::new();
    let reports = batch.run_path(&dir).unwrap();

    let names: Vec<_> = reports.iter()
                               .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
                               .collect();
    assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    assert_eq!(reports[1].outcomes[0].result.as_ref().ok(), Some(&4.0));
    assert_eq!(reports[2].outcomes[0].result.as_ref().ok(), Some(&3.0));
    assert_eq!(batch.session().len(), 4);

    let mut rpn = Batch::new().with_extension(".rpn");
    let reports = rpn.run_path(&dir).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(rpn.session().last(), Some(18.0));

    fs::remove_dir_all(&dir).unwrap();
}
