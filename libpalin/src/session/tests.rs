use std::{fs, path::PathBuf};

use assert2::{check, let_assert};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use super::*;

fn session(strategy: Strategy, max_depth: usize) -> Session {
    crate::init_interner();
    Session::new(Config {
        strategy,
        max_depth,
    })
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "libpalin-{}-{name}.txt",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn auto_recurses_under_the_limit() {
    let s = session(Strategy::Auto, 10);
    let_assert!(Ok(v) = s.check_src("[1, 2, 3, 2, 1]"));
    assert_eq!(
        v,
        Verdict {
            len: 5,
            depth: Some(3),
            strategy: Strategy::Recursive,
            is_palindrome: true,
        }
    );
    assert_snapshot!(v.to_string(), @"[true] # length 5, checked recursively (depth 3)");
}

#[test]
fn auto_iterates_over_the_limit() {
    let s = session(Strategy::Auto, 2);
    let_assert!(Ok(v) = s.check_src("[1, 2, 3, 2, 1]"));
    check!(v.strategy == Strategy::Iterative);
    check!(v.depth == None);
    check!(v.is_palindrome);
    assert_snapshot!(v.to_string(), @"[true] # length 5, checked iteratively");
}

#[test]
fn recursive_refuses_lists_deeper_than_the_limit() {
    let s = session(Strategy::Recursive, 2);
    check!(s.check_src("[1, 2, 2, 1]").is_ok());
    let_assert!(Err(e) = s.check_src("[1, 2, 3, 2, 1]"));
    check!(e == Err::MaxRecursionDepthExceeded { depth: 3, limit: 2 });
}

#[test]
fn iterative_ignores_the_limit() {
    let s = session(Strategy::Iterative, 0);
    let_assert!(Ok(v) = s.check_src(r#""abca""#));
    check!(!v.is_palindrome);
    check!(v.strategy == Strategy::Iterative);
}

#[test]
fn default_config_survives_a_long_list() {
    let s = Session::default();
    let n = 3 * DEFAULT_MAX_DEPTH;
    let list: Node<usize> = (0..n).chain((0..n).rev()).collect();
    let_assert!(Ok(v) = s.check(&list));
    check!(v.is_palindrome);
    check!(v.strategy == Strategy::Iterative);
}

#[test]
fn default_limit_fits_a_spawned_thread() {
    let n = DEFAULT_MAX_DEPTH;
    let list: Node<usize> = (0..n).chain((0..n).rev()).collect();
    let handle = std::thread::spawn(move || Session::default().check(&list));
    let_assert!(Ok(Ok(v)) = handle.join());
    check!(v.is_palindrome);
    check!(v.strategy == Strategy::Recursive);
    check!(v.depth == Some(DEFAULT_MAX_DEPTH));
}

#[test]
fn empty_sequence_is_reported_as_not_a_palindrome() {
    for strategy in [Strategy::Recursive, Strategy::Iterative, Strategy::Auto] {
        let s = session(strategy, 10);
        let_assert!(Ok(v) = s.check_src("[]"));
        check!(!v.is_palindrome, "{strategy}");
        check!(v.len == 0);
    }
}

#[test]
fn strategies_parse_from_names() {
    check!("recursive".parse::<Strategy>() == Ok(Strategy::Recursive));
    check!("iter".parse::<Strategy>() == Ok(Strategy::Iterative));
    check!("auto".parse::<Strategy>() == Ok(Strategy::Auto));
    let_assert!(Err(Err::UnknownStrategy(name)) = "sideways".parse::<Strategy>());
    check!(name == "sideways");
}

#[test]
fn check_lines_skips_blanks_and_comments() {
    let s = session(Strategy::Auto, 100);
    let src = "# palindromes\n[1 2 1]\n\n   \n\"ab\"\n[1, 2\n";
    let reports = s.check_lines(src);

    let line_nos: Vec<usize> = reports.iter().map(|r| r.line_no).collect();
    assert_eq!(line_nos, vec![2, 5, 6]);

    let_assert!(Ok(first) = &reports[0].outcome);
    check!(first.is_palindrome);
    let_assert!(Ok(second) = &reports[1].outcome);
    check!(!second.is_palindrome);
    let_assert!(Err(Err::ParseError(_)) = &reports[2].outcome);
    check!(reports[2].src == "[1, 2");
}

#[test]
fn load_and_reload_a_file() {
    let mut s = session(Strategy::Auto, 100);
    let path = scratch_file("load", "[a b a]\n[a b]\n");

    let_assert!(Ok(reports) = s.load_file(&path));
    check!(reports.len() == 2);
    check!(s.loaded_files().collect::<Vec<_>>() == vec![path.as_path()]);

    fs::write(&path, "[a]\n").unwrap();
    let reloaded = s.reload();
    check!(reloaded.len() == 1);
    let_assert!(Ok(reports) = &reloaded[0].1);
    check!(reports.len() == 1);

    check!(s.unload(&path));
    check!(!s.unload(&path));
    check!(s.reload().is_empty());
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let mut s = session(Strategy::Auto, 100);
    let path = std::env::temp_dir().join("libpalin-this-file-does-not-exist.txt");
    let_assert!(Err(Err::IoError(_)) = s.load_file(&path));
    check!(s.loaded_files().next().is_none());
}
