use super::*;

fn temp_token() -> (tempfile::TempDir, TokenFile) {
    let dir = tempfile::tempdir().unwrap();
    let file = TokenFile::new(dir.path().join("nested").join("token"));
    (dir, file)
}

#[test]
fn missing_file_loads_as_none() {
    let (_dir, file) = temp_token();
    assert_eq!(file.load().unwrap(), None);
}

#[test]
fn save_then_load_trims_whitespace() {
    let (_dir, file) = temp_token();
    file.save("t1\n").unwrap();
    assert_eq!(file.load().unwrap(), Some("t1".to_owned()));
}

#[test]
fn blank_file_counts_as_logged_out() {
    let (_dir, file) = temp_token();
    file.save("   ").unwrap();
    assert_eq!(file.load().unwrap(), None);
}

#[test]
fn clear_removes_token_and_tolerates_absence() {
    let (_dir, file) = temp_token();
    file.save("t1").unwrap();
    file.clear().unwrap();
    assert_eq!(file.load().unwrap(), None);
    file.clear().unwrap();
}

#[cfg(unix)]
#[test]
fn saved_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, file) = temp_token();
    file.save("t1").unwrap();
    let mode = fs::metadata(file.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unreadable_path_reports_token_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = TokenFile::new(dir.path().to_path_buf());
    assert!(matches!(file.load(), Err(CliError::TokenFile { .. })));
}
