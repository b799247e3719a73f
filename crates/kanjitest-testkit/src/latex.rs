//! Stand-in for pdflatex
//!
//! The fake renderer is a shell script: it appends the file it was asked to
//! render to `latex-calls.log`, then either fails with the configured exit
//! code or writes `<stem>.pdf`, `<stem>.aux` and `<stem>.log` in its working
//! directory, like pdflatex does.

use std::path::{Path, PathBuf};

/// File in the script directory recording every invocation, one per line
pub const CALLS_FILE: &str = "latex-calls.log";

/// Write an executable fake pdflatex into `dir`
///
/// # Panics
///
/// Panics if the script cannot be written or made executable
#[cfg(unix)]
pub fn write_fake_latex(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(dir).expect("Failed to create fake latex directory");
    let calls = dir.join(CALLS_FILE);
    let script = format!(
        r#"#!/bin/sh
for last; do :; done
echo "$last" >> '{calls}'
stem="${{last%.tex}}"
if [ {exit_code} -ne 0 ]; then
  echo "! LaTeX Error: fake failure in $last"
  exit {exit_code}
fi
printf '%%PDF-1.4\n' > "$stem.pdf"
: > "$stem.aux"
echo "fake log" > "$stem.log"
"#,
        calls = calls.display(),
        exit_code = exit_code
    );

    let path = dir.join("pdflatex");
    std::fs::write(&path, script).expect("Failed to write fake latex");
    let mut permissions = std::fs::metadata(&path)
        .expect("Failed to stat fake latex")
        .permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&path, permissions).expect("Failed to make fake latex executable");
    path
}

/// Files the fake renderer was invoked with, in call order
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join(CALLS_FILE))
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
