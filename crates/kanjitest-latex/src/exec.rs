use kanjitest_core::{KanjiError, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Options for running the renderer
#[derive(Debug, Clone)]
pub struct ExecOptions {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Result of a renderer run
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the renderer to completion and capture its output
///
/// stdin is closed so an interactive prompt cannot block the run. A process
/// killed by a signal reports exit code -1.
pub fn exec_latex(options: ExecOptions) -> Result<ExecResult> {
    log::debug!(
        "Running {} {} in {}",
        options.program.display(),
        options.args.join(" "),
        options.working_dir.display()
    );

    let start = Instant::now();
    let output = Command::new(&options.program)
        .args(&options.args)
        .current_dir(&options.working_dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => KanjiError::RendererNotFound {
                program: options.program.display().to_string(),
            },
            _ => KanjiError::io(&options.program, e),
        })?;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(ExecResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use kanjitest_testkit::temp_dir_in_workspace;

    #[test]
    fn test_exec_captures_exit_code_and_output() {
        let temp = temp_dir_in_workspace();
        let result = exec_latex(ExecOptions {
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".to_string(), "echo out; echo err >&2; exit 3".to_string()],
            working_dir: temp.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(result.exit_code, 3);
        assert!(!result.success());
        assert_eq!(result.stdout.trim(), "out");
        assert_eq!(result.stderr.trim(), "err");
    }

    #[test]
    fn test_exec_missing_program() {
        let temp = temp_dir_in_workspace();
        let result = exec_latex(ExecOptions {
            program: temp.path().join("no-such-latex"),
            args: Vec::new(),
            working_dir: temp.path().to_path_buf(),
        });

        assert!(matches!(result, Err(KanjiError::RendererNotFound { .. })));
    }
}
