//! Test harness for lsgrid integration tests

use std::path::Path;
use std::process::Command;

pub use lsgrid::test_utils::TestDir;

/// Run the lsgrid binary in `dir`. Output is piped, so names come one per line.
pub fn run_lsgrid(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_lsgrid");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("LSGRID_LOG")
        .output()
        .expect("Failed to run lsgrid");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("test.txt", "hello");
        assert!(file_path.exists());
    }
}
