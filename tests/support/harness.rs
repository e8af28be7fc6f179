use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for driving the
/// checkblock binary. HOME points inside the temp dir so no global config
/// leaks in, and colors are disabled so output can be matched as text.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with an empty working directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("home")).expect("Failed to create home dir");

        TestHarness {
            dir,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_checkblock")),
        }
    }

    /// Creates a harness with `.checkblock/config.yml` set to the given content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        let config_dir = harness.path().join(".checkblock");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("config.yml"), config_content).expect("Failed to write config");
        harness
    }

    /// Returns the working directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Runs the binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("CHECKBLOCK_QUIET")
            .output()
            .expect("Failed to run checkblock")
    }

    /// Runs the binary and asserts it succeeded, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "checkblock {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Runs the binary and asserts it failed, returning stderr.
    pub fn run_err(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "checkblock {:?} unexpectedly succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
