//! Scratch project directory holding an input and a target resources file.

use color_debterator::services::{self, RunOptions, RunSummary};
use palette_match::Tolerance;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestProject {
    dir: TempDir,
    pub input: PathBuf,
    pub target: PathBuf,
}

impl TestProject {
    pub fn new(input: &str, target: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input_path = dir.path().join("colors.xml");
        let target_path = dir.path().join("brand.xml");
        std::fs::write(&input_path, input).expect("write input");
        std::fs::write(&target_path, target).expect("write target");
        Self {
            dir,
            input: input_path,
            target: target_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an extra file into the project directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn input_text(&self) -> String {
        std::fs::read_to_string(&self.input).expect("read input")
    }

    /// Run the pipeline in-process.
    pub fn run(&self, tolerance: f64, dry_run: bool) -> RunSummary {
        self.try_run(tolerance, dry_run).expect("run succeeds")
    }

    pub fn try_run(
        &self,
        tolerance: f64,
        dry_run: bool,
    ) -> Result<RunSummary, color_debterator::error::AppError> {
        let options = RunOptions {
            tolerance: Tolerance::new(tolerance).expect("valid tolerance"),
            dry_run,
        };
        services::run(&self.input, &self.target, &options)
    }

    /// Run the compiled binary with the project files plus `args`.
    pub fn command(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_color-debterator"))
            .arg(&self.input)
            .arg(&self.target)
            .args(args)
            .env_remove("DEBTERATOR_CONFIG")
            .env("RUST_LOG", "color_debterator=info")
            .env("NO_COLOR", "1")
            .output()
            .expect("spawn color-debterator")
    }
}
