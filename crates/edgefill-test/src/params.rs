//! Check bookkeeping for `tests/*_reg.rs`
//!
//! A regression test creates one [`RegParams`], runs numbered checks
//! through it, and asserts on [`RegParams::cleanup`] at the end. Failed
//! checks are collected instead of panicking so a single run reports
//! every broken check.

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use edgefill_core::Pix;
use std::path::PathBuf;

/// How a regression test treats its images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Checks only
    #[default]
    Compare,
    /// Checks, plus every image passed to `write_pix` is saved under
    /// `tests/regout/`
    Display,
}

impl RegTestMode {
    /// `REGTEST_MODE=display` selects [`RegTestMode::Display`]; anything
    /// else, or no variable, is [`RegTestMode::Compare`].
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test run
#[derive(Debug)]
pub struct RegParams {
    name: String,
    mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start the test called `name`, e.g. `"segment"` for `segment_reg`.
    pub fn new(name: &str) -> Self {
        let mode = RegTestMode::from_env();
        eprintln!("=== {}_reg ({:?}) ===", name, mode);
        Self {
            name: name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Record the outcome of the next check. `detail` is only built when
    /// the check failed.
    fn record(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{}_reg #{}: {}", self.name, self.index, detail());
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        ok
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!("expected {expected}, got {actual} (|diff| {diff} > {delta})")
        })
    }

    /// Check that two images have the same size, depth and pixels.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        match pix1.count_pixel_diffs(pix2) {
            Ok(n) => self.record(n == 0, || format!("{n} pixels differ")),
            Err(e) => self.record(false, || format!("images not comparable: {e}")),
        }
    }

    /// Check an arbitrary condition described by `what`.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.record(ok, || format!("{what} does not hold"))
    }

    /// Save `pix` as `<name>.<index>.<label>.png` in display mode.
    ///
    /// Returns the written path, or `None` in compare mode.
    pub fn write_pix(&mut self, pix: &Pix, label: &str) -> TestResult<Option<PathBuf>> {
        if !self.display() {
            return Ok(None);
        }
        let dir = PathBuf::from(regout_dir());
        std::fs::create_dir_all(&dir).map_err(|source| TestError::OutputDir {
            dir: dir.clone(),
            source,
        })?;
        let path = dir.join(format!("{}.{:02}.{}.png", self.name, self.index, label));
        edgefill_io::write_image(pix, &path).map_err(|source| TestError::Save {
            path: path.clone(),
            source,
        })?;
        eprintln!("saved {}", path.display());
        Ok(Some(path))
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} checks passed", self.name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} checks failed",
            self.name,
            self.failures.len(),
            self.index
        );
        for f in &self.failures {
            eprintln!("  {}", f);
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
