use motiondash_core::MotionSamples;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Samples read from a JSON file that an external producer keeps rewriting.
///
/// `poll` reloads the file whenever its modification time moves. A failed
/// read keeps the previous samples and is retried on the next poll.
#[derive(Debug, Default)]
pub struct SampleSource {
    path: Option<PathBuf>,
    modified: Option<SystemTime>,
    samples: MotionSamples,
    last_error: Option<String>,
}

impl SampleSource {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let mut source = Self {
            path: Some(path.into()),
            ..Self::default()
        };
        source.poll();
        source
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn samples(&self) -> &MotionSamples {
        &self.samples
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` when a new set of samples was loaded.
    pub fn poll(&mut self) -> bool {
        let Some(path) = self.path.clone() else {
            return false;
        };
        let modified = match std::fs::metadata(&path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(err) => {
                self.record_error(format!("Failed to stat '{}': {err}", path.display()));
                return false;
            }
        };
        if self.modified == Some(modified) {
            return false;
        }
        match MotionSamples::load_from_file(&path) {
            Ok(samples) => {
                log::debug!(
                    "reloaded {} observations from {}",
                    samples.len(),
                    path.display()
                );
                self.samples = samples;
                self.modified = Some(modified);
                self.last_error = None;
                true
            }
            Err(err) => {
                self.record_error(format!("Failed to load '{}': {err}", path.display()));
                false
            }
        }
    }

    fn record_error(&mut self, message: String) {
        if self.last_error.as_deref() != Some(message.as_str()) {
            log::warn!("{message}");
        }
        self.last_error = Some(message);
    }
}
