//! Transcript sink.
//!
//! Records every request/response pair to a timestamped artifact named
//! after the expert. Write-only; nothing in the crate reads artifacts back.
//! A write failure propagates and aborts the invocation that produced it.

use crate::error::SavantError;
use std::path::{Path, PathBuf};

/// Write-only sink for request/response transcripts.
#[derive(Debug, Clone)]
pub struct TranscriptSink {
    dir: PathBuf,
}

impl TranscriptSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record a single exchange. Returns the artifact path.
    pub fn record(
        &self,
        expert: &str,
        message: &str,
        response: &str,
    ) -> Result<PathBuf, SavantError> {
        let body = format!(
            "Expert Name: {}\n\nResponse: {}\n\nOriginal Message: {}\n",
            expert, response, message
        );
        self.write_artifact(expert, &body)
    }

    /// Record a whole batch as a single artifact.
    pub fn record_batch(
        &self,
        expert: &str,
        messages: &[String],
        responses: &[String],
    ) -> Result<PathBuf, SavantError> {
        let mut body = format!("Expert Name: {}\n\nResponses:\n", expert);
        for response in responses {
            body.push_str("- ");
            body.push_str(response);
            body.push('\n');
        }
        body.push_str("\nOriginal Messages:\n");
        for message in messages {
            body.push_str("- ");
            body.push_str(message);
            body.push('\n');
        }
        self.write_artifact(expert, &body)
    }

    fn write_artifact(&self, expert: &str, body: &str) -> Result<PathBuf, SavantError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SavantError::FileAccess(format!(
                "Failed to create transcript directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        let path = self.dir.join(format!("{}_{}.txt", timestamp, expert));
        std::fs::write(&path, body).map_err(|e| {
            SavantError::FileAccess(format!("Failed to write transcript {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}
