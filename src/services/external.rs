use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::core::{format_summary, MatchError, SIMILARITY_CEILING, SIMILARITY_FLOOR};
use crate::models::{MatchQuery, MatchResult};

/// Default upper bound on one external matcher run
pub const DEFAULT_EXTERNAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Line printed by the external matcher on stdout
///
/// Unknown fields (such as a pre-rendered `summary`) are ignored.
#[derive(Debug, Clone, Deserialize)]
struct ExternalMatchOutput {
    name: String,
    specialty: String,
    region: String,
    city: String,
    similarity: f64,
    latitude: f64,
    longitude: f64,
    bio: String,
}

/// Failure kinds an external matcher reports on stdout instead of stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalErrorKind {
    NotFound,
}

/// Line printed by the external matcher when no directory entry fits
///
/// `{"error": "not_found", "specialty": "FIV", "region": "ZZ"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalNotFound {
    pub error: ExternalErrorKind,
    pub specialty: String,
    pub region: String,
}

impl ExternalNotFound {
    pub fn new(specialty: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            error: ExternalErrorKind::NotFound,
            specialty: specialty.into(),
            region: region.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExternalLine {
    NotFound(ExternalNotFound),
    Match(ExternalMatchOutput),
}

impl From<ExternalMatchOutput> for MatchResult {
    fn from(output: ExternalMatchOutput) -> Self {
        let mut result = MatchResult {
            name: output.name,
            specialty: output.specialty,
            region: output.region,
            city: output.city,
            similarity: output.similarity,
            latitude: output.latitude,
            longitude: output.longitude,
            bio: output.bio,
            summary: String::new(),
        };
        result.summary = format_summary(&result);
        result
    }
}

/// Delegated backend: runs a separate matcher process per request
///
/// The process receives `age region specialty` as its last three arguments
/// and must print exactly one JSON line: a match, or an [`ExternalNotFound`]
/// report. Anything written to stderr fails the request.
#[derive(Debug, Clone)]
pub struct DelegatedMatcher {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl DelegatedMatcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_EXTERNAL_TIMEOUT,
        }
    }

    /// Arguments passed before the query arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the external matcher for one query
    ///
    /// The child is killed if it outlives the timeout.
    pub async fn invoke(&self, query: &MatchQuery) -> Result<MatchResult, MatchError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(query.age.to_string())
            .arg(&query.region)
            .arg(&query.specialty)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!("Spawning external matcher: {}", self.program.display());

        let child = command.spawn().map_err(|e| {
            MatchError::ExternalMatchError(format!(
                "failed to start {}: {}",
                self.program.display(),
                e
            ))
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output.map_err(|e| {
                MatchError::ExternalMatchError(format!("failed to collect matcher output: {}", e))
            })?,
            Err(_) => return Err(MatchError::ExternalMatchTimeout(self.timeout)),
        };

        // Any byte on stderr is fatal, blank lines included
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => "matcher wrote blank output to stderr".to_string(),
                text => text.to_string(),
            };
            return Err(MatchError::ExternalMatchError(message));
        }

        if !output.status.success() {
            return Err(MatchError::ExternalMatchError(format!(
                "matcher exited with {}",
                output.status
            )));
        }

        parse_output(&output.stdout)
    }
}

/// Parse the single JSON line an external matcher prints
///
/// A not-found report becomes [`MatchError::NotFound`], the same error the
/// embedded selector returns.
pub fn parse_output(stdout: &[u8]) -> Result<MatchResult, MatchError> {
    let text = std::str::from_utf8(stdout)
        .map_err(|e| MatchError::MalformedExternalOutput(format!("stdout is not UTF-8: {}", e)))?;

    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let line = lines
        .next()
        .ok_or_else(|| MatchError::MalformedExternalOutput("empty stdout".to_string()))?;
    if lines.next().is_some() {
        return Err(MatchError::MalformedExternalOutput(
            "expected exactly one line of output".to_string(),
        ));
    }

    let output = match serde_json::from_str(line) {
        Ok(ExternalLine::Match(output)) => output,
        Ok(ExternalLine::NotFound(report)) => {
            return Err(MatchError::NotFound {
                specialty: report.specialty,
                region: report.region,
            });
        }
        Err(e) => return Err(MatchError::MalformedExternalOutput(format!("{}: {}", e, line))),
    };

    if !(SIMILARITY_FLOOR..=SIMILARITY_CEILING).contains(&output.similarity) {
        return Err(MatchError::MalformedExternalOutput(format!(
            "similarity {} outside [{}, {}]",
            output.similarity, SIMILARITY_FLOOR, SIMILARITY_CEILING
        )));
    }

    Ok(output.into())
}
