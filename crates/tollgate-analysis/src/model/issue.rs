//! A single static-analysis finding and its stable identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::Severity;

/// Stable identity of an issue across builds.
///
/// Two issues with the same fingerprint are the same finding, even if their
/// line numbers or formatting differ between runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap a host-supplied fingerprint as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// xxh3 of the given parts, rendered as 16 lowercase hex digits.
    ///
    /// Parts are separated by a NUL byte so `["ab", "c"]` and `["a", "bc"]`
    /// hash differently.
    pub fn from_parts(parts: &[&str]) -> Self {
        let joined = parts.join("\u{0}");
        Self(format!("{:016x}", xxh3_64(joined.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One finding reported by an analysis tool. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub fingerprint: Fingerprint,
    pub severity: Severity,
    /// Id of the tool that reported the issue.
    pub origin: String,
    pub file: String,
    pub package: String,
    pub module: String,
    pub category: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub message: String,
    pub line_start: u32,
    pub line_end: u32,
}

impl Issue {
    pub fn builder() -> IssueBuilder {
        IssueBuilder::default()
    }
}

/// Builder for [`Issue`].
///
/// When no fingerprint is given, one is derived from file, line range,
/// message and category.
#[derive(Debug, Clone, Default)]
pub struct IssueBuilder {
    fingerprint: Option<Fingerprint>,
    severity: Option<Severity>,
    origin: String,
    file: String,
    package: String,
    module: String,
    category: String,
    issue_type: String,
    message: String,
    line_start: u32,
    line_end: Option<u32>,
}

impl IssueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(Fingerprint::new(fingerprint));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Single-line location.
    pub fn line(mut self, line: u32) -> Self {
        self.line_start = line;
        self.line_end = Some(line);
        self
    }

    pub fn line_range(mut self, start: u32, end: u32) -> Self {
        self.line_start = start.min(end);
        self.line_end = Some(start.max(end));
        self
    }

    pub fn build(self) -> Issue {
        let line_end = self.line_end.unwrap_or(self.line_start);
        let fingerprint = self.fingerprint.unwrap_or_else(|| {
            let range = format!("{}-{}", self.line_start, line_end);
            Fingerprint::from_parts(&[&self.file, &range, &self.message, &self.category])
        });

        Issue {
            fingerprint,
            severity: self.severity.unwrap_or(Severity::WarningNormal),
            origin: self.origin,
            file: self.file,
            package: self.package,
            module: self.module,
            category: self.category,
            issue_type: self.issue_type,
            message: self.message,
            line_start: self.line_start,
            line_end,
        }
    }
}
