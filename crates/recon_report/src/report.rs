//! Canonical report delivered to the reporting sink.
//!
//! A report is a tagged union: exactly one kind is populated per instance.
//! A technology list always carries at least one finding; an empty scan is
//! `Report::Empty`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

use crate::finding::Finding;

/// Error from report construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A technology list was built with zero findings
    #[error("technology-list report requires at least one finding")]
    EmptyTechnologyList,
}

/// Non-empty, ordered list of findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Finding>", into = "Vec<Finding>")]
pub struct Findings(Vec<Finding>);

impl Findings {
    /// Wrap findings, refusing an empty list
    ///
    /// # Errors
    ///
    /// Returns error if `findings` is empty
    pub fn new(findings: Vec<Finding>) -> Result<Self, ReportError> {
        if findings.is_empty() {
            return Err(ReportError::EmptyTechnologyList);
        }
        Ok(Self(findings))
    }
}

impl Deref for Findings {
    type Target = [Finding];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Finding>> for Findings {
    type Error = ReportError;

    fn try_from(value: Vec<Finding>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Findings> for Vec<Finding> {
    fn from(findings: Findings) -> Self {
        findings.0
    }
}

/// Report kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Nothing detected
    Empty,
    /// One or more technologies detected
    TechnologyList,
    /// Unparsed tool output passed through
    Raw,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::TechnologyList => write!(f, "technology-list"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// Canonical report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Report {
    /// Nothing detected
    #[default]
    Empty,
    /// Detected technologies in tool order
    TechnologyList {
        /// Findings, never empty
        findings: Findings,
    },
    /// Raw tool output
    Raw {
        /// Output text
        raw: String,
    },
}

impl Report {
    /// Build the report for a list of findings: `Empty` when there are none,
    /// `TechnologyList` otherwise
    #[must_use]
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        match Findings::new(findings) {
            Ok(findings) => Self::TechnologyList { findings },
            Err(ReportError::EmptyTechnologyList) => Self::Empty,
        }
    }

    /// The populated kind
    #[must_use]
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Empty => ReportKind::Empty,
            Self::TechnologyList { .. } => ReportKind::TechnologyList,
            Self::Raw { .. } => ReportKind::Raw,
        }
    }

    /// Findings carried by the report, empty for non-list kinds
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        match self {
            Self::TechnologyList { findings } => &findings[..],
            Self::Empty | Self::Raw { .. } => &[],
        }
    }
}
