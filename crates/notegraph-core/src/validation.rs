//! Note collection validation.
//!
//! Graph construction accepts any input and repairs it structurally. Callers
//! that would rather reject malformed collections (non-unique or empty
//! slugs, typically a bug in the parsing layer) run a [`Validator`] first and
//! turn the report into an error with [`ValidationReport::into_result`].

use crate::error::{Error, Result};
use crate::models::Note;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational message (not a problem)
    Info,
    /// Warning (should be addressed but not critical)
    Warning,
    /// Error (should be fixed)
    Error,
    /// Critical error (must be fixed)
    Critical,
}

impl Severity {
    /// Check if this severity is considered a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::Critical)
    }
}

/// A validation issue found in a note collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Category of the issue ("slug", "link")
    pub category: String,
    pub message: String,
    /// Slug of the offending note, when there is one
    pub slug: Option<String>,
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            slug: None,
            suggestion: None,
        }
    }

    /// Attach the note slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set a suggested fix
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating a note collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether validation passed (no errors/critical issues)
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

/// Summary of validation results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub info_count: usize,
    pub warning_count: usize,
    pub error_count: usize,
    pub critical_count: usize,
}

impl ValidationReport {
    /// Create a new validation report
    pub fn new() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
            summary: ValidationSummary::default(),
        }
    }

    /// Add an issue to the report
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Info => self.summary.info_count += 1,
            Severity::Warning => self.summary.warning_count += 1,
            Severity::Error => {
                self.summary.error_count += 1;
                self.passed = false;
            }
            Severity::Critical => {
                self.summary.critical_count += 1;
                self.passed = false;
            }
        }

        self.issues.push(issue);
    }

    /// Get issues by severity
    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        !self.passed
    }

    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// Convert the first failure into an [`Error`].
    ///
    /// Duplicate slugs map to [`Error::DuplicateSlug`]; everything else to
    /// [`Error::ValidationError`].
    pub fn into_result(self) -> Result<()> {
        match self.issues.into_iter().find(|i| i.severity.is_failure()) {
            None => Ok(()),
            Some(issue) if issue.category == DUPLICATE_SLUG => {
                Err(Error::duplicate_slug(issue.slug.unwrap_or_default()))
            }
            Some(issue) => Err(Error::validation_error(issue.message)),
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

const EMPTY_SLUG: &str = "empty_slug";
const DUPLICATE_SLUG: &str = "duplicate_slug";
const DANGLING_LINK: &str = "dangling_link";
const SELF_LINK: &str = "self_link";
const REPEATED_LINK: &str = "repeated_link";

/// Validator over a whole note collection
pub trait Validator {
    /// Validate the notes and return a report
    fn validate(&self, notes: &[Note]) -> ValidationReport;

    /// Get validator name
    fn name(&self) -> &str;
}

/// Checks slug uniqueness and link targets
#[derive(Debug, Clone)]
pub struct NoteValidator {
    /// Report self links and repeated links as info
    report_link_style: bool,
}

impl Default for NoteValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteValidator {
    pub fn new() -> Self {
        Self {
            report_link_style: true,
        }
    }

    /// Toggle informational self-link / repeated-link issues
    pub fn report_link_style(mut self, report: bool) -> Self {
        self.report_link_style = report;
        self
    }

    fn validate_links(&self, note: &Note, known: &HashSet<&str>, report: &mut ValidationReport) {
        let mut seen = HashSet::new();
        for target in &note.outbound_links {
            if !known.contains(target.as_str()) {
                report.add_issue(
                    ValidationIssue::new(
                        Severity::Warning,
                        DANGLING_LINK,
                        format!("'{}' links to unknown note '{}'", note.slug, target),
                    )
                    .with_slug(&note.slug),
                );
            } else if self.report_link_style && target == &note.slug {
                report.add_issue(
                    ValidationIssue::new(
                        Severity::Info,
                        SELF_LINK,
                        format!("'{}' links to itself", note.slug),
                    )
                    .with_slug(&note.slug),
                );
            }

            if !seen.insert(target.as_str()) && self.report_link_style {
                report.add_issue(
                    ValidationIssue::new(
                        Severity::Info,
                        REPEATED_LINK,
                        format!("'{}' links to '{}' more than once", note.slug, target),
                    )
                    .with_slug(&note.slug)
                    .with_suggestion("Repeated links produce parallel edges"),
                );
            }
        }
    }
}

impl Validator for NoteValidator {
    fn validate(&self, notes: &[Note]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let known: HashSet<&str> = notes.iter().map(|n| n.slug.as_str()).collect();
        let mut seen = HashSet::new();

        for (position, note) in notes.iter().enumerate() {
            if note.slug.trim().is_empty() {
                report.add_issue(ValidationIssue::new(
                    Severity::Critical,
                    EMPTY_SLUG,
                    format!("Note at position {} has an empty slug", position),
                ));
                continue;
            }

            if !seen.insert(note.slug.as_str()) {
                report.add_issue(
                    ValidationIssue::new(
                        Severity::Error,
                        DUPLICATE_SLUG,
                        format!("Slug '{}' is used by more than one note", note.slug),
                    )
                    .with_slug(&note.slug)
                    .with_suggestion("Only the first note with this slug enters the graph"),
                );
            }

            self.validate_links(note, &known, &mut report);
        }

        report
    }

    fn name(&self) -> &str {
        "NoteValidator"
    }
}
