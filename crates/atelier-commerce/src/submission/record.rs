//! Accepted submission records.

use std::fmt;

use crate::error::CommerceError;
use crate::ids::{current_timestamp_ms, SubmissionId};
use crate::submission::ArtworkSubmission;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionStatus {
    #[default]
    #[serde(rename = "Pending Review")]
    PendingReview,
}

impl SubmissionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionStatus::PendingReview => "Pending Review",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A validated submission awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    #[serde(flatten)]
    pub form: ArtworkSubmission,
    pub status: SubmissionStatus,
    /// Unix timestamp of acceptance, in milliseconds.
    pub submitted_at_ms: i64,
}

impl Submission {
    /// Validate the form and accept it now.
    pub fn accept(form: ArtworkSubmission) -> Result<Self, CommerceError> {
        Self::accept_at(form, current_timestamp_ms())
    }

    /// Validate the form and accept it as of `timestamp_ms`.
    pub fn accept_at(form: ArtworkSubmission, timestamp_ms: i64) -> Result<Self, CommerceError> {
        form.validate()?;
        let submission = Self {
            id: SubmissionId::from_timestamp_ms(timestamp_ms),
            form,
            status: SubmissionStatus::PendingReview,
            submitted_at_ms: timestamp_ms,
        };
        info!(submission_id = %submission.id, title = %submission.form.title, "artwork submitted");
        Ok(submission)
    }
}
