//! Artwork submission module.
//!
//! Contains the "sell your art" form, its validation rules, and the record
//! kept for an accepted submission.

mod form;
mod record;

pub use form::{ArtworkSubmission, ImageUpload, MAX_IMAGE_BYTES};
pub use record::{Submission, SubmissionStatus};
