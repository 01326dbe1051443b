//! Artwork submission commands.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context as _, Result};
use atelier_commerce::prelude::*;
use chrono::{Local, TimeZone};

use super::SellArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the sell command.
pub async fn run(args: SellArgs, ctx: &Context) -> Result<()> {
    let image = match &args.image {
        Some(path) => Some(describe_image(path)?),
        None => None,
    };

    let form = ArtworkSubmission {
        artist_name: args.artist,
        email: args.email,
        phone: args.phone,
        title: args.title,
        medium: args.medium,
        dimensions: args.dimensions,
        price: args.price,
        description: args.description,
        image,
    };

    let submission = match Submission::accept(form) {
        Ok(submission) => submission,
        Err(CommerceError::InvalidSubmission(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&field_report(&errors));
            } else {
                for (field, message) in &errors {
                    ctx.output.warn(&format!("{}: {}", field, message));
                }
            }
            bail!("Submission has {} invalid field(s)", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    ctx.session.add_submission(submission.clone())?;

    if ctx.output.is_json() {
        ctx.output.json(&submission);
        return Ok(());
    }

    ctx.output.success("Submission Successful!");
    ctx.output.info(&format!(
        "Thank you for submitting \"{}\". Our team will review it and get back to you.",
        submission.form.title
    ));
    ctx.output.kv("Submission ID", submission.id.as_str());
    ctx.output
        .kv("Status", &status_badge(submission.status.display_name()));
    Ok(())
}

/// List recorded submissions.
pub async fn list(ctx: &Context) -> Result<()> {
    let submissions = ctx.session.load_submissions()?;

    if ctx.output.is_json() {
        ctx.output.json(&submissions);
        return Ok(());
    }

    ctx.output.header("Your Submissions");
    if submissions.is_empty() {
        ctx.output.info("No submissions yet. Run `atelier sell --help` to submit your art.");
        return Ok(());
    }

    for submission in &submissions {
        ctx.output.info("");
        ctx.output.list_item(&submission.form.title);
        if !submission.form.artist_name.is_empty() {
            ctx.output.kv("Artist", &submission.form.artist_name);
        }
        ctx.output.kv("Price", &submission.form.price);
        ctx.output
            .kv("Status", &status_badge(submission.status.display_name()));
        if let Some(at) = Local.timestamp_millis_opt(submission.submitted_at_ms).single() {
            ctx.output
                .kv("Submitted", &at.format("%Y-%m-%d %H:%M").to_string());
        }
    }
    Ok(())
}

/// JSON body for a rejected submission: one message per failing field.
fn field_report(errors: &BTreeMap<&'static str, String>) -> serde_json::Value {
    serde_json::json!({
        "status": "invalid",
        "fields": errors,
    })
}

/// Build the upload descriptor for an image file on disk.
fn describe_image(path: &Path) -> Result<ImageUpload> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ImageUpload {
        file_name,
        content_type: content_type_for(path).to_string(),
        size_bytes: metadata.len(),
    })
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
