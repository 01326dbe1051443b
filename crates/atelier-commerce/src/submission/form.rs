//! The artwork submission form and its validation rules.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::CommerceError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Largest accepted image upload (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Descriptor of the image attached to a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    /// MIME type (e.g., "image/png").
    pub content_type: String,
    pub size_bytes: u64,
}

impl ImageUpload {
    /// Check the type and size constraints on an upload.
    pub fn check(&self) -> Result<(), &'static str> {
        if !image_type_pattern().is_match(&self.content_type) {
            return Err("Please upload a JPEG or PNG image");
        }
        if self.size_bytes > MAX_IMAGE_BYTES {
            return Err("Image size must be less than 5MB");
        }
        Ok(())
    }
}

/// The "sell your art" form as entered.
///
/// Fields stay as typed so a rejected form can be shown back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSubmission {
    pub artist_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub medium: String,
    pub dimensions: String,
    /// Asking price as entered.
    pub price: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl ArtworkSubmission {
    /// Validate every field, collecting one message per failing field.
    ///
    /// Title, price and image are required. Email and phone are optional
    /// but checked when present.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut errors: BTreeMap<&'static str, String> = BTreeMap::new();

        if self.title.chars().count() < 3 {
            errors.insert("title", "Title must be at least 3 characters".to_string());
        }

        if self.asking_price().is_none() {
            errors.insert("price", "Please enter a valid price".to_string());
        }

        match &self.image {
            None => {
                errors.insert("image", "Please upload an image of your artwork".to_string());
            }
            Some(image) => {
                if let Err(msg) = image.check() {
                    errors.insert("image", msg.to_string());
                }
            }
        }

        if !self.email.is_empty() && !email_pattern().is_match(&self.email) {
            errors.insert("email", "Please enter a valid email address".to_string());
        }

        if !self.phone.is_empty() {
            let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
            if !phone_pattern().is_match(&digits) {
                errors.insert("phone", "Please enter a valid 10-digit phone number".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::InvalidSubmission(errors))
        }
    }

    /// The asking price, if it parses as a positive number.
    pub fn asking_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Indian mobile numbers: ten digits starting 6-9.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone regex"))
}

fn image_type_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^image/(jpeg|jpg|png)$").expect("valid image type regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ArtworkSubmission {
        ArtworkSubmission {
            artist_name: "Meera Rao".to_string(),
            title: "Monsoon Light".to_string(),
            price: "4500".to_string(),
            medium: "Watercolor".to_string(),
            image: Some(ImageUpload {
                file_name: "monsoon.png".to_string(),
                content_type: "image/png".to_string(),
                size_bytes: 1_200_000,
            }),
            ..Default::default()
        }
    }

    fn field_errors(form: &ArtworkSubmission) -> BTreeMap<&'static str, String> {
        match form.validate() {
            Err(CommerceError::InvalidSubmission(errors)) => errors,
            other => panic!("expected invalid submission, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = field_errors(&ArtworkSubmission::default());
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(fields, vec!["image", "price", "title"]);
        assert_eq!(errors["image"], "Please upload an image of your artwork");
    }

    #[test]
    fn test_short_title() {
        let mut form = valid();
        form.title = "Ab".to_string();
        assert!(field_errors(&form).contains_key("title"));
    }

    #[test]
    fn test_price_must_be_positive_number() {
        for bad in ["0", "-5", "abc", "", "NaN"] {
            let mut form = valid();
            form.price = bad.to_string();
            assert!(field_errors(&form).contains_key("price"), "price {:?}", bad);
        }

        let mut form = valid();
        form.price = " 2499.50 ".to_string();
        assert_eq!(form.asking_price(), Some(2499.5));
    }

    #[test]
    fn test_image_type_and_size() {
        let mut form = valid();
        form.image.as_mut().unwrap().content_type = "image/gif".to_string();
        assert_eq!(field_errors(&form)["image"], "Please upload a JPEG or PNG image");

        let mut form = valid();
        form.image.as_mut().unwrap().size_bytes = MAX_IMAGE_BYTES + 1;
        assert_eq!(field_errors(&form)["image"], "Image size must be less than 5MB");

        let mut form = valid();
        form.image.as_mut().unwrap().content_type = "image/jpeg".to_string();
        form.image.as_mut().unwrap().size_bytes = MAX_IMAGE_BYTES;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_optional_email() {
        let mut form = valid();
        form.email = "not-an-email".to_string();
        assert!(field_errors(&form).contains_key("email"));

        form.email = "meera@example.in".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_optional_phone_ignores_spaces() {
        let mut form = valid();
        form.phone = "98765 43210".to_string();
        assert!(form.validate().is_ok());

        form.phone = "12345 67890".to_string();
        assert!(field_errors(&form).contains_key("phone"));

        form.phone = "987654321".to_string();
        assert!(field_errors(&form).contains_key("phone"));
    }
}
