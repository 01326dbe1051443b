//! Session storage: the cart and submitted artworks, kept as JSON files in
//! the session directory between invocations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use atelier_commerce::cart::Cart;
use atelier_commerce::submission::Submission;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const CART_FILE: &str = "cart.json";
const SUBMISSIONS_FILE: &str = "artwork_submissions.json";

/// File-backed store for one browsing session.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the session cart. A missing file is an empty cart.
    pub fn load_cart(&self) -> Result<Cart> {
        Ok(self.read(CART_FILE)?.unwrap_or_default())
    }

    pub fn save_cart(&self, cart: &Cart) -> Result<()> {
        self.write(CART_FILE, cart)
    }

    /// All recorded submissions, oldest first.
    pub fn load_submissions(&self) -> Result<Vec<Submission>> {
        Ok(self.read(SUBMISSIONS_FILE)?.unwrap_or_default())
    }

    /// Append a submission to the recorded list.
    pub fn add_submission(&self, submission: Submission) -> Result<()> {
        let mut submissions = self.load_submissions()?;
        submissions.push(submission);
        self.write(SUBMISSIONS_FILE, &submissions)
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt session file: {}", path.display()))?;
        Ok(Some(value))
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create session directory: {}", self.dir.display())
        })?;

        let path = self.dir.join(name);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write session file: {}", path.display()))?;
        debug!(path = %path.display(), "session file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_commerce::prelude::*;

    fn artwork(id: &str, price: u64) -> Artwork {
        Artwork::new(id, "Title", "Artist", Price::new(price), Category::Paintings)
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session"));

        assert!(store.load_cart().unwrap().is_empty());
        assert!(store.load_submissions().unwrap().is_empty());
    }

    #[test]
    fn test_cart_persists_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session"));

        let mut cart = Cart::new();
        cart.add_to_cart(artwork("a2", 12000));
        cart.add_to_cart(artwork("a1", 4000));
        store.save_cart(&cart).unwrap();

        let loaded = store.load_cart().unwrap();
        assert_eq!(loaded, cart);
        assert_eq!(loaded.total_price(), Price::new(16000));
    }

    #[test]
    fn test_submissions_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        for (i, title) in ["First Light", "Second Wind"].iter().enumerate() {
            let form = ArtworkSubmission {
                title: title.to_string(),
                price: "1000".to_string(),
                image: Some(ImageUpload {
                    file_name: "art.png".to_string(),
                    content_type: "image/png".to_string(),
                    size_bytes: 10,
                }),
                ..Default::default()
            };
            store
                .add_submission(Submission::accept_at(form, i as i64 + 1).unwrap())
                .unwrap();
        }

        let titles: Vec<_> = store
            .load_submissions()
            .unwrap()
            .into_iter()
            .map(|s| s.form.title)
            .collect();
        assert_eq!(titles, vec!["First Light", "Second Wind"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CART_FILE), "not json").unwrap();
        let store = SessionStore::new(dir.path());

        let err = store.load_cart().unwrap_err();
        assert!(format!("{:#}", err).contains("Corrupt session file"));
    }
}
