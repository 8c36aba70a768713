//! Image artifact constraints.
//!
//! A creation request may attach one image. The engine checks the media
//! type and size here before any upload call is made; a rejected artifact
//! must leave no trace in either store.

use crate::error::DomainError;

/// Maximum accepted image size: 1.5 MiB.
pub const MAX_IMAGE_BYTES: usize = 3 * 512 * 1024;

/// An uploaded image payload, as received at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original filename hint, used to derive the stored object key.
    pub file_name: String,
    /// Media type as declared by the client (e.g., "image/png").
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Check the artifact invariants: media type must be an image type and
    /// the payload must not exceed [`MAX_IMAGE_BYTES`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.content_type.contains("image") {
            return Err(DomainError::validation("File must be an image"));
        }

        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::validation("File must be less than 1.5MB"));
        }

        Ok(())
    }
}
