//! Injectable interfaces to the prompt-enhancement and image-generation services.
//!
//! Geometry derivation never depends on these; they are long-running requests
//! with no ordering guarantee relative to scene composition.

mod gate;
mod stub;

pub use gate::{RequestGate, RequestTicket};
pub use stub::{StubImageGenerator, StubPromptEnhancer};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CollaboratorError;

/// Locator of a generated image that the UI renders directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub url: String,
    /// Prompt the image was generated from.
    pub prompt: String,
}

/// Rewrites a style prompt with additional design detail.
#[async_trait]
pub trait PromptEnhancer: Send + Sync {
    /// Returns the enhanced prompt.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::EmptyInput`] for blank text, or
    /// [`CollaboratorError::Failed`] if the service call fails.
    async fn enhance_prompt(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Generates a top-view image of a room from a style prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns a reference to the generated image.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::EmptyInput`] for a blank prompt, or
    /// [`CollaboratorError::Failed`] if the service call fails.
    async fn generate_top_view(&self, prompt: &str) -> Result<ImageReference, CollaboratorError>;
}

/// Wraps a style prompt into the top-view floor-plan image request.
#[must_use]
pub fn top_view_prompt(prompt: &str) -> String {
    format!(
        "Top-view architectural floor plan of {}, clean lines, professional blueprint style, high contrast, 1024x1024",
        prompt.trim()
    )
}

pub(crate) fn require_text(text: &str) -> Result<&str, CollaboratorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CollaboratorError::EmptyInput);
    }
    Ok(trimmed)
}
