use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{require_text, top_view_prompt, ImageGenerator, ImageReference, PromptEnhancer};
use crate::error::CollaboratorError;

const ENHANCEMENT_SUFFIX: &str =
    "with modern architectural details, optimal lighting, and premium materials in a contemporary style";

const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=400&fit=crop";

/// Simulated prompt enhancer: waits, then appends a fixed style description.
#[derive(Debug, Clone)]
pub struct StubPromptEnhancer {
    delay: Duration,
}

impl StubPromptEnhancer {
    /// Creates a stub with the default two-second delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(2))
    }

    /// Creates a stub with a custom delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubPromptEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptEnhancer for StubPromptEnhancer {
    async fn enhance_prompt(&self, text: &str) -> Result<String, CollaboratorError> {
        let text = require_text(text)?;
        debug!(delay_ms = self.delay.as_millis(), "simulating prompt enhancement");
        tokio::time::sleep(self.delay).await;
        Ok(format!("{text} {ENHANCEMENT_SUFFIX}"))
    }
}

/// Simulated image generator: waits, then returns a fixed placeholder image.
#[derive(Debug, Clone)]
pub struct StubImageGenerator {
    delay: Duration,
    url: String,
}

impl StubImageGenerator {
    /// Creates a stub with the default three-second delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(3))
    }

    /// Creates a stub with a custom delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            url: PLACEHOLDER_IMAGE_URL.to_owned(),
        }
    }

    /// Overrides the returned image URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for StubImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for StubImageGenerator {
    async fn generate_top_view(&self, prompt: &str) -> Result<ImageReference, CollaboratorError> {
        let prompt = require_text(prompt)?;
        debug!(delay_ms = self.delay.as_millis(), "simulating top-view generation");
        tokio::time::sleep(self.delay).await;
        Ok(ImageReference {
            url: self.url.clone(),
            prompt: top_view_prompt(prompt),
        })
    }
}
