//! TidyService - the entry point for the cleanup pipeline.

use tidymark_core::{dump, serialize};

use crate::{classify, html, sanitize, style, Result, TidyError};

/// Options for [`TidyService`].
#[derive(Debug, Clone)]
pub struct TidyOptions {
    /// Fraction of list items that must look like name/value pairs before a
    /// bare list is treated as a specification list. The score must be
    /// strictly greater than the threshold.
    pub spec_score_threshold: f64,

    /// Maximum characters of a text node shown by [`TidyService::inspect`].
    pub preview_width: usize,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            spec_score_threshold: 0.5,
            preview_width: 20,
        }
    }
}

/// The cleanup service.
///
/// Stateless apart from its options: every call parses a fresh tree,
/// mutates it, serializes, and discards it, so one service can be shared
/// freely across independent inputs.
pub struct TidyService {
    options: TidyOptions,
}

impl TidyService {
    /// Create a service with default options.
    pub fn new() -> Self {
        Self {
            options: TidyOptions::default(),
        }
    }

    /// Create a service with custom options.
    pub fn with_options(options: TidyOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &TidyOptions {
        &self.options
    }

    /// Get mutable access to options.
    pub fn options_mut(&mut self) -> &mut TidyOptions {
        &mut self.options
    }

    /// Strip presentation attributes and rewrite specification lists as
    /// tables.
    ///
    /// Fail-closed: if the input cannot be parsed, or the transformation
    /// comes back structurally empty, the original input is returned
    /// unchanged so the caller's working content is never destroyed.
    /// Empty or whitespace-only input is rejected before parsing.
    pub fn sanitize_and_restructure(&self, raw: &str) -> Result<String> {
        if raw.trim().is_empty() {
            return Err(TidyError::EmptyInput);
        }
        match self.run_cleanup(raw) {
            Ok(cleaned) => Ok(cleaned),
            Err(error) => {
                log::warn!("cleanup failed ({error}); returning input unchanged");
                Ok(raw.to_string())
            }
        }
    }

    /// Apply the visual-class vocabulary and table cell labels.
    ///
    /// Same boundary behavior as
    /// [`sanitize_and_restructure`](Self::sanitize_and_restructure):
    /// empty input is rejected, failures fall back to the unchanged input.
    pub fn stylize(&self, cleaned: &str) -> Result<String> {
        if cleaned.trim().is_empty() {
            return Err(TidyError::EmptyInput);
        }
        match self.run_stylize(cleaned) {
            Ok(styled) => Ok(styled),
            Err(error) => {
                log::warn!("stylize failed ({error}); returning input unchanged");
                Ok(cleaned.to_string())
            }
        }
    }

    /// Render the parsed tree as an indented diagnostic dump.
    ///
    /// Read-only and diagnostic-only; unlike the transforming operations it
    /// reports parse failures instead of echoing the input back.
    pub fn inspect(&self, raw: &str) -> Result<String> {
        if raw.trim().is_empty() {
            return Err(TidyError::EmptyInput);
        }
        let document = html::parse(raw)?;
        Ok(dump(&document, self.options.preview_width))
    }

    fn run_cleanup(&self, raw: &str) -> Result<String> {
        let mut document = html::parse(raw)?;
        sanitize::sanitize(&mut document);
        classify::restructure(&mut document, &self.options);

        let output = serialize(&document);
        if output.trim().is_empty() {
            return Err(TidyError::EmptyResult);
        }
        Ok(output)
    }

    fn run_stylize(&self, cleaned: &str) -> Result<String> {
        let mut document = html::parse(cleaned)?;
        style::apply_styles(&mut document);

        let output = serialize(&document);
        if output.trim().is_empty() {
            return Err(TidyError::EmptyResult);
        }
        Ok(output)
    }
}

impl Default for TidyService {
    fn default() -> Self {
        Self::new()
    }
}
