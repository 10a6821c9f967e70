//! Builder pattern for layout reconstruction options.
//!
//! Provides a fluent API over `LayoutOptions`.
//!
//! # Example
//! ```
//! use reflow_core::api::LayoutBuilder;
//! use reflow_core::reorder::SortAlgorithm;
//!
//! let options = LayoutBuilder::new()
//!     .exclude_header(false)
//!     .sort_algorithm(SortAlgorithm::Simple)
//!     .build()
//!     .unwrap();
//! assert!(!options.exclude_header);
//! ```

use crate::assemble::CompactLineAlgorithm;
use crate::error::Result;
use crate::params::{LayoutOptions, ScannedThreshold};
use crate::reorder::SortAlgorithm;

/// A builder for configuring layout reconstruction.
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    options: LayoutOptions,
}

impl LayoutBuilder {
    /// Creates a builder carrying the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops or keeps words in the header band.
    pub fn exclude_header(mut self, enabled: bool) -> Self {
        self.options.exclude_header = enabled;
        self
    }

    /// Drops or keeps words in the footer band.
    pub fn exclude_footer(mut self, enabled: bool) -> Self {
        self.options.exclude_footer = enabled;
        self
    }

    /// Disables normalization and fake-bold de-duplication.
    pub fn raw(mut self, enabled: bool) -> Self {
        self.options.raw = enabled;
        self
    }

    /// Sets the header band as a fraction of the page height.
    pub fn header_from_height_percentage(mut self, percentage: f64) -> Self {
        self.options.header_from_height_percentage = percentage;
        self
    }

    /// Sets the footer band start as a fraction of the page height.
    pub fn footer_from_height_percentage(mut self, percentage: f64) -> Self {
        self.options.footer_from_height_percentage = percentage;
        self
    }

    /// Enables or disables merging of close text neighbors.
    pub fn merge_close_text_neighbor(mut self, enabled: bool) -> Self {
        self.options.merge_close_text_neighbor = enabled;
        self
    }

    /// Selects the reading-order comparator.
    pub fn sort_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.options.sort_algorithm = algorithm;
        self
    }

    /// Selects the compact line grouping rule.
    pub fn compact_line_algorithm(mut self, algorithm: CompactLineAlgorithm) -> Self {
        self.options.compact_line_algorithm = algorithm;
        self
    }

    /// Sets the scanned-classification thresholds.
    pub fn scanned_threshold(mut self, threshold: ScannedThreshold) -> Self {
        self.options.scanned_threshold = threshold;
        self
    }

    /// Validates and returns the configured options.
    pub fn build(self) -> Result<LayoutOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn builder_defaults_match_options_defaults() {
        let built = LayoutBuilder::new().build().expect("defaults are valid");
        assert_eq!(built, LayoutOptions::default());
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let err = LayoutBuilder::new()
            .header_from_height_percentage(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument(_)));
    }
}
