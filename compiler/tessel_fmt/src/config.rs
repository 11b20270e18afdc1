//! Formatter configuration.

/// Neighbours consulted per classification.
pub const NEIGHBORS: usize = 11;

/// Largest context distance at which an exemplar may still vote.
pub const MAX_CONTEXT_DISTANCE: f64 = 0.4;

/// Spaces added by `Indent` and `IndentFromAncestorFirstToken`.
pub const INDENT_WIDTH: u32 = 4;

/// Columns a tab counts for in width features.
pub const TAB_SIZE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatConfig {
    pub k: usize,
    /// Confidence gate in `[0, 1]`; see [`MAX_CONTEXT_DISTANCE`].
    pub max_context_distance: f64,
    pub indent_width: u32,
    pub tab_size: u32,
    /// Record a [`TokenPositionAnalysis`](crate::TokenPositionAnalysis) per
    /// token. Costs one extra neighbour search per classifier per token.
    pub collect_analysis: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            k: NEIGHBORS,
            max_context_distance: MAX_CONTEXT_DISTANCE,
            indent_width: INDENT_WIDTH,
            tab_size: TAB_SIZE,
            collect_analysis: true,
        }
    }
}

impl FormatConfig {
    #[must_use]
    pub fn with_k(self, k: usize) -> Self {
        Self { k, ..self }
    }

    #[must_use]
    pub fn with_max_context_distance(self, max_context_distance: f64) -> Self {
        Self {
            max_context_distance,
            ..self
        }
    }

    #[must_use]
    pub fn with_indent_width(self, indent_width: u32) -> Self {
        Self {
            indent_width,
            ..self
        }
    }

    #[must_use]
    pub fn with_tab_size(self, tab_size: u32) -> Self {
        Self { tab_size, ..self }
    }

    #[must_use]
    pub fn with_analysis(self, collect_analysis: bool) -> Self {
        Self {
            collect_analysis,
            ..self
        }
    }
}
