//! Rendering configuration

/// Configuration for text rendering of steps and results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Show step matrices as fractions where possible
    pub fractions: bool,
    /// Mark the current row, pivot column and multiplier cell
    pub highlight: bool,
    /// Minimum width of each matrix cell in characters
    pub cell_width: usize,
    /// Width of the progress bar in characters
    pub progress_width: usize,
}

impl RenderConfig {
    /// Plain output: decimals, no highlight markers
    pub fn plain() -> Self {
        Self {
            fractions: false,
            highlight: false,
            ..Self::default()
        }
    }

    /// Toggle fraction display for step matrices
    pub fn with_fractions(mut self, fractions: bool) -> Self {
        self.fractions = fractions;
        self
    }

    /// Toggle highlight markers
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the minimum cell width
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Set the progress bar width; 0 hides the bar
    pub fn with_progress_width(mut self, progress_width: usize) -> Self {
        self.progress_width = progress_width;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractions: true,
            highlight: true,
            cell_width: 4,
            progress_width: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RenderConfig::default()
            .with_fractions(false)
            .with_cell_width(8)
            .with_progress_width(0);
        assert!(!config.fractions);
        assert!(config.highlight);
        assert_eq!(config.cell_width, 8);
        assert_eq!(config.progress_width, 0);

        let plain = RenderConfig::plain();
        assert!(!plain.fractions && !plain.highlight);
        assert_eq!(plain.cell_width, RenderConfig::default().cell_width);
    }
}
