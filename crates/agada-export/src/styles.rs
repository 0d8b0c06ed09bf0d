use serde::{Deserialize, Serialize};

/// Visual configuration for the rendered report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    /// CSS font stack for body text.
    pub body_font: String,

    /// Accent color for the header rule and section borders.
    pub accent_color: String,

    /// Primary text color.
    pub text_color: String,

    /// Muted color for labels and the footer.
    pub muted_color: String,

    /// Heading size in px.
    pub heading_size: usize,

    /// Body text size in px.
    pub body_size: usize,

    /// Page padding in px.
    pub page_padding: usize,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "'Helvetica Neue', Arial, sans-serif".to_string(),
            accent_color: "#C45E3D".to_string(),
            text_color: "#1F2937".to_string(),
            muted_color: "#6B7280".to_string(),
            heading_size: 28,
            body_size: 14,
            page_padding: 30,
        }
    }
}
