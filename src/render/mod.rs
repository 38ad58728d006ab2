pub mod terminal;

use anyhow::{Context, Result};

use crate::views::RenderedView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn format_view(view: &RenderedView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => terminal::render(view).context("Failed to render view"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize view")
        }
    }
}
