use crate::config::OutputFormat;
use crate::domain::Sample;
use crate::error::Result;
use serde_json::Value;

/// Renders a sample as JSON indented by two spaces. Placeholder tokens stay
/// plain strings. An absent sample renders as `None`; callers decide whether
/// that becomes `null` or is left out.
pub fn render(sample: &Sample) -> Result<Option<String>> {
    let rendered = sample
        .as_ref()
        .map(serde_json::to_string_pretty)
        .transpose()?;
    Ok(rendered)
}

/// Serializes a whole (annotated) document.
pub fn render_document(document: &Value, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
    };
    Ok(text)
}
