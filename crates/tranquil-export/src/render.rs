use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::ResultsReport;

/// Plain-text summary used when no custom template is configured.
pub const DEFAULT_RESULTS_TEMPLATE: &str = "\
Your results: {{ questionnaire_name }}
Answered {{ answered }} of {{ total }} questions.

Recommended support:
{% for category in recommendations %}{{ loop.index }}. {{ category.name }} (score {{ category.score }})
   {{ category.description }}
{% endfor %}";

/// Render a Tera template with a ResultsReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The `report` fields become the template context variables.
pub fn render_results(
    template_name: &str,
    template_content: &str,
    report: &ResultsReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the report to a Tera context via serde_json
    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template_name, bytes = rendered.len(), "rendered results");
    Ok(rendered)
}

/// Render with [`DEFAULT_RESULTS_TEMPLATE`].
pub fn render_default(report: &ResultsReport) -> Result<String, ExportError> {
    render_results("results.txt", DEFAULT_RESULTS_TEMPLATE, report)
}
