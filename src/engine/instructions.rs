//! System instructions sent ahead of the user's change list.

use anyhow::Result;
use handlebars::{Handlebars, no_escape};
use once_cell::sync::Lazy;
use serde_json::json;

use crate::engine::{error::GenerateError, model::ReleaseStyle};

const NORMAL: &str = "You are a software developer writing GitHub release descriptions. \
Write in correct markdown format. The user message contains the features/changes for this release. \
Create a release description with the title \"{{product_name}} - {{version}}\" based on the features \
provided in the user message. Always use the actual product name {{product_name}} and version \
{{version}} in the release notes, never use placeholders.";

const EXPANDED: &str = "You are a software developer writing detailed GitHub release descriptions. \
Write in correct markdown format. The user message contains the features/changes for this release. \
Create an expanded, detailed release description with multiple sections. Make it comprehensive and \
well-structured. Use the title \"{{product_name}} - {{version}}\". Base the content on the features \
provided in the user message. Always use the actual product name {{product_name}} and version \
{{version}} in the release notes, never use placeholders.";

static REGISTRY: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.register_escape_fn(no_escape);
    hb.set_strict_mode(true);
    hb.register_template_string(template_name(ReleaseStyle::Normal), NORMAL)
        .expect("normal instruction template compiles");
    hb.register_template_string(template_name(ReleaseStyle::Expanded), EXPANDED)
        .expect("expanded instruction template compiles");
    hb
});

fn template_name(style: ReleaseStyle) -> &'static str {
    match style {
        ReleaseStyle::Normal => "normal",
        ReleaseStyle::Expanded => "expanded",
    }
}

/// Renders the system instruction for `style`, with the literal product
/// name and version substituted.
pub fn render(style: ReleaseStyle, product_name: &str, version: &str) -> Result<String, GenerateError> {
    let data = json!({
        "product_name": product_name,
        "version": version,
    });
    REGISTRY
        .render(template_name(style), &data)
        .map_err(|e| GenerateError::Instructions(e.to_string()))
}

/// The release title both templates mandate.
pub fn title(product_name: &str, version: &str) -> String {
    format!("{product_name} - {version}")
}
