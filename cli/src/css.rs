use engine::apply::names::{FALLBACK_ATTR, THEME_APPLIED_ATTR, THEME_ID_ATTR};
use engine::{MemoryStyleSink, StyleSink};
use std::fmt::Write;

/// Render an in-memory target as a standalone stylesheet.
///
/// Variables become a `:root` rule, inline properties a second `:root` rule
/// after it, and style blocks follow in insertion order.
pub fn render_stylesheet(sink: &MemoryStyleSink) -> String {
    let mut css = String::new();

    let attributes: Vec<String> = [THEME_ID_ATTR, THEME_APPLIED_ATTR, FALLBACK_ATTR]
        .into_iter()
        .filter_map(|name| sink.attribute(name).map(|value| format!("{name}=\"{value}\"")))
        .collect();
    if !attributes.is_empty() {
        let _ = writeln!(css, "/* {} */", attributes.join(" "));
    }

    if !sink.variables().is_empty() {
        css.push_str(":root {\n");
        for (name, value) in sink.variables() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
    }

    if !sink.inline_properties().is_empty() {
        css.push_str(":root {\n");
        for (property, value) in sink.inline_properties() {
            let _ = writeln!(css, "  {property}: {value} !important;");
        }
        css.push_str("}\n");
    }

    for (_, content) in sink.style_blocks() {
        css.push('\n');
        css.push_str(content);
        if !content.ends_with('\n') {
            css.push('\n');
        }
    }

    css
}
