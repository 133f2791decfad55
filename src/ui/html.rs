//! Page shell and HTML helpers.

use super::script::THEME_SCRIPT;
use super::style::STYLES;

/// Escape HTML special characters for safe embedding in HTML documents.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Generate the HTML document around a page body.
///
/// The theme script runs before first paint so a stored dark preference
/// never flashes light.
pub fn html_shell(title: &str, content: &str, scripts: &[&str]) -> String {
    let title = html_escape(title);
    let scripts: String = scripts
        .iter()
        .map(|s| format!("<script>{s}</script>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Chat with Gemini">
    <title>{title}</title>
    <script>{THEME_SCRIPT}</script>
    <style>{STYLES}</style>
</head>
<body>
{content}
<div id="toaster" class="toaster" aria-live="assertive"></div>
{scripts}</body>
</html>"#
    )
}
