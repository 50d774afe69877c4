// File: src/markdown.rs
// Purpose: Markdown to HTML rendering

use comrak::ComrakOptions;

/// Renders CommonMark to HTML. Pure and stateless.
pub fn markdown_to_html(markdown: &str) -> String {
    comrak::markdown_to_html(markdown, &ComrakOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_paragraphs() {
        let html = markdown_to_html("# Buttons\n\nUse sparingly.");
        assert!(html.contains("<h1>Buttons</h1>"));
        assert!(html.contains("<p>Use sparingly.</p>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
    }
}
