// Page chrome and views, rendered with Maud

use maud::{html, Markup, PreEscaped, DOCTYPE};
use patternry::{Catalog, Entry, Example};

/// Shared page chrome: head, sidebar navigation, and content area.
///
/// The sidebar lists every group and entry the catalog knows about; each
/// entry links back through the index route with its `uri`.
pub fn layout(app_name: &str, catalog: &Catalog, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (app_name) }
                link rel="stylesheet" href="/static/patternry.css";
            }
            body {
                nav .sidebar {
                    h1 { a href="/" { (app_name) } }
                    @for group in catalog.groups() {
                        section .group {
                            h2 { (group.name()) }
                            @if let Some(doc_path) = group.doc_path() {
                                a .group-docs href={ "/docs?title=" (group.name()) "&doc_path=" (doc_path) } {
                                    "documentation"
                                }
                            }
                            ul {
                                @for entry in group.entries() {
                                    li {
                                        a href={ "/?uri=" (entry.main_example().uri) } {
                                            (entry.main_example().name)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}

/// Component detail view: the main demo, its variants, and any README
/// documentation found next to the component's template.
pub fn details(app_name: &str, catalog: &Catalog, entry: &Entry) -> Markup {
    let main = entry.main_example();
    let documentation = catalog.entry_documentation(entry);

    let body = html! {
        article .component {
            header {
                h2 { (main.name) }
                code .route { (main.uri) }
            }
            (example_section(catalog, main))
            @for variant in entry.examples() {
                (example_section(catalog, variant))
            }
            @if let Some(docs) = documentation {
                section .docs { (PreEscaped(docs)) }
            }
        }
    };

    layout(app_name, catalog, &main.name, body)
}

fn example_section(catalog: &Catalog, example: &Example) -> Markup {
    html! {
        section .example {
            h3 { (example.name) }
            @if let Some(markup) = catalog.example_template(example) {
                div .preview { (PreEscaped(markup.clone())) }
                pre .source { code { (markup) } }
            } @else {
                p .missing { "No template available for " code { (example.uri) } }
            }
        }
    }
}

/// Documentation view: a rendered Markdown page under the shared chrome.
pub fn docs(app_name: &str, catalog: &Catalog, title: &str, documentation: Option<String>) -> Markup {
    let body = html! {
        article .docs-page {
            h2 { (title) }
            @if let Some(docs) = documentation {
                section .docs { (PreEscaped(docs)) }
            } @else {
                p .missing { "No documentation available." }
            }
        }
    };

    layout(app_name, catalog, title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternry::{Catalog, ComponentRegistry, ComponentSet, Config, DemoOutput};
    use std::sync::Arc;

    fn catalog() -> Catalog {
        let mut registry = ComponentRegistry::new();
        registry.register(
            ComponentSet::new("WidgetsController")
                .order(1)
                .get("/widgets/knob", "knob", Arc::new(|| {
                    DemoOutput::Html("<div class=\"knob\"></div>".to_string())
                })),
        );
        Catalog::build(&registry, &Config::default()).unwrap()
    }

    #[test]
    fn test_layout_lists_groups_and_entries() {
        let catalog = catalog();
        let markup = layout("Pattern Library", &catalog, "Home", html! { p { "body" } });
        let rendered = markup.into_string();

        assert!(rendered.contains("Widgets"));
        assert!(rendered.contains("/?uri=/widgets/knob"));
        assert!(rendered.contains("<p>body</p>"));
    }

    #[test]
    fn test_details_shows_missing_template_notice() {
        let catalog = catalog();
        let entry = catalog.find_entry_by_uri("/widgets/knob").unwrap();
        let rendered = details("Pattern Library", &catalog, entry).into_string();

        assert!(rendered.contains("Knob"));
        assert!(rendered.contains("No template available"));
    }

    #[test]
    fn test_docs_page_without_documentation() {
        let catalog = catalog();
        let rendered = docs("Pattern Library", &catalog, "Intro", None).into_string();
        assert!(rendered.contains("Intro"));
        assert!(rendered.contains("No documentation available."));
    }
}
