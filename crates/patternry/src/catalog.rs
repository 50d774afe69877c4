// File: src/catalog.rs
// Purpose: Groups registered demo endpoints into the browsable catalog

use crate::config::Config;
use crate::markdown::markdown_to_html;
use crate::registry::{ComponentRegistry, ComponentSet, Endpoint};
use crate::resources::Resources;
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, info};

/// Separator marking a route as a variant of another demo,
/// e.g. "/bootstrap/pagination--first-page".
const VARIANT_SEPARATOR: &str = "--";

/// File name looked up (literally) for per-component documentation.
const COMPONENT_README: &str = "README.md";

/// One renderable demo.
#[derive(Debug, Clone)]
pub struct Example {
    /// Display name derived from the handler name
    pub name: String,
    /// Route serving the demo
    pub uri: String,
    /// Template path, when the demo output carried a view name
    pub template_path: Option<String>,
}

/// A demo component and its variants.
#[derive(Debug, Clone)]
pub struct Entry {
    main_example: Example,
    examples: Vec<Example>,
    component_dir: Option<PathBuf>,
}

impl Entry {
    /// The canonical demo: the one whose route has no variant suffix.
    pub fn main_example(&self) -> &Example {
        &self.main_example
    }

    /// Variant demos, sorted by display name.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Directory holding the main example's template, when it resolved.
    pub fn component_dir(&self) -> Option<&PathBuf> {
        self.component_dir.as_ref()
    }
}

/// A named collection of entries from one component set.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    doc_path: Option<String>,
    entries: Vec<Entry>,
    order: i32,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc_path(&self) -> Option<&str> {
        self.doc_path.as_deref()
    }

    /// Entries sorted by main example display name.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    /// First entry whose main example route equals `uri`.
    pub fn find_entry_by(&self, uri: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.main_example.uri == uri)
    }
}

/// The browsable component catalog.
///
/// Built exactly once, at startup, from everything registered so far; the
/// result is immutable for the life of the process. Endpoints registered
/// after the build are not reflected (there is no invalidation or refresh).
#[derive(Debug)]
pub struct Catalog {
    groups: Vec<Group>,
    resources: Resources,
}

impl Catalog {
    /// Builds the catalog from the registry.
    ///
    /// Fails when a registered component set has no order value; every
    /// other problem (missing template, unreadable docs, demo output
    /// without a view name) degrades to absence.
    pub fn build(registry: &ComponentRegistry, config: &Config) -> Result<Catalog> {
        let resources = Resources::new(&config.paths.resource_root);

        let mut groups = Vec::with_capacity(registry.sets().len());
        for set in registry.sets() {
            groups.push(build_group(set, config, &resources)?);
        }
        groups.sort_by_key(Group::order);

        Ok(Catalog { groups, resources })
    }

    /// Groups sorted by their order value.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// First entry across all groups whose main example route equals `uri`.
    pub fn find_entry_by_uri(&self, uri: &str) -> Option<&Entry> {
        self.groups.iter().find_map(|group| group.find_entry_by(uri))
    }

    /// Group-level documentation: the configured Markdown resource,
    /// rendered to HTML. Absent resource yields `None`.
    pub fn group_documentation(&self, group: &Group) -> Option<String> {
        let doc_path = group.doc_path.as_deref()?;
        self.resources
            .read(doc_path)
            .map(|markdown| markdown_to_html(&markdown))
    }

    /// Entry-level documentation: a README.md next to the component's
    /// template, rendered to HTML. Absent file yields `None`.
    pub fn entry_documentation(&self, entry: &Entry) -> Option<String> {
        let readme = entry.component_dir.as_ref()?.join(COMPONENT_README);
        if !readme.is_file() {
            return None;
        }
        self.resources
            .read_file(&readme)
            .map(|markdown| markdown_to_html(&markdown))
    }

    /// Raw template markup backing an example, when present.
    pub fn example_template(&self, example: &Example) -> Option<String> {
        let template_path = example.template_path.as_deref()?;
        self.resources.read(template_path)
    }
}

fn build_group(set: &ComponentSet, config: &Config, resources: &Resources) -> Result<Group> {
    let Some(order) = set.order else {
        bail!(
            "component set '{}' has no order value; every registered set must declare one",
            set.name
        );
    };

    let doc_path = set
        .docs
        .as_deref()
        .filter(|docs| !docs.is_empty())
        .map(|docs| config.paths.doc_path(docs));

    let examples: Vec<Example> = set
        .endpoints
        .iter()
        .map(|endpoint| Example {
            name: display_name(&endpoint.handler_name),
            uri: endpoint.route.clone(),
            template_path: template_path(endpoint, config),
        })
        .collect();

    // Mains first: routes without the variant separator
    let mut entries: Vec<Entry> = examples
        .iter()
        .filter(|example| !example.uri.contains(VARIANT_SEPARATOR))
        .map(|example| Entry {
            main_example: example.clone(),
            examples: Vec::new(),
            component_dir: example
                .template_path
                .as_deref()
                .and_then(|path| resources.resolve_dir(path)),
        })
        .collect();

    // Attach variants to their mains; a variant whose route prefix matches
    // no main in this group is dropped
    for example in examples
        .iter()
        .filter(|example| example.uri.contains(VARIANT_SEPARATOR))
    {
        let Some((prefix, _)) = example.uri.split_once(VARIANT_SEPARATOR) else {
            continue;
        };
        match entries
            .iter_mut()
            .find(|entry| entry.main_example.uri == prefix)
        {
            Some(entry) => {
                entry.examples.push(example.clone());
                entry.examples.sort_by(|a, b| a.name.cmp(&b.name));
            }
            None => {
                debug!("Variant route {} has no matching component, dropped", example.uri);
            }
        }
    }

    entries.sort_by(|a, b| a.main_example.name.cmp(&b.main_example.name));

    Ok(Group {
        name: group_name(&set.name),
        doc_path,
        entries,
        order,
    })
}

/// Derives an example's template path by invoking its demo callable.
/// Output without a view name yields no template path.
fn template_path(endpoint: &Endpoint, config: &Config) -> Option<String> {
    match (endpoint.demo)().view_name() {
        Some(view) => Some(config.paths.template_path(view)),
        None => {
            info!(
                "Could not derive template path for handler={}",
                endpoint.handler_name
            );
            None
        }
    }
}

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("valid regex"));

/// Derives a display name from a handler name.
///
/// A segment after the first underscore names a variant
/// ("paginationComponent_firstName" -> "First Name"); otherwise the whole
/// name is used. Camel-case words are split and the first letter
/// capitalized. Segments past the second are discarded.
pub fn display_name(handler_name: &str) -> String {
    let parts: Vec<&str> = handler_name.split('_').collect();
    let name = if parts.len() > 1 { parts[1] } else { parts[0] };

    let spaced = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    capitalize(&spaced)
}

/// Strips the conventional `Controller` suffix from a component set name.
pub fn group_name(set_name: &str) -> String {
    set_name.replace("Controller", "")
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pagination", "Pagination")]
    #[case("paginationComplicatedComponent", "Pagination Complicated Component")]
    #[case("paginationComponent_first", "First")]
    #[case("paginationComponent_firstName", "First Name")]
    fn test_display_name(#[case] handler_name: &str, #[case] expected: &str) {
        assert_eq!(display_name(handler_name), expected);
    }

    #[test]
    fn test_display_name_discards_segments_past_the_second() {
        assert_eq!(display_name("pagination_first_extra"), "First");
    }

    #[test]
    fn test_group_name_strips_controller_suffix() {
        assert_eq!(group_name("BootstrapController"), "Bootstrap");
        assert_eq!(group_name("Containers"), "Containers");
    }
}
