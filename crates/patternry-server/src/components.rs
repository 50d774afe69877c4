// Demo component registrations, grouped the way the sidebar shows them

use patternry::{ComponentRegistry, ComponentSet, DemoFn, DemoOutput, Pagination};
use serde_json::Value;
use std::sync::Arc;

/// Registers every component set the pattern library ships with.
pub fn register_all(registry: &mut ComponentRegistry) {
    registry.register(bootstrap());
    registry.register(containers());
}

fn bootstrap() -> ComponentSet {
    ComponentSet::new("BootstrapController")
        .docs("bootstrap.md")
        .order(1)
        .get("/bootstrap/alerts", "alerts", view("components/bootstrap/alerts/alerts"))
        .get("/bootstrap/badges", "badges", view("components/bootstrap/badges/badges"))
        .get("/bootstrap/buttons", "buttons", view("components/bootstrap/buttons/buttons"))
        .get("/bootstrap/pagination", "pagination", pagination_demo(1))
        .get(
            "/bootstrap/pagination--first-page",
            "pagination_firstPage",
            pagination_demo(0),
        )
        .get(
            "/bootstrap/pagination--last-page",
            "pagination_lastPage",
            pagination_demo(2),
        )
}

fn containers() -> ComponentSet {
    ComponentSet::new("ContainersController")
        .order(2)
        .get("/containers", "containers", view("index"))
        .get("/containers/foo", "foo", view("components/containers/foo"))
}

/// Demo that resolves to a bare view name.
fn view(name: &'static str) -> DemoFn {
    Arc::new(move || DemoOutput::View(name.to_string()))
}

/// The pagination demos render the same view at different current pages:
/// 12 items in pages of 4, at the middle, first, and last page.
fn pagination_demo(current_index: usize) -> DemoFn {
    Arc::new(move || {
        let pagination = Pagination::create(current_index, 4, 12, |_| String::new());
        DemoOutput::Model {
            view: "components/bootstrap/pagination/pagination".to_string(),
            model: serde_json::to_value(&pagination).unwrap_or(Value::Null),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternry::{Catalog, Config};

    #[test]
    fn test_register_all_builds_cleanly() {
        let mut registry = ComponentRegistry::new();
        register_all(&mut registry);

        let catalog = Catalog::build(&registry, &Config::default()).unwrap();

        let names: Vec<&str> = catalog.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Bootstrap", "Containers"]);

        // Pagination's two page variants hang off the main entry
        let entry = catalog.find_entry_by_uri("/bootstrap/pagination").unwrap();
        assert_eq!(entry.examples().len(), 2);
    }

    #[test]
    fn test_pagination_demo_carries_view_and_model() {
        let output = pagination_demo(0)();
        assert_eq!(
            output.view_name(),
            Some("components/bootstrap/pagination/pagination")
        );
        let DemoOutput::Model { model, .. } = output else {
            panic!("expected a model output");
        };
        assert_eq!(model["pages"].as_array().map(Vec::len), Some(3));
        assert_eq!(model["previous"]["disabled"], Value::Bool(true));
    }
}
