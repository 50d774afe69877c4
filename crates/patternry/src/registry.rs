// File: src/registry.rs
// Purpose: Explicit registration of pattern library component sets

use std::sync::Arc;

/// What a demo callable produces when invoked.
///
/// `View` and `Model` carry a view name the catalog resolves to a template
/// file; `Html` is raw markup with no view name, so no template path can be
/// derived from it.
#[derive(Debug, Clone)]
pub enum DemoOutput {
    /// A bare view name, e.g. "components/bootstrap/alerts/alerts"
    View(String),
    /// A view name plus the model that would be rendered into it
    Model {
        view: String,
        model: serde_json::Value,
    },
    /// Raw markup with no backing template
    Html(String),
}

impl DemoOutput {
    /// The view name, if this output carries one.
    pub fn view_name(&self) -> Option<&str> {
        match self {
            DemoOutput::View(view) => Some(view),
            DemoOutput::Model { view, .. } => Some(view),
            DemoOutput::Html(_) => None,
        }
    }
}

/// A demo callable: produces a view identifier (or raw markup) given no
/// arguments. Every pattern library endpoint registers one of these.
pub type DemoFn = Arc<dyn Fn() -> DemoOutput + Send + Sync>;

/// One registered demo endpoint.
#[derive(Clone)]
pub struct Endpoint {
    /// Route serving this demo, e.g. "/bootstrap/pagination--first-page"
    pub route: String,
    /// Handler name the display name derives from, e.g. "pagination_firstPage"
    pub handler_name: String,
    /// The demo callable
    pub demo: DemoFn,
}

/// A set of demo components registered under one owning name.
///
/// The owning name follows the `FooController` convention; the catalog
/// strips the suffix to produce the group's display name.
///
/// ```
/// use patternry::{ComponentSet, DemoOutput};
/// use std::sync::Arc;
///
/// let set = ComponentSet::new("BootstrapController")
///     .docs("bootstrap.md")
///     .order(1)
///     .get("/bootstrap/alerts", "alerts", Arc::new(|| {
///         DemoOutput::View("components/bootstrap/alerts/alerts".to_string())
///     }));
/// assert_eq!(set.endpoints.len(), 1);
/// ```
#[derive(Clone)]
pub struct ComponentSet {
    /// Owning component name, conventionally suffixed with `Controller`
    pub name: String,
    /// Documentation resource name, resolved under the docs prefix
    pub docs: Option<String>,
    /// Sort order among groups; the catalog refuses to build without one
    pub order: Option<i32>,
    /// Endpoints in registration order
    pub endpoints: Vec<Endpoint>,
}

impl ComponentSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            order: None,
            endpoints: Vec::new(),
        }
    }

    /// Attach a documentation resource name to this set.
    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Set the sort order of this set's group.
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Register a GET demo endpoint.
    pub fn get(
        mut self,
        route: impl Into<String>,
        handler_name: impl Into<String>,
        demo: DemoFn,
    ) -> Self {
        self.endpoints.push(Endpoint {
            route: route.into(),
            handler_name: handler_name.into(),
            demo,
        });
        self
    }
}

/// Registry of component sets.
///
/// Registration is what marks a set as part of the pattern library;
/// routes mounted outside the registry are invisible to the catalog.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    sets: Vec<ComponentSet>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component set to the registry.
    pub fn register(&mut self, set: ComponentSet) {
        self.sets.push(set);
    }

    /// Registered sets, in registration order.
    pub fn sets(&self) -> &[ComponentSet] {
        &self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> DemoFn {
        Arc::new(|| DemoOutput::View("widgets/widget".to_string()))
    }

    #[test]
    fn test_set_builder() {
        let set = ComponentSet::new("WidgetsController")
            .docs("widgets.md")
            .order(3)
            .get("/widgets", "widgets", demo())
            .get("/widgets--compact", "widgets_compact", demo());

        assert_eq!(set.name, "WidgetsController");
        assert_eq!(set.docs.as_deref(), Some("widgets.md"));
        assert_eq!(set.order, Some(3));
        assert_eq!(set.endpoints.len(), 2);
        assert_eq!(set.endpoints[1].handler_name, "widgets_compact");
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = ComponentRegistry::new();
        registry.register(ComponentSet::new("BController").order(2));
        registry.register(ComponentSet::new("AController").order(1));

        let names: Vec<&str> = registry.sets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["BController", "AController"]);
    }

    #[test]
    fn test_view_name() {
        assert_eq!(
            DemoOutput::View("a/b".to_string()).view_name(),
            Some("a/b")
        );
        assert_eq!(
            DemoOutput::Model {
                view: "a/b".to_string(),
                model: serde_json::Value::Null
            }
            .view_name(),
            Some("a/b")
        );
        assert_eq!(DemoOutput::Html("<p>hi</p>".to_string()).view_name(), None);
    }
}
