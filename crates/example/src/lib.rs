//! Example page lifecycle built with Theophile.
//!
//! A [`Page`] is a small element tree whose elements carry `data-th*`
//! attributes. Two plugins drive it through one lifecycle run:
//!
//! ```text
//! before-create ─▶ created ─────────▶ before-mount ─▶ mounted ─▶ ... ─▶ unmounted
//!                  │                                  │
//!                  └ ConfigPlugin:                    └ MountReportPlugin:
//!                    data-th* → Element::config         log each element's config
//! ```

use parking_lot::Mutex;
use theophile_config::{ConfigMap, ConfigValue, DatasetLoader, dataset_key};
use theophile_hooks::{HookRegistry, Phase, Plugin};

// ─────────────────────────────────────────────────────────────────────────────
// Element Tree
// ─────────────────────────────────────────────────────────────────────────────

/// One markup element.
#[derive(Debug)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Raw attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Configuration loaded from the element's dataset.
    pub config: Mutex<ConfigMap>,
    /// Child elements.
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            config: Mutex::new(ConfigMap::new()),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the element's dataset: `data-*` attributes keyed by their
    /// camel-cased dataset name.
    pub fn dataset(&self) -> impl Iterator<Item = (String, &str)> {
        self.attributes
            .iter()
            .filter_map(|(name, value)| dataset_key(name).map(|key| (key, value.as_str())))
    }

    /// Visits this element and its descendants depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Returns a snapshot of the loaded configuration.
    #[must_use]
    pub fn config_snapshot(&self) -> ConfigValue {
        ConfigValue::Map(self.config.lock().clone())
    }
}

/// The context threaded through every hook of a run.
#[derive(Debug)]
pub struct Page {
    /// Root element.
    pub root: Element,
}

impl Page {
    /// Wraps a root element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Number of elements in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(&mut |_| count += 1);
        count
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugins
// ─────────────────────────────────────────────────────────────────────────────

/// Loads every element's dataset into its configuration during `created`.
#[derive(Debug, Clone, Default)]
pub struct ConfigPlugin {
    loader: DatasetLoader,
}

impl ConfigPlugin {
    /// Uses a custom loader, e.g. with another attribute namespace.
    #[must_use]
    pub fn with_loader(loader: DatasetLoader) -> Self {
        Self { loader }
    }
}

impl Plugin<Page> for ConfigPlugin {
    fn build(&self, registry: &HookRegistry<Page>) {
        let loader = self.loader.clone();
        registry.observe(Phase::Created, move |page: &Page| {
            page.root.walk(&mut |element| {
                let mut config = element.config.lock();
                loader.load(element.dataset(), &mut config);
            });
        });
    }
}

/// Logs each configured element once it is mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountReportPlugin;

impl Plugin<Page> for MountReportPlugin {
    fn build(&self, registry: &HookRegistry<Page>) {
        registry.mounted(|page: &Page| {
            Box::pin(async move {
                page.root.walk(&mut |element| {
                    let config = element.config.lock();
                    if !config.is_empty() {
                        tracing::info!(
                            tag = %element.tag,
                            config = %ConfigValue::Map(config.clone()),
                            "element mounted"
                        );
                    }
                });
                Ok(())
            })
        });
    }
}

/// Builds the demo page.
#[must_use]
pub fn demo_page() -> Page {
    Page::new(
        Element::new("main")
            .attr("id", "app")
            .attr("data-th", "layout: stack; gap: 1rem;")
            .child(
                Element::new("header")
                    .attr("data-th", "title: Gallery; sticky: true")
                    .attr("data-th-border-bottom", "1px solid"),
            )
            .child(
                Element::new("section")
                    .attr("class", "grid")
                    .attr("data-th-grid", "columns: 3; gap: 8px")
                    .attr("data-th-grid-rows", "auto")
                    .child(Element::new("figure").attr("data-th", "caption: Sunset")),
            ),
    )
}
