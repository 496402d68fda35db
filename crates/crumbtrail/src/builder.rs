use crate::anchor::{AnchorRender, HtmlAnchor};
use crate::render::{ActiveMode, render_trail};
use crate::template::{Template, TemplateOverlay};
use crate::trail::{self, CrumbValue, Item, ItemArgs};

/// Accumulates breadcrumb items and renders them into a markup fragment
///
/// One builder serves one render cycle: items are added as the view layer
/// walks its navigation context, then [`generate`](Self::generate) assembles
/// the fragment and empties the trail. Mutating methods return `&mut Self`
/// for fluent chaining:
///
/// ```rust
/// use crumbtrail::BreadcrumbBuilder;
///
/// let mut breadcrumb = BreadcrumbBuilder::new();
/// let html = breadcrumb
///     .add_crumb("Home", "/")
///     .add_crumb("Products", "/products")
///     .add_crumb("Widget", "#")
///     .generate()
///     .unwrap();
///
/// assert!(html.starts_with("<ol>\n"));
/// assert!(html.contains(r#"<li class="active">Widget</li>"#));
/// ```
///
/// Not meant for shared use across concurrent renders; each render scope
/// owns its own builder.
pub struct BreadcrumbBuilder {
    items: Vec<Item>,
    template: Option<TemplateOverlay>,
    newline: String,
    active_mode: ActiveMode,
    anchor: Box<dyn AnchorRender>,
}

impl Default for BreadcrumbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            template: None,
            newline: "\n".to_string(),
            active_mode: ActiveMode::default(),
            anchor: Box::new(HtmlAnchor),
        }
    }

    /// Construction-time configuration
    ///
    /// Recognized keys are exactly the five template fragments; anything
    /// else rides along in the overlay's `extra` map with no effect.
    pub fn with_config(config: TemplateOverlay) -> Self {
        let mut builder = Self::new();
        builder.template = Some(config);
        builder
    }

    /// Replace the template wholesale with a typed overlay
    ///
    /// No merging happens here; missing fields fall back to defaults at
    /// render time.
    pub fn set_template(&mut self, template: TemplateOverlay) -> &mut Self {
        self.template = Some(template);
        self
    }

    /// Replace the template from a dynamic mapping value
    ///
    /// Returns `false` and leaves the current template untouched for any
    /// non-table value. For a table the replacement is wholesale and the
    /// call returns `true`.
    pub fn set_template_value(&mut self, candidate: &toml::Value) -> bool {
        match TemplateOverlay::from_value(candidate) {
            Ok(overlay) => {
                self.template = Some(overlay);
                true
            }
            Err(err) => {
                log::debug!("template value rejected: {err}");
                false
            }
        }
    }

    /// Append one item to the trail
    ///
    /// Accepts either shape described on [`ItemArgs`]; input is normalized
    /// and never rejected.
    pub fn add_item(&mut self, args: impl Into<ItemArgs>) -> &mut Self {
        self.items.push(trail::normalize(args.into()));
        self
    }

    /// Append a single crumb from discrete label and href arguments
    pub fn add_crumb(&mut self, page: impl Into<String>, href: impl Into<String>) -> &mut Self {
        self.add_entries([(page.into(), CrumbValue::Href(href.into()))])
    }

    /// Append one item from an ordered sequence of (label key, value) pairs
    ///
    /// The explicit entry point the convenience shapes delegate to.
    pub fn add_entries<I, K>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, CrumbValue)>,
        K: Into<String>,
    {
        let pairs = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        self.items.push(trail::normalize(ItemArgs::Entries(pairs)));
        self
    }

    /// Set the separator emitted after every logical line (default `"\n"`)
    pub fn newline(&mut self, newline: impl Into<String>) -> &mut Self {
        self.newline = newline.into();
        self
    }

    /// Choose how the active crumb is determined (default
    /// [`ActiveMode::GlobalLast`])
    pub fn active_mode(&mut self, mode: ActiveMode) -> &mut Self {
        self.active_mode = mode;
        self
    }

    /// Swap in the host's link-markup collaborator (default [`HtmlAnchor`])
    pub fn anchor_renderer(&mut self, renderer: impl AnchorRender + 'static) -> &mut Self {
        self.anchor = Box::new(renderer);
        self
    }

    /// Render the accumulated trail
    ///
    /// Returns `None` on an empty trail, which callers treat as "no
    /// breadcrumb" rather than an error. On success the trail is cleared, so
    /// an immediate second call returns `None`; the template survives for
    /// the next cycle.
    pub fn generate(&mut self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }

        let template: Template = match &self.template {
            Some(overlay) => overlay.compile(),
            None => Template::default(),
        };

        log::trace!("rendering breadcrumb trail ({} items)", self.items.len());
        let out = render_trail(
            &self.items,
            &template,
            self.anchor.as_ref(),
            self.active_mode,
            &self.newline,
        );

        self.clear();
        Some(out)
    }

    /// Truncate the trail; the template is untouched
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// The items accumulated so far, in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The template overlay currently set, if any
    pub fn template(&self) -> Option<&TemplateOverlay> {
        self.template.as_ref()
    }
}
