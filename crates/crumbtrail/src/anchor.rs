use html_escape::{encode_double_quoted_attribute, encode_text};

/// Renders the link markup for one crumb
///
/// The builder calls this once per non-active crumb and concatenates the
/// returned string opaquely; any escaping happens here, never in the render
/// loop itself. Hosts can plug in their framework's URL helper through
/// [`AnchorFn`]:
///
/// ```rust
/// use crumbtrail::{AnchorFn, BreadcrumbBuilder};
///
/// let mut breadcrumb = BreadcrumbBuilder::new();
/// breadcrumb.anchor_renderer(AnchorFn(|href: &str, label: &str| {
///     format!("<a class=\"crumb\" href=\"{href}\">{label}</a>")
/// }));
/// ```
pub trait AnchorRender {
    fn render_anchor(&self, href: &str, label: &str) -> String;
}

/// Adapter letting a plain `(href, label) -> markup` closure serve as the
/// anchor collaborator
pub struct AnchorFn<F>(pub F);

impl<F> AnchorRender for AnchorFn<F>
where
    F: Fn(&str, &str) -> String,
{
    fn render_anchor(&self, href: &str, label: &str) -> String {
        (self.0)(href, label)
    }
}

/// Default renderer producing a plain `<a>` element
///
/// The href is escaped as a double-quoted attribute and the label as text
/// content.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAnchor;

impl AnchorRender for HtmlAnchor {
    fn render_anchor(&self, href: &str, label: &str) -> String {
        format!(
            r#"<a href="{}">{}</a>"#,
            encode_double_quoted_attribute(href),
            encode_text(label)
        )
    }
}
