use crate::anchor::AnchorRender;
use crate::template::Template;
use crate::trail::Item;

/// Which trail entry renders as the inert "active" crumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveMode {
    /// Only the globally last entry across the whole flattened trail is
    /// active; everything before it renders as a link.
    #[default]
    GlobalLast,
    /// Each item's own final entry is active. Compatibility mode replicating
    /// the legacy per-item last-key check: with single-entry items every
    /// crumb renders as active.
    PerItem,
}

/// Walks the trail and assembles the markup fragment
///
/// Emits `tag_open`, one line per (item, entry) pair in insertion order, and
/// `tag_close`, each followed by `newline`. Active entries emit
/// `crumb_active` + page text (href ignored, no link); all others emit
/// `crumb_open` + the anchor collaborator's output. Empty items contribute
/// no lines.
pub(crate) fn render_trail(
    items: &[Item],
    template: &Template,
    anchor: &dyn AnchorRender,
    mode: ActiveMode,
    newline: &str,
) -> String {
    let total: usize = items.iter().map(Item::len).sum();
    let mut out = String::new();

    out.push_str(&template.tag_open);
    out.push_str(newline);

    let mut emitted = 0;
    for item in items {
        let last_in_item = item.len().saturating_sub(1);
        for (position, (_key, target)) in item.entries().enumerate() {
            emitted += 1;
            let active = match mode {
                ActiveMode::GlobalLast => emitted == total,
                ActiveMode::PerItem => position == last_in_item,
            };
            if active {
                out.push_str(&template.crumb_active);
                out.push_str(&target.page);
            } else {
                out.push_str(&template.crumb_open);
                out.push_str(&anchor.render_anchor(&target.href, &target.page));
            }
            out.push_str(&template.crumb_close);
            out.push_str(newline);
        }
    }

    out.push_str(&template.tag_close);
    out.push_str(newline);
    out
}
