use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Display text and link target for one crumb
///
/// `href` is ignored when the crumb renders as the active (current page)
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrumbTarget {
    pub page: String,
    pub href: String,
}

impl CrumbTarget {
    pub fn new(page: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            href: href.into(),
        }
    }
}

/// Input-side value for one trail entry: either a bare link target or an
/// already-built page/href pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrumbValue {
    Href(String),
    Target(CrumbTarget),
}

impl From<&str> for CrumbValue {
    fn from(href: &str) -> Self {
        CrumbValue::Href(href.to_string())
    }
}

impl From<String> for CrumbValue {
    fn from(href: String) -> Self {
        CrumbValue::Href(href)
    }
}

impl From<CrumbTarget> for CrumbValue {
    fn from(target: CrumbTarget) -> Self {
        CrumbValue::Target(target)
    }
}

/// One normalized trail entry: an insertion-ordered mapping from label key to
/// target
///
/// Insertion order is display order. Re-using a key within the same item
/// overwrites the earlier entry in place, keeping its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    entries: IndexMap<String, CrumbTarget>,
}

impl Item {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as (label key, target) in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CrumbTarget)> {
        self.entries.iter().map(|(key, target)| (key.as_str(), target))
    }
}

/// The argument shapes accepted by [`BreadcrumbBuilder::add_item`]
///
/// `Entries` carries an ordered sequence of (label key, value) pairs, the
/// mapping-of-crumbs call style. `Target` carries a single pre-built
/// page/href pair. Conversions from plain maps detect which shape was meant:
/// a map holding a top-level `"page"` key is one target, anything else is an
/// entry set.
///
/// [`BreadcrumbBuilder::add_item`]: crate::builder::BreadcrumbBuilder::add_item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemArgs {
    Entries(Vec<(String, CrumbValue)>),
    Target(CrumbTarget),
}

impl From<CrumbTarget> for ItemArgs {
    fn from(target: CrumbTarget) -> Self {
        ItemArgs::Target(target)
    }
}

impl<K, V> From<Vec<(K, V)>> for ItemArgs
where
    K: Into<String>,
    V: Into<CrumbValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        ItemArgs::Entries(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ItemArgs
where
    K: Into<String>,
    V: Into<CrumbValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        ItemArgs::Entries(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for ItemArgs {
    fn from(map: IndexMap<String, String>) -> Self {
        // A map carrying its own `page` key is a single pre-built pair, not a
        // set of crumbs to unwrap. A missing href renders best-effort.
        if let Some(page) = map.get("page") {
            let href = map.get("href").cloned().unwrap_or_default();
            return ItemArgs::Target(CrumbTarget::new(page.clone(), href));
        }
        ItemArgs::Entries(
            map.into_iter()
                .map(|(key, href)| (key, CrumbValue::Href(href)))
                .collect(),
        )
    }
}

/// Normalizes one argument set into an [`Item`]
///
/// A `Target` value is kept unchanged; a bare href synthesizes a pair with
/// the label key doubling as the display text. Never fails: malformed input
/// yields a best-effort item rather than an error.
pub fn normalize(args: ItemArgs) -> Item {
    match args {
        ItemArgs::Target(target) => {
            let mut entries = IndexMap::with_capacity(1);
            entries.insert(target.page.clone(), target);
            Item { entries }
        }
        ItemArgs::Entries(pairs) => {
            let mut entries = IndexMap::with_capacity(pairs.len());
            for (key, value) in pairs {
                let target = match value {
                    CrumbValue::Target(target) => target,
                    CrumbValue::Href(href) => CrumbTarget::new(key.clone(), href),
                };
                entries.insert(key, target);
            }
            Item { entries }
        }
    }
}
