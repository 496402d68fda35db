use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template value must be a table")]
    NotATable,
}

/// A fully-populated set of markup fragments for one render pass
///
/// `tag_open`/`tag_close` wrap the whole list, `crumb_open`/`crumb_close`
/// wrap each linked crumb, and `crumb_active` opens the inert current-page
/// crumb (closed by the shared `crumb_close`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub tag_open: String,
    pub tag_close: String,
    pub crumb_open: String,
    pub crumb_close: String,
    pub crumb_active: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            tag_open: "<ol>".to_string(),
            tag_close: "</ol>".to_string(),
            crumb_open: "<li>".to_string(),
            crumb_close: "</li>".to_string(),
            crumb_active: r#"<li class="active">"#.to_string(),
        }
    }
}

/// A partially-specified template
///
/// Missing fields fall back to [`Template::default`] when compiled at render
/// time. Keys other than the five recognized fragments are stored in `extra`
/// and have no effect on rendering. Serde derives let hosts embed an overlay
/// directly in their own configuration structs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crumb_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crumb_close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crumb_active: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl TemplateOverlay {
    /// Interpret a dynamic TOML value as a template mapping
    ///
    /// Any non-table value is rejected. Within a table, string values are
    /// taken as-is; other value types fall back to their TOML display form
    /// rather than failing (best-effort rendering over strict validation).
    pub fn from_value(value: &toml::Value) -> Result<Self, TemplateError> {
        let table = value.as_table().ok_or(TemplateError::NotATable)?;

        let mut overlay = Self::default();
        for (key, value) in table {
            let text = fragment_text(value);
            match key.as_str() {
                "tag_open" => overlay.tag_open = Some(text),
                "tag_close" => overlay.tag_close = Some(text),
                "crumb_open" => overlay.crumb_open = Some(text),
                "crumb_close" => overlay.crumb_close = Some(text),
                "crumb_active" => overlay.crumb_active = Some(text),
                _ => {
                    overlay.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(overlay)
    }

    /// Shallow field-by-field merge over the default template
    ///
    /// Supplied fields win, missing fields fall back. After compilation all
    /// five fragments are present.
    pub fn compile(&self) -> Template {
        let defaults = Template::default();
        Template {
            tag_open: self.tag_open.clone().unwrap_or(defaults.tag_open),
            tag_close: self.tag_close.clone().unwrap_or(defaults.tag_close),
            crumb_open: self.crumb_open.clone().unwrap_or(defaults.crumb_open),
            crumb_close: self.crumb_close.clone().unwrap_or(defaults.crumb_close),
            crumb_active: self.crumb_active.clone().unwrap_or(defaults.crumb_active),
        }
    }
}

fn fragment_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn default_template_matches_documented_fragments() {
        let template = Template::default();
        assert_eq!(template.tag_open, "<ol>");
        assert_eq!(template.tag_close, "</ol>");
        assert_eq!(template.crumb_open, "<li>");
        assert_eq!(template.crumb_close, "</li>");
        assert_eq!(template.crumb_active, r#"<li class="active">"#);
    }

    #[rstest]
    #[case(toml::Value::String("<ol>".to_string()))]
    #[case(toml::Value::Integer(42))]
    #[case(toml::Value::Float(1.5))]
    #[case(toml::Value::Boolean(true))]
    #[case(toml::Value::Array(vec![]))]
    fn non_table_values_are_rejected(#[case] candidate: toml::Value) {
        assert_eq!(
            TemplateOverlay::from_value(&candidate),
            Err(TemplateError::NotATable)
        );
    }

    #[test]
    fn table_fields_are_picked_up() {
        let value: toml::Value = toml::from_str(
            r#"
            tag_open = "<nav>"
            crumb_active = "<li class=\"here\">"
            "#,
        )
        .unwrap();

        let overlay = TemplateOverlay::from_value(&value).unwrap();
        assert_eq!(overlay.tag_open.as_deref(), Some("<nav>"));
        assert_eq!(overlay.crumb_active.as_deref(), Some(r#"<li class="here">"#));
        assert_eq!(overlay.tag_close, None);
        assert!(overlay.extra.is_empty());
    }

    #[test]
    fn unknown_keys_are_stored_but_inert() {
        let value: toml::Value = toml::from_str(
            r#"
            tag_open = "<nav>"
            divider = " / "
            "#,
        )
        .unwrap();

        let overlay = TemplateOverlay::from_value(&value).unwrap();
        assert_eq!(
            overlay.extra.get("divider"),
            Some(&toml::Value::String(" / ".to_string()))
        );

        // The extra key changes nothing in the compiled template
        let compiled = overlay.compile();
        assert_eq!(compiled.tag_open, "<nav>");
        assert_eq!(compiled.tag_close, "</ol>");
    }

    #[test]
    fn non_string_fragment_values_take_display_form() {
        let value: toml::Value = toml::from_str("tag_open = 7").unwrap();

        let overlay = TemplateOverlay::from_value(&value).unwrap();
        assert_eq!(overlay.tag_open.as_deref(), Some("7"));
    }

    #[test]
    fn compile_backfills_missing_fields_from_defaults() {
        let overlay = TemplateOverlay {
            tag_open: Some("<nav>".to_string()),
            ..Default::default()
        };

        let compiled = overlay.compile();
        assert_eq!(compiled.tag_open, "<nav>");
        assert_eq!(compiled.tag_close, "</ol>");
        assert_eq!(compiled.crumb_open, "<li>");
        assert_eq!(compiled.crumb_close, "</li>");
        assert_eq!(compiled.crumb_active, r#"<li class="active">"#);
    }

    #[test]
    fn empty_overlay_compiles_to_the_default_template() {
        assert_eq!(TemplateOverlay::default().compile(), Template::default());
    }

    #[test]
    fn overlay_roundtrips_through_serde() {
        let overlay = TemplateOverlay {
            tag_open: Some("<nav>".to_string()),
            crumb_close: Some("</span>".to_string()),
            ..Default::default()
        };

        let serialized = toml::to_string(&overlay).unwrap();
        let deserialized: TemplateOverlay = toml::from_str(&serialized).unwrap();
        assert_eq!(overlay, deserialized);
    }
}
