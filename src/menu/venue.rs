//! Serde types for venue records.
//!
//! All collections default to empty when the key is missing or `null`, and
//! all text fields are optional. Unknown keys (prices, contact details,
//! locations) are ignored.
//!
//! Decoding is lenient at every level: a text field holding a non-string is
//! treated as absent, a collection holding a non-list is treated as empty,
//! and a collection element that is not an object is dropped. Each of these
//! is logged as a warning, and the surrounding record still decodes.

use std::iter;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Human-readable JSON kind for log and error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode an optional text field; anything but a string counts as absent.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        other => {
            warn!("Ignoring {} where text was expected", json_kind(&other));
            Ok(None)
        }
    }
}

/// Decode a list of records, dropping whatever does not fit.
fn lenient_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let elements = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(elements) => elements,
        other => {
            warn!("Ignoring {} where a list was expected", json_kind(&other));
            return Ok(Vec::new());
        }
    };

    Ok(elements
        .into_iter()
        .filter_map(|element| {
            if !element.is_object() {
                warn!("Skipping {} in a list of records", json_kind(&element));
                return None;
            }
            serde_json::from_value(element)
                .map_err(|e| warn!("Skipping malformed record: {e}"))
                .ok()
        })
        .collect())
}

/// A venue (restaurant) with its menus.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue identifier assigned by the search API.
    #[serde(default, deserialize_with = "lenient_text")]
    pub locu_id: Option<String>,

    /// Display name of the venue.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub menus: Vec<Menu>,
}

/// A single menu of a venue (e.g. "Lunch", "Drinks").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, deserialize_with = "lenient_text")]
    pub menu_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub sections: Vec<Section>,
}

/// A section of a menu.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_text")]
    pub section_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub subsections: Vec<Subsection>,
}

/// A subsection of a menu section, holding the actual items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    #[serde(default, deserialize_with = "lenient_text")]
    pub subsection_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub contents: Vec<MenuItem>,
}

/// A menu item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub option_groups: Vec<OptionGroup>,
}

/// A group of choices attached to an item ("Choice of dressing").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub options: Vec<MenuOption>,
}

/// A single choice within an option group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl Venue {
    /// Iterate every item of every menu, section and subsection.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menus
            .iter()
            .flat_map(|menu| menu.sections.iter())
            .flat_map(|section| section.subsections.iter())
            .flat_map(|subsection| subsection.contents.iter())
    }

    /// Identifier used in log messages.
    pub fn label(&self) -> &str {
        self.locu_id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unknown venue>")
    }
}

impl MenuItem {
    /// Create an item with just a name and description.
    pub fn new(name: Option<&str>, description: Option<&str>) -> Self {
        MenuItem {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            option_groups: Vec::new(),
        }
    }

    /// The item's text bundle: name, description, then each option group's
    /// text followed by the names of its options.
    pub fn text_fields(&self) -> impl Iterator<Item = Option<&str>> {
        iter::once(self.name.as_deref())
            .chain(iter::once(self.description.as_deref()))
            .chain(self.option_groups.iter().flat_map(|group| {
                iter::once(group.text.as_deref())
                    .chain(group.options.iter().map(|option| option.name.as_deref()))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_levels_default_to_empty() {
        let venue: Venue = serde_json::from_str(r#"{"locu_id": "abc"}"#).unwrap();
        assert!(venue.menus.is_empty());
        assert_eq!(venue.items().count(), 0);

        let venue: Venue =
            serde_json::from_str(r#"{"menus": [{"sections": null}, {}]}"#).unwrap();
        assert_eq!(venue.menus.len(), 2);
        assert_eq!(venue.items().count(), 0);
    }

    #[test]
    fn test_null_menus() {
        let venue: Venue = serde_json::from_str(r#"{"name": "Cafe", "menus": null}"#).unwrap();
        assert!(venue.menus.is_empty());
        assert_eq!(venue.label(), "Cafe");
    }

    #[test]
    fn test_items_traversal() {
        let json = r#"{
            "menus": [{
                "menu_name": "Dinner",
                "sections": [{
                    "section_name": "Mains",
                    "subsections": [
                        {"contents": [{"name": "Steak", "price": "24"}, {"type": "SECTION_TEXT", "text": "Served hot"}]},
                        {"contents": [{"name": "Salmon"}]}
                    ]
                }]
            }]
        }"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        let names: Vec<_> = venue.items().map(|item| item.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Steak"), None, Some("Salmon")]);
    }

    #[test]
    fn test_text_fields_order() {
        let json = r#"{
            "name": "Taco",
            "description": "Corn tortilla",
            "option_groups": [
                {"text": "Choose protein", "options": [{"name": "Pork"}, {"name": "Beef"}]},
                {"options": [{}]}
            ]
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        let fields: Vec<_> = item.text_fields().collect();
        assert_eq!(
            fields,
            vec![
                Some("Taco"),
                Some("Corn tortilla"),
                Some("Choose protein"),
                Some("Pork"),
                Some("Beef"),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_item_without_text() {
        let item = MenuItem::default();
        let fields: Vec<_> = item.text_fields().collect();
        assert_eq!(fields, vec![None, None]);
    }

    #[test]
    fn test_wrong_shaped_fields_do_not_drop_siblings() {
        let json = r#"{
            "locu_id": 7,
            "menus": [{
                "sections": [{
                    "subsections": [{
                        "contents": [
                            {"name": "Lime Soda", "description": "fresh lime"},
                            {"name": 12, "description": "Mint Tea"},
                            {"name": "Tacos", "option_groups": "none"},
                            {"name": "Pho", "option_groups": [{"text": ["x"], "options": [{"name": "Basil"}, 3]}]},
                            "Chef's special",
                            null
                        ]
                    }, {"contents": {"not": "a list"}}]
                }, 42]
            }]
        }"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(venue.label(), "<unknown venue>");

        let items: Vec<_> = venue.items().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name.as_deref(), Some("Lime Soda"));
        assert_eq!(items[1].name, None);
        assert_eq!(items[1].description.as_deref(), Some("Mint Tea"));
        assert!(items[2].option_groups.is_empty());

        let fields: Vec<_> = items[3].text_fields().collect();
        assert_eq!(fields, vec![Some("Pho"), None, None, Some("Basil")]);
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(Venue::default().label(), "<unknown venue>");
    }
}
