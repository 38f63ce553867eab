use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::LoadError;

/// One priced entry of a category.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Coerces a JSON object with optional `item` / `preco` fields.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            name: coerce_name(object.get("item")),
            price: coerce_price(object.get("preco")),
        }
    }
}

/// An element of a category sequence as found in the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    /// Anything that was not a JSON object.
    Malformed(Value),
}

impl MenuEntry {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(object) => MenuEntry::Item(MenuItem::from_object(object)),
            other => MenuEntry::Malformed(other.clone()),
        }
    }

    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Malformed(_) => None,
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

/// Validated, immutable menu: category name to ordered entries.
///
/// Category insertion order carries no meaning; entry order does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDocument {
    categories: BTreeMap<String, Vec<MenuEntry>>,
}

impl MenuDocument {
    pub fn new(categories: BTreeMap<String, Vec<MenuEntry>>) -> Self {
        Self { categories }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Coerces every category value to a sequence; non-arrays become empty.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(LoadError::Parse(format!(
                    "expected a JSON object at the top level, found {}",
                    kind_of(&other)
                )))
            }
        };
        let categories = root
            .into_iter()
            .map(|(category, items)| {
                let entries = match items {
                    Value::Array(values) => values.iter().map(MenuEntry::from_value).collect(),
                    other => {
                        tracing::debug!(
                            category = %category,
                            kind = kind_of(&other),
                            "category value is not a sequence; treating it as empty"
                        );
                        Vec::new()
                    }
                };
                (category, entries)
            })
            .collect();
        Ok(Self { categories })
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn entries(&self, category: &str) -> &[MenuEntry] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

fn coerce_price(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.replace(',', ".").parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|price| price.is_finite()).unwrap_or(0.0)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let entry = MenuEntry::from_value(&json!({}));
        assert_eq!(entry, MenuEntry::Item(MenuItem::new("", 0.0)));
    }

    #[test]
    fn price_strings_are_parsed_and_garbage_is_zero() {
        let item = |price: Value| MenuItem::from_object(json!({ "preco": price }).as_object().unwrap());
        assert_eq!(item(json!("7.5")).price, 7.5);
        assert_eq!(item(json!(" 3,25 ")).price, 3.25);
        assert_eq!(item(json!("abc")).price, 0.0);
        assert_eq!(item(json!(null)).price, 0.0);
        assert_eq!(item(json!([1])).price, 0.0);
    }

    #[test]
    fn non_sequence_categories_become_empty() {
        let doc = MenuDocument::from_value(json!({ "Bebidas": "oops", "Tapiocas": [] })).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.entries("Bebidas").is_empty());
        assert!(doc.contains("Tapiocas"));
    }

    #[test]
    fn non_object_items_are_kept_as_malformed() {
        let doc = MenuDocument::from_value(json!({ "Bebidas": [1, {"item": "Suco"}] })).unwrap();
        let entries = doc.entries("Bebidas");
        assert!(matches!(entries[0], MenuEntry::Malformed(_)));
        assert_eq!(entries[1].as_item().map(|item| item.name.as_str()), Some("Suco"));
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = MenuDocument::from_value(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("found array"));
    }
}
