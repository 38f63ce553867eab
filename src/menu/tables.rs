use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category names shipped with the default configuration, in display order.
pub const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Lanches e Salgados", "🥐"),
    ("Tapiocas", "🌮"),
    ("Doces, Bolos e Sobremesas", "🍰"),
    ("Cafés e Bebidas Quentes", "☕"),
    ("Sucos, Vitaminas e Bebidas Frias", "🧃"),
    ("Refrigerantes e Energéticos", "🥤"),
];

/// Decorative icon per exact category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconTable(BTreeMap<String, String>);

impl IconTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn icon_for(&self, category: &str) -> Option<&str> {
        self.0
            .get(category)
            .map(String::as_str)
            .filter(|icon| !icon.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(name, icon)| (name.to_string(), icon.to_string()))
                .collect(),
        )
    }
}

/// Fixed sequence of category names defining sort priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferredOrder(Vec<String>);

impl PreferredOrder {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Position of `category` in the preferred sequence, first match wins.
    pub fn rank(&self, category: &str) -> Option<usize> {
        self.0.iter().position(|name| name == category)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for PreferredOrder {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().map(|(name, _)| *name))
    }
}

/// Immutable lookup tables injected into the ordering and section builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTables {
    #[serde(default)]
    pub icons: IconTable,
    #[serde(default)]
    pub preferred_order: PreferredOrder,
}
