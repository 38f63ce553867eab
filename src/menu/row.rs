use serde::Serialize;

use crate::currency::PriceFormatter;

use super::document::MenuItem;

/// Display-ready item: trimmed name and formatted price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualRow {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemRowBuilder {
    formatter: PriceFormatter,
}

impl ItemRowBuilder {
    pub fn new(formatter: PriceFormatter) -> Self {
        Self { formatter }
    }

    pub fn build(&self, item: &MenuItem) -> VisualRow {
        VisualRow {
            name: item.name.trim().to_string(),
            price: self.formatter.format(item.price),
        }
    }
}
