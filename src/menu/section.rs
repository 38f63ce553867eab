use serde::Serialize;

use crate::storage::{collapse_key, CollapseStateStore};

use super::{
    document::MenuEntry,
    row::{ItemRowBuilder, VisualRow},
    tables::IconTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionState {
    Collapsed,
    Expanded,
}

impl SectionState {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            SectionState::Collapsed
        } else {
            SectionState::Expanded
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == SectionState::Collapsed
    }

    pub fn flipped(self) -> Self {
        match self {
            SectionState::Collapsed => SectionState::Expanded,
            SectionState::Expanded => SectionState::Collapsed,
        }
    }
}

/// Header control that flips a section's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub label: &'static str,
    pub affordance: &'static str,
    pub expanded: bool,
}

impl ToggleControl {
    pub fn for_state(state: SectionState) -> Self {
        match state {
            SectionState::Collapsed => Self {
                label: "Expand",
                affordance: "▸",
                expanded: false,
            },
            SectionState::Expanded => Self {
                label: "Collapse",
                affordance: "▾",
                expanded: true,
            },
        }
    }
}

/// One category as shown: header (icon, name, toggle) and a body of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualSection {
    pub category: String,
    pub icon: Option<String>,
    pub toggle: ToggleControl,
    pub rows: Vec<VisualRow>,
    state: SectionState,
}

impl VisualSection {
    pub fn new(
        category: impl Into<String>,
        icon: Option<String>,
        rows: Vec<VisualRow>,
        state: SectionState,
    ) -> Self {
        Self {
            category: category.into(),
            icon,
            toggle: ToggleControl::for_state(state),
            rows,
            state,
        }
    }

    /// Header text: optional icon, a space, then the category name.
    pub fn title(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{icon} {}", self.category),
            None => self.category.clone(),
        }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    pub fn body_visible(&self) -> bool {
        !self.state.is_collapsed()
    }

    pub fn collapse_key(&self) -> String {
        collapse_key(&self.category)
    }

    /// Flips visibility, refreshes the toggle and persists the new flag.
    pub fn toggle(&mut self, store: &CollapseStateStore) -> SectionState {
        let next = self.state.flipped();
        self.apply(next, store);
        next
    }

    pub fn set_collapsed(&mut self, store: &CollapseStateStore, collapsed: bool) {
        self.apply(SectionState::from_collapsed(collapsed), store);
    }

    fn apply(&mut self, state: SectionState, store: &CollapseStateStore) {
        self.state = state;
        self.toggle = ToggleControl::for_state(state);
        store.set(&self.category, state.is_collapsed());
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    rows: ItemRowBuilder,
    icons: IconTable,
}

impl SectionBuilder {
    pub fn new(rows: ItemRowBuilder, icons: IconTable) -> Self {
        Self { rows, icons }
    }

    pub fn build(
        &self,
        category: &str,
        entries: &[MenuEntry],
        store: &CollapseStateStore,
    ) -> VisualSection {
        let rows = entries
            .iter()
            .filter_map(|entry| match entry.as_item() {
                Some(item) => Some(self.rows.build(item)),
                None => {
                    tracing::debug!(category, "skipping malformed menu entry");
                    None
                }
            })
            .collect();
        let icon = self.icons.icon_for(category).map(str::to_string);
        let state = SectionState::from_collapsed(store.get(category));
        VisualSection::new(category, icon, rows, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{currency::PriceFormatter, menu::document::MenuItem};
    use serde_json::json;

    fn builder() -> SectionBuilder {
        SectionBuilder::new(
            ItemRowBuilder::new(PriceFormatter::fallback("BRL")),
            IconTable::default(),
        )
    }

    #[test]
    fn unknown_category_has_no_icon() {
        let store = CollapseStateStore::in_memory();
        let section = builder().build("Bebidas", &[], &store);
        assert_eq!(section.icon, None);
        assert_eq!(section.title(), "Bebidas");
        assert!(section.rows.is_empty());
    }

    #[test]
    fn known_category_title_is_prefixed_with_icon() {
        let store = CollapseStateStore::in_memory();
        let section = builder().build("Tapiocas", &[], &store);
        assert_eq!(section.title(), "🌮 Tapiocas");
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let store = CollapseStateStore::in_memory();
        let entries = vec![
            MenuEntry::Malformed(json!("loose string")),
            MenuEntry::Item(MenuItem::new("Suco", 7.0)),
            MenuEntry::Malformed(json!(null)),
        ];
        let section = builder().build("Bebidas", &entries, &store);
        assert_eq!(section.rows.len(), 1);
        assert_eq!(section.rows[0].name, "Suco");
    }

    #[test]
    fn toggle_flips_label_and_persists() {
        let store = CollapseStateStore::in_memory();
        let mut section = builder().build("Tapiocas", &[], &store);
        assert_eq!(section.state(), SectionState::Collapsed);
        assert_eq!(section.toggle.label, "Expand");

        assert_eq!(section.toggle(&store), SectionState::Expanded);
        assert!(section.body_visible());
        assert_eq!(section.toggle.label, "Collapse");
        assert!(!store.get("Tapiocas"));

        section.toggle(&store);
        assert!(!section.body_visible());
        assert!(store.get("Tapiocas"));
    }
}
