use std::path::Path;

use askama::Template;

use crate::{
    errors::Result,
    menu::{SectionState, SurfaceContent, ToggleControl, VisualRow, VisualSection},
};

#[derive(Debug, Clone)]
pub struct HtmlOptions {
    pub lang: String,
    pub title: String,
    pub mount_id: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "pt-BR".into(),
            title: "Menu".into(),
            mount_id: "app".into(),
        }
    }
}

struct SectionView {
    title: String,
    collapse_key: String,
    expanded: bool,
    toggle_label: &'static str,
    affordance: &'static str,
    rows: Vec<VisualRow>,
}

impl From<&VisualSection> for SectionView {
    fn from(section: &VisualSection) -> Self {
        Self {
            title: section.title(),
            collapse_key: section.collapse_key(),
            expanded: section.body_visible(),
            toggle_label: section.toggle.label,
            affordance: section.toggle.affordance,
            rows: section.rows.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "menu_page.html")]
struct MenuPageTemplate<'a> {
    lang: &'a str,
    title: &'a str,
    mount_id: &'a str,
    error: Option<String>,
    has_menu: bool,
    sections: Vec<SectionView>,
    collapsed_toggle: ToggleControl,
    expanded_toggle: ToggleControl,
}

/// Renders mounted content as a standalone HTML document.
///
/// Menu pages carry a small script that makes the toggles work in a browser
/// and keeps each section's state in `localStorage` under its collapse key.
pub fn render_page(content: &SurfaceContent, options: &HtmlOptions) -> Result<String> {
    let (error, has_menu, sections) = match content {
        SurfaceContent::Empty => (None, false, Vec::new()),
        SurfaceContent::Error(notice) => (Some(notice.to_string()), false, Vec::new()),
        SurfaceContent::Menu(view) => (
            None,
            true,
            view.sections.iter().map(SectionView::from).collect(),
        ),
    };
    let template = MenuPageTemplate {
        lang: &options.lang,
        title: &options.title,
        mount_id: &options.mount_id,
        error,
        has_menu,
        sections,
        collapsed_toggle: ToggleControl::for_state(SectionState::Collapsed),
        expanded_toggle: ToggleControl::for_state(SectionState::Expanded),
    };
    Ok(template.render()?)
}

pub fn write_page(content: &SurfaceContent, options: &HtmlOptions, path: &Path) -> Result<()> {
    let html = render_page(content, options)?;
    crate::utils::paths::write_atomic(path, &html)?;
    Ok(())
}
