mod common;

use menu_render::{
    menu::HostPage,
    storage::CollapseStateStore,
    view::{html, HtmlOptions},
};
use regex::Regex;

use common::{renderer_with, temp_dir, StaticLoader, SCENARIO_JSON};

fn rendered_page(store: CollapseStateStore) -> HostPage {
    let renderer = renderer_with(Box::new(StaticLoader::json(SCENARIO_JSON)), store);
    let mut page = HostPage::new().with_mount("app");
    page.mark_ready();
    renderer.render(&mut page);
    page
}

#[test]
fn page_keeps_section_order_and_classes() {
    let page = rendered_page(CollapseStateStore::in_memory());
    let content = page.mount_point("app").unwrap().content();
    let document = html::render_page(content, &HtmlOptions::default()).unwrap();

    let titles = Regex::new(r#"<span class="menu-title">([^<]+)</span>"#).unwrap();
    let found: Vec<&str> = titles
        .captures_iter(&document)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    assert_eq!(found, ["🌮 Tapiocas", "Bebidas"]);
    assert!(document.contains(r#"<div id="app">"#));
    assert!(document.contains(r#"<span class="item-name">Tapioca de queijo</span>"#));
    assert!(document.contains(r#"<span class="item-price">R$ 12,50</span>"#));
}

#[test]
fn collapsed_bodies_are_hidden_and_toggle_reports_state() {
    let store = CollapseStateStore::in_memory();
    store.set("Bebidas", false);
    let page = rendered_page(store);
    let content = page.mount_point("app").unwrap().content();
    let document = html::render_page(content, &HtmlOptions::default()).unwrap();

    let toggles = Regex::new(r#"aria-expanded="(true|false)""#).unwrap();
    let states: Vec<&str> = toggles
        .captures_iter(&document)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    assert_eq!(states, ["false", "true"]);
    assert_eq!(document.matches(r#"<div class="menu-category" hidden>"#).count(), 1);
    assert!(document.contains(r#"data-collapse-key="menuCollapsed:Tapiocas""#));
}

#[test]
fn write_page_creates_file() {
    let page = rendered_page(CollapseStateStore::in_memory());
    let target = temp_dir().join("out").join("menu.html");
    let options = HtmlOptions {
        lang: "pt-BR".into(),
        title: "Cardápio".into(),
        mount_id: "app".into(),
    };
    html::write_page(page.mount_point("app").unwrap().content(), &options, &target).unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("<title>Cardápio</title>"));
    assert!(written.contains(r#"<html lang="pt-BR">"#));
}
