use menu_render::{
    config::Config,
    init,
    menu::{HostPage, MenuRenderer, RenderOutcome},
    storage::CollapseStateStore,
};

mod common;

#[test]
fn file_menu_render_smoke() {
    init();

    let path = common::write_menu(common::SCENARIO_JSON);
    let config = Config {
        source: path.display().to_string(),
        ..Config::default()
    };
    let renderer = MenuRenderer::from_config(&config, CollapseStateStore::in_memory());

    let mut page = HostPage::new().with_mount("app");
    let outcome = renderer.render(&mut page);
    assert_eq!(outcome, RenderOutcome::Rendered { sections: 2 });

    let view = page
        .mount_point("app")
        .and_then(|mount| mount.menu())
        .expect("menu rendered");
    let order: Vec<&str> = view.categories().collect();
    assert_eq!(order, ["Tapiocas", "Bebidas"]);
}
