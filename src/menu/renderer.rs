use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{config::Config, errors::LoadError, storage::CollapseStateStore};

use super::{
    loader::{DocumentLoader, MenuDataLoader, MenuSource},
    order::CategoryOrderer,
    row::ItemRowBuilder,
    section::{SectionBuilder, VisualSection},
};

/// Ordered sections produced by a successful render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuView {
    pub sections: Vec<VisualSection>,
}

impl MenuView {
    pub fn section(&self, category: &str) -> Option<&VisualSection> {
        self.sections.iter().find(|section| section.category == category)
    }

    pub fn section_mut(&mut self, category: &str) -> Option<&mut VisualSection> {
        self.sections
            .iter_mut()
            .find(|section| section.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.category.as_str())
    }
}

/// Inline notice shown when the document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub source: String,
    pub detail: String,
}

impl ErrorNotice {
    pub fn new(source: &MenuSource, err: &LoadError) -> Self {
        Self {
            source: source.to_string(),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not load the menu file {}. Error: {}",
            self.source, self.detail
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SurfaceContent {
    #[default]
    Empty,
    Menu(MenuView),
    Error(ErrorNotice),
}

/// Addressable element of the host page whose content is swapped whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPoint {
    content: SurfaceContent,
}

impl MountPoint {
    pub fn content(&self) -> &SurfaceContent {
        &self.content
    }

    pub fn replace(&mut self, content: SurfaceContent) {
        self.content = content;
    }

    pub fn menu(&self) -> Option<&MenuView> {
        match &self.content {
            SurfaceContent::Menu(view) => Some(view),
            _ => None,
        }
    }

    pub fn menu_mut(&mut self) -> Option<&mut MenuView> {
        match &mut self.content {
            SurfaceContent::Menu(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Ready,
}

type ReadyListener = Box<dyn FnOnce(&mut HostPage)>;

/// Page shell hosting mount points and a one-shot readiness signal.
pub struct HostPage {
    state: ReadyState,
    mounts: BTreeMap<String, MountPoint>,
    listeners: Vec<ReadyListener>,
}

impl HostPage {
    pub fn new() -> Self {
        Self {
            state: ReadyState::Loading,
            mounts: BTreeMap::new(),
            listeners: Vec::new(),
        }
    }

    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.mounts.insert(id.into(), MountPoint::default());
        self
    }

    pub fn ready_state(&self) -> ReadyState {
        self.state
    }

    pub fn mount_point(&self, id: &str) -> Option<&MountPoint> {
        self.mounts.get(id)
    }

    pub fn mount_point_mut(&mut self, id: &str) -> Option<&mut MountPoint> {
        self.mounts.get_mut(id)
    }

    /// Runs `listener` now if the page is ready, otherwise once it becomes so.
    pub fn on_ready(&mut self, listener: impl FnOnce(&mut HostPage) + 'static) {
        match self.state {
            ReadyState::Ready => listener(self),
            ReadyState::Loading => self.listeners.push(Box::new(listener)),
        }
    }

    /// Fires queued listeners once; later calls are no-ops.
    pub fn mark_ready(&mut self) {
        if self.state == ReadyState::Ready {
            return;
        }
        self.state = ReadyState::Ready;
        for listener in std::mem::take(&mut self.listeners) {
            listener(self);
        }
    }
}

impl Default for HostPage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostPage")
            .field("state", &self.state)
            .field("mounts", &self.mounts)
            .field("pending_listeners", &self.listeners.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { sections: usize },
    LoadFailed,
    MountMissing,
}

/// Drives one load-and-render pass into a page mount point.
pub struct MenuRenderer {
    source: MenuSource,
    mount_id: String,
    loader: Box<dyn DocumentLoader>,
    orderer: CategoryOrderer,
    sections: SectionBuilder,
    store: CollapseStateStore,
}

impl MenuRenderer {
    pub fn new(
        source: MenuSource,
        mount_id: impl Into<String>,
        loader: Box<dyn DocumentLoader>,
        orderer: CategoryOrderer,
        sections: SectionBuilder,
        store: CollapseStateStore,
    ) -> Self {
        Self {
            source,
            mount_id: mount_id.into(),
            loader,
            orderer,
            sections,
            store,
        }
    }

    /// Wires the standard loader, tables and formatter from configuration.
    pub fn from_config(config: &Config, store: CollapseStateStore) -> Self {
        let rows = ItemRowBuilder::new(config.price_formatter());
        Self::new(
            MenuSource::parse(&config.source),
            config.mount_id.clone(),
            Box::new(MenuDataLoader::new()),
            CategoryOrderer::new(config.tables.preferred_order.clone()),
            SectionBuilder::new(rows, config.tables.icons.clone()),
            store,
        )
    }

    pub fn source(&self) -> &MenuSource {
        &self.source
    }

    pub fn set_source(&mut self, source: MenuSource) {
        self.source = source;
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn store(&self) -> &CollapseStateStore {
        &self.store
    }

    /// Builds the full content for the mount point without touching it.
    pub fn compose(&self) -> SurfaceContent {
        match self.loader.load(&self.source) {
            Ok(document) => {
                let sections = self
                    .orderer
                    .order(document.category_names())
                    .iter()
                    .map(|category| {
                        self.sections
                            .build(category, document.entries(category), &self.store)
                    })
                    .collect();
                SurfaceContent::Menu(MenuView { sections })
            }
            Err(err) => {
                tracing::warn!(source = %self.source, error = %err, "menu load failed");
                SurfaceContent::Error(ErrorNotice::new(&self.source, &err))
            }
        }
    }

    pub fn render(&self, page: &mut HostPage) -> RenderOutcome {
        if page.mount_point(&self.mount_id).is_none() {
            tracing::error!(mount_id = %self.mount_id, "mount point not found; nothing rendered");
            return RenderOutcome::MountMissing;
        }
        let content = self.compose();
        let outcome = match &content {
            SurfaceContent::Menu(view) => RenderOutcome::Rendered {
                sections: view.sections.len(),
            },
            _ => RenderOutcome::LoadFailed,
        };
        if let Some(mount) = page.mount_point_mut(&self.mount_id) {
            mount.replace(content);
        }
        tracing::info!(mount_id = %self.mount_id, ?outcome, "menu render pass finished");
        outcome
    }

    /// Schedules a single render for when `page` is ready.
    pub fn install(renderer: Rc<MenuRenderer>, page: &mut HostPage) {
        page.on_ready(move |page| {
            renderer.render(page);
        });
    }
}

impl fmt::Debug for MenuRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRenderer")
            .field("source", &self.source)
            .field("mount_id", &self.mount_id)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
