//! Menu domain: document model, loading, ordering and the section builders
//! that feed a render pass.

pub mod document;
pub mod loader;
pub mod order;
pub mod renderer;
pub mod row;
pub mod section;
pub mod tables;

pub use document::{MenuDocument, MenuEntry, MenuItem};
pub use loader::{DocumentLoader, MenuDataLoader, MenuSource};
pub use order::CategoryOrderer;
pub use renderer::{
    ErrorNotice, HostPage, MenuRenderer, MenuView, MountPoint, ReadyState, RenderOutcome,
    SurfaceContent,
};
pub use row::{ItemRowBuilder, VisualRow};
pub use section::{SectionBuilder, SectionState, ToggleControl, VisualSection};
pub use tables::{IconTable, MenuTables, PreferredOrder};
