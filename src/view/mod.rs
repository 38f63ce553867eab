//! Presentations of a mounted [`SurfaceContent`](crate::menu::SurfaceContent).

pub mod html;
pub mod terminal;

pub use html::{render_page, HtmlOptions};
pub use terminal::TerminalView;
