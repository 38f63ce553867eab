#![doc(test(attr(deny(warnings))))]

//! Menu Render turns a categorized price list (a JSON menu document) into
//! ordered, collapsible sections for an HTML page or a terminal.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod menu;
pub mod storage;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Menu Render tracing initialized.");
    });
}
