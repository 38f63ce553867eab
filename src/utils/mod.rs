pub mod build_info;
pub mod paths;

/// Installs the global tracing subscriber; later calls leave the first one in place.
pub fn init_tracing() {
    use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "menu_render=info".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
