use std::{path::PathBuf, rc::Rc};

use strsim::levenshtein;
use thiserror::Error;

use crate::{
    cli::output,
    config::{Config, ConfigManager},
    errors::{ConfigError, MenuError},
    menu::{HostPage, MenuRenderer, MenuSource, SurfaceContent},
    storage::{CollapseStateStore, JsonKeyValueStore},
    utils::build_info,
    view::{html, HtmlOptions, TerminalView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),
    #[error(transparent)]
    Failed(#[from] MenuError),
}

pub(crate) type CommandResult = Result<LoopControl, CommandError>;

pub(crate) const COMMANDS: &[(&str, &str, &str)] = &[
    ("show", "show", "Reload the menu and print it"),
    ("categories", "categories", "List categories in display order"),
    ("toggle", "toggle <category>", "Flip a category between collapsed and expanded"),
    ("expand", "expand <category>", "Expand a category"),
    ("collapse", "collapse <category>", "Collapse a category"),
    ("reset", "reset <category>", "Forget the stored state of a category"),
    ("export", "export <path>", "Write the current page as HTML"),
    ("source", "source [<path-or-url>]", "Show or change the menu source"),
    ("version", "version", "Show build information"),
    ("help", "help", "List commands"),
    ("exit", "exit", "Leave the shell"),
];

static EMPTY_CONTENT: SurfaceContent = SurfaceContent::Empty;

/// State shared by every command of one shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub(crate) running: bool,
    config: Config,
    config_manager: ConfigManager,
    page: HostPage,
    renderer: Rc<MenuRenderer>,
    view: TerminalView,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?.with_env_overrides();
        Ok(Self::with_config(mode, config, config_manager))
    }

    pub fn with_config(mode: CliMode, config: Config, config_manager: ConfigManager) -> Self {
        let view = match mode {
            CliMode::Interactive => TerminalView::detect(),
            CliMode::Script => TerminalView::plain(),
        };
        let renderer = Rc::new(build_renderer(&config, &config_manager));
        let page = HostPage::new().with_mount(config.mount_id.clone());
        Self {
            mode,
            running: true,
            config,
            config_manager,
            page,
            renderer,
            view,
        }
    }

    /// Installs the renderer, signals readiness and prints the first pass.
    pub fn start(&mut self) {
        MenuRenderer::install(Rc::clone(&self.renderer), &mut self.page);
        self.page.mark_ready();
        self.print_mounted();
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _, _)| *name).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "menu> ".to_string()
    }

    pub fn content(&self) -> &SurfaceContent {
        self.page
            .mount_point(self.renderer.mount_id())
            .map(|mount| mount.content())
            .unwrap_or(&EMPTY_CONTENT)
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match command {
            "show" | "render" | "reload" => self.cmd_show(),
            "categories" | "ls" => self.cmd_categories(),
            "toggle" => self.cmd_set_state(args, None),
            "expand" => self.cmd_set_state(args, Some(false)),
            "collapse" => self.cmd_set_state(args, Some(true)),
            "reset" => self.cmd_reset(args),
            "export" => self.cmd_export(args),
            "source" => self.cmd_source(args),
            "version" => {
                output::info(build_info::current().summary());
                Ok(LoopControl::Continue)
            }
            "help" | "?" => {
                self.print_help();
                Ok(LoopControl::Continue)
            }
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    fn cmd_show(&mut self) -> CommandResult {
        self.renderer.render(&mut self.page);
        self.print_mounted();
        Ok(LoopControl::Continue)
    }

    fn cmd_categories(&mut self) -> CommandResult {
        match self.menu_categories() {
            Some(names) if !names.is_empty() => {
                for (idx, name) in names.iter().enumerate() {
                    output::block(&format!("{:>2}. {}", idx + 1, name));
                }
            }
            Some(_) => output::info("The menu has no categories."),
            None => output::warning("No menu is loaded."),
        }
        Ok(LoopControl::Continue)
    }

    /// `None` toggles; `Some(collapsed)` sets explicitly.
    fn cmd_set_state(&mut self, args: &[&str], collapsed: Option<bool>) -> CommandResult {
        let category = self.resolve_category(args)?;
        let mount_id = self.renderer.mount_id().to_string();
        let renderer = Rc::clone(&self.renderer);
        let section = self
            .page
            .mount_point_mut(&mount_id)
            .and_then(|mount| mount.menu_mut())
            .and_then(|menu| menu.section_mut(&category))
            .ok_or_else(|| CommandError::UnknownCategory(category.clone()))?;
        match collapsed {
            None => {
                section.toggle(renderer.store());
            }
            Some(flag) => section.set_collapsed(renderer.store(), flag),
        }
        output::block(&self.view.render_section(section));
        Ok(LoopControl::Continue)
    }

    fn cmd_reset(&mut self, args: &[&str]) -> CommandResult {
        let category = self.resolve_category(args)?;
        self.renderer.store().forget(&category);
        output::success(format!("Stored state for `{category}` cleared."));
        self.cmd_show()
    }

    fn cmd_export(&mut self, args: &[&str]) -> CommandResult {
        let path = match args {
            [path] => PathBuf::from(*path),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "usage: export <path>".to_string(),
                ))
            }
        };
        let options = HtmlOptions {
            lang: self.config.locale.clone(),
            title: self.config.page_title().to_string(),
            mount_id: self.config.mount_id.clone(),
        };
        html::write_page(self.content(), &options, &path)?;
        output::success(format!("Menu exported to {}", path.display()));
        Ok(LoopControl::Continue)
    }

    fn cmd_source(&mut self, args: &[&str]) -> CommandResult {
        if args.is_empty() {
            output::info(format!("Source: {}", self.renderer.source()));
            return Ok(LoopControl::Continue);
        }
        let raw = args.join(" ");
        self.config.source = MenuSource::parse(&raw).to_string();
        self.renderer = Rc::new(build_renderer(&self.config, &self.config_manager));
        output::info(format!("Source set to {}", self.renderer.source()));
        self.cmd_show()
    }

    fn resolve_category(&self, args: &[&str]) -> Result<String, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "a category name is required".to_string(),
            ));
        }
        let wanted = args.join(" ");
        let names = self.menu_categories().unwrap_or_default();
        if names.iter().any(|name| *name == wanted) {
            return Ok(wanted);
        }
        if let Some(best) = suggest(&wanted, names.iter().map(String::as_str)) {
            output::hint(format!("Did you mean `{best}`?"));
        }
        Err(CommandError::UnknownCategory(wanted))
    }

    fn menu_categories(&self) -> Option<Vec<String>> {
        self.page
            .mount_point(self.renderer.mount_id())
            .and_then(|mount| mount.menu())
            .map(|menu| menu.categories().map(str::to_string).collect())
    }

    fn print_mounted(&self) {
        match self.page.mount_point(self.renderer.mount_id()) {
            Some(mount) => output::block(&self.view.render(mount.content())),
            None => output::error(format!(
                "Mount point `{}` is missing; nothing to show.",
                self.renderer.mount_id()
            )),
        }
    }

    pub(crate) fn print_help(&self) {
        let width = COMMANDS
            .iter()
            .map(|(_, usage, _)| usage.len())
            .max()
            .unwrap_or(0);
        for (_, usage, description) in COMMANDS {
            output::block(&format!("  {:<width$}  {}", usage, description, width = width));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::UnknownCommand(name) => {
                output::error(format!("Unknown command `{name}`"));
                if let Some(best) = suggest(&name, self.command_names()) {
                    output::hint(format!("Did you mean `{best}`?"));
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help` for usage details.");
            }
            other => output::error(other),
        }
    }
}

/// Builds a renderer backed by the session's persisted collapse state.
pub fn build_renderer(config: &Config, config_manager: &ConfigManager) -> MenuRenderer {
    let store = if config.collapsible {
        CollapseStateStore::new(Box::new(JsonKeyValueStore::new(config_manager.state_file())))
    } else {
        CollapseStateStore::always_expanded()
    };
    MenuRenderer::from_config(config, store)
}

/// Closest candidate within edit distance 3.
pub(crate) fn suggest<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(input, candidate), candidate))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, candidate)| candidate)
}
