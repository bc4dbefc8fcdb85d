//! Interactive admin console for url-shortener.
//!
//! Probes the server session, asks for credentials when there is none, then
//! reads commands until `quit`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin
//! cargo run --bin admin -- --base-url https://sho.rt --yes
//! ```
//!
//! # Commands
//!
//! - `tab urls|users|analytics` - Switch tab and load its data
//! - `toggle <id>` - Enable or disable a URL from the current table
//! - `delete <id>` - Delete a URL after confirmation
//! - `toggle:<id>:<0|1>`, `delete:<id>` - Raw row actions
//! - `refresh`, `logout`, `login`, `help`, `quit`
//!
//! # Environment Variables
//!
//! - `SHORTENER_BASE_URL` or `SHORTENER_SCHEME`/`SHORTENER_HOST`/`SHORTENER_PORT`
//! - `ADMIN_USERNAME` (optional): default offered by the login prompt

use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};

use url_shortener_console::api::dto::SessionInfo;
use url_shortener_console::config::Config;
use url_shortener_console::prelude::*;
use url_shortener_console::presentation::{AdminView, StatCards, UrlRow, UserRow};
use url_shortener_console::telemetry;

/// Admin console for url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server root, overrides SHORTENER_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Skip delete confirmations
    #[arg(short = 'y', long)]
    yes: bool,
}

/// Terminal view that also remembers the last URLs table, so `toggle <id>`
/// can send the inverse of the status the user is looking at.
struct ConsoleView {
    terminal: TerminalView,
    urls: Mutex<Vec<UrlRow>>,
}

impl ConsoleView {
    fn new(terminal: TerminalView) -> Self {
        Self {
            terminal,
            urls: Mutex::new(Vec::new()),
        }
    }

    fn toggle_action(&self, id: i64) -> Option<RowAction> {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.toggle.action)
    }
}

impl AdminView for ConsoleView {
    fn show_login(&self) {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.terminal.show_login();
    }

    fn show_dashboard(&self, identity: Option<&SessionInfo>) {
        self.terminal.show_dashboard(identity);
    }

    fn show_login_error(&self, message: &str) {
        self.terminal.show_login_error(message);
    }

    fn hide_login_error(&self) {
        self.terminal.hide_login_error();
    }

    fn activate_tab(&self, tab: Tab) {
        self.terminal.activate_tab(tab);
    }

    fn render_urls(&self, rows: &[UrlRow]) {
        *self.urls.lock().unwrap_or_else(PoisonError::into_inner) = rows.to_vec();
        self.terminal.render_urls(rows);
    }

    fn render_users(&self, rows: &[UserRow]) {
        self.terminal.render_users(rows);
    }

    fn render_analytics(&self, cards: &StatCards) {
        self.terminal.render_analytics(cards);
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.terminal.confirm(prompt)
    }
}

/// One line typed at the console prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tab(String),
    Toggle(i64),
    Delete(i64),
    Action(RowAction),
    Refresh,
    Logout,
    Login,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.contains(':') {
            return line
                .parse::<RowAction>()
                .map(Command::Action)
                .map_err(|e| e.to_string());
        }

        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();

        let id = || -> Result<i64, String> {
            arg.ok_or_else(|| format!("'{name}' needs a URL id"))?
                .parse()
                .map_err(|_| format!("'{}' is not a URL id", arg.unwrap_or_default()))
        };

        match name.as_str() {
            "tab" => arg
                .map(|t| Command::Tab(t.to_string()))
                .ok_or_else(|| "'tab' needs urls, users or analytics".to_string()),
            "urls" | "users" | "analytics" => Ok(Command::Tab(name)),
            "toggle" => Ok(Command::Toggle(id()?)),
            "delete" => Ok(Command::Delete(id()?)),
            "refresh" | "r" => Ok(Command::Refresh),
            "logout" => Ok(Command::Logout),
            "login" => Ok(Command::Login),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("type 'help' for commands".to_string()),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

type Controller = AdminController<HttpShortenerApi, ConsoleView>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?.with_base_url(cli.base_url);
    config.validate()?;
    telemetry::init(&config);
    config.print_summary();

    let api = Arc::new(HttpShortenerApi::from_config(&config).context("Failed to build HTTP client")?);
    let view = Arc::new(ConsoleView::new(TerminalView::new().assume_yes(cli.yes)));
    let controller = AdminController::new(api, view.clone());

    println!("{}", "🛠  url-shortener admin".bright_blue().bold());
    println!("  Server: {}", config.base_url.cyan());
    println!();

    if !controller.check_session().await.is_authenticated() {
        prompt_login(&controller, config.admin_username.as_deref()).await?;
    }

    loop {
        let line: String = match Input::new()
            .with_prompt("admin")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // stdin closed
            Err(_) => break,
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };

        if !run_command(&controller, &view, command, config.admin_username.as_deref()).await? {
            break;
        }
    }

    println!("{}", "👋 Bye".bright_black());
    Ok(())
}

/// Executes one command. Returns `false` when the console should exit.
async fn run_command(
    controller: &Controller,
    view: &ConsoleView,
    command: Command,
    default_username: Option<&str>,
) -> Result<bool> {
    let signed_in = controller.session_state().is_authenticated();
    let needs_session = !matches!(
        command,
        Command::Login | Command::Help | Command::Quit
    );
    if needs_session && !signed_in {
        println!("{}", "Not signed in. Use 'login' first.".yellow());
        return Ok(true);
    }

    match command {
        Command::Tab(id) => {
            if let Err(e) = controller.select_tab_id(&id).await {
                println!("{}", e.to_string().yellow());
            }
        }
        Command::Toggle(id) => match view.toggle_action(id) {
            Some(action) => controller.dispatch(action).await,
            None => println!(
                "{}",
                format!("URL {id} is not in the current table. Try 'tab urls'.").yellow()
            ),
        },
        Command::Delete(id) => controller.dispatch(RowAction::Delete { id }).await,
        Command::Action(action) => controller.dispatch(action).await,
        Command::Refresh => controller.refresh().await,
        Command::Logout => controller.logout().await,
        Command::Login => prompt_login(controller, default_username).await?,
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

/// Asks for credentials until the server accepts them.
async fn prompt_login(controller: &Controller, default_username: Option<&str>) -> Result<()> {
    loop {
        let mut input = Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true);
        if let Some(name) = default_username {
            input = input.default(name.to_string());
        }
        let username = input.interact_text().context("Failed to read username")?;

        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read password")?;

        // The controller has already shown why a login failed.
        if controller.login(&username, &password).await.is_ok() {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("{}", "Commands".bright_white().bold());
    println!("  {:<24} {}", "tab urls|users|analytics", "Switch tab and load its data");
    println!("  {:<24} {}", "toggle <id>", "Enable or disable a URL");
    println!("  {:<24} {}", "delete <id>", "Delete a URL");
    println!("  {:<24} {}", "refresh", "Reload the active tab");
    println!("  {:<24} {}", "logout", "End the session");
    println!("  {:<24} {}", "login", "Sign in again");
    println!("  {:<24} {}", "quit", "Leave the console");
    println!();
}
