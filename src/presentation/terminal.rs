//! Terminal implementation of the view traits.
//!
//! Tables are printed with `colored`, destructive actions are confirmed through
//! `dialoguer`. Errors go to stderr, everything else to stdout.

use std::path::PathBuf;

use colored::*;
use dialoguer::Confirm;

use crate::api::dto::SessionInfo;
use crate::domain::{QrImage, Tab};
use crate::presentation::charts::ChartConfig;
use crate::presentation::rows::{ActivityRow, StatCards, UrlRow, UserRow};
use crate::presentation::view::{AdminView, AnalyticsView, LandingView};

const BAR_WIDTH: usize = 40;
const URL_COLUMN: usize = 40;

/// Renders every page to the terminal.
#[derive(Debug, Default, Clone)]
pub struct TerminalView {
    assume_yes: bool,
    qr_output: Option<PathBuf>,
    charts_as_json: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every confirmation with yes.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Writes received QR codes to `path` as PNG.
    pub fn with_qr_output(mut self, path: Option<PathBuf>) -> Self {
        self.qr_output = path;
        self
    }

    /// Prints chart configs as JSON instead of drawing bars.
    pub fn charts_as_json(mut self, json: bool) -> Self {
        self.charts_as_json = json;
        self
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(1))
}

/// Sum of the chart values, clamped at the `i64` bounds.
fn total(points: &[(&str, i64)]) -> i64 {
    points
        .iter()
        .fold(0i64, |acc, (_, value)| acc.saturating_add(*value))
}

fn rule(width: usize) {
    println!("  {}", "─".repeat(width).bright_black());
}

impl AdminView for TerminalView {
    fn show_login(&self) {
        println!("{}", "🔐 Admin login".bright_blue().bold());
        println!();
    }

    fn show_dashboard(&self, identity: Option<&SessionInfo>) {
        let who = identity
            .and_then(|i| i.username.as_deref())
            .unwrap_or("admin");
        println!(
            "{} {}",
            "✅ Signed in as".green().bold(),
            who.cyan().bold()
        );
        println!();
    }

    fn show_login_error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red());
    }

    fn hide_login_error(&self) {}

    fn activate_tab(&self, tab: Tab) {
        let tabs: Vec<String> = Tab::ALL
            .iter()
            .map(|t| {
                if *t == tab {
                    format!("[{}]", t.label()).bright_white().bold().to_string()
                } else {
                    t.label().bright_black().to_string()
                }
            })
            .collect();
        println!("  {}", tabs.join("  "));
        println!();
    }

    fn render_urls(&self, rows: &[UrlRow]) {
        println!("{}", "🔗 URLs".bright_blue().bold());
        println!();

        if rows.is_empty() {
            println!("{}", "  No URLs found".yellow());
            println!();
            return;
        }

        println!(
            "  {:<5} {:<12} {:<40} {:>7} {:<11} {:<9} {}",
            "ID".bright_white().bold(),
            "Code".bright_white().bold(),
            "Original URL".bright_white().bold(),
            "Clicks".bright_white().bold(),
            "Created".bright_white().bold(),
            "Status".bright_white().bold(),
            "Actions".bright_white().bold()
        );
        rule(110);

        for row in rows {
            let status = if row.status == "Active" {
                row.status.green()
            } else {
                row.status.red()
            };
            println!(
                "  {:<5} {:<12} {:<40} {:>7} {:<11} {:<9} [{}] [{}]",
                row.id.to_string().bright_black(),
                row.short_code.cyan(),
                truncate(&row.original_url, URL_COLUMN),
                row.clicks,
                row.created.bright_black(),
                status,
                row.toggle.label,
                row.delete.label
            );
        }

        println!();
        println!("  Total: {}", rows.len().to_string().bright_white().bold());
        println!();
    }

    fn render_users(&self, rows: &[UserRow]) {
        println!("{}", "👤 Users".bright_blue().bold());
        println!();

        if rows.is_empty() {
            println!("{}", "  No users found".yellow());
            println!();
            return;
        }

        println!(
            "  {:<20} {:<30} {:<11} {}",
            "Username".bright_white().bold(),
            "Email".bright_white().bold(),
            "Created".bright_white().bold(),
            "Role".bright_white().bold()
        );
        rule(75);

        for row in rows {
            let role = if row.role == "Admin" {
                row.role.magenta()
            } else {
                row.role.normal()
            };
            println!(
                "  {:<20} {:<30} {:<11} {}",
                row.username.cyan(),
                row.email,
                row.created.bright_black(),
                role
            );
        }
        println!();
    }

    fn render_analytics(&self, cards: &StatCards) {
        print_stat_cards(cards);
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt failed");
                false
            }
        }
    }
}

fn print_stat_cards(cards: &StatCards) {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Total URLs:    {}",
        cards.total_urls.bright_green().bold()
    );
    println!(
        "  Total clicks:  {}",
        cards.total_clicks.bright_green().bold()
    );
    println!(
        "  Active URLs:   {}",
        cards.active_urls.bright_green().bold()
    );
    println!("  Top country:   {}", cards.top_country.cyan());
    println!();
}

impl LandingView for TerminalView {
    fn show_result(&self, short_url: &str) {
        println!("{}", "✨ URL shortened".green().bold());
        println!("  {}", short_url.bright_yellow().bold());
        println!();
    }

    fn hide_result(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red());
    }

    fn hide_error(&self) {}

    fn show_preview(&self, text: &str) {
        println!("  {} {}", "Preview:".bright_white(), text);
    }

    fn show_qr_code(&self, image: &QrImage) {
        match &self.qr_output {
            Some(path) => match std::fs::write(path, &image.png) {
                Ok(()) => println!(
                    "  {} {}",
                    "QR code saved to".bright_white(),
                    path.display().to_string().cyan()
                ),
                Err(e) => {
                    tracing::error!(error = %e, path = %path.display(), "Failed to write QR code");
                    eprintln!("{}", "⚠️  Could not save QR code".yellow());
                }
            },
            None => println!(
                "  {} {} bytes PNG (use --qr-out to save)",
                "QR code:".bright_white(),
                image.png.len()
            ),
        }
    }

    fn qr_unavailable(&self, message: &str) {
        println!("  {} {}", "QR code:".bright_white(), message.yellow());
    }
}

impl AnalyticsView for TerminalView {
    fn render_stats(&self, cards: &StatCards) {
        print_stat_cards(cards);
    }

    fn init_chart(&self, chart: &ChartConfig) {
        tracing::debug!(chart = %chart.kind, "Chart initialised");
    }

    fn update_chart(&self, chart: &ChartConfig) {
        if self.charts_as_json {
            match serde_json::to_string_pretty(chart) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, chart = %chart.kind, "Failed to encode chart"),
            }
            return;
        }

        println!("{}", format!("📈 {}", chart.title()).bright_blue().bold());

        let points = chart.points();
        if points.is_empty() {
            println!("{}", "  No data".yellow());
            println!();
            return;
        }

        let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0);
        let total = total(&points);
        let label_width = points
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(24);

        for (label, value) in points {
            let share = if chart.chart_type.is_proportional() && total > 0 {
                format!(" ({:.1}%)", value as f64 * 100.0 / total as f64)
            } else {
                String::new()
            };
            println!(
                "  {:<width$} {} {}{}",
                truncate(label, label_width),
                bar(value, max).bright_magenta(),
                value.to_string().bright_white(),
                share.bright_black(),
                width = label_width
            );
        }
        println!();
    }

    fn render_recent_activity(&self, rows: &[ActivityRow]) {
        println!("{}", "🕑 Recent activity".bright_blue().bold());
        println!();

        if rows.is_empty() {
            println!("{}", "  No clicks recorded yet".yellow());
            println!();
            return;
        }

        println!(
            "  {:<12} {:<40} {:<16} {:<14} {}",
            "Code".bright_white().bold(),
            "Original URL".bright_white().bold(),
            "IP".bright_white().bold(),
            "Country".bright_white().bold(),
            "Time".bright_white().bold()
        );
        rule(105);

        for row in rows {
            println!(
                "  {:<12} {:<40} {:<16} {:<14} {}",
                row.short_code.cyan(),
                truncate(&row.original_url, URL_COLUMN),
                row.ip_address,
                row.country,
                row.timestamp.bright_black()
            );
        }
        println!();
    }
}
