//! Terminal rendering of dashboard snapshots
//!
//! One block per service: a name line with a status badge, the history grid
//! (one colored cell per sample, oldest first), and the rolling uptime
//! summary colored by severity tier.

use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::dashboard::{DashboardSnapshot, ServiceReport};
use crate::errors::Result;
use crate::status::Status;
use crate::uptime::Severity;

/// Cells per grid row. 24 cells is six hours at 15min resolution, one day
/// at 1hr resolution.
const GRID_WIDTH: usize = 24;

fn status_cell(status: Status) -> ColoredString {
    match status {
        Status::Online => "●".green(),
        Status::Degraded => "●".yellow(),
        Status::Offline => "●".red(),
    }
}

fn status_badge(status: Status) -> ColoredString {
    let label = format!("[{}]", status);
    match status {
        Status::Online => label.green().bold(),
        Status::Degraded => label.yellow().bold(),
        Status::Offline => label.red().bold(),
    }
}

fn severity_colored(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Healthy => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Critical => text.red(),
    }
}

/// Short label for a lookback window: whole days read as days.
fn window_label(window_hours: i64) -> String {
    if window_hours >= 24 && window_hours % 24 == 0 && window_hours > 24 {
        format!("{}d", window_hours / 24)
    } else {
        format!("{}h", window_hours)
    }
}

fn render_service(out: &mut String, report: &ServiceReport) {
    let _ = writeln!(
        out,
        "{}  {}  ({} resolution)",
        report.service.name.bright_white().bold(),
        status_badge(report.service.status),
        report.resolution
    );

    for row in report.service.history.chunks(GRID_WIDTH) {
        let mut line = String::from("  ");
        for sample in row {
            line.push_str(&status_cell(sample.status).to_string());
            line.push(' ');
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let mut summary = String::from("  ");
    for window in &report.uptimes {
        let figure = severity_colored(window.severity, &window.uptime.to_string());
        let _ = write!(summary, "{}: {}  ", window_label(window.window_hours), figure);
    }
    let _ = writeln!(out, "{}", summary.trim_end());
}

/// Render a snapshot as colored terminal text.
pub fn render_text(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Service Status".bright_white().bold());
    let _ = writeln!(
        out,
        "generated at {}",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out);

    for report in &snapshot.services {
        render_service(&mut out, report);
        let _ = writeln!(out);
    }

    out.trim_end().to_string()
}

/// Render a snapshot as pretty-printed JSON.
pub fn render_json(snapshot: &DashboardSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::Dashboard;
    use crate::status::Resolution;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot() -> DashboardSnapshot {
        let dashboard = Dashboard::new(Config::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        dashboard
            .snapshot(Resolution::OneHour, Utc::now(), &mut rng)
            .unwrap()
    }

    #[test]
    fn test_window_labels() {
        assert_eq!(window_label(24), "24h");
        assert_eq!(window_label(168), "7d");
        assert_eq!(window_label(720), "30d");
        assert_eq!(window_label(36), "36h");
    }

    #[test]
    fn test_text_render_lists_every_service() {
        colored::control::set_override(false);
        let text = render_text(&snapshot());

        assert!(text.contains("Service Status"));
        for name in ["Discovery", "Catalyst", "Landscape"] {
            assert!(text.contains(name));
        }
        assert!(text.contains("24h:"));
        assert!(text.contains("7d:"));
        assert!(text.contains("30d:"));
    }

    #[test]
    fn test_text_render_wraps_grid_rows() {
        colored::control::set_override(false);
        let text = render_text(&snapshot());

        // 72 hourly cells wrap into three rows of 24 per service.
        let cell_rows = text
            .lines()
            .filter(|line| line.trim_start().starts_with('●'))
            .count();
        assert_eq!(cell_rows, 9);
    }

    #[test]
    fn test_json_render_round_trips() {
        let snapshot = snapshot();
        let json = render_json(&snapshot).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["services"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["services"][0]["name"], "Discovery");
        assert_eq!(parsed["services"][0]["resolution"], "1hr");
    }
}
