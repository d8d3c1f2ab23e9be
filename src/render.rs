use crate::app::App;
use crate::models::ContributorSummary;
use colored::*;
use std::fmt::Write;

/// "1 contribution" for exactly one, "N contributions" otherwise.
pub fn contribution_label(contributions: u64) -> String {
    if contributions == 1 {
        format!("{} contribution", contributions)
    } else {
        format!("{} contributions", contributions)
    }
}

/// One gallery card, in the order received.
pub fn render_card(contributor: &ContributorSummary) -> String {
    format!(
        "  {} {}\n    {}\n    {} {}\n    {} {}\n",
        "●".cyan(),
        contributor.login.bold(),
        contribution_label(contributor.contributions).green(),
        "avatar: ".dimmed(),
        contributor.avatar_url,
        "profile:".dimmed(),
        contributor.profile_url.underline(),
    )
}

/// Render the whole screen: error, loading indicator, then the gallery.
pub fn render(app: &App) -> String {
    let mut out = String::new();

    if !app.error.is_empty() {
        let _ = writeln!(out, "{}", app.error.red());
    }

    if app.loading {
        let _ = writeln!(out, "{}", "Loading contributors...".yellow());
    }

    if !app.contributors.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("Contributors to {}/{}", app.owner, app.repo).bold().green()
        );
        let _ = writeln!(out, "{}", "=".repeat(50).dimmed());
        for contributor in &app.contributors {
            out.push_str(&render_card(contributor));
        }
    }

    out
}
