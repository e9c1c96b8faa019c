//! Human-readable probe transcript
//!
//! ANSI-colored lines on standard output. This is the only output of a
//! probe run; there is no machine-readable report and probe failures do not
//! change the process exit status.

use crate::adapters::api::ProbeOutcome;
use crate::core::probe::preview::BodyPreview;
use crate::core::probe::scenario::{AuthPhase, ScenarioSummary};
use owo_colors::OwoColorize;

/// Print the run header with the probed target
pub fn print_header(target: &str) {
    println!("{}", "=== EbookAura API Probes ===".bold());
    println!("Probing API at: {target}");
}

/// Print a phase divider
pub fn print_phase(name: &str) {
    println!();
    println!("{}", format!("=== {name} ===").cyan());
}

/// Print one probe result with status code and body preview
pub fn print_probe(outcome: &ProbeOutcome) {
    println!();
    if outcome.success {
        println!("{}", format!("✓ {} - Success", outcome.name).green());
    } else {
        println!("{}", format!("✗ {} - Failed", outcome.name).red());
    }

    if let Some(status) = outcome.status {
        println!("  Status Code: {status}");
    }

    if let Some(body) = &outcome.body {
        match BodyPreview::from_value(body) {
            BodyPreview::Message(message) => println!("  Response: {message}"),
            BodyPreview::Items(count) => println!("  Retrieved {count} items"),
            BodyPreview::Opaque(text) => println!("  Data: {text}"),
        }
    }

    if let Some(error) = &outcome.error {
        println!("  {}", format!("Error: {error}").red());
    }
}

/// Print the early abort when the listing probe fails
pub fn print_abort() {
    println!();
    println!(
        "{}",
        "Server is not responding correctly. Aborting probes.".red()
    );
}

/// Print a yellow notice that authenticated probes are skipped
pub fn print_auth_skipped(reason: &str) {
    println!("{}", format!("{reason}. Skipping authenticated probes.").yellow());
}

/// Print the final summary of which phases ran
///
/// Only reachable runs get here; an aborted run ends on the abort line.
pub fn print_summary(summary: &ScenarioSummary) {
    println!();
    println!("{}", "=== Probe Summary ===".bold());
    println!("API Status: {}", "Available".green());
    println!("Public Endpoints: {}", "Probed".green());

    match summary.auth {
        AuthPhase::Probed => {
            println!("Authenticated Endpoints: {}", "Probed".green());
        }
        AuthPhase::LoginFailed => {
            println!(
                "Authenticated Endpoints: {}",
                "Skipped (login failed)".yellow()
            );
        }
        AuthPhase::Skipped => {
            println!("Authenticated Endpoints: {}", "Skipped".yellow());
        }
    }

    println!();
    println!("All probes completed. Check the transcript above for failures.");
}
