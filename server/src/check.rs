//! Check command - validate the invitation content

use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, bail};
use wedding_core::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Content problems that do not stop the page from rendering.
pub fn inspect(config: &Config, now: DateTime<Utc>) -> Report {
    let mut report = Report::default();

    if config.gallery.is_empty() {
        report.add_warning("gallery has no images");
    }
    if config.timeline.is_empty() {
        report.add_warning("timeline has no entries");
    }
    if config.events.is_empty() {
        report.add_warning("no events configured");
    }
    for event in &config.events {
        if event.map_url.trim().is_empty() {
            report.add_warning(format!("event '{}' has no map URL", event.title));
        }
    }
    if config.gifts.accounts.is_empty() && config.gifts.address.is_none() {
        report.add_warning("gift section has no accounts and no address");
    }
    if config.ticker.headlines.is_empty() {
        report.add_warning("ticker has no headlines");
    }
    if config.wedding.countdown_target.with_timezone(&Utc) <= now {
        report.add_warning(format!(
            "countdown target {} is in the past",
            config.wedding.countdown_target
        ));
    }

    report
}

/// Run the check command.
///
/// Loads the invitation with `WEDDING__*` overrides and reports problems.
/// With `strict`, warnings fail the check too.
pub fn run(invitation: &Path, strict: bool) -> Result<()> {
    tracing::info!(?invitation, strict, "Checking invitation content");

    println!("Checking invitation...");
    let report = match Config::load_with_env(invitation) {
        Ok(config) => {
            println!("  ✓ Invitation valid");
            inspect(&config, Utc::now())
        }
        Err(e) => {
            let mut report = Report::default();
            report.add_error(format!("Invitation error: {e}"));
            println!("  ✗ Invitation invalid: {e}");
            report
        }
    };

    for warning in &report.warnings {
        println!("  ⚠ {warning}");
    }

    if report.has_errors() {
        bail!("{} error(s) found", report.errors.len());
    }
    if strict && report.has_warnings() {
        bail!("{} warning(s) found (strict mode)", report.warnings.len());
    }

    println!("\nAll checks passed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn before_wedding() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn test_shipped_content_is_clean_before_wedding() {
        let config = Config::embedded().expect("embedded config");
        let report = inspect(&config, before_wedding());
        assert!(!report.has_errors());
        assert!(!report.has_warnings(), "{:?}", report.warnings);
    }

    #[test]
    fn test_past_countdown_warns() {
        let config = Config::embedded().expect("embedded config");
        let after = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("valid date");
        let report = inspect(&config, after);
        assert!(report.warnings.iter().any(|w| w.contains("in the past")));
    }

    #[test]
    fn test_empty_sections_warn() {
        let mut config = Config::embedded().expect("embedded config");
        config.gallery.clear();
        config.gifts.accounts.clear();
        config.gifts.address = None;

        let report = inspect(&config, before_wedding());
        assert!(report.warnings.iter().any(|w| w.contains("gallery")));
        assert!(report.warnings.iter().any(|w| w.contains("gift section")));
    }

    #[test]
    fn test_run_missing_file_fails() {
        let result = run(Path::new("/nonexistent/invitation.toml"), false);
        assert!(result.is_err());
    }

    /// Shipped content with the countdown moved far past any test run.
    fn future_config() -> Config {
        let mut config = Config::embedded().expect("embedded config");
        config.wedding.countdown_target = "2999-06-21T14:00:00+07:00"
            .parse()
            .expect("valid timestamp");
        config
    }

    fn write_invitation(dir: &tempfile::TempDir, config: &Config) -> std::path::PathBuf {
        let path = dir.path().join("invitation.toml");
        let content = toml::to_string(config).expect("serialize config");
        std::fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_run_strict_passes_clean_content() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_invitation(&dir, &future_config());

        assert!(run(&path, true).is_ok());
    }

    #[test]
    fn test_run_strict_fails_on_warnings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = future_config();
        config.gallery.clear();
        let path = write_invitation(&dir, &config);

        assert!(run(&path, false).is_ok());
        assert!(run(&path, true).is_err());
    }
}
