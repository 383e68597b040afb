//! Invitation configuration management.
//!
//! All page content is read from a TOML document. The default document is
//! compiled into the binary so the browser build never touches the network
//! for its own content.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    content::{Couple, EventDescriptor, GalleryImage, GiftAccount, TimelineEntry, Wish},
    error::{Result, WeddingError},
};

/// The content document shipped with the site.
pub const EMBEDDED_INVITATION: &str = include_str!("../content/invitation.toml");

/// Main configuration structure for the invitation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// The couple.
    pub couple: Couple,

    /// Date labels and the countdown target.
    pub wedding: WeddingConfig,

    /// Ceremony and reception.
    #[serde(default)]
    pub events: Vec<EventDescriptor>,

    /// Calendar link templates.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Love story milestones.
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,

    /// Gallery photos.
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,

    /// Gift information.
    #[serde(default)]
    pub gifts: GiftConfig,

    /// Seed wishes shown below the ones submitted during this visit.
    #[serde(default)]
    pub wishes: Vec<Wish>,

    /// Scrolling headlines.
    #[serde(default)]
    pub ticker: TickerConfig,

    /// RSVP form settings.
    #[serde(default)]
    pub rsvp: RsvpConfig,

    /// Notification texts.
    #[serde(default)]
    pub messages: Messages,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document title.
    pub title: String,

    /// Meta description.
    #[serde(default)]
    pub description: Option<String>,

    /// Publication name on the masthead.
    #[serde(default = "default_publication")]
    pub publication: String,
}

/// Date labels and the countdown target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingConfig {
    /// Instant the cover countdown runs to.
    pub countdown_target: DateTime<FixedOffset>,

    /// Long spelled-out day, e.g. "Saturday, the Twenty-First of June".
    pub day_label: String,

    /// Spelled-out year.
    pub year_label: String,

    /// Short date for the masthead edition line.
    pub edition_label: String,

    /// Short date in the footer.
    #[serde(default)]
    pub footer_label: String,

    /// Cover edition line, e.g. "Est. 2025".
    #[serde(default)]
    pub established_label: String,

    /// Cover teaser columns.
    #[serde(default)]
    pub teaser: Teaser,
}

/// Three-column teaser on the cover.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Teaser {
    #[serde(default)]
    pub ceremony_time: String,
    #[serde(default)]
    pub reception_time: String,
    #[serde(default)]
    pub venue: String,
}

/// Templates used when building calendar links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Appended to the event title, separated by " - ".
    #[serde(default)]
    pub title_suffix: String,

    /// Event details; `{event}` and `{venue}` are substituted.
    #[serde(default = "default_details_template")]
    pub details_template: String,
}

/// Gift section content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GiftConfig {
    #[serde(default)]
    pub accounts: Vec<GiftAccount>,

    /// Address for physical gifts.
    #[serde(default)]
    pub address: Option<String>,
}

/// News ticker content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Badge text left of the headlines.
    #[serde(default = "default_ticker_label")]
    pub label: String,

    #[serde(default)]
    pub headlines: Vec<String>,
}

/// RSVP form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpConfig {
    /// Largest party size offered in the guest selector.
    #[serde(default = "default_max_guests")]
    pub max_guests: u8,

    /// Reply-by label.
    #[serde(default)]
    pub deadline_label: String,
}

/// Notification texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_rsvp_incomplete")]
    pub rsvp_incomplete: String,

    #[serde(default = "default_rsvp_thanks_title")]
    pub rsvp_thanks_title: String,

    #[serde(default = "default_rsvp_thanks_description")]
    pub rsvp_thanks_description: String,

    #[serde(default = "default_copy_success_title")]
    pub copy_success_title: String,

    /// `{label}` is substituted with what was copied.
    #[serde(default = "default_copy_success_description")]
    pub copy_success_description: String,

    #[serde(default = "default_copy_failed_title")]
    pub copy_failed_title: String,
}

// Default value functions
fn default_publication() -> String {
    "The Wedding Chronicle".to_string()
}

fn default_details_template() -> String {
    "Join us for {event} at {venue}".to_string()
}

fn default_ticker_label() -> String {
    "Terkini".to_string()
}

fn default_max_guests() -> u8 {
    5
}

fn default_rsvp_incomplete() -> String {
    "Mohon lengkapi semua kolom yang wajib diisi".to_string()
}

fn default_rsvp_thanks_title() -> String {
    "Terima kasih atas respons Anda!".to_string()
}

fn default_rsvp_thanks_description() -> String {
    "Kami tidak sabar untuk merayakannya bersama Anda.".to_string()
}

fn default_copy_success_title() -> String {
    "Berhasil disalin".to_string()
}

fn default_copy_success_description() -> String {
    "{label} telah disalin ke clipboard.".to_string()
}

fn default_copy_failed_title() -> String {
    "Gagal menyalin".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            title_suffix: String::new(),
            details_template: default_details_template(),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            label: default_ticker_label(),
            headlines: Vec::new(),
        }
    }
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            max_guests: default_max_guests(),
            deadline_label: String::new(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            rsvp_incomplete: default_rsvp_incomplete(),
            rsvp_thanks_title: default_rsvp_thanks_title(),
            rsvp_thanks_description: default_rsvp_thanks_description(),
            copy_success_title: default_copy_success_title(),
            copy_success_description: default_copy_success_description(),
            copy_failed_title: default_copy_failed_title(),
        }
    }
}

impl Messages {
    /// Description for a successful copy of `label`.
    pub fn copied(&self, label: &str) -> String {
        self.copy_success_description.replace("{label}", label)
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_INVITATION)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WeddingError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            WeddingError::config_with_source(
                format!("Failed to parse invitation file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `WEDDING__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WeddingError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("WEDDING").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(WeddingError::config("site.title cannot be empty"));
        }

        if self.couple.bride.name.trim().is_empty() || self.couple.groom.name.trim().is_empty() {
            return Err(WeddingError::config("couple names cannot be empty"));
        }

        if self.rsvp.max_guests == 0 {
            return Err(WeddingError::config("rsvp.max_guests must be at least 1"));
        }

        for event in &self.events {
            if event.ends_at <= event.starts_at {
                return Err(WeddingError::config(format!(
                    "event '{}' must end after it starts",
                    event.title
                )));
            }
        }

        if self.gallery.is_empty() {
            log::warn!("gallery has no images");
        }

        Ok(())
    }

    /// Event whose title matches, case-insensitively.
    pub fn event(&self, title: &str) -> Option<&EventDescriptor> {
        self.events
            .iter()
            .find(|event| event.title.eq_ignore_ascii_case(title))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn minimal_config() -> String {
        r#"
[site]
title = "Test Wedding"

[couple]
display_names = "Ana & Ben"
initials = "A & B"

[couple.bride]
name = "Ana"
role = "The Bride"
image_url = "/ana.jpg"

[couple.groom]
name = "Ben"
role = "The Groom"
image_url = "/ben.jpg"

[wedding]
countdown_target = "2030-01-01T10:00:00+00:00"
day_label = "Tuesday, the First of January"
year_label = "Two Thousand Thirty"
edition_label = "January 1, 2030"
"#
        .to_string()
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = Config::embedded().expect("embedded config");
        assert_eq!(config.couple.display_names, "Sarah & Michael");
        assert_eq!(config.events.len(), 2);
        assert_eq!(config.gallery.len(), 6);
        assert_eq!(config.timeline.len(), 5);
        assert_eq!(config.wishes.len(), 4);
        assert_eq!(config.gifts.accounts.len(), 2);
        assert!(config.gifts.address.is_some());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str(&minimal_config()).expect("parse config");

        assert_eq!(config.site.publication, "The Wedding Chronicle");
        assert_eq!(config.rsvp.max_guests, 5);
        assert_eq!(config.ticker.label, "Terkini");
        assert!(config.ticker.headlines.is_empty());
        assert!(config.events.is_empty());
        assert_eq!(config.messages.copy_failed_title, "Gagal menyalin");
        assert_eq!(config.calendar.details_template, "Join us for {event} at {venue}");
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("invitation.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(minimal_config().as_bytes()).expect("write");

        let config = Config::load(&config_path).expect("load config");
        assert_eq!(config.site.title, "Test Wedding");
        assert_eq!(config.couple.bride.name, "Ana");
    }

    #[test]
    fn test_load_with_env() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("invitation.toml");
        std::fs::write(&config_path, minimal_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.wedding.edition_label, "January 1, 2030");
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/invitation.toml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_validation_empty_title() {
        let content = minimal_config().replace("Test Wedding", "");
        let result = Config::from_toml_str(&content);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_validation_zero_guests() {
        let content = format!("{}\n[rsvp]\nmax_guests = 0\n", minimal_config());
        let result = Config::from_toml_str(&content);
        assert!(result.unwrap_err().to_string().contains("max_guests"));
    }

    #[test]
    fn test_validation_event_ends_before_start() {
        let content = format!(
            r#"{}
[[events]]
title = "Resepsi"
date = "Selasa"
time = "10:00"
venue = "Hall"
address = "Street 1"
starts_at = "2030-01-01T10:00:00+00:00"
ends_at = "2030-01-01T09:00:00+00:00"
"#,
            minimal_config()
        );
        let result = Config::from_toml_str(&content);
        assert!(result.unwrap_err().to_string().contains("must end after"));
    }

    #[test]
    fn test_event_lookup() {
        let config = Config::embedded().expect("embedded config");
        assert!(config.event("resepsi").is_some());
        assert!(config.event("afterparty").is_none());
    }

    #[test]
    fn test_copied_message() {
        let messages = Messages::default();
        assert_eq!(messages.copied("Alamat"), "Alamat telah disalin ke clipboard.");
    }
}
