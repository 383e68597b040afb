//! Display records for every section of the invitation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One half of the couple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Full name.
    pub name: String,

    /// Role label shown above the name (e.g., "The Bride").
    pub role: String,

    /// Parents line.
    #[serde(default)]
    pub parent_info: String,

    /// Profile text.
    #[serde(default)]
    pub description: String,

    /// Portrait URL.
    pub image_url: String,
}

/// The couple and the names printed on the masthead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Couple {
    pub bride: Person,
    pub groom: Person,

    /// Headline form, e.g. "Sarah & Michael".
    pub display_names: String,

    /// Footer monogram, e.g. "S & M".
    pub initials: String,

    /// Short line under the cover.
    #[serde(default)]
    pub tagline: String,
}

/// A ceremony or reception.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDescriptor {
    pub title: String,

    /// Human date label, e.g. "Sabtu, 21 Juni 2025".
    pub date: String,

    /// Human time label, e.g. "14:00 WIB".
    pub time: String,

    pub venue: String,
    pub address: String,

    /// Embeddable map URL for the venue modal.
    #[serde(default)]
    pub map_url: String,

    /// Start instant used for calendar links.
    pub starts_at: DateTime<FixedOffset>,

    /// End instant used for calendar links.
    pub ends_at: DateTime<FixedOffset>,
}

/// A gallery photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,

    #[serde(default)]
    pub caption: Option<String>,
}

/// A love story milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    /// Date label, e.g. "March 2019".
    pub date: String,
    pub title: String,
    pub description: String,
}

/// A bank account guests may send a gift to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

/// A message from a guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wish {
    pub name: String,
    pub message: String,

    #[serde(default)]
    pub date: Option<String>,
}

impl Wish {
    /// Create a wish without a date label.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            date: None,
        }
    }

    /// Attach a date label.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wish_builder() {
        let wish = Wish::new("Om Hendra", "Selamat!").with_date("10 Januari 2025");
        assert_eq!(wish.name, "Om Hendra");
        assert_eq!(wish.message, "Selamat!");
        assert_eq!(wish.date.as_deref(), Some("10 Januari 2025"));
    }

    #[test]
    fn test_gallery_image_caption_optional() {
        let image: GalleryImage =
            toml::from_str("src = \"/a.jpg\"\nalt = \"A\"").expect("parse image");
        assert!(image.caption.is_none());
    }

    #[test]
    fn test_event_descriptor_parses_offsets() {
        let event: EventDescriptor = toml::from_str(
            r#"
title = "Resepsi"
date = "Sabtu, 21 Juni 2025"
time = "17:00 WIB"
venue = "Grand Estate Gardens"
address = "Jl. Garden Boulevard No. 456"
starts_at = "2025-06-21T17:00:00+07:00"
ends_at = "2025-06-21T23:00:00+07:00"
"#,
        )
        .expect("parse event");

        assert!(event.map_url.is_empty());
        assert_eq!(event.starts_at.offset().local_minus_utc(), 7 * 3600);
        assert!(event.ends_at > event.starts_at);
    }
}
