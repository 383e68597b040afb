//! External links built from event content.

use chrono::Utc;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{config::CalendarConfig, content::EventDescriptor};

/// Characters `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";
const CALENDAR_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Percent-encode a URL query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// "Add to calendar" link for `event`.
pub fn calendar_url(event: &EventDescriptor, calendar: &CalendarConfig) -> String {
    let text = if calendar.title_suffix.is_empty() {
        event.title.clone()
    } else {
        format!("{} - {}", event.title, calendar.title_suffix)
    };
    let details = calendar
        .details_template
        .replace("{event}", &event.title.to_lowercase())
        .replace("{venue}", &event.venue);
    let start = event.starts_at.with_timezone(&Utc).format(CALENDAR_TIME_FORMAT);
    let end = event.ends_at.with_timezone(&Utc).format(CALENDAR_TIME_FORMAT);

    format!(
        "{CALENDAR_BASE}?action=TEMPLATE&text={}&dates={start}/{end}&details={}&location={}",
        encode_component(&text),
        encode_component(&details),
        encode_component(&event.address),
    )
}

/// Maps search link for a street address.
pub fn map_search_url(address: &str) -> String {
    format!("{MAPS_SEARCH_BASE}?api=1&query={}", encode_component(address))
}
