//! Wedding Chronicle Core Library
//!
//! Content model, configuration and the small amount of invitation logic:
//! the cover countdown, gallery lightbox cycling, RSVP submission, the
//! in-memory wish book, calendar/map links and copy notifications.
//!
//! Nothing in this crate touches the DOM; the Leptos components in
//! `wedding-ui` drive it.

pub mod clipboard;
pub mod config;
pub mod content;
pub mod countdown;
pub mod dates;
pub mod error;
pub mod lightbox;
pub mod links;
pub mod notice;
pub mod rsvp;
pub mod wishes;

pub use clipboard::{Clipboard, CopyOutcome, copy_with_notice};
pub use config::{Config, Messages};
pub use content::{Couple, EventDescriptor, GalleryImage, GiftAccount, Person, TimelineEntry, Wish};
pub use countdown::Countdown;
pub use error::{Result, WeddingError};
pub use lightbox::Lightbox;
pub use notice::{Toast, ToastId, ToastVariant, Toasts};
pub use rsvp::{Attendance, RsvpError, RsvpForm, RsvpResponse};
pub use wishes::WishBook;
