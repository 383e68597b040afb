//! Wedding Chronicle UI Components
//!
//! Leptos components for every section of the invitation page.
//!
//! # Components
//!
//! ## Gate
//! - [`CoverSection`] - Full-screen cover with countdown and "Open Invitation"
//!
//! ## Content
//! - [`NewsTicker`] - Scrolling headline bar
//! - [`Masthead`], [`Hero`] - Newspaper masthead and announcement
//! - [`ProfileSection`] - Bride/groom profile
//! - [`LoveStorySection`] - Timeline
//! - [`EventDetailsSection`] - Ceremony and reception cards
//! - [`GallerySection`] - Photo grid with lightbox
//! - [`RsvpSection`] - Attendance form
//! - [`GiftSection`] - Bank accounts and parcel address
//! - [`WishesSection`] - Guest wishes
//! - [`Footer`]
//!
//! ## Infrastructure
//! - [`Reveal`] - Fade-in on first scroll into view
//! - [`ToastViewport`] / [`ToastHub`] - Notifications
//! - [`BrowserClipboard`] - `navigator.clipboard` behind the core `Clipboard` trait
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use wedding_ui::{ToastViewport, WishesSection, provide_toasts};
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     provide_toasts();
//!     let wishes = Signal::derive(|| vec![]);
//!
//!     view! {
//!         <WishesSection wishes=wishes />
//!         <ToastViewport />
//!     }
//! }
//! ```

pub mod clipboard;
pub mod cover;
pub mod event;
pub mod footer;
pub mod gallery;
pub mod gift;
pub mod masthead;
pub mod profile;
pub mod reveal;
pub mod rsvp;
pub mod section;
pub mod story;
pub mod ticker;
pub mod toast;
pub mod wishes;

pub use clipboard::BrowserClipboard;
pub use cover::CoverSection;
pub use event::EventDetailsSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use gift::GiftSection;
pub use masthead::{Hero, Masthead, SectionDivider};
pub use profile::ProfileSection;
pub use reveal::Reveal;
pub use rsvp::RsvpSection;
pub use section::SectionHeading;
pub use story::LoveStorySection;
pub use ticker::NewsTicker;
pub use toast::{ToastHub, ToastViewport, provide_toasts, use_toasts};
pub use wishes::WishesSection;
