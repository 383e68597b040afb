//! The full-screen cover that gates the invitation.

use std::time::Duration;

use chrono::{Local, Utc};
use leptos::prelude::*;
use wedding_core::{Countdown, Couple, config::WeddingConfig, dates::edition_date_label};

/// Length of the exit animation before the page is revealed.
pub const OPENING_DELAY: Duration = Duration::from_millis(800);

const TICK: Duration = Duration::from_secs(1);

/// Cover page with the countdown and the "Open Invitation" button.
///
/// The countdown is recomputed every second while mounted; the interval is
/// cleared on unmount.
#[component]
pub fn CoverSection(
    /// Masthead name.
    #[prop(into)]
    publication: String,
    couple: Couple,
    wedding: WeddingConfig,
    /// Fired once the exit animation has finished.
    #[prop(into)]
    on_open: Callback<()>,
) -> impl IntoView {
    let opening = RwSignal::new(false);
    let now = RwSignal::new(Utc::now());
    let target = wedding.countdown_target.with_timezone(&Utc);
    let countdown = Memo::new(move |_| Countdown::between(now.get(), target));

    match set_interval_with_handle(move || now.set(Utc::now()), TICK) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("countdown interval not started: {err:?}"),
    }

    let handle_open = move |_| {
        if opening.get_untracked() {
            return;
        }
        log::info!("opening invitation");
        opening.set(true);
        set_timeout(move || on_open.run(()), OPENING_DELAY);
    };

    let dateline = edition_date_label(Local::now().date_naive());
    let teaser = wedding.teaser.clone();

    view! {
      <div class="cover paper-texture" class:closing=move || opening.get()>
        <div class="cover-inner">
          <div class="cover-dateline fade-down">
            <p class="caption-text">{dateline}</p>
            <div class="divider-double"></div>
          </div>

          <div class="cover-masthead fade-up">
            <h1 class="masthead-title">{publication}</h1>
            <p class="masthead-edition">"Special Edition • " {wedding.established_label.clone()}</p>
          </div>

          <div class="divider-thick"></div>

          <div class="cover-headline fade-up">
            <p class="caption-text">"Breaking News"</p>
            <h2 class="cover-names">{couple.display_names.clone()}</h2>
            <p class="cover-subtitle">"are getting married"</p>
          </div>

          <div class="cover-date fade-up">
            <div class="divider-ornate">
              <span>"❧"</span>
            </div>
            <p class="cover-day">{wedding.day_label.clone()}</p>
            <p class="cover-year">{wedding.year_label.clone()}</p>
          </div>

          <div class="cover-countdown fade-up" aria-label="Countdown to the ceremony">
            <Show
              when=move || !countdown.get().is_elapsed()
              fallback=|| view! { <p class="countdown-done">"The celebration has begun"</p> }
            >
              {move || {
                countdown
                  .get()
                  .units()
                  .into_iter()
                  .map(|(value, label)| {
                    view! {
                      <div class="countdown-unit">
                        <span class="countdown-value">{format!("{value:02}")}</span>
                        <span class="countdown-label">{label}</span>
                      </div>
                    }
                  })
                  .collect_view()
              }}
            </Show>
          </div>

          <div class="cover-teaser fade-up">
            <div class="teaser-column">
              <p class="caption-text">"The Ceremony"</p>
              <p class="teaser-value">{teaser.ceremony_time}</p>
            </div>
            <div class="teaser-column">
              <p class="caption-text">"The Reception"</p>
              <p class="teaser-value">{teaser.reception_time}</p>
            </div>
            <div class="teaser-column">
              <p class="caption-text">"The Venue"</p>
              <p class="teaser-value">{teaser.venue}</p>
            </div>
          </div>

          <div class="divider-thin"></div>

          <div class="cover-action fade-up">
            <button class="btn-editorial" on:click=handle_open>
              "Open Invitation"
            </button>
            <p class="cover-hint">"Click to read the full story"</p>
          </div>

          <div class="cover-footer">
            <div class="divider-thin"></div>
            <p class="cover-tagline">"\"" {couple.tagline.clone()} "\""</p>
          </div>
        </div>
      </div>
    }
}
