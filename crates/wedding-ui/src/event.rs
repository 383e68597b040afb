//! Ceremony and reception cards with calendar and map actions.

use leptos::prelude::*;
use wedding_core::{
    EventDescriptor,
    config::CalendarConfig,
    links::{calendar_url, map_search_url},
};

use crate::{
    reveal::{Reveal, stagger},
    section::SectionHeading,
};

#[component]
pub fn EventDetailsSection(events: Vec<EventDescriptor>, calendar: CalendarConfig) -> impl IntoView {
    view! {
      <section class="event-details">
        <div class="container wide">
          <SectionHeading
            kicker="Pengumuman"
            title="Detail Acara"
            subtitle="Bergabunglah bersama kami merayakan momen bahagia ini"
          />

          <div class="event-grid">
            {events
              .into_iter()
              .enumerate()
              .map(|(index, event)| {
                let calendar_link = calendar_url(&event, &calendar);
                let delay_ms = stagger(index + 1, 200);
                view! { <EventCard event=event calendar_link=calendar_link delay_ms=delay_ms /> }
              })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}

/// One event with "add to calendar" and a venue map modal.
#[component]
fn EventCard(event: EventDescriptor, calendar_link: String, delay_ms: u32) -> impl IntoView {
    let show_map = RwSignal::new(false);

    let add_to_calendar = move |_| open_in_new_tab(&calendar_link);

    let maps_link = map_search_url(&event.address);
    let venue = event.venue.clone();
    let address = event.address.clone();
    let map_url = event.map_url.clone();

    view! {
      <Reveal class="editorial-card event-card" threshold=0.2 delay_ms=delay_ms>
        <p class="caption-text">{event.title.clone()}</p>
        <div class="divider-thick short"></div>

        <dl class="event-facts">
          <div class="event-fact">
            <dt class="event-icon" aria-label="Date">"📅"</dt>
            <dd class="event-value">{event.date.clone()}</dd>
          </div>
          <div class="event-fact">
            <dt class="event-icon" aria-label="Time">"🕑"</dt>
            <dd class="event-value">{event.time.clone()}</dd>
          </div>
          <div class="event-fact">
            <dt class="event-icon" aria-label="Venue">"📍"</dt>
            <dd>
              <p class="event-value">{event.venue.clone()}</p>
              <p class="body-text muted">{event.address.clone()}</p>
            </dd>
          </div>
        </dl>

        <div class="event-actions">
          <button class="btn-editorial-outline" on:click=add_to_calendar>
            "Tambah ke Kalender"
          </button>
          <button class="btn-editorial-outline" on:click=move |_| show_map.set(true)>
            "Lihat Lokasi"
          </button>
        </div>
      </Reveal>

      <Show when=move || show_map.get()>
        <div class="modal-overlay" on:click=move |_| show_map.set(false)>
          <div class="map-modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
            <div class="map-modal-header">
              <h3 class="headline-tertiary">{venue.clone()}</h3>
              <button class="modal-close" on:click=move |_| show_map.set(false) aria-label="Close map">
                "✕"
              </button>
            </div>
            <div class="map-frame">
              <iframe
                src=map_url.clone()
                width="100%"
                height="100%"
                style="border: 0"
                allowfullscreen=true
                referrerpolicy="no-referrer-when-downgrade"
                {leptos::attr::loading("lazy")}
              ></iframe>
            </div>
            <p class="body-text muted">{address.clone()}</p>
            <a href=maps_link.clone() target="_blank" rel="noopener noreferrer" class="btn-editorial">
              "Buka di Google Maps"
            </a>
          </div>
        </div>
      </Show>
    }
}

/// Open `url` in a new browser tab.
fn open_in_new_tab(url: &str) {
    match window().open_with_url_and_target(url, "_blank") {
        Ok(_) => log::debug!("opened {url}"),
        Err(err) => log::warn!("could not open {url}: {err:?}"),
    }
}
