use std::sync::Arc;

use chrono::Local;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use wedding_core::{Config, RsvpResponse, WishBook, dates::wish_date_label};
use wedding_ui::{
    CoverSection, EventDetailsSection, Footer, GallerySection, GiftSection, Hero,
    LoveStorySection, Masthead, NewsTicker, ProfileSection, RsvpSection, SectionDivider,
    ToastViewport, WishesSection, provide_toasts,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = match Config::embedded() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            log::error!("invitation content failed to load: {err}");
            return view! {
              <main class="load-error">
                <p>"This invitation could not be displayed."</p>
              </main>
            }
            .into_any();
        }
    };

    let title = config.site.title.clone();
    let description = config.site.description.clone().unwrap_or_default();
    provide_context(config);

    view! {
      <Title text=title />
      <Meta name="description" content=description />

      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=InvitationPage />
        </Routes>
      </Router>
    }
    .into_any()
}

/// The cover gate followed by every section of the invitation.
///
/// Owns the only shared state on the page: whether the cover has been
/// dismissed and the wishes submitted during this visit.
#[component]
fn InvitationPage() -> impl IntoView {
    let config = expect_context::<Arc<Config>>();
    provide_toasts();

    let is_open = RwSignal::new(false);
    let wishes = RwSignal::new(WishBook::new(config.wishes.clone()));

    let on_open = Callback::new(move |_: ()| is_open.set(true));
    let on_rsvp = Callback::new(move |response: RsvpResponse| {
        if let Some(wish) = response.to_wish(wish_date_label(Local::now().date_naive())) {
            wishes.update(|book| book.add(wish));
        }
    });
    let wish_list = Signal::derive(move || wishes.with(WishBook::to_vec));

    let cover = config.clone();
    let page = config;

    view! {
      <div class="page">
        <Show when=move || !is_open.get()>
          <CoverSection
            publication=cover.site.publication.clone()
            couple=cover.couple.clone()
            wedding=cover.wedding.clone()
            on_open=on_open
          />
        </Show>

        <Show when=move || is_open.get()>
          <div class="invitation fade-in">
            <NewsTicker label=page.ticker.label.clone() headlines=page.ticker.headlines.clone() />

            <main class="content">
              <Masthead
                publication=page.site.publication.clone()
                edition_label=page.wedding.edition_label.clone()
              />
              <Hero
                names=page.couple.display_names.clone()
                day_label=page.wedding.day_label.clone()
                year_label=page.wedding.year_label.clone()
              />

              <SectionDivider />
              <ProfileSection person=page.couple.bride.clone() />
              <SectionDivider />
              <ProfileSection person=page.couple.groom.clone() reverse=true />
              <SectionDivider />

              <LoveStorySection entries=page.timeline.clone() />
              <EventDetailsSection events=page.events.clone() calendar=page.calendar.clone() />

              <SectionDivider />
              <GallerySection images=page.gallery.clone() />

              <RsvpSection
                on_submit=on_rsvp
                max_guests=page.rsvp.max_guests
                deadline_label=page.rsvp.deadline_label.clone()
                messages=page.messages.clone()
              />
              <GiftSection
                gifts=page.gifts.clone()
                messages=page.messages.clone()
                names=page.couple.display_names.clone()
              />
              <WishesSection wishes=wish_list />

              <Footer
                initials=page.couple.initials.clone()
                date_label=page.wedding.footer_label.clone()
                publication=page.site.publication.clone()
              />
            </main>
          </div>
        </Show>

        <ToastViewport />
      </div>
    }
}
