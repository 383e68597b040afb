//! Guest wishes, rendered as letters to the editor.

use leptos::prelude::*;
use wedding_core::Wish;

use crate::{
    reveal::{Reveal, stagger},
    section::SectionHeading,
};

/// Renders `wishes` in the order given; the page puts new ones first.
#[component]
pub fn WishesSection(#[prop(into)] wishes: Signal<Vec<Wish>>) -> impl IntoView {
    view! {
      <section class="wishes">
        <div class="container narrow">
          <SectionHeading
            kicker="Surat Pembaca"
            title="Ucapan & Doa"
            subtitle="Pesan-pesan tulus dari keluarga dan sahabat tercinta"
          />

          <Show
            when=move || wishes.with(|w| !w.is_empty())
            fallback=|| {
              view! {
                <p class="wishes-empty body-text muted">
                  "Jadilah yang pertama memberikan ucapan untuk mempelai!"
                </p>
              }
            }
          >
            <div class="newspaper-columns-3">
              {move || {
                wishes
                  .get()
                  .into_iter()
                  .enumerate()
                  .map(|(index, wish)| view! { <WishCard wish=wish delay_ms=stagger(index, 100) /> })
                  .collect_view()
              }}
            </div>
          </Show>
        </div>
      </section>
    }
}

#[component]
fn WishCard(wish: Wish, delay_ms: u32) -> impl IntoView {
    view! {
      <Reveal class="wish" delay_ms=delay_ms>
        <div class="editorial-card">
          <blockquote class="body-text italic">"\"" {wish.message} "\""</blockquote>
          <div class="wish-footer">
            <p class="wish-name">"— " {wish.name}</p>
            {wish.date.map(|date| view! { <p class="wish-date">{date}</p> })}
          </div>
        </div>
      </Reveal>
    }
}
