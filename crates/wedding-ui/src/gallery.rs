//! Photo grid and the full-screen lightbox.

use leptos::{ev, prelude::*};
use wedding_core::{GalleryImage, Lightbox};

use crate::{
    reveal::{Reveal, stagger},
    section::SectionHeading,
};

/// Grid positions rendered as tall tiles.
fn is_tall(index: usize, len: usize) -> bool {
    index == 0 || (len > 1 && index == len - 1)
}

#[component]
pub fn GallerySection(images: Vec<GalleryImage>) -> impl IntoView {
    let len = images.len();
    let images = StoredValue::new(images);
    let lightbox = RwSignal::new(Lightbox::new(len));

    // Escape closes, arrow keys cycle
    let handle = window_event_listener(ev::keydown, move |ev| {
        if !lightbox.with_untracked(Lightbox::is_open) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => lightbox.update(Lightbox::close),
            "ArrowLeft" => lightbox.update(Lightbox::previous),
            "ArrowRight" => lightbox.update(Lightbox::next),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let selected_image = move || {
        lightbox
            .get()
            .selected()
            .and_then(|index| images.with_value(|images| images.get(index).cloned()))
    };

    view! {
      <section class="gallery aged">
        <div class="container extra-wide">
          <SectionHeading
            kicker="Galeri Foto"
            title="Momen Terabadikan"
            subtitle="Kumpulan kenangan dari perjalanan kami bersama"
          />

          <div class="gallery-grid">
            {images
              .get_value()
              .into_iter()
              .enumerate()
              .map(|(index, image)| {
                let tile = if is_tall(index, len) { "gallery-tile tall" } else { "gallery-tile" };
                view! {
                  <Reveal class=tile delay_ms=stagger(index, 100)>
                    <button
                      class="gallery-open"
                      on:click=move |_| lightbox.update(|l| l.open(index))
                      aria-label=format!("View {}", image.alt)
                    >
                      <img src=image.src.clone() alt=image.alt.clone() class="gallery-image" />
                      <span class="gallery-caption">{image.caption.clone().unwrap_or_default()}</span>
                    </button>
                  </Reveal>
                }
              })
              .collect_view()}
          </div>
        </div>

        <Show when=move || lightbox.with(Lightbox::is_open)>
          <div class="lightbox" on:click=move |_| lightbox.update(Lightbox::close)>
            <button
              class="lightbox-close"
              on:click=move |_| lightbox.update(Lightbox::close)
              aria-label="Close"
            >
              "✕"
            </button>
            <button
              class="lightbox-prev"
              on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                lightbox.update(Lightbox::previous);
              }
              aria-label="Previous photo"
            >
              "‹"
            </button>
            <button
              class="lightbox-next"
              on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                lightbox.update(Lightbox::next);
              }
              aria-label="Next photo"
            >
              "›"
            </button>

            <figure class="lightbox-figure" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
              {move || {
                selected_image()
                  .map(|image| {
                    view! {
                      <img src=image.src alt=image.alt class="lightbox-image" />
                      <figcaption class="lightbox-caption">{image.caption.unwrap_or_default()}</figcaption>
                    }
                  })
              }}
            </figure>
          </div>
        </Show>
      </section>
    }
}
