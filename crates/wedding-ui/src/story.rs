//! Love story timeline.

use leptos::prelude::*;
use wedding_core::TimelineEntry;

use crate::{
    reveal::{Reveal, stagger},
    section::SectionHeading,
};

#[component]
pub fn LoveStorySection(entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
      <section class="love-story aged">
        <div class="container narrow">
          <SectionHeading
            kicker="Feature Story"
            title="Our Love Story"
            subtitle="The extraordinary journey of two ordinary hearts finding each other"
          />

          <div class="timeline">
            <div class="timeline-line"></div>
            {entries
              .into_iter()
              .enumerate()
              .map(|(index, entry)| {
                let side = if index % 2 == 0 { "timeline-item left" } else { "timeline-item right" };
                view! {
                  <Reveal class=side delay_ms=stagger(index, 150)>
                    <div class="timeline-dot">
                      <span></span>
                    </div>
                    <div class="timeline-card editorial-card">
                      <p class="caption-text">{entry.date}</p>
                      <h3 class="headline-tertiary">{entry.title}</h3>
                      <p class="body-text">{entry.description}</p>
                    </div>
                  </Reveal>
                }
              })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}
