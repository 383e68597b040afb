//! Newspaper masthead and the hero announcement below it.

use leptos::prelude::*;

use crate::reveal::Reveal;

#[component]
pub fn Masthead(
    #[prop(into)] publication: String,
    #[prop(into)] edition_label: String,
) -> impl IntoView {
    view! {
      <header class="masthead">
        <Reveal class="container narrow">
          <div class="divider-double"></div>
          <h1 class="masthead-title">{publication}</h1>
          <p class="masthead-edition">"Special Edition • " {edition_label}</p>
          <div class="divider-thick"></div>
        </Reveal>
      </header>
    }
}

#[component]
pub fn Hero(
    #[prop(into)] names: String,
    #[prop(into)] day_label: String,
    #[prop(into)] year_label: String,
) -> impl IntoView {
    view! {
      <section class="hero">
        <Reveal class="container narrow" delay_ms=200>
          <p class="caption-text">"Joyfully Announce"</p>
          <h2 class="headline-primary">{names}</h2>
          <p class="subheadline">"are getting married"</p>
          <div class="divider-ornate">
            <span>"❧"</span>
          </div>
          <p class="hero-day">{day_label}</p>
          <p class="hero-year">{year_label}</p>
        </Reveal>
      </section>
    }
}

/// Thin rule between sections.
#[component]
pub fn SectionDivider() -> impl IntoView {
    view! {
      <div class="container wide">
        <div class="divider-thin"></div>
      </div>
    }
}
