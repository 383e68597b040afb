//! Heading block shared by the content sections.

use leptos::prelude::*;

use crate::reveal::Reveal;

/// Kicker, double rule, title and optional subtitle.
#[component]
pub fn SectionHeading(
    #[prop(into)] kicker: String,
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
      <Reveal class="section-heading">
        <p class="caption-text">{kicker}</p>
        <div class="divider-double short"></div>
        <h2 class="headline-secondary">{title}</h2>
        {subtitle.map(|text| view! { <p class="subheadline">{text}</p> })}
      </Reveal>
    }
}
