//! Bride and groom profiles.

use leptos::prelude::*;
use wedding_core::Person;

use crate::reveal::Reveal;

/// Portrait beside a short profile; `reverse` puts the portrait on the right.
#[component]
pub fn ProfileSection(
    person: Person,
    #[prop(optional)] reverse: bool,
) -> impl IntoView {
    let Person {
        name,
        role,
        parent_info,
        description,
        image_url,
    } = person;
    let alt = name.clone();

    view! {
      <section class="profile">
        <div class="container wide profile-grid" class:reverse=reverse>
          <Reveal class="profile-portrait" threshold=0.2 delay_ms=200>
            <div class="portrait-frame">
              <img src=image_url alt=alt class="portrait-image" />
            </div>
          </Reveal>

          <Reveal class="profile-copy" threshold=0.2 delay_ms=400>
            <p class="caption-text">{role}</p>
            <div class="divider-thick short"></div>
            <h2 class="headline-secondary">{name}</h2>
            <p class="subheadline">{parent_info}</p>
            <div class="newspaper-columns">
              <p class="body-text">{description}</p>
            </div>
            <div class="divider-ornate">
              <span>"❧"</span>
            </div>
          </Reveal>
        </div>
      </section>
    }
}
