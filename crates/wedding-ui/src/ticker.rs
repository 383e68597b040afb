//! Scrolling headline bar pinned to the top of the page.

use leptos::prelude::*;

/// Breaking-news style ticker.
///
/// Headlines are rendered twice back to back so the CSS marquee loops
/// without a gap.
#[component]
pub fn NewsTicker(
    /// Badge text.
    #[prop(into)]
    label: String,
    headlines: Vec<String>,
) -> impl IntoView {
    let looped: Vec<String> = headlines.iter().chain(headlines.iter()).cloned().collect();

    view! {
      <div class="news-ticker">
        <span class="ticker-badge">{label}</span>
        <div class="ticker-window">
          <div class="ticker-track">
            {looped
              .into_iter()
              .map(|headline| {
                view! {
                  <span class="ticker-item">
                    {headline}
                    <span class="ticker-separator">"◆"</span>
                  </span>
                }
              })
              .collect_view()}
          </div>
        </div>
      </div>
    }
}
