use leptos::prelude::*;

use crate::reveal::Reveal;

#[component]
pub fn Footer(
    #[prop(into)] initials: String,
    #[prop(into)] date_label: String,
    #[prop(into)] publication: String,
) -> impl IntoView {
    view! {
      <footer class="site-footer">
        <Reveal class="container narrow">
          <div class="ornament gold">"❧"</div>
          <div class="footer-initials">{initials}</div>
          <p class="footer-date">{date_label}</p>
          <div class="footer-rule"></div>
          <p class="footer-tagline">"Dicetak dengan cinta"</p>
          <p class="footer-credits">{publication} " • Edisi Khusus"</p>
        </Reveal>
      </footer>
    }
}
