//! RSVP form.

use leptos::prelude::*;
use wedding_core::{Attendance, Messages, RsvpForm, RsvpResponse, Toast};

use crate::{reveal::Reveal, section::SectionHeading, toast::use_toasts};

/// Attendance form; `on_submit` only fires for a complete form.
#[component]
pub fn RsvpSection(
    #[prop(into)] on_submit: Callback<RsvpResponse>,
    #[prop(default = 5)] max_guests: u8,
    #[prop(into, optional)] deadline_label: String,
    messages: Messages,
) -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(RsvpForm::default());
    let submitted = RwSignal::new(false);
    let messages = StoredValue::new(messages);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|form| form.submit(max_guests)) {
            Ok(response) => {
                log::info!("rsvp accepted ({})", response.attendance);
                on_submit.run(response);
                submitted.set(true);
                messages.with_value(|m| {
                    toasts.notify(
                        Toast::success(m.rsvp_thanks_title.clone())
                            .with_description(m.rsvp_thanks_description.clone()),
                    )
                });
            }
            Err(err) => {
                log::debug!("rsvp rejected: {err}");
                messages.with_value(|m| toasts.notify(Toast::destructive(m.rsvp_incomplete.clone())));
            }
        }
    };

    let attending = move || form.with(|f| f.attendance == Attendance::Attending);

    let subtitle = if deadline_label.is_empty() {
        "Mohon konfirmasi kehadiran Anda".to_string()
    } else {
        format!("Mohon konfirmasi kehadiran sebelum {deadline_label}")
    };

    view! {
      <section class="rsvp">
        <div class="container narrower">
          <SectionHeading kicker="Konfirmasi Kehadiran" title="RSVP" subtitle=subtitle />

          <Reveal class="editorial-card" delay_ms=200>
            <Show
              when=move || !submitted.get()
              fallback=|| {
                view! {
                  <div class="rsvp-thanks">
                    <div class="ornament">"❧"</div>
                    <h3 class="headline-tertiary">"Terima Kasih!"</h3>
                    <p class="body-text">"Respons Anda telah tercatat. Kami menantikan kehadiran Anda!"</p>
                  </div>
                }
              }
            >
              <form class="rsvp-form" on:submit=handle_submit>
                <div class="field">
                  <label class="caption-text" for="rsvp-name">"Nama Lengkap *"</label>
                  <input
                    id="rsvp-name"
                    type="text"
                    class="input-editorial"
                    placeholder="Masukkan nama lengkap Anda"
                    required=true
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                      let value = event_target_value(&ev);
                      form.update(|f| f.name = value);
                    }
                  />
                </div>

                <fieldset class="field">
                  <legend class="caption-text">"Apakah Anda akan hadir? *"</legend>
                  <div class="radio-row">
                    <AttendanceOption form=form choice=Attendance::Attending label="Dengan Senang Hati Hadir" />
                    <AttendanceOption form=form choice=Attendance::Declined label="Mohon Maaf Tidak Bisa" />
                  </div>
                </fieldset>

                <Show when=attending>
                  <div class="field field-reveal">
                    <label class="caption-text" for="rsvp-guests">"Jumlah Tamu"</label>
                    <select
                      id="rsvp-guests"
                      class="input-editorial"
                      prop:value=move || form.with(|f| f.guests.to_string())
                      on:change=move |ev| {
                        if let Ok(guests) = event_target_value(&ev).parse::<u8>() {
                          form.update(|f| f.guests = guests);
                        }
                      }
                    >
                      {(1..=max_guests)
                        .map(|count| {
                          view! { <option value=count.to_string()>{count} " Orang"</option> }
                        })
                        .collect_view()}
                    </select>
                  </div>
                </Show>

                <div class="field">
                  <label class="caption-text" for="rsvp-wishes">"Ucapan & Doa untuk Mempelai"</label>
                  <textarea
                    id="rsvp-wishes"
                    rows=4
                    class="input-editorial no-resize"
                    placeholder="Sampaikan ucapan dan doa terbaik Anda untuk mempelai..."
                    prop:value=move || form.with(|f| f.wishes.clone())
                    on:input=move |ev| {
                      let value = event_target_value(&ev);
                      form.update(|f| f.wishes = value);
                    }
                  ></textarea>
                </div>

                <div class="form-actions">
                  <button type="submit" class="btn-editorial">"Kirim Konfirmasi"</button>
                </div>
              </form>
            </Show>
          </Reveal>
        </div>
      </section>
    }
}

#[component]
fn AttendanceOption(
    form: RwSignal<RsvpForm>,
    choice: Attendance,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
      <label class="radio-option">
        <input
          type="radio"
          name="attendance"
          value=choice.as_str()
          prop:checked=move || form.with(|f| f.attendance == choice)
          on:change=move |_| form.update(|f| f.attendance = choice)
        />
        <span class="body-text">{label}</span>
      </label>
    }
}
