//! Bank accounts and parcel address with copy buttons.

use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};
use wedding_core::{GiftAccount, Messages, config::GiftConfig, copy_with_notice};

use crate::{
    clipboard::BrowserClipboard,
    reveal::{Reveal, stagger},
    section::SectionHeading,
    toast::{ToastHub, use_toasts},
};

/// How long a copy button shows its "copied" state.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

/// Which value was copied last, keyed by the copied text.
#[derive(Debug, Clone, Copy)]
struct CopyState {
    copied: RwSignal<Option<String>>,
}

impl CopyState {
    fn is_copied(&self, text: &str) -> bool {
        self.copied.with(|copied| copied.as_deref() == Some(text))
    }

    fn mark(&self, text: String) {
        self.copied.set(Some(text.clone()));
        let copied = self.copied;
        set_timeout(
            move || {
                // A later copy owns the state now
                if copied.with_untracked(|c| c.as_deref() == Some(text.as_str())) {
                    copied.set(None);
                }
            },
            COPIED_RESET,
        );
    }
}

/// Copy `text` to the clipboard, toast the outcome, flag the button.
fn copy(text: String, label: &'static str, messages: StoredValue<Messages>, state: CopyState, toasts: ToastHub) {
    spawn_local(async move {
        let messages = messages.get_value();
        let outcome = copy_with_notice(&BrowserClipboard, &text, label, &messages).await;
        if outcome.is_copied() {
            state.mark(text);
        }
        toasts.notify(outcome.into_toast());
    });
}

#[component]
pub fn GiftSection(
    gifts: GiftConfig,
    messages: Messages,
    /// Names used in the sign-off line.
    #[prop(into)]
    names: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let messages = StoredValue::new(messages);
    let state = CopyState {
        copied: RwSignal::new(None),
    };

    view! {
      <section class="gifts aged">
        <div class="container medium">
          <SectionHeading
            kicker="Iklan Baris"
            title="Kado Pernikahan"
            subtitle="Kehadiran Anda adalah hadiah terbesar bagi kami. Namun, jika Anda ingin memberikan kado, berikut adalah informasinya."
          />

          <div class="gift-accounts">
            {gifts
              .accounts
              .into_iter()
              .enumerate()
              .map(|(index, account)| {
                view! { <AccountCard account=account delay_ms=stagger(index, 100) messages=messages state=state toasts=toasts /> }
              })
              .collect_view()}
          </div>

          {gifts
            .address
            .map(|address| {
              let copy_address = address.clone();
              let check_address = address.clone();
              view! {
                <Reveal class="editorial-card" delay_ms=300>
                  <p class="caption-text">"Untuk Kado Fisik"</p>
                  <div class="divider-thin"></div>
                  <div class="gift-row">
                    <p class="gift-address">{address}</p>
                    <button
                      class="btn-editorial-outline"
                      on:click=move |_| copy(copy_address.clone(), "Alamat", messages, state, toasts)
                    >
                      {move || if state.is_copied(&check_address) { "✓ Tersalin" } else { "⧉ Salin Alamat" }}
                    </button>
                  </div>
                </Reveal>
              }
            })}

          <Reveal class="gift-signoff" delay_ms=400>
            <p class="muted italic">"Dengan penuh rasa terima kasih, " {names}</p>
          </Reveal>
        </div>
      </section>
    }
}

#[component]
fn AccountCard(
    account: GiftAccount,
    delay_ms: u32,
    messages: StoredValue<Messages>,
    state: CopyState,
    toasts: ToastHub,
) -> impl IntoView {
    let number = account.account_number.clone();
    let check_number = account.account_number.clone();

    view! {
      <Reveal class="editorial-card" delay_ms=delay_ms>
        <div class="gift-row">
          <div>
            <p class="caption-text">{account.bank_name.clone()}</p>
            <p class="gift-number">{account.account_number.clone()}</p>
            <p class="body-text muted">"a.n. " {account.account_holder.clone()}</p>
          </div>
          <button
            class="btn-editorial-outline"
            on:click=move |_| copy(number.clone(), "Nomor rekening", messages, state, toasts)
          >
            {move || if state.is_copied(&check_number) { "✓ Tersalin" } else { "⧉ Salin" }}
          </button>
        </div>
      </Reveal>
    }
}
