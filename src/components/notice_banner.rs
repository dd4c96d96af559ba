//! Notice Banner
//!
//! Success confirmations (auto-dismissed) and the last failure (sticky).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// How long a success notice stays visible
const NOTICE_TIMEOUT_MS: u32 = 3_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Schedule dismissal for each new notice; stale timers are ignored by seq
    Effect::new(move |last_seq: Option<Option<u64>>| {
        let seq = store.notice().with(|n| n.as_ref().map(|n| n.seq));
        if let Some(seq) = seq {
            if last_seq.flatten() != Some(seq) {
                spawn_local(async move {
                    TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                    ctx.dismiss_notice(seq);
                });
            }
        }
        seq
    });

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div class="notice notice-success" role="status">{notice.message()}</div>
        })}
        {move || store.failure().get().map(|failure| view! {
            <div class="notice notice-error" role="alert">
                <span>{failure.to_string()}</span>
                <button type="button" class="close-btn" on:click=move |_| ctx.dismiss_failure()>"×"</button>
            </div>
        })}
    }
}
