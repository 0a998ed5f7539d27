//! Toast layer rendering transient notices.
//!
//! Notices expire automatically a few seconds after they appear and can be
//! dismissed by hand. Expiry timers are browser-only; native builds render
//! the queue as-is.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// How long a notice stays on screen before auto-dismissal.
#[cfg(feature = "csr")]
const NOTICE_LIFETIME_MS: u32 = 4_000;

#[component]
pub fn ToastLayer() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "csr")]
    {
        let mut scheduled = std::collections::HashSet::new();
        Effect::new(move || {
            let live: Vec<u64> = notices.get().items.iter().map(|notice| notice.id).collect();
            for id in live {
                if scheduled.insert(id) {
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
                        let _ = notices.try_update(|queue| queue.dismiss(id));
                    });
                }
            }
        });
    }

    view! {
        <div class="toast-layer">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__message">{notice.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| notices.update(|queue| queue.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
