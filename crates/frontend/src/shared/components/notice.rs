//! Transient confirmations ("Branch saved") shown in the corner of the console.
//! Failures stay inline next to the form or list that produced them.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const NOTICE_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Notice queue provided at the app root.
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.get()
    }

    fn add(&self, text: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| list.push(Notice { id, text }));
        id
    }

    pub fn success(&self, text: impl Into<String>) {
        let id = self.add(text.into());
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            svc.dismiss(id);
        });
    }

    /// Safe to call after the owner is gone or for an id already dismissed
    pub fn dismiss(&self, id: u64) {
        self.notices.try_update(|list| list.retain(|notice| notice.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found in context")
}

/// Renders the queue; mount once next to the shell.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_notices();

    view! {
        <div class="notice-host">
            <For
                each=move || svc.notices()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice notice--success" role="status">
                            <span class="notice__text">{notice.text}</span>
                            <button class="notice__close" on:click=move |_| svc.dismiss(id)>
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_queue_and_dismiss() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = NoticeService::new();
            let first = svc.add("Branch saved".into());
            let second = svc.add("Supplier deleted".into());
            assert_ne!(first, second);

            svc.dismiss(first);
            let left = svc.notices.get_untracked();
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].text, "Supplier deleted");

            svc.dismiss(first);
            assert_eq!(svc.notices.get_untracked().len(), 1);
        });
    }
}
