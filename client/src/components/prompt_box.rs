//! Prompt input and submit button.

use leptos::prelude::*;

use crate::net::api::{HttpTransport, run_round_trip};
use crate::state::conversation::{ConversationState, Event};
use crate::state::render::submit_label;

#[component]
pub fn PromptBox() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let submitting = Memo::new(move |_| conversation.with(ConversationState::is_submitting));

    let on_submit = move |_| {
        let Some(request) = conversation.try_update(ConversationState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let event = run_round_trip(&HttpTransport, request).await;
            conversation.update(|c| c.apply(event));
        });
    };

    view! {
        <section class="prompt">
            <textarea
                class="prompt__input"
                placeholder="Type your message here..."
                rows="6"
                disabled=move || submitting.get()
                prop:value=move || conversation.with(|c| c.draft().to_owned())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    conversation.update(|c| c.apply(Event::DraftEdited(text)));
                }
            ></textarea>
            <Show when=move || conversation.with(|c| c.notice().is_some())>
                <p class="prompt__notice" role="alert">
                    {move || conversation.with(|c| c.notice().unwrap_or_default().to_owned())}
                </p>
            </Show>
            <button
                class="prompt__submit"
                type="button"
                disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || conversation.with(|c| submit_label(c.phase()))}
            </button>
        </section>
    }
}
