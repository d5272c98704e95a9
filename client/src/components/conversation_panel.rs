//! Read-only conversation history.

use leptos::prelude::*;

use crate::state::conversation::ConversationState;
use crate::state::render::{ConversationView, EMPTY_HISTORY, render_conversation};

/// Renders every exchanged message as a read-only block, oldest first.
#[component]
pub fn ConversationPanel() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let rendered = Memo::new(move |_| conversation.with(|c| render_conversation(c.messages())));

    view! {
        <section class="conversation">
            <h2 class="conversation__heading">"Conversation History"</h2>
            {move || match rendered.get() {
                ConversationView::Empty => {
                    view! { <p class="conversation__empty">{EMPTY_HISTORY}</p> }.into_any()
                }
                ConversationView::Messages(blocks) => view! {
                    <div class="conversation__messages">
                        {blocks
                            .into_iter()
                            .map(|block| view! {
                                <textarea
                                    class="conversation__message"
                                    readonly=true
                                    rows=block.rows.to_string()
                                    prop:value=block.body
                                ></textarea>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
