//! Root component.

use leptos::prelude::*;

use crate::components::conversation_panel::ConversationPanel;
use crate::components::prompt_box::PromptBox;
use crate::state::conversation::ConversationState;

/// Provides the conversation signal and lays out the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_context(RwSignal::new(ConversationState::default()));

    view! {
        <main class="page">
            <h1 class="page__title">"Ask the AI"</h1>
            <ConversationPanel/>
            <PromptBox/>
        </main>
    }
}
