use super::*;
use crate::state::conversation::{ConversationState, Message, Phase};
use futures::executor::block_on;
use std::cell::RefCell;

/// Stands in for the gateway: answers with a fixed outcome and records
/// every query it receives.
struct StubTransport {
    outcome: Result<String, CompletionFailure>,
    queries: RefCell<Vec<String>>,
}

impl StubTransport {
    fn replying(text: &str) -> Self {
        Self { outcome: Ok(text.to_owned()), queries: RefCell::new(Vec::new()) }
    }

    fn failing(failure: CompletionFailure) -> Self {
        Self { outcome: Err(failure), queries: RefCell::new(Vec::new()) }
    }
}

impl CompletionTransport for StubTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure> {
        self.queries.borrow_mut().push(request.query.clone());
        self.outcome.clone()
    }
}

/// What the prompt box does on click, minus the signal plumbing.
fn submit<T: CompletionTransport>(state: &mut ConversationState, transport: &T) {
    let Some(request) = state.begin_submit() else {
        return;
    };
    let event = block_on(run_round_trip(transport, request));
    state.apply(event);
}

fn with_draft(text: &str) -> ConversationState {
    let mut state = ConversationState::default();
    state.apply(Event::DraftEdited(text.to_owned()));
    state
}

// =============================================================
// End-to-end round trips
// =============================================================

#[test]
fn successful_round_trip_appends_two_messages_and_clears_draft() {
    let gateway = StubTransport::replying("4");
    let mut state = with_draft("2+2?");

    submit(&mut state, &gateway);

    assert_eq!(state.messages(), &[Message::user("2+2?"), Message::assistant("4")]);
    assert_eq!(state.draft(), "");
    assert_eq!(state.phase(), &Phase::Idle);
    assert_eq!(*gateway.queries.borrow(), vec!["2+2?".to_owned()]);
}

#[test]
fn blank_draft_makes_no_network_call() {
    let gateway = StubTransport::replying("unused");
    for draft in ["", "   ", "\n"] {
        let mut state = with_draft(draft);
        submit(&mut state, &gateway);
        assert!(state.messages().is_empty());
        assert_eq!(state.phase(), &Phase::Idle);
    }
    assert!(gateway.queries.borrow().is_empty());
}

#[test]
fn failed_round_trip_surfaces_notice_and_appends_nothing() {
    let gateway = StubTransport::failing(CompletionFailure::Status {
        status: 500,
        message: Some("Invalid JSON data or OpenAI API error".into()),
    });
    let mut state = with_draft("hello");

    submit(&mut state, &gateway);

    assert!(state.messages().is_empty());
    assert_eq!(state.phase(), &Phase::Idle);
    assert_eq!(state.draft(), "hello");
    assert_eq!(state.notice(), Some("Invalid JSON data or OpenAI API error (status 500)"));
}

#[test]
fn run_round_trip_maps_outcomes_to_events() {
    let request = CompletionRequest { query: "hi".into() };
    let ok = block_on(run_round_trip(&StubTransport::replying("hello"), request.clone()));
    assert_eq!(ok, Event::Completed { response: "hello".into() });

    let failed = block_on(run_round_trip(
        &StubTransport::failing(CompletionFailure::Network("offline".into())),
        request,
    ));
    assert_eq!(failed, Event::Failed { reason: "network error: offline".into() });
}

// =============================================================
// HttpTransport / helpers
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn http_transport_is_unavailable_natively() {
    let result = block_on(HttpTransport.complete(&CompletionRequest { query: "hi".into() }));
    assert!(matches!(result, Err(CompletionFailure::Network(_))));
}

#[test]
fn completion_endpoint_path() {
    assert_eq!(COMPLETION_ENDPOINT, "/api/completion");
}

#[test]
fn reply_text_extracts_response() {
    let body = CompletionResponse::Reply { response: "4".into() };
    assert_eq!(reply_text(body), Ok("4".to_owned()));
}

#[test]
fn reply_text_rejects_error_body_with_success_status() {
    let body = CompletionResponse::Error { error: "odd".into() };
    assert_eq!(reply_text(body), Err(CompletionFailure::Decode("odd".into())));
}

#[test]
fn failure_display() {
    assert_eq!(
        CompletionFailure::Status { status: 400, message: Some("Query is required".into()) }.to_string(),
        "Query is required (status 400)"
    );
    assert_eq!(
        CompletionFailure::Status { status: 502, message: None }.to_string(),
        "request failed with status 502"
    );
    assert_eq!(CompletionFailure::Decode("eof".into()).to_string(), "unreadable response: eof");
}
