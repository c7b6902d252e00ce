use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use crate::state::contact::{ContactField, SubmissionStatus};

// =========================================================================
// Mocks
// =========================================================================

type Reply = Result<RawResponse, String>;

impl ContactStore for Rc<RefCell<ContactState>> {
    fn update_contact<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// Records every request; replies are queued oneshot receivers so a test can
/// hold a response back and observe the in-flight state.
#[derive(Clone, Default)]
struct MockTransport {
    calls: Rc<RefCell<Vec<JsonRequest>>>,
    replies: Rc<RefCell<VecDeque<oneshot::Receiver<Reply>>>>,
}

impl MockTransport {
    fn replying(reply: Reply) -> Self {
        let transport = Self::default();
        transport.queue(reply);
        transport
    }

    fn queue(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.borrow_mut().push_back(rx);
    }

    fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    fn calls(&self) -> Vec<JsonRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl ContactTransport for MockTransport {
    async fn post(&self, request: &JsonRequest) -> Result<RawResponse, String> {
        self.calls.borrow_mut().push(request.clone());
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(rx) => rx.await.unwrap_or_else(|_| Err("reply dropped".to_owned())),
            None => Err("no reply queued".to_owned()),
        }
    }
}

/// Simulated clock: each sleep parks until the test advances time.
#[derive(Clone, Default)]
struct ManualClock {
    requested: Rc<RefCell<Vec<Duration>>>,
    sleepers: Rc<RefCell<Vec<oneshot::Sender<()>>>>,
}

impl ManualClock {
    fn advance(&self) {
        for tx in self.sleepers.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }

    fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Delay for ManualClock {
    async fn sleep(&self, duration: Duration) {
        self.requested.borrow_mut().push(duration);
        let (tx, rx) = oneshot::channel();
        self.sleepers.borrow_mut().push(tx);
        let _ = rx.await;
    }
}

fn ok(body: &str) -> Reply {
    Ok(RawResponse { status: 200, body: body.to_owned() })
}

fn status(code: u16, body: &str) -> Reply {
    Ok(RawResponse { status: code, body: body.to_owned() })
}

fn ana() -> FormData {
    FormData { name: "Ana".to_owned(), email: "ana@x.com".to_owned(), message: "Hola".to_owned() }
}

fn store_with(form: FormData) -> Rc<RefCell<ContactState>> {
    Rc::new(RefCell::new(ContactState { form, ..ContactState::default() }))
}

type TestSubmitter = ContactSubmitter<Rc<RefCell<ContactState>>, MockTransport, ManualClock>;

fn submitter(transport: &MockTransport, clock: &ManualClock) -> TestSubmitter {
    ContactSubmitter::new(store_with(ana()), transport.clone(), clock.clone())
}

fn status_of(submitter: &TestSubmitter) -> SubmissionStatus {
    submitter.store().borrow().status.clone()
}

// =========================================================================
// contact_request
// =========================================================================

#[test]
fn contact_request_posts_json_to_contact_endpoint() {
    let request = contact_request(&ana()).unwrap();
    assert_eq!(request.path, "/api/contact");
    assert_eq!(request.content_type, "application/json");
    let body: FormData = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, ana());
}

// =========================================================================
// classify_response
// =========================================================================

#[test]
fn classify_response_accepts_2xx_json() {
    assert_eq!(classify_response(200, "{}"), Ok(()));
    assert_eq!(classify_response(201, r#"{"ok":true}"#), Ok(()));
}

#[test]
fn classify_response_rejects_2xx_non_json() {
    let err = classify_response(200, "<html>").unwrap_err();
    assert!(matches!(err, SubmitError::MalformedResponse(_)));
    assert!(!err.user_message().is_empty());
}

#[test]
fn classify_response_reads_error_field() {
    assert_eq!(
        classify_response(400, r#"{"error":"bad email"}"#),
        Err(SubmitError::Server { status: 400, message: Some("bad email".to_owned()) })
    );
}

#[test]
fn classify_response_without_error_field_has_no_message() {
    assert_eq!(classify_response(500, "{}"), Err(SubmitError::Server { status: 500, message: None }));
    assert_eq!(classify_response(502, "Bad Gateway"), Err(SubmitError::Server { status: 502, message: None }));
}

#[test]
fn classify_response_ignores_empty_or_non_string_error() {
    assert_eq!(classify_response(400, r#"{"error":""}"#), Err(SubmitError::Server { status: 400, message: None }));
    assert_eq!(classify_response(400, r#"{"error":42}"#), Err(SubmitError::Server { status: 400, message: None }));
}

// =========================================================================
// SubmitError::user_message
// =========================================================================

#[test]
fn user_message_per_variant() {
    assert_eq!(SubmitError::Network("Failed to fetch".to_owned()).user_message(), "Failed to fetch");
    assert_eq!(SubmitError::Network(String::new()).user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(SubmitError::Server { status: 500, message: None }.user_message(), "Error al enviar el mensaje");
    assert_eq!(
        SubmitError::Server { status: 422, message: Some("bad email".to_owned()) }.user_message(),
        "bad email"
    );
    assert_eq!(SubmitError::MalformedResponse("expected value".to_owned()).user_message(), "expected value");
}

// =========================================================================
// deliver
// =========================================================================

#[test]
fn deliver_sends_exactly_one_request() {
    let transport = MockTransport::replying(ok("{}"));
    assert_eq!(block_on(deliver(&transport, &ana())), Ok(()));
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(transport.calls()[0].path, CONTACT_ENDPOINT);
}

#[test]
fn deliver_maps_transport_failure_to_network_error() {
    let transport = MockTransport::replying(Err("connection refused".to_owned()));
    assert_eq!(
        block_on(deliver(&transport, &ana())),
        Err(SubmitError::Network("connection refused".to_owned()))
    );
}

// =========================================================================
// ContactSubmitter
// =========================================================================

#[test]
fn begin_enters_submitting_before_network_resolves() {
    let transport = MockTransport::default();
    let gate = transport.gate();
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    let pending = submitter.begin().expect("idle form should begin");
    assert_eq!(status_of(&submitter), SubmissionStatus::Submitting);
    assert!(transport.calls().is_empty());

    let mut pool = LocalPool::new();
    let task = submitter.clone();
    let handle = pool.spawner().spawn_local_with_handle(async move { task.complete(pending).await }).unwrap();
    pool.run_until_stalled();
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(status_of(&submitter), SubmissionStatus::Submitting);

    gate.send(ok("{}")).unwrap();
    pool.run_until_stalled();
    assert_eq!(status_of(&submitter), SubmissionStatus::Succeeded);

    clock.advance();
    assert_eq!(pool.run_until(handle), SubmitOutcome::Delivered);
}

#[test]
fn submit_success_resets_form_and_schedules_revert() {
    let transport = MockTransport::replying(ok(r#"{"ok":true}"#));
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    let mut pool = LocalPool::new();
    let task = submitter.clone();
    let handle = pool.spawner().spawn_local_with_handle(async move { task.submit().await }).unwrap();
    pool.run_until_stalled();

    assert_eq!(status_of(&submitter), SubmissionStatus::Succeeded);
    assert_eq!(submitter.store().borrow().form, FormData::default());
    assert_eq!(clock.requested(), vec![Duration::from_millis(5000)]);

    clock.advance();
    assert_eq!(pool.run_until(handle), SubmitOutcome::Delivered);
}

#[test]
fn submit_server_error_surfaces_error_field() {
    let transport = MockTransport::replying(status(400, r#"{"error":"bad email"}"#));
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    let outcome = block_on(submitter.submit());
    assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Server { status: 400, .. })));
    assert_eq!(status_of(&submitter), SubmissionStatus::Failed("bad email".to_owned()));
    assert_eq!(submitter.store().borrow().form, ana());
    assert!(clock.requested().is_empty());
}

#[test]
fn submit_server_error_without_field_uses_fallback() {
    let transport = MockTransport::replying(status(500, "{}"));
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    block_on(submitter.submit());
    assert_eq!(status_of(&submitter), SubmissionStatus::Failed(SERVER_FALLBACK_MESSAGE.to_owned()));
}

#[test]
fn submit_network_failure_surfaces_exception_message() {
    let transport = MockTransport::replying(Err("Failed to fetch".to_owned()));
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    block_on(submitter.submit());
    assert_eq!(status_of(&submitter), SubmissionStatus::Failed("Failed to fetch".to_owned()));
}

#[test]
fn submit_while_submitting_is_skipped() {
    let transport = MockTransport::default();
    let gate = transport.gate();
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    let mut pool = LocalPool::new();
    let task = submitter.clone();
    let first = pool.spawner().spawn_local_with_handle(async move { task.submit().await }).unwrap();
    pool.run_until_stalled();

    assert_eq!(pool.run_until(submitter.submit()), SubmitOutcome::Skipped);
    assert_eq!(transport.calls().len(), 1);

    gate.send(status(503, "{}")).unwrap();
    assert!(matches!(pool.run_until(first), SubmitOutcome::Failed(_)));
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn end_to_end_success_then_revert_after_delay() {
    let transport = MockTransport::replying(ok("{}"));
    let clock = ManualClock::default();
    let store = store_with(FormData::default());
    let submitter = ContactSubmitter::new(store.clone(), transport.clone(), clock.clone());

    store.borrow_mut().set_field(ContactField::Name, "Ana".to_owned());
    store.borrow_mut().set_field(ContactField::Email, "ana@x.com".to_owned());
    store.borrow_mut().set_field(ContactField::Message, "Hola".to_owned());

    let mut pool = LocalPool::new();
    let task = submitter.clone();
    let handle = pool.spawner().spawn_local_with_handle(async move { task.submit().await }).unwrap();
    pool.run_until_stalled();

    {
        let state = store.borrow();
        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert_eq!(state.form, FormData::default());
    }
    let sent: FormData = serde_json::from_str(&transport.calls()[0].body).unwrap();
    assert_eq!(sent, ana());

    clock.advance();
    assert_eq!(pool.run_until(handle), SubmitOutcome::Delivered);
    assert_eq!(store.borrow().status, SubmissionStatus::Idle);
}

#[test]
fn stale_revert_does_not_clobber_newer_submission() {
    let transport = MockTransport::replying(ok("{}"));
    let clock = ManualClock::default();
    let submitter = submitter(&transport, &clock);

    let mut pool = LocalPool::new();
    let task = submitter.clone();
    let first = pool.spawner().spawn_local_with_handle(async move { task.submit().await }).unwrap();
    pool.run_until_stalled();
    assert_eq!(status_of(&submitter), SubmissionStatus::Succeeded);

    submitter.store().borrow_mut().set_field(ContactField::Message, "otra".to_owned());
    let second = submitter.begin().expect("resubmit while success banner is up");
    assert_eq!(second.seq, 2);

    clock.advance();
    assert_eq!(pool.run_until(first), SubmitOutcome::Delivered);
    assert_eq!(status_of(&submitter), SubmissionStatus::Submitting);
}
