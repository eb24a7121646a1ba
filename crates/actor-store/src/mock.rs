//! # Mock Stores & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a live store. Code that depends on a store
//! client (the order orchestrator, the gateway) can then be tested for exactly which calls
//! it makes, in which order, and how it reacts to errors or slow replies.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real records |
//! | **Call assertions** | `call_count`, `take_calls` | Not available |
//! | **Error injection** | `return_err` | Requires a bad payload |
//! | **Latency injection** | `return_ok_after` | Not available |
//!
//! ## Behaviour
//!
//! - Expectations are consumed front to back.
//! - A request whose kind differs from the next expectation (or arrives when none are
//!   left) is recorded as *unexpected* and its reply channel is dropped, so the caller
//!   sees [`FrameworkError::ActorDropped`]. [`MockClient::verify`] then fails.
//! - Every request is recorded as a [`Call`], expected or not.
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::ActorEntity;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: String }
//! #[derive(Debug, thiserror::Error)]
//! #[error("never")]
//! struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = String;
//!     type Create = ();
//!     type Filter = ();
//!     type Error = NoteError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockClient::<Note>::new();
//!     mock.expect_get().return_ok(Some(Note { id: "n1".into() }));
//!
//!     let found = mock.client().get("n1".into()).await.unwrap();
//!     assert_eq!(found, Some(Note { id: "n1".into() }));
//!     assert_eq!(mock.call_count(), 1);
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// A request observed by a [`MockClient`], with its payload.
#[derive(Debug)]
pub enum Call<T: ActorEntity> {
    Create(T::Create),
    Insert(T),
    Get(T::Id),
    GetMany(Vec<T::Id>),
    List { skip: usize, take: usize },
    Query { filter: T::Filter, skip: usize, take: usize },
}

impl<T: ActorEntity> Call<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => "Create",
            Self::Insert(_) => "Insert",
            Self::Get(_) => "Get",
            Self::GetMany(_) => "GetMany",
            Self::List { .. } => "List",
            Self::Query { .. } => "Query",
        }
    }
}

enum Reply<T: ActorEntity> {
    Entity(Result<T, FrameworkError>),
    Id(Result<T::Id, FrameworkError>),
    Optional(Result<Option<T>, FrameworkError>),
    Many(Result<Vec<T>, FrameworkError>),
}

struct Expectation<T: ActorEntity> {
    kind: &'static str,
    reply: Reply<T>,
    delay: Option<Duration>,
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<Call<T>>,
    unexpected: Vec<&'static str>,
}

/// A mock store with expectation tracking for fluent testing.
///
/// Must be created inside a Tokio runtime: the request handler runs as a spawned task.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            calls: Vec::new(),
            unexpected: Vec::new(),
        }));
        let handler_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                dispatch(&handler_state, request);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&self) -> ExpectationBuilder<T, T> {
        self.builder("Create", Reply::Entity)
    }

    pub fn expect_insert(&self) -> ExpectationBuilder<T, T::Id> {
        self.builder("Insert", Reply::Id)
    }

    pub fn expect_get(&self) -> ExpectationBuilder<T, Option<T>> {
        self.builder("Get", Reply::Optional)
    }

    pub fn expect_get_many(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder("GetMany", Reply::Many)
    }

    pub fn expect_list(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder("List", Reply::Many)
    }

    pub fn expect_query(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder("Query", Reply::Many)
    }

    fn builder<R>(
        &self,
        kind: &'static str,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            kind,
            wrap,
            state: self.state.clone(),
        }
    }

    /// Number of requests received so far, expected or not.
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Drains the recorded calls.
    pub fn take_calls(&self) -> Vec<Call<T>> {
        std::mem::take(&mut self.state.lock().unwrap().calls)
    }

    /// Verifies that every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<_> = state.expectations.iter().map(|e| e.kind).collect();
            panic!("Not all expectations were met. Remaining: {remaining:?}");
        }
    }
}

/// Builder returned by the `expect_*` methods. Consumed by one of the `return_*` calls.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    kind: &'static str,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value), None);
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error), None);
    }

    /// Replies with `value` once `delay` has elapsed. Other requests are still served
    /// meanwhile.
    pub fn return_ok_after(self, delay: Duration, value: R) {
        self.push(Ok(value), Some(delay));
    }

    fn push(self, reply: Result<R, FrameworkError>, delay: Option<Duration>) {
        self.state.lock().unwrap().expectations.push_back(Expectation {
            kind: self.kind,
            reply: (self.wrap)(reply),
            delay,
        });
    }
}

fn dispatch<T: ActorEntity>(state: &Mutex<MockState<T>>, request: ResourceRequest<T>) {
    let mut state = state.lock().unwrap();
    let kind = request.kind();
    let expected = state.expectations.front().is_some_and(|next| next.kind == kind);
    let expectation = if expected {
        state.expectations.pop_front()
    } else {
        state.unexpected.push(kind);
        None
    };
    let (reply, delay) = match expectation {
        Some(e) => (Some(e.reply), e.delay),
        None => (None, None),
    };

    // A missing or mismatched reply drops `respond_to`, which the caller sees as ActorDropped.
    match request {
        ResourceRequest::Create { params, respond_to } => {
            state.calls.push(Call::Create(params));
            if let Some(Reply::Entity(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
        ResourceRequest::Insert { item, respond_to } => {
            state.calls.push(Call::Insert(item));
            if let Some(Reply::Id(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
        ResourceRequest::Get { id, respond_to } => {
            state.calls.push(Call::Get(id));
            if let Some(Reply::Optional(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
        ResourceRequest::GetMany { ids, respond_to } => {
            state.calls.push(Call::GetMany(ids));
            if let Some(Reply::Many(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
        ResourceRequest::List {
            skip,
            take,
            respond_to,
        } => {
            state.calls.push(Call::List { skip, take });
            if let Some(Reply::Many(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
        ResourceRequest::Query {
            filter,
            skip,
            take,
            respond_to,
        } => {
            state.calls.push(Call::Query { filter, skip, take });
            if let Some(Reply::Many(r)) = reply {
                answer(respond_to, r, delay);
            }
        }
    }
}

fn answer<R: Send + 'static>(
    respond_to: Response<R>,
    reply: Result<R, FrameworkError>,
    delay: Option<Duration>,
) {
    match delay {
        Some(delay) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = respond_to.send(reply);
            });
        }
        None => {
            let _ = respond_to.send(reply);
        }
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver behind it.
///
/// Useful when a test wants to inspect a request and decide on the reply by hand,
/// e.g. to hold the reply back while asserting on something else.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}
