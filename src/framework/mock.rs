//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of a store actor. Controllers cannot tell the
//! difference, which makes it the tool for injecting collaborator failures
//! (closed actors, dropped channels) that a live store never produces.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted answers) | Real records |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Controller failure paths | Full dispatch flows |
//!
//! ```rust,ignore
//! let mut users = MockClient::<User>::new();
//! users.expect_get(UserId(1)).return_err(FrameworkError::ActorClosed);
//!
//! let client = UserClient::new(users.client());
//! assert!(client.find_by_id(UserId(1)).await.is_err());
//! users.verify();
//! ```
//!
//! Requests are matched strictly in order. A request that does not match the next
//! expectation (wrong operation or wrong ID) panics the mock task, which the caller
//! observes as [`FrameworkError::ActorDropped`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for one request.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    FindOne(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<T, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the answering task is spawned here.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response)))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::FindOne { respond_to, .. }, Some(Expectation::FindOne(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(expected, response)),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, response)))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(Expectation::Create))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Get(id, response)))
    }

    pub fn expect_find_one(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(Expectation::FindOne))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(Expectation::List))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |response| Expectation::Update(id, response)))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |response| Expectation::Delete(id, response)))
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Builder that queues the answer for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: Wrap<T, R>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request successfully.
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    /// Answers the request with a collaborator failure.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}
