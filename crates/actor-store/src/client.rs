//! # Store Client
//!
//! The cloneable handle used to talk to a [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared across
/// any number of concurrent requests. Each call sends one request and awaits its
/// one-shot reply.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn insert(&self, item: T) -> Result<T::Id, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Insert { item, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Bulk lookup. An empty `ids` means no id constraint and returns every record.
    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn list(&self, skip: usize, take: usize) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List {
            skip,
            take,
            respond_to,
        })
        .await
    }

    pub async fn query(
        &self,
        filter: T::Filter,
        skip: usize,
        take: usize,
    ) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Query {
            filter,
            skip,
            take,
            respond_to,
        })
        .await
    }
}
