//! # Store Messages
//!
//! The request enum sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor), and the one-shot reply channel type.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover what a leaf store offers its consumers:
///
/// - **Create**: builds a record from [`ActorEntity::Create`] under a generated id.
/// - **Insert**: stores a record whose id was assigned by the caller. Never overwrites.
/// - **Get**: point lookup by id.
/// - **GetMany**: bulk lookup by ids. An empty id list means "no id constraint".
/// - **List**: a window over every record in listing order.
/// - **Query**: a window over the records matching an [`ActorEntity::Filter`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Insert {
        item: T,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    List {
        skip: usize,
        take: usize,
        respond_to: Response<Vec<T>>,
    },
    Query {
        filter: T::Filter,
        skip: usize,
        take: usize,
        respond_to: Response<Vec<T>>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the request kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Insert { .. } => "Insert",
            Self::Get { .. } => "Get",
            Self::GetMany { .. } => "GetMany",
            Self::List { .. } => "List",
            Self::Query { .. } => "Query",
        }
    }
}
