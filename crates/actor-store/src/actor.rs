//! # Store Actor
//!
//! This module defines the `ResourceActor`, the task that owns one store's records and
//! answers its requests. It is the "server" half of the actor pair: requests are
//! processed one at a time, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Architecture Note
/// The actor owns the state (`store`, `order`) and the receiver end of the channel.
/// Each actor processes its own messages sequentially in a loop, so a single request
/// (including an `Insert` of a whole order with its line items) is applied completely
/// or not at all, and concurrent callers never observe a half-written record.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client into whatever needs the store.
///
/// ```rust
/// use actor_store::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: String, text: String }
/// #[derive(Debug)]
/// struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("empty note")]
/// struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = String;
///     type Create = NoteCreate;
///     type Filter = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, params: NoteCreate) -> Result<Self, NoteError> {
///         if params.text.is_empty() { return Err(NoteError); }
///         Ok(Self { id, text: params.text })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10, || "note_1".to_string());
///     tokio::spawn(actor.run());
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, "note_1");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids in insertion order; `listing_order` ties fall back to this.
    order: Vec<T::Id>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Generator for the ids of records built by `Create`.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // "Product" instead of "storefront::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();
                    match T::from_create_params(id.clone(), params) {
                        Ok(_) if self.store.contains_key(&id) => {
                            warn!(entity_type, %id, "Generated id collides");
                            let _ = respond_to.send(Err(FrameworkError::Conflict(id.to_string())));
                        }
                        Ok(item) => {
                            self.put(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Insert { item, respond_to } => {
                    let id = item.id().clone();
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Insert conflicts with existing record");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(id.to_string())));
                        continue;
                    }
                    self.put(item);
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = if ids.is_empty() {
                        self.sorted(self.store.values().collect())
                    } else {
                        self.lookup_many(&ids)
                    };
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::List {
                    skip,
                    take,
                    respond_to,
                } => {
                    let all = self.sorted(self.store.values().collect());
                    let page: Vec<T> = all.into_iter().skip(skip).take(take).collect();
                    debug!(entity_type, skip, take, returned = page.len(), "List");
                    let _ = respond_to.send(Ok(page));
                }
                ResourceRequest::Query {
                    filter,
                    skip,
                    take,
                    respond_to,
                } => {
                    let page = self.query(&filter, skip, take);
                    debug!(entity_type, ?filter, skip, take, returned = page.len(), "Query");
                    let _ = respond_to.send(Ok(page));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn put(&mut self, item: T) {
        let id = item.id().clone();
        self.order.push(id.clone());
        self.store.insert(id, item);
    }

    /// Records for `ids`, de-duplicated, in first-seen order. Unknown ids are skipped.
    fn lookup_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    /// Clones `items` into listing order, insertion order breaking ties.
    fn sorted(&self, items: Vec<&T>) -> Vec<T> {
        let position: HashMap<&T::Id, usize> =
            self.order.iter().enumerate().map(|(i, id)| (id, i)).collect();
        let mut items = items;
        items.sort_by(|a, b| {
            T::listing_order(a, b).then_with(|| position[a.id()].cmp(&position[b.id()]))
        });
        items.into_iter().cloned().collect()
    }

    fn query(&self, filter: &T::Filter, skip: usize, take: usize) -> Vec<T> {
        let mut hits: Vec<(u32, &T)> = self
            .store
            .values()
            .filter_map(|item| item.matches(filter).map(|score| (score, item)))
            .collect();
        let position: HashMap<&T::Id, usize> =
            self.order.iter().enumerate().map(|(i, id)| (id, i)).collect();
        hits.sort_by(|(sa, a), (sb, b)| {
            sb.cmp(sa)
                .then_with(|| T::listing_order(a, b))
                .then_with(|| position[a.id()].cmp(&position[b.id()]))
        });
        hits.into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, item)| item.clone())
            .collect()
    }
}
