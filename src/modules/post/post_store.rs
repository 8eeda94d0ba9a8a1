use super::{
    post_client::PostsApi,
    post_dtos::{PostDTO, PostId},
};
use crate::{
    shared::exceptions::exception::ClientError,
    utils::error_construct::{error_construct, PostAction},
};
use log::{debug, info, warn};
use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Snapshot of the store handed to the views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostStoreState {
    pub posts: Vec<PostDTO>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ids with a delete request in flight.
    pub deleting: BTreeSet<PostId>,
}

impl PostStoreState {
    pub fn is_deleting(&self, id: PostId) -> bool {
        self.deleting.contains(&id)
    }
}

struct StoreInner {
    state: PostStoreState,
    fetches_in_flight: usize,
    issued_fetches: u64,
    applied_fetch: u64,
}

fn lock(inner: &Mutex<StoreInner>) -> MutexGuard<'_, StoreInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a list fetch as in flight until dropped.
struct FetchGuard<'a> {
    inner: &'a Mutex<StoreInner>,
    ticket: u64,
}

impl<'a> FetchGuard<'a> {
    fn start(inner: &'a Mutex<StoreInner>) -> Self {
        let mut store = lock(inner);
        store.fetches_in_flight += 1;
        store.issued_fetches += 1;
        store.state.loading = true;

        Self {
            inner,
            ticket: store.issued_fetches,
        }
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        let mut store = lock(self.inner);
        store.fetches_in_flight = store.fetches_in_flight.saturating_sub(1);
        store.state.loading = store.fetches_in_flight > 0;
    }
}

/// Marks one post as being deleted until dropped.
struct DeleteGuard<'a> {
    inner: &'a Mutex<StoreInner>,
    id: PostId,
}

impl<'a> DeleteGuard<'a> {
    /// Returns `None` when a delete for `id` is already in flight.
    fn start(inner: &'a Mutex<StoreInner>, id: PostId) -> Option<Self> {
        let mut store = lock(inner);
        if !store.state.deleting.insert(id) {
            return None;
        }

        Some(Self { inner, id })
    }
}

impl Drop for DeleteGuard<'_> {
    fn drop(&mut self) {
        lock(self.inner).state.deleting.remove(&self.id);
    }
}

/// # Post Store
///
/// Holds the posts snapshot, the loading flag and the shared error slot, and keeps
/// them in line with the backend by refetching the whole list after every mutation.
///
/// Cloning the store clones the handle: every clone sees the same state.
///
/// ## Functions:
///
/// refresh () -> replaces the snapshot with the backend list
///
/// delete_post (id) -> deletes one post, then refreshes
///
/// report_error (message) / clear_error () -> shared error slot
///
/// snapshot () -> copy of the current state
#[derive(Clone)]
pub struct PostStore {
    api: Arc<dyn PostsApi>,
    inner: Arc<Mutex<StoreInner>>,
}

impl PostStore {
    /// Creates a store that has not loaded yet: `loading` is `true` until the first `refresh`.
    pub fn new(api: Arc<dyn PostsApi>) -> Self {
        Self {
            api,
            inner: Arc::new(Mutex::new(StoreInner {
                state: PostStoreState {
                    loading: true,
                    ..PostStoreState::default()
                },
                fetches_in_flight: 0,
                issued_fetches: 0,
                applied_fetch: 0,
            })),
        }
    }

    pub fn api(&self) -> Arc<dyn PostsApi> {
        self.api.clone()
    }

    pub fn snapshot(&self) -> PostStoreState {
        lock(&self.inner).state.clone()
    }

    /// Fetches the list and replaces the snapshot.
    ///
    /// On failure the previous posts stay in place and the error slot is set.
    /// A response is dropped when a fetch issued later has already settled.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let guard = FetchGuard::start(&self.inner);
        let result = self.api.list_posts().await;

        let mut store = lock(&self.inner);
        if guard.ticket <= store.applied_fetch {
            debug!("discarding stale posts response #{}", guard.ticket);
            drop(store);
            return result.map(|_| ());
        }
        store.applied_fetch = guard.ticket;

        let outcome = match result {
            Ok(posts) => {
                info!("loaded {} posts", posts.len());
                store.state.posts = posts;
                store.state.error = None;
                Ok(())
            }
            Err(e) => {
                let message = error_construct(PostAction::Fetch, &e);
                warn!("{}", message);
                store.state.error = Some(message);
                Err(e)
            }
        };
        drop(store);
        drop(guard);

        outcome
    }

    /// Deletes `id` on the backend and refetches on success.
    ///
    /// A failed delete only sets the error slot: the snapshot is neither rolled back
    /// nor refetched. A second call for an id already being deleted does nothing.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        let Some(guard) = DeleteGuard::start(&self.inner, id) else {
            debug!("delete of post {} already in flight", id);
            return Ok(());
        };

        if let Err(e) = self.api.delete_post(id).await {
            drop(guard);
            let message = error_construct(PostAction::Delete, &e);
            warn!("{} {}: {}", message, id, e);
            self.report_error(message);
            return Err(e);
        }
        info!("deleted post {}", id);

        // The row stays disabled until the refetch settles.
        let refreshed = self.refresh().await;
        drop(guard);

        refreshed
    }

    pub fn report_error(&self, message: String) {
        lock(&self.inner).state.error = Some(message);
    }

    pub fn clear_error(&self) {
        lock(&self.inner).state.error = None;
    }
}
