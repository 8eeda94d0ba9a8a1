use super::{
    post_dtos::{CreatePostDTO, PostDTO},
    post_store::PostStore,
};
use crate::{
    shared::exceptions::exception::ClientError,
    utils::{
        error_construct::{error_construct, PostAction},
        validate_body_error::validate_body_error,
    },
};
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use validator::Validate;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFormState {
    pub title: String,
    pub description: String,
    /// A create request is in flight; the submit control is disabled.
    pub submitting: bool,
}

fn lock(state: &Mutex<PostFormState>) -> MutexGuard<'_, PostFormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

struct SubmitGuard<'a> {
    state: &'a Mutex<PostFormState>,
}

impl<'a> SubmitGuard<'a> {
    fn start(state: &'a Mutex<PostFormState>) -> Option<Self> {
        let mut form = lock(state);
        if form.submitting {
            return None;
        }
        form.submitting = true;

        Some(Self { state })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).submitting = false;
    }
}

/// # Post Form
///
/// Controlled creation form. Holds the typed title and description and submits them
/// through the store's API; on success the fields are cleared and the store refetched.
///
/// Cloning the form clones the handle.
#[derive(Clone)]
pub struct PostForm {
    store: PostStore,
    state: Arc<Mutex<PostFormState>>,
}

impl PostForm {
    pub fn new(store: PostStore) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(PostFormState::default())),
        }
    }

    pub fn snapshot(&self) -> PostFormState {
        lock(&self.state).clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        lock(&self.state).title = title.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        lock(&self.state).description = description.into();
    }

    /// Submits the typed post.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(post))` when the backend created the post.
    /// - `Ok(None)` when a submission was already in flight; nothing is sent.
    /// - `Err(ClientError::Validation)` when a field is empty; nothing is sent.
    /// - `Err(_)` for API failures; the typed fields are kept.
    ///
    /// Every error is also written to the store's error slot.
    pub async fn submit(&self) -> Result<Option<PostDTO>, ClientError> {
        let Some(guard) = SubmitGuard::start(&self.state) else {
            return Ok(None);
        };

        let body = {
            let form = lock(&self.state);
            CreatePostDTO::new(form.title.clone(), form.description.clone())
        };

        if let Err(e) = body.validate() {
            let error = validate_body_error(&e, &["title", "description"]);
            self.store
                .report_error(error_construct(PostAction::Create, &error));
            return Err(error);
        }

        let post = match self.store.api().create_post(&body).await {
            Ok(post) => post,
            Err(e) => {
                let message = error_construct(PostAction::Create, &e);
                warn!("{}", message);
                self.store.report_error(message);
                return Err(e);
            }
        };
        info!("created post {}", post.id);

        {
            // Text typed while the request was in flight is kept.
            let mut form = lock(&self.state);
            if form.title == body.title {
                form.title.clear();
            }
            if form.description == body.description {
                form.description.clear();
            }
        }
        drop(guard);

        // A failed refetch is already reported by the store; the post itself was created.
        let _ = self.store.refresh().await;

        Ok(Some(post))
    }
}
