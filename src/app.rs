use crate::{
    config::api::ApiConfig,
    modules::post::{
        post_client::{PostClient, PostsApi},
        post_dtos::{PostDTO, PostId},
        post_form::PostForm,
        post_store::PostStore,
        post_wall::WallView,
    },
    shared::exceptions::exception::ClientError,
};
use std::{fmt::Write, sync::Arc};

pub const PAGE_TITLE: &str = "Posts from SQLite API";

/// # App
///
/// Root composer: one store and one form sharing the same API, plus the page rendering.
///
/// ## Usage
///
/// ```rust,no_run
/// use post_wall::{app::App, config::api::ApiConfig};
///
/// # async fn run() -> Result<(), post_wall::shared::exceptions::exception::ClientError> {
/// let app = App::from_config(ApiConfig::default())?;
/// app.mount().await;
/// println!("{}", app.render());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct App {
    store: PostStore,
    form: PostForm,
}

impl App {
    pub fn new(api: Arc<dyn PostsApi>) -> Self {
        let store = PostStore::new(api);
        let form = PostForm::new(store.clone());

        Self { store, form }
    }

    pub fn from_config(config: ApiConfig) -> Result<Self, ClientError> {
        let client = PostClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    /// Initial load. Failures end up in the error slot.
    pub async fn mount(&self) {
        let _ = self.store.refresh().await;
    }

    pub async fn refresh(&self) {
        let _ = self.store.refresh().await;
    }

    pub async fn delete_post(&self, id: PostId) {
        let _ = self.store.delete_post(id).await;
    }

    pub async fn submit(&self) -> Option<PostDTO> {
        self.form.submit().await.ok().flatten()
    }

    /// Renders the whole page as text.
    pub fn render(&self) -> String {
        let store = self.store.snapshot();
        let form = self.form.snapshot();
        let mut page = String::new();

        let _ = writeln!(page, "{}", PAGE_TITLE);
        let _ = writeln!(page, "{}", "=".repeat(PAGE_TITLE.len()));
        let _ = writeln!(page);

        let _ = writeln!(page, "Create New Post");
        let _ = writeln!(page, "  Title:       {}", placeholder(&form.title, "Title"));
        let _ = writeln!(
            page,
            "  Description: {}",
            placeholder(&form.description, "Description")
        );
        if form.submitting {
            let _ = writeln!(page, "  [Creating...]");
        } else {
            let _ = writeln!(page, "  [Create Post]");
        }
        let _ = writeln!(page);

        if let Some(error) = &store.error {
            let _ = writeln!(page, "Error: {}", error);
            let _ = writeln!(page);
        }

        let _ = write!(page, "{}", WallView::from_state(&store));

        page
    }
}

fn placeholder(value: &str, name: &str) -> String {
    if value.is_empty() {
        format!("<{}>", name)
    } else {
        value.to_string()
    }
}
