use actix_web::{dev::ServerHandle, http::StatusCode, web, App, HttpResponse, HttpServer};
use post_wall::{
    config::api::ApiConfig,
    modules::post::{
        post_client::PostClient,
        post_dtos::{CreatePostDTO, ListPostsDTO, PostDTO, PostId},
    },
};
use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering},
        Mutex,
    },
};

/// In-memory state of the fake posts API.
///
/// `*_status` fields hold `0` for normal behaviour, or the HTTP status the route must fail with.
/// `*_success` fields hold the status a successful create or delete answers with.
pub struct BackendState {
    pub posts: Mutex<Vec<PostDTO>>,
    next_id: Mutex<PostId>,
    pub list_requests: AtomicUsize,
    pub create_requests: AtomicUsize,
    pub delete_requests: AtomicUsize,
    pub list_status: AtomicU16,
    pub create_status: AtomicU16,
    pub delete_status: AtomicU16,
    pub create_success: AtomicU16,
    pub delete_success: AtomicU16,
    pub malformed_list: AtomicBool,
    pub malformed_create: AtomicBool,
}

impl BackendState {
    fn with_posts(posts: Vec<PostDTO>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            posts: Mutex::new(posts),
            next_id: Mutex::new(next_id),
            list_requests: AtomicUsize::new(0),
            create_requests: AtomicUsize::new(0),
            delete_requests: AtomicUsize::new(0),
            list_status: AtomicU16::new(0),
            create_status: AtomicU16::new(0),
            delete_status: AtomicU16::new(0),
            create_success: AtomicU16::new(201),
            delete_success: AtomicU16::new(204),
            malformed_list: AtomicBool::new(false),
            malformed_create: AtomicBool::new(false),
        }
    }
}

fn forced_status(status: &AtomicU16) -> Option<HttpResponse> {
    match status.load(Ordering::SeqCst) {
        0 => None,
        code => Some(HttpResponse::build(StatusCode::from_u16(code).unwrap()).finish()),
    }
}

async fn list_posts(state: web::Data<BackendState>) -> HttpResponse {
    state.list_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = forced_status(&state.list_status) {
        return response;
    }
    if state.malformed_list.load(Ordering::SeqCst) {
        return HttpResponse::Ok()
            .content_type("application/json")
            .body("{\"posts\": [");
    }

    let posts = state.posts.lock().unwrap().clone();
    HttpResponse::Ok().json(ListPostsDTO { posts })
}

async fn create_post(
    state: web::Data<BackendState>,
    body: web::Json<CreatePostDTO>,
) -> HttpResponse {
    state.create_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = forced_status(&state.create_status) {
        return response;
    }
    if body.title.is_empty() || body.description.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Title and description are required"
        }));
    }

    let mut next_id = state.next_id.lock().unwrap();
    let post = PostDTO {
        id: *next_id,
        title: body.title.clone(),
        description: body.description.clone(),
    };
    *next_id += 1;
    state.posts.lock().unwrap().push(post.clone());

    if state.malformed_create.load(Ordering::SeqCst) {
        return HttpResponse::Created()
            .content_type("application/json")
            .body(format!("{{\"title\": \"{}\"}}", post.title));
    }

    let status = StatusCode::from_u16(state.create_success.load(Ordering::SeqCst)).unwrap();
    HttpResponse::build(status).json(post)
}

async fn delete_post(state: web::Data<BackendState>, path: web::Path<PostId>) -> HttpResponse {
    state.delete_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(response) = forced_status(&state.delete_status) {
        return response;
    }

    let id = path.into_inner();
    let mut posts = state.posts.lock().unwrap();
    let before = posts.len();
    posts.retain(|post| post.id != id);

    if posts.len() == before {
        HttpResponse::NotFound().json(serde_json::json!({ "error": "Post not found" }))
    } else if state.delete_success.load(Ordering::SeqCst) == 204 {
        HttpResponse::NoContent().finish()
    } else {
        let status = StatusCode::from_u16(state.delete_success.load(Ordering::SeqCst)).unwrap();
        HttpResponse::build(status).json(serde_json::json!({ "message": "Post deleted" }))
    }
}

/// Fake of the SQLite-backed posts API, served on a random local port.
///
/// # Examples
///
/// ```rust
/// let backend = MockBackend::start_with(PostModels::posts_model(&[1, 2])).await;
/// let client = backend.client();
/// ```
pub struct MockBackend {
    pub state: web::Data<BackendState>,
    pub config: ApiConfig,
    handle: ServerHandle,
}

impl MockBackend {
    pub async fn start() -> Self {
        MockBackend::start_with(Vec::new()).await
    }

    pub async fn start_with(posts: Vec<PostDTO>) -> Self {
        let state = web::Data::new(BackendState::with_posts(posts));
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new().app_data(app_state.clone()).service(
                web::scope("/api")
                    .route("/posts", web::get().to(list_posts))
                    .route("/posts", web::post().to(create_post))
                    .route("/posts/{id}", web::delete().to(delete_post)),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let address = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let config = ApiConfig::new(&format!("http://{}/api", address)).unwrap();

        Self {
            state,
            config,
            handle,
        }
    }

    pub fn client(&self) -> PostClient {
        local_client(self.config.clone())
    }

    pub fn posts(&self) -> Vec<PostDTO> {
        self.state.posts.lock().unwrap().clone()
    }

    pub fn insert(&self, post: PostDTO) {
        self.state.posts.lock().unwrap().push(post);
    }

    pub fn fail_list_with(&self, status: u16) {
        self.state.list_status.store(status, Ordering::SeqCst);
    }

    pub fn fail_create_with(&self, status: u16) {
        self.state.create_status.store(status, Ordering::SeqCst);
    }

    pub fn fail_delete_with(&self, status: u16) {
        self.state.delete_status.store(status, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.fail_list_with(0);
        self.fail_create_with(0);
        self.fail_delete_with(0);
        self.state.malformed_list.store(false, Ordering::SeqCst);
        self.state.malformed_create.store(false, Ordering::SeqCst);
    }

    pub fn serve_malformed_list(&self) {
        self.state.malformed_list.store(true, Ordering::SeqCst);
    }

    /// Successful creates answer a body without the post id.
    pub fn serve_incomplete_create(&self) {
        self.state.malformed_create.store(true, Ordering::SeqCst);
    }

    pub fn answer_create_with(&self, status: u16) {
        self.state.create_success.store(status, Ordering::SeqCst);
    }

    /// Successful deletes answer `status`; anything but 204 carries a JSON body.
    pub fn answer_delete_with(&self, status: u16) {
        self.state.delete_success.store(status, Ordering::SeqCst);
    }

    pub fn list_requests(&self) -> usize {
        self.state.list_requests.load(Ordering::SeqCst)
    }

    pub fn create_requests(&self) -> usize {
        self.state.create_requests.load(Ordering::SeqCst)
    }

    pub fn delete_requests(&self) -> usize {
        self.state.delete_requests.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Client that never goes through a proxy taken from the environment.
pub fn local_client(config: ApiConfig) -> PostClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    PostClient::with_http(config, http)
}

/// Config pointing at a local port nothing listens on.
pub fn unreachable_config() -> ApiConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    ApiConfig::new(&format!("http://{}/api", address)).unwrap()
}
