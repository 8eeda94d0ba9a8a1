use serde::{Deserialize, Serialize};
use validator::Validate;

/// Server-assigned post identifier.
pub type PostId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PostDTO {
    pub id: PostId,
    pub title: String,
    pub description: String,
}

/// Body of `POST /posts`. The backend assigns the id.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatePostDTO {
    #[validate(length(min = 1, message = "Title is required."))]
    #[serde(default)]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required."))]
    #[serde(default)]
    pub description: String,
}

impl CreatePostDTO {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Envelope returned by `GET /posts`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListPostsDTO {
    pub posts: Vec<PostDTO>,
}
