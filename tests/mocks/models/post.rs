use post_wall::modules::post::post_dtos::{CreatePostDTO, PostDTO, PostId};

/// Models for Post
///
/// # Functions
///
/// - `simple_post_model()` - Body of a valid create request.
/// - `complete_post_model(id)` - A post as the backend stores it.
/// - `posts_model(ids)` - One complete post per id, in the given order.
pub struct PostModels {}

impl PostModels {
    pub fn simple_post_model() -> CreatePostDTO {
        CreatePostDTO::new("A", "B")
    }

    pub fn complete_post_model(id: PostId) -> PostDTO {
        PostDTO {
            id,
            title: format!("Post {}", id),
            description: format!("Description of post {}", id),
        }
    }

    pub fn posts_model(ids: &[PostId]) -> Vec<PostDTO> {
        ids.iter()
            .map(|id| PostModels::complete_post_model(*id))
            .collect()
    }
}
