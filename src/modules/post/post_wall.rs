use super::{post_dtos::PostId, post_store::PostStoreState};
use std::fmt;

pub const LOADING_MESSAGE: &str = "Loading posts...";
pub const EMPTY_MESSAGE: &str = "No posts found. Create one above!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRow {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub delete_enabled: bool,
}

/// What the wall shows for a given store snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WallView {
    Loading,
    Empty,
    Posts(Vec<PostRow>),
}

impl WallView {
    /// Builds the view from a snapshot.
    ///
    /// Posts already loaded stay visible during a refetch; the loading message only
    /// replaces an empty list. The wall is not swapped for a full-page loading state
    /// while `loading` is set, so the rows not being deleted keep their enabled
    /// delete controls through the refetch that follows a delete.
    pub fn from_state(state: &PostStoreState) -> Self {
        if state.posts.is_empty() {
            return if state.loading {
                WallView::Loading
            } else {
                WallView::Empty
            };
        }

        WallView::Posts(
            state
                .posts
                .iter()
                .map(|post| PostRow {
                    id: post.id,
                    title: post.title.clone(),
                    description: post.description.clone(),
                    delete_enabled: !state.is_deleting(post.id),
                })
                .collect(),
        )
    }

    pub fn row(&self, id: PostId) -> Option<&PostRow> {
        match self {
            WallView::Posts(rows) => rows.iter().find(|row| row.id == id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            WallView::Posts(rows) => rows.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for WallView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallView::Loading => writeln!(f, "{}", LOADING_MESSAGE),
            WallView::Empty => {
                writeln!(f, "All Posts (0)")?;
                writeln!(f, "{}", EMPTY_MESSAGE)
            }
            WallView::Posts(rows) => {
                writeln!(f, "All Posts ({})", rows.len())?;
                for row in rows {
                    writeln!(f)?;
                    writeln!(f, "  {}", row.title)?;
                    for line in row.description.lines() {
                        writeln!(f, "    {}", line)?;
                    }
                    let control = if row.delete_enabled {
                        "[delete]"
                    } else {
                        "[deleting...]"
                    };
                    writeln!(f, "    ID: {}  {}", row.id, control)?;
                }
                Ok(())
            }
        }
    }
}
