use async_trait::async_trait;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Storage of blog posts.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// All posts, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError>;

    /// Insert a new post atomically.
    ///
    /// A title that already exists yields [`RepoError::DuplicateKey`] and
    /// leaves the table unchanged.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Delete a post by its id, or [`RepoError::NotFound`] if there is none.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
