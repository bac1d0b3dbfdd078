//! SQLite repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder, SqlErr,
    TransactionTrait,
};

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// Blog post repository over a SeaORM connection.
pub struct SqliteBlogPostRepository {
    db: Arc<DbConn>,
}

impl SqliteBlogPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BlogPostRepository for SqliteBlogPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        tracing::debug!(count = models.len(), "Loaded blog posts");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let title = post.title.clone();
        let txn = self.db.begin().await.map_err(query_error)?;

        let active_model: blog_post::ActiveModel = post.into();
        match active_model.insert(&txn).await {
            Ok(model) => {
                txn.commit().await.map_err(query_error)?;
                tracing::debug!(post_id = model.id, "Inserted blog post");
                Ok(model.into())
            }
            Err(err) => {
                txn.rollback().await.map_err(query_error)?;
                if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
                    tracing::debug!(%detail, "Unique constraint rejected blog post");
                    return Err(RepoError::DuplicateKey {
                        field: "title",
                        value: title,
                    });
                }
                Err(query_error(err))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Deleted blog post");
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }
}
