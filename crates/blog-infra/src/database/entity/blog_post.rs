//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author: Option<String>,
    pub img_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for blog_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            date: model.date,
            body: model.body,
            author: model.author,
            img_url: model.img_url,
        }
    }
}

/// Conversion from a new Domain post to SeaORM ActiveModel; the id is left
/// to the database.
impl From<blog_core::domain::NewBlogPost> for ActiveModel {
    fn from(post: blog_core::domain::NewBlogPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            date: Set(post.date),
            body: Set(post.body),
            author: Set(post.author),
            img_url: Set(post.img_url),
        }
    }
}
