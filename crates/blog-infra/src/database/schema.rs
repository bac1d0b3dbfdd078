use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::blog_post;

/// Create the `blog_posts` table if it does not exist yet.
///
/// The schema is derived from the entity and is never altered afterwards.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(blog_post::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::info!(table = "blog_posts", "Database schema ready");

    Ok(())
}
