use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250810_000001_create_topic_table::Topic, m20250810_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::ArticleId))
                    .col(string(Article::Title))
                    .col(string(Article::Topic))
                    .col(string(Article::Author))
                    .col(text(Article::Body))
                    .col(
                        timestamp(Article::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Article::Votes).default(0))
                    .col(string(Article::ArticleImgUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_topic")
                            .from(Article::Table, Article::Topic)
                            .to(Topic::Table, Topic::Slug)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_author")
                            .from(Article::Table, Article::Author)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    ArticleImgUrl,
}
