use axum::{
    routing::{get, patch},
    Router,
};

use crate::{
    controller::{api, articles, comments, topics, users},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api::get_endpoints))
        .route("/api/topics", get(topics::get_topics).post(topics::post_topic))
        .route(
            "/api/articles",
            get(articles::get_articles).post(articles::post_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article_by_id)
                .patch(articles::patch_article_votes)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::get_comments_by_article).post(comments::post_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comments::patch_comment_votes).delete(comments::delete_comment),
        )
        .route("/api/users", get(users::get_users))
        .route("/api/users/{username}", get(users::get_user_by_username))
        .fallback(api::path_not_found)
}
