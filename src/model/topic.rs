use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TopicDto {
    pub slug: String,
    pub description: Option<String>,
}

impl From<entity::topic::Model> for TopicDto {
    fn from(model: entity::topic::Model) -> Self {
        Self {
            slug: model.slug,
            description: model.description,
        }
    }
}

/// Body of `POST /api/topics`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTopicBody {
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}
