use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            username: model.username,
            name: model.name,
            avatar_url: model.avatar_url,
        }
    }
}
