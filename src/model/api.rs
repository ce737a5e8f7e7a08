use serde::{Deserialize, Serialize};

/// Body of every error response: `{"message": <string>}`.
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

/// Body of the vote-adjustment PATCH endpoints. The delta may be negative;
/// anything that is not exactly an integer under the `inc_votes` key is a
/// Bad Request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncVotesBody {
    pub inc_votes: i32,
}
