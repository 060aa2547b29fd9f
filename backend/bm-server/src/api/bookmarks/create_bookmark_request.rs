use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub url: String,
    /// Provisional id generated by the client; becomes the row id
    #[serde(default)]
    pub id: Option<String>,
}
