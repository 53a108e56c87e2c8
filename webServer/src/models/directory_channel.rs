#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryChannel {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub platform_name: String,
    pub description: Option<String>,
    pub mode: String,
    pub line_count: Option<u64>,
    pub byte_length: Option<u64>,
}

impl DirectoryChannel {
    pub const DISCORD: &'static str = "Discord";

    pub fn is_discord(&self) -> bool {
        self.platform_name == Self::DISCORD
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|description| !description.is_empty())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct DirectoryListResponse {
    pub data: Vec<DirectoryChannel>,
}
