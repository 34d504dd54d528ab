use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeProject {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub previews: Vec<PreviewItem>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub related: Vec<RelatedProject>,
}

/// One media file of a project's rotating preview display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewItem {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProject {
    pub slug: String,
    pub name: String,
}
