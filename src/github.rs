//! Payload records for the webhook events hookserve decodes.
//!
//! Only the fields consumers commonly need are modelled. Unknown fields are
//! ignored, and optional or absent values decode to `None` or empty lists.

use crate::reference::Reference;

/// An account as it appears in `sender`, `owner` and `pusher` objects.
///
/// Push payloads describe owners and pushers by name and email, while most
/// other payloads only carry `login` and `id`, so everything is lenient here.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Commit author or committer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: User,
    #[serde(default)]
    pub private: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub default_branch: Option<String>,
    pub master_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    pub id: String,
    pub tree_id: String,
    #[serde(default)]
    pub distinct: bool,
    pub message: String,
    pub timestamp: String,
    pub url: Option<String>,
    pub author: Author,
    pub committer: Author,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub number: u64,
    pub state: String,
    #[serde(default)]
    pub locked: bool,
    pub body: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub merged_at: Option<String>,
    pub merge_commit_sha: Option<String>,
    pub changed_files: Option<u64>,
}

/// The webhook configuration a ping was sent for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hook {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Branch,
    Tag,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub reference: Reference,
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub forced: bool,
    pub base_ref: Option<Reference>,
    #[serde(default)]
    pub compare: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    pub head_commit: Option<Commit>,
    pub repository: Repository,
    #[serde(default)]
    pub pusher: User,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: u64,
}

/// Pings for organization and GitHub App hooks carry no repository.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PingEvent {
    pub zen: String,
    pub hook_id: u64,
    pub hook: Hook,
    #[serde(default)]
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub sender: User,
}

/// Ref names in create and delete payloads are short (`main`, `v1.0`), with
/// `ref_type` telling branches and tags apart.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEvent {
    #[serde(rename = "ref")]
    pub reference: Reference,
    pub ref_type: RefType,
    pub master_branch: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub pusher_type: String,
    pub repository: Repository,
    pub sender: User,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteEvent {
    #[serde(rename = "ref")]
    pub reference: Reference,
    pub ref_type: RefType,
    #[serde(default)]
    pub pusher_type: String,
    pub repository: Repository,
    pub sender: User,
}
