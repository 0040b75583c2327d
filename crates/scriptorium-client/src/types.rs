use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Identifier returned by create endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
}

/// Outcome of a batch delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub success: u64,
    pub failed: u64,
}

// -- Projects --

/// Project lifecycle, numeric on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ProjectStatus {
    Serializing = 1,
    Completed = 2,
}

/// A writing project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub status: ProjectStatus,
}

/// Query for the project list
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListParams {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for ProjectListParams {
    fn default() -> Self {
        Self {
            page: 1,
            size: 20,
            status: None,
            keyword: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub desc: String,
}

/// Partial project update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

// -- Workflows --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Draft,
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowNodeType {
    Start,
    Process,
    Decision,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Step in a workflow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: WorkflowNodeType,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Edge between two workflow nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConnection {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A release workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub connections: Vec<WorkflowConnection>,
    pub created_at: String,
    pub updated_at: String,
    pub status: WorkflowStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkflowRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWorkflowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<WorkflowNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<WorkflowConnection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
}

// -- Novels --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    Draft,
    /// Being serialized
    Publishing,
    Completed,
    Paused,
    Deleted,
}

/// A novel and its counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: NovelStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub word_count: u64,
    #[serde(default)]
    pub chapter_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_chapter_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NovelListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-separated tag values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NovelStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateNovelRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNovelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NovelStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    Draft,
    Published,
}

/// A chapter of a novel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub novel_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub word_count: u64,
    pub chapter_number: u32,
    pub status: ChapterStatus,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Paging for a novel's chapters
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ChapterListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Create a chapter, or overwrite one when `chapter_id` is set
#[derive(Debug, Clone, Serialize)]
pub struct SaveChapterRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
}

// -- Release orders --

/// Release order lifecycle, numeric on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ReleaseOrderStatus {
    Draft = 0,
    Pending = 1,
    Approved = 2,
    Rejected = 3,
    Releasing = 4,
    Released = 5,
    Failed = 6,
}

/// Project summary embedded in a release order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub status: u8,
    pub created_at: String,
    pub updated_at: String,
}

/// A request to publish a project's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseOrder {
    pub id: u64,
    pub project_info: ProjectInfo,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub status: ReleaseOrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReleaseOrderListParams {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Default for ReleaseOrderListParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            status: None,
            project_id: None,
            keyword: None,
            created_by: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateReleaseOrderRequest {
    pub name: String,
    pub desc: String,
    pub project_id: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReleaseOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseOrderStatus>,
}

/// Reviewer decision on a submitted release order
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDecision {
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_statuses_use_wire_values() {
        assert_eq!(serde_json::to_value(ProjectStatus::Completed).unwrap(), json!(2));
        assert_eq!(serde_json::to_value(ReleaseOrderStatus::Rejected).unwrap(), json!(3));

        let status: ReleaseOrderStatus = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(status, ReleaseOrderStatus::Released);
    }

    #[test]
    fn workflow_uses_camel_case_fields() {
        let workflow: Workflow = serde_json::from_value(json!({
            "id": "wf-1",
            "name": "Weekly release",
            "nodes": [{
                "id": "n1",
                "name": "Start",
                "type": "start",
                "position": {"x": 0.0, "y": 10.5}
            }],
            "connections": [{"id": "c1", "sourceNodeId": "n1", "targetNodeId": "n2"}],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(workflow.nodes[0].node_type, WorkflowNodeType::Start);
        assert_eq!(workflow.connections[0].target_node_id, "n2");
        assert_eq!(workflow.status, WorkflowStatus::Active);
    }

    #[test]
    fn partial_update_omits_unset_fields() {
        let update = UpdateProjectRequest {
            status: Some(ProjectStatus::Completed),
            ..UpdateProjectRequest::default()
        };

        assert_eq!(serde_json::to_value(update).unwrap(), json!({"status": 2}));
    }
}
