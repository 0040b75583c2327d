use scriptorium_core::Page;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CreateWorkflowRequest, UpdateWorkflowRequest, Workflow, WorkflowListParams};
use crate::ApiClient;

impl ApiClient {
    pub async fn list_workflows(&self, params: &WorkflowListParams) -> Result<Page<Workflow>> {
        self.get_with("/workflows", params).await
    }

    /// Fetch one workflow; the endpoint wraps it as `{ workflow }`
    pub async fn get_workflow(&self, id: &str) -> Result<Workflow> {
        #[derive(Deserialize)]
        struct Resp {
            workflow: Workflow,
        }

        let resp: Resp = self.get(&format!("/workflows/{id}")).await?;
        Ok(resp.workflow)
    }

    pub async fn create_workflow(&self, req: &CreateWorkflowRequest) -> Result<Workflow> {
        self.post("/workflows", req).await
    }

    pub async fn update_workflow(&self, id: &str, req: &UpdateWorkflowRequest) -> Result<Workflow> {
        self.put(&format!("/workflows/{id}"), req).await
    }

    pub async fn delete_workflow(&self, id: &str) -> Result<()> {
        self.delete::<IgnoredAny>(&format!("/workflows/{id}")).await.map(drop)
    }

    pub async fn batch_delete_workflows(&self, ids: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct Req<'a> {
            ids: &'a [String],
        }

        self.delete_with::<_, IgnoredAny>("/workflows/batch", &Req { ids })
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::ApiClient;
    use crate::types::WorkflowStatus;

    #[tokio::test]
    async fn get_workflow_unwraps_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/workflows/wf-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "msg": "ok",
                "data": {"workflow": {
                    "id": "wf-1",
                    "name": "Nightly",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z",
                    "status": "draft"
                }}
            })))
            .mount(&server)
            .await;

        let client = ApiClient::builder(Url::parse(&format!("{}/api/v1", server.uri())).unwrap())
            .build()
            .unwrap();
        let workflow = client.get_workflow("wf-1").await.unwrap();

        assert_eq!(workflow.name, "Nightly");
        assert_eq!(workflow.status, WorkflowStatus::Draft);
        assert!(workflow.nodes.is_empty());
    }

    #[tokio::test]
    async fn batch_delete_sends_ids() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/workflows/batch"))
            .and(body_json(json!({"ids": ["a", "b"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1, "msg": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::builder(Url::parse(&format!("{}/api/v1", server.uri())).unwrap())
            .build()
            .unwrap();

        client
            .batch_delete_workflows(&["a".to_owned(), "b".to_owned()])
            .await
            .unwrap();
    }
}
