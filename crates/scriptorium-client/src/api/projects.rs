use scriptorium_core::Page;
use serde::de::IgnoredAny;

use crate::error::Result;
use crate::types::{CreateProjectRequest, CreatedId, Project, ProjectListParams, UpdateProjectRequest};
use crate::ApiClient;

impl ApiClient {
    /// List projects, one page at a time
    pub async fn list_projects(&self, params: &ProjectListParams) -> Result<Page<Project>> {
        self.get_with("/projects", params).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.get(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, req: &CreateProjectRequest) -> Result<CreatedId> {
        self.post("/projects", req).await
    }

    pub async fn update_project(&self, id: &str, req: &UpdateProjectRequest) -> Result<Project> {
        self.put(&format!("/projects/{id}"), req).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.delete::<IgnoredAny>(&format!("/projects/{id}")).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::types::ProjectStatus;
    use crate::{ApiClient, ErrorCode, MemoryCredentialStore};

    use super::*;

    fn test_client(server: &MockServer) -> ApiClient {
        ApiClient::builder(Url::parse(&format!("{}/api/v1", server.uri())).unwrap())
            .credentials(Arc::new(MemoryCredentialStore::with_token("t")))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn list_projects_decodes_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .and(query_param("page", "1"))
            .and(query_param("size", "20"))
            .and(query_param("status", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "msg": "ok",
                "data": {
                    "total": 1,
                    "list": [{"id": "p-1", "name": "Tides", "desc": "", "status": 1}]
                }
            })))
            .mount(&server)
            .await;

        let params = ProjectListParams {
            status: Some(ProjectStatus::Serializing),
            ..ProjectListParams::default()
        };
        let page = test_client(&server).list_projects(&params).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].name, "Tides");
        assert_eq!(page.list[0].status, ProjectStatus::Serializing);
    }

    #[tokio::test]
    async fn create_project_sends_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/projects"))
            .and(body_json(json!({"name": "Tides", "desc": "A sea saga"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "msg": "ok",
                "data": {"id": "p-9"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = test_client(&server)
            .create_project(&CreateProjectRequest {
                name: "Tides".to_owned(),
                desc: "A sea saga".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, "p-9");
    }

    #[tokio::test]
    async fn delete_succeeds_whatever_data_comes_back() {
        for data in [json!(true), json!({})] {
            let server = MockServer::start().await;

            Mock::given(method("DELETE"))
                .and(path("/api/v1/projects/1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "code": 1,
                    "msg": "ok",
                    "data": data
                })))
                .expect(1)
                .mount(&server)
                .await;

            test_client(&server).delete_project("1").await.unwrap();
        }
    }

    #[tokio::test]
    async fn missing_project_is_business_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/projects/404"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 3000,
                "msg": "project 404 does not exist",
                "data": null
            })))
            .mount(&server)
            .await;

        let err = test_client(&server).get_project("404").await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::PROJECT_NOT_FOUND);
        assert_eq!(err.path(), Some("/projects/404"));
    }
}
