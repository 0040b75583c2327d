use scriptorium_core::Page;
use serde::de::IgnoredAny;
use serde::Serialize;

use crate::error::Result;
use crate::types::{
    BatchResult, Chapter, ChapterListParams, CreateNovelRequest, CreatedId, Novel, NovelListParams,
    NovelStatus, SaveChapterRequest, UpdateNovelRequest,
};
use crate::ApiClient;

impl ApiClient {
    pub async fn list_novels(&self, params: &NovelListParams) -> Result<Page<Novel>> {
        self.get_with("/novels/list", params).await
    }

    pub async fn get_novel(&self, id: &str) -> Result<Novel> {
        self.get(&format!("/novels/{id}")).await
    }

    pub async fn create_novel(&self, req: &CreateNovelRequest) -> Result<CreatedId> {
        self.post("/novels/create", req).await
    }

    pub async fn update_novel(&self, id: &str, req: &UpdateNovelRequest) -> Result<()> {
        self.put::<_, IgnoredAny>(&format!("/novels/{id}"), req).await.map(drop)
    }

    pub async fn update_novel_status(&self, id: &str, status: NovelStatus) -> Result<Novel> {
        #[derive(Serialize)]
        struct Req {
            status: NovelStatus,
        }

        self.patch(&format!("/novels/{id}/status"), &Req { status }).await
    }

    pub async fn delete_novel(&self, id: &str) -> Result<()> {
        self.delete::<IgnoredAny>(&format!("/novels/{id}")).await.map(drop)
    }

    /// Delete several novels; the server reports how many went through
    pub async fn batch_delete_novels(&self, ids: &[String]) -> Result<BatchResult> {
        #[derive(Serialize)]
        struct Req<'a> {
            ids: &'a [String],
        }

        self.delete_with("/novels/batch", &Req { ids }).await
    }

    pub async fn list_chapters(&self, novel_id: &str, params: &ChapterListParams) -> Result<Page<Chapter>> {
        self.get_with(&format!("/novels/{novel_id}/chapters/list"), params).await
    }

    /// Create a chapter, or overwrite the one named by `chapter_id`
    pub async fn save_chapter(&self, novel_id: &str, req: &SaveChapterRequest) -> Result<CreatedId> {
        // The backend keys novels numerically in the body
        #[derive(Serialize)]
        struct Req<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            novel_id: Option<u64>,
            #[serde(flatten)]
            chapter: &'a SaveChapterRequest,
        }

        let body = Req {
            novel_id: novel_id.parse().ok(),
            chapter: req,
        };

        self.post(&format!("/novels/{novel_id}/chapters/save"), &body).await
    }
}
