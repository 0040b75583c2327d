use anyhow::Context as _;
use scriptorium_client::{
    ApiClient, ChapterListParams, CreateProjectRequest, CreateReleaseOrderRequest, CredentialStore,
    NovelListParams, ProjectListParams, ReleaseOrderListParams, ReviewDecision, UpdateProjectRequest,
    WorkflowListParams,
};
use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;

use crate::args::{Command, Decision, NovelCommand, ProjectCommand, ReleaseOrderCommand, WorkflowCommand};

/// Run one command; `Some` holds output for stdout
pub async fn run(
    client: &ApiClient,
    credentials: &dyn CredentialStore,
    command: Command,
) -> anyhow::Result<Option<Value>> {
    match command {
        Command::Login { token } => {
            credentials
                .store_token(SecretString::from(token))
                .context("failed to store access token")?;
            tracing::info!("access token stored");
            Ok(None)
        }
        Command::Logout => {
            credentials.clear_token();
            tracing::info!("access token cleared");
            Ok(None)
        }
        Command::Projects(cmd) => projects(client, cmd).await,
        Command::Workflows(cmd) => workflows(client, cmd).await,
        Command::Novels(cmd) => novels(client, cmd).await,
        Command::ReleaseOrders(cmd) => release_orders(client, cmd).await,
    }
}

async fn projects(client: &ApiClient, cmd: ProjectCommand) -> anyhow::Result<Option<Value>> {
    match cmd {
        ProjectCommand::List {
            page,
            size,
            status,
            keyword,
        } => {
            let params = ProjectListParams {
                page,
                size,
                status: status.map(Into::into),
                keyword,
            };
            output(client.list_projects(&params).await?)
        }
        ProjectCommand::Get { id } => output(client.get_project(&id).await?),
        ProjectCommand::Create { name, desc } => {
            output(client.create_project(&CreateProjectRequest { name, desc }).await?)
        }
        ProjectCommand::Update {
            id,
            name,
            desc,
            status,
        } => {
            let req = UpdateProjectRequest {
                name,
                desc,
                status: status.map(Into::into),
            };
            output(client.update_project(&id, &req).await?)
        }
        ProjectCommand::Delete { id } => {
            client.delete_project(&id).await?;
            done("project deleted", &id)
        }
    }
}

async fn workflows(client: &ApiClient, cmd: WorkflowCommand) -> anyhow::Result<Option<Value>> {
    match cmd {
        WorkflowCommand::List {
            page,
            page_size,
            query,
            status,
        } => {
            let params = WorkflowListParams {
                page,
                page_size,
                query,
                status: status.map(Into::into),
            };
            output(client.list_workflows(&params).await?)
        }
        WorkflowCommand::Get { id } => output(client.get_workflow(&id).await?),
        WorkflowCommand::Delete { id } => {
            client.delete_workflow(&id).await?;
            done("workflow deleted", &id)
        }
    }
}

async fn novels(client: &ApiClient, cmd: NovelCommand) -> anyhow::Result<Option<Value>> {
    match cmd {
        NovelCommand::List {
            page,
            page_size,
            title,
            author,
            category,
            status,
        } => {
            let params = NovelListParams {
                page,
                page_size,
                title,
                author,
                category,
                tags: None,
                status: status.map(Into::into),
            };
            output(client.list_novels(&params).await?)
        }
        NovelCommand::Get { id } => output(client.get_novel(&id).await?),
        NovelCommand::SetStatus { id, status } => output(client.update_novel_status(&id, status.into()).await?),
        NovelCommand::Delete { ids } => match ids.as_slice() {
            [id] => {
                client.delete_novel(id).await?;
                done("novel deleted", id)
            }
            _ => output(client.batch_delete_novels(&ids).await?),
        },
        NovelCommand::Chapters { id, page, page_size } => {
            let params = ChapterListParams { page, page_size };
            output(client.list_chapters(&id, &params).await?)
        }
    }
}

async fn release_orders(client: &ApiClient, cmd: ReleaseOrderCommand) -> anyhow::Result<Option<Value>> {
    match cmd {
        ReleaseOrderCommand::List {
            page,
            page_size,
            status,
            project_id,
            keyword,
        } => {
            let params = ReleaseOrderListParams {
                page,
                page_size,
                status: status.map(Into::into),
                project_id,
                keyword,
                created_by: None,
            };
            output(client.list_release_orders(&params).await?)
        }
        ReleaseOrderCommand::Get { id } => output(client.get_release_order(&id).await?),
        ReleaseOrderCommand::Create { name, project_id, desc } => {
            let req = CreateReleaseOrderRequest { name, desc, project_id };
            output(client.create_release_order(&req).await?)
        }
        ReleaseOrderCommand::Submit { id } => {
            client.submit_release_order(&id).await?;
            done("release order submitted", &id)
        }
        ReleaseOrderCommand::Review { id, decision, comment } => {
            let decision = ReviewDecision {
                approved: decision == Decision::Approve,
                comment,
            };
            client.review_release_order(&id, &decision).await?;
            done("release order reviewed", &id)
        }
        ReleaseOrderCommand::Execute { id } => {
            client.execute_release(&id).await?;
            done("release started", &id)
        }
        ReleaseOrderCommand::Delete { id } => {
            client.delete_release_order(&id).await?;
            done("release order deleted", &id)
        }
    }
}

fn output<T: Serialize>(value: T) -> anyhow::Result<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

#[allow(clippy::unnecessary_wraps)]
fn done(what: &str, id: &str) -> anyhow::Result<Option<Value>> {
    tracing::info!(id, "{what}");
    Ok(None)
}
