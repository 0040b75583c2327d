use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use scriptorium_client::{NovelStatus, ProjectStatus, ReleaseOrderStatus, WorkflowStatus};
use scriptorium_config::Environment;

/// Scriptorium admin console
#[derive(Debug, Parser)]
#[command(name = "scriptorium", about = "Manage projects, novels, workflows and releases")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scriptorium.toml", env = "SCRIPTORIUM_CONFIG")]
    pub config: PathBuf,

    /// Override the configured API environment
    #[arg(long, env = "SCRIPTORIUM_ENV")]
    pub env: Option<Environment>,

    /// Log filter directive, e.g. `scriptorium=debug`
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Include error details in failure output
    #[arg(long)]
    pub details: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an access token for later requests
    Login {
        #[arg(long, env = "SCRIPTORIUM_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Forget the stored access token
    Logout,
    #[command(subcommand)]
    Projects(ProjectCommand),
    #[command(subcommand)]
    Workflows(WorkflowCommand),
    #[command(subcommand)]
    Novels(NovelCommand),
    #[command(subcommand)]
    ReleaseOrders(ReleaseOrderCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        #[arg(long, value_enum)]
        status: Option<ProjectStatusArg>,
        #[arg(long)]
        keyword: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        name: String,
        #[arg(long, default_value = "")]
        desc: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ProjectStatusArg>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkflowCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        query: Option<String>,
        #[arg(long, value_enum)]
        status: Option<WorkflowStatusArg>,
    },
    Get {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NovelCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        status: Option<NovelStatusArg>,
    },
    Get {
        id: String,
    },
    /// Change a novel's publishing status
    SetStatus {
        id: String,
        #[arg(value_enum)]
        status: NovelStatusArg,
    },
    Delete {
        /// One id deletes a single novel, several use the batch endpoint
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// List a novel's chapters
    Chapters {
        id: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReleaseOrderCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        #[arg(long, value_enum)]
        status: Option<ReleaseStatusArg>,
        #[arg(long)]
        project_id: Option<String>,
        #[arg(long)]
        keyword: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        name: String,
        #[arg(long)]
        project_id: u64,
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// Send a draft order to review
    Submit {
        id: String,
    },
    Review {
        id: String,
        #[arg(value_enum)]
        decision: Decision,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Publish an approved order
    Execute {
        id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProjectStatusArg {
    Serializing,
    Completed,
}

impl From<ProjectStatusArg> for ProjectStatus {
    fn from(arg: ProjectStatusArg) -> Self {
        match arg {
            ProjectStatusArg::Serializing => Self::Serializing,
            ProjectStatusArg::Completed => Self::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WorkflowStatusArg {
    Draft,
    Active,
    Inactive,
}

impl From<WorkflowStatusArg> for WorkflowStatus {
    fn from(arg: WorkflowStatusArg) -> Self {
        match arg {
            WorkflowStatusArg::Draft => Self::Draft,
            WorkflowStatusArg::Active => Self::Active,
            WorkflowStatusArg::Inactive => Self::Inactive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NovelStatusArg {
    Draft,
    Publishing,
    Completed,
    Paused,
    Deleted,
}

impl From<NovelStatusArg> for NovelStatus {
    fn from(arg: NovelStatusArg) -> Self {
        match arg {
            NovelStatusArg::Draft => Self::Draft,
            NovelStatusArg::Publishing => Self::Publishing,
            NovelStatusArg::Completed => Self::Completed,
            NovelStatusArg::Paused => Self::Paused,
            NovelStatusArg::Deleted => Self::Deleted,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReleaseStatusArg {
    Draft,
    Pending,
    Approved,
    Rejected,
    Releasing,
    Released,
    Failed,
}

impl From<ReleaseStatusArg> for ReleaseOrderStatus {
    fn from(arg: ReleaseStatusArg) -> Self {
        match arg {
            ReleaseStatusArg::Draft => Self::Draft,
            ReleaseStatusArg::Pending => Self::Pending,
            ReleaseStatusArg::Approved => Self::Approved,
            ReleaseStatusArg::Rejected => Self::Rejected,
            ReleaseStatusArg::Releasing => Self::Releasing,
            ReleaseStatusArg::Released => Self::Released,
            ReleaseStatusArg::Failed => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Decision {
    Approve,
    Reject,
}
