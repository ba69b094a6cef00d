//! Command-line surface for `busybee-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use busybee::api::{CommentId, PostId, Privileges, UserId};
use busybee::config::SettingsOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "busybee-cli", version, about = "Busy Bees panel CLI", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsOverrides,

    /// Path to file containing the security token (takes precedence over env)
    #[arg(long, env = "BUSYBEE_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Security token from env (CLI flag intentionally disabled to avoid shell history leaks)
    #[arg(hide = true, env = "BUSYBEE_TOKEN")]
    pub token_env: Option<String>,

    /// First name of the signed-in account, shown on new comments
    #[arg(long, env = "BUSYBEE_FIRST_NAME", default_value = "")]
    pub author_first_name: String,

    /// Last name of the signed-in account, shown on new comments
    #[arg(long, env = "BUSYBEE_LAST_NAME", default_value = "")]
    pub author_last_name: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// User account management
    Users(UsersArgs),
    /// Settings of the signed-in account
    Settings(SettingsArgs),
    /// Post management
    Posts(PostsArgs),
    /// Comment management
    Comments(CommentsArgs),
    /// Remembered navigation
    Nav(NavArgs),
    /// Render a relative timestamp
    TimeAgo {
        /// Past instant, unix seconds
        #[arg(long)]
        then: i64,
        /// Current instant, unix seconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,
    },
}

impl Commands {
    /// Whether the command talks to the panel backend.
    pub fn needs_backend(&self) -> bool {
        !matches!(self, Commands::Nav(_) | Commands::TimeAgo { .. })
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PrivilegesArg {
    Parent,
    Moderator,
    Admin,
}

impl From<PrivilegesArg> for Privileges {
    fn from(value: PrivilegesArg) -> Self {
        match value {
            PrivilegesArg::Parent => Privileges::Parent,
            PrivilegesArg::Moderator => Privileges::Moderator,
            PrivilegesArg::Admin => Privileges::Admin,
        }
    }
}

impl fmt::Display for PrivilegesArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PrivilegesArg::Parent => "parent",
            PrivilegesArg::Moderator => "moderator",
            PrivilegesArg::Admin => "admin",
        };
        f.write_str(value)
    }
}

#[derive(Args, Debug, Clone)]
pub struct UserFieldsArgs {
    #[arg(long)]
    pub email: String,
    /// Leave empty to keep the current password
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long, default_value_t = PrivilegesArg::Parent)]
    pub privileges: PrivilegesArg,
}

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersCmd,
}

#[derive(Subcommand, Debug)]
pub enum UsersCmd {
    /// Update an existing user
    Update {
        #[arg(long)]
        id: UserId,
        #[command(flatten)]
        fields: UserFieldsArgs,
    },
    /// Create a user
    Create {
        #[command(flatten)]
        fields: UserFieldsArgs,
    },
    /// Delete a user
    Delete {
        #[arg(long)]
        id: UserId,
    },
}

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Update the signed-in account
    Update {
        #[arg(long)]
        email: String,
        /// Email currently on file; a different --email triggers verification
        #[arg(long)]
        current_email: Option<String>,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// Create a post with a thumbnail and optional gallery images
    New {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        thumbnail: Option<PathBuf>,
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Replace a post's title and description
    Update {
        #[arg(long)]
        id: PostId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a post
    Delete {
        #[arg(long)]
        id: PostId,
    },
}

#[derive(Parser, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub action: CommentsCmd,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCmd {
    /// Comment on a post
    Add {
        #[arg(long)]
        post_id: PostId,
        #[arg(long)]
        text: String,
    },
    /// Delete a comment from a post
    Delete {
        #[arg(long)]
        post_id: PostId,
        #[arg(long)]
        comment_id: CommentId,
    },
}

#[derive(Parser, Debug)]
pub struct NavArgs {
    #[command(subcommand)]
    pub action: NavCmd,
}

#[derive(Subcommand, Debug)]
pub enum NavCmd {
    /// Record a page load and print its back target
    Visit { path: String },
    /// Print the remembered last page
    Back,
}
