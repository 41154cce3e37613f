use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use roster_business::{Role, Status};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse and manage the user directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the built-in demo directory instead of the remote API
    #[arg(long, global = true)]
    pub mock: bool,

    /// Base URL of the users API
    #[arg(long, global = true, env = "ROSTER_API_URL")]
    pub api_url: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of users
    List {
        /// Page to load (1-based)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,

        /// Only show users whose name or email contains this text
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Only show users with this role: admin, user, editor
        #[arg(long, short = 'r')]
        role: Option<Role>,

        /// Only show users with this status: active, inactive, pending
        #[arg(long, short = 's')]
        status: Option<Status>,
    },
    /// Show a single user
    Show {
        /// User ID
        id: u64,
    },
    /// Create a user
    Create {
        #[command(flatten)]
        fields: UserFields,
    },
    /// Update fields of an existing user
    Update {
        /// User ID
        id: u64,

        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: u64,

        /// Page to show after the deletion
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// Role and status breakdown of a page
    Stats {
        /// Page to summarize
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// User fields shared by `create` and `update`.
#[derive(Args, Debug, Default, Clone)]
pub struct UserFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// admin, user or editor
    #[arg(long, short = 'r')]
    pub role: Option<Role>,

    /// active, inactive or pending
    #[arg(long, short = 's')]
    pub status: Option<Status>,
}

impl UserFields {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.avatar.is_none()
            && self.role.is_none()
            && self.status.is_none()
    }
}
