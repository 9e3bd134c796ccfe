use clap::Subcommand;

use super::subcommands::{
    AdminCommands, PlanCommands, ReportCommands, SearchArgs, SessionCommands,
};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and inspect the stored session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Weekly study plans from the AI coach
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Semantic search over your report history
    Search(SearchArgs),
    /// Report embedding maintenance
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Administrator tools (requires the admin role)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
