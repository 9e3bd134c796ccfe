use clap::Subcommand;

/// Report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Create or replace the search embedding of a report
    Embed {
        /// Report id
        report_id: i64,

        /// Report text to embed
        #[arg(long)]
        content: String,

        /// Optional subject label
        #[arg(long)]
        subject: Option<String>,
    },
}
