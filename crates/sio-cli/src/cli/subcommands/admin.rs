use clap::Subcommand;

/// Admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Re-embed every report of a student
    Reindex {
        /// Student id
        student_id: i64,
    },
    /// Delete a student's embeddings, then re-embed every report
    PurgeAndReindex {
        /// Student id
        student_id: i64,
    },
}
