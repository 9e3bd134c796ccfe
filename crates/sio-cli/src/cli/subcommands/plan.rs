use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Study plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Ask the coach for a weekly plan
    Generate(GenerateArgs),
    /// Normalize a saved study-plan response (file or stdin)
    Normalize(NormalizeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Learning goal, e.g. "fractions and decimals in two weeks"
    #[arg(required = true, num_args = 1..)]
    pub goal: Vec<String>,
}

impl GenerateArgs {
    #[must_use]
    pub fn goal(&self) -> String {
        self.goal.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Response body to read; stdin when omitted
    #[arg(long)]
    pub file: Option<PathBuf>,
}
