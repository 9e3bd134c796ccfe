use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Number of results (defaults to `general.default_search_k`)
    #[arg(short)]
    pub k: Option<u32>,
}
