use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Log in and store the bearer token
    Login(LoginArgs),
    /// Remove the stored token
    Logout,
    /// Show who is logged in and until when
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, requires = "password", required_unless_present = "with_token")]
    pub email: Option<String>,

    /// Account password
    #[arg(long, requires = "email")]
    pub password: Option<String>,

    /// Store an existing bearer token instead of logging in
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub with_token: Option<String>,
}
