use crate::cli::subcommands::{AdminCommands, PlanCommands, ReportCommands, SessionCommands};
use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Session { action } => match action {
            SessionCommands::Login(args) => commands::session::login::handle(&args, ctx, flags).await,
            SessionCommands::Logout => commands::session::logout::handle(ctx, flags),
            SessionCommands::Status => commands::session::status::handle(ctx, flags),
        },
        Commands::Plan { action } => match action {
            PlanCommands::Generate(args) => commands::plan::generate::handle(&args, ctx, flags).await,
            PlanCommands::Normalize(args) => commands::plan::normalize::handle(&args, flags),
        },
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Report { action } => match action {
            ReportCommands::Embed {
                report_id,
                content,
                subject,
            } => commands::report::embed(report_id, content, subject, ctx, flags).await,
        },
        Commands::Admin { action } => match action {
            AdminCommands::Reindex { student_id } => {
                commands::admin::reindex(student_id, ctx, flags).await
            }
            AdminCommands::PurgeAndReindex { student_id } => {
                commands::admin::purge_and_reindex(student_id, ctx, flags).await
            }
        },
    }
}
