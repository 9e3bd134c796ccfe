use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sio` binary.
#[derive(Debug, Parser)]
#[command(name = "sio", version, about = "SoundItOut - study coach client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this bearer token instead of the stored one
    #[arg(long, global = true)]
    pub token: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            token: self.token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AdminCommands, PlanCommands, SessionCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sio", "--format", "text", "--verbose", "session", "status"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Session {
                action: SessionCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sio", "session", "logout", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Session {
                action: SessionCommands::Logout
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sio", "--format", "xml", "session", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_requires_credentials_pair_or_token() {
        assert!(Cli::try_parse_from(["sio", "session", "login", "--email", "a@b.c"]).is_err());
        assert!(
            Cli::try_parse_from(["sio", "session", "login", "--with-token", "a.b.c", "--email", "x"])
                .is_err()
        );
        assert!(
            Cli::try_parse_from([
                "sio", "session", "login", "--email", "a@b.c", "--password", "pw"
            ])
            .is_ok()
        );
        assert!(Cli::try_parse_from(["sio", "session", "login", "--with-token", "a.b.c"]).is_ok());
    }

    #[test]
    fn plan_generate_joins_goal_words() {
        let cli = Cli::try_parse_from(["sio", "plan", "generate", "fractions", "and", "decimals"])
            .expect("cli should parse");
        let Commands::Plan {
            action: PlanCommands::Generate(args),
        } = cli.command
        else {
            panic!("expected plan generate");
        };
        assert_eq!(args.goal(), "fractions and decimals");
    }

    #[test]
    fn search_k_is_optional() {
        let cli = Cli::try_parse_from(["sio", "search", "long division"]).expect("cli should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.query, "long division");
        assert_eq!(args.k, None);

        let cli = Cli::try_parse_from(["sio", "search", "reading", "-k", "3"])
            .expect("cli should parse");
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.k, Some(3));
    }

    #[test]
    fn admin_commands_take_student_id() {
        let cli = Cli::try_parse_from(["sio", "admin", "purge-and-reindex", "7"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::PurgeAndReindex { student_id: 7 }
            }
        ));
        assert!(Cli::try_parse_from(["sio", "admin", "reindex", "seven"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["sio", "--token", "h.p.s", "session", "status"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.token.as_deref(), Some("h.p.s"));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
