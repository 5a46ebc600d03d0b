use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `iamc` binary.
#[derive(Debug, Parser)]
#[command(name = "iamc", version, about = "iamc - IAM and Events admin console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Page size for list views
    #[arg(short, long, global = true)]
    pub limit: Option<u64>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{AuthCommands, GroupCommands, UserCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "iamc", "--format", "json", "--limit", "25", "--verbose", "auth", "status",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(25));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["iamc", "users", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Users {
                action: UserCommands::List(_)
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["iamc", "--format", "xml", "users", "list"]).is_err());
    }

    #[test]
    fn create_group_name_is_optional() {
        let cli = Cli::try_parse_from(["iamc", "groups", "create"]).expect("cli should parse");
        let Commands::Groups {
            action: GroupCommands::Create { name },
        } = cli.command
        else {
            panic!("expected groups create");
        };
        assert_eq!(name, None);
    }

    #[test]
    fn open_takes_a_route() {
        let cli = Cli::try_parse_from(["iamc", "open", "/users?offset=10"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Open(ref args) if args.route == "/users?offset=10"));
    }
}
