use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `avp` binary.
#[derive(Debug, Parser)]
#[command(
    name = "avp",
    version,
    about = "A&V TechSolutions portal - request projects, upload payment proofs, track delivery"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results for list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
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

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["avp", "--format", "table", "--limit", "10", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["avp", "info", "--format", "raw", "--quiet"]).expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["avp", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn auth_register_requires_name_and_email() {
        assert!(Cli::try_parse_from(["avp", "auth", "register", "--name", "A"]).is_err());
        let cli = Cli::try_parse_from([
            "avp", "auth", "register", "--name", "A", "--email", "a@x.com",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Auth { .. }));
    }

    #[test]
    fn project_submit_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "avp",
            "project",
            "submit",
            "--title",
            "T",
            "--technology",
            "web",
            "--description",
            "D",
            "--file",
            "/tmp/synopsis.pdf",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Project { .. }));
    }

    #[test]
    fn admin_set_status_takes_positional_id_and_status() {
        let cli = Cli::try_parse_from(["avp", "admin", "set-status", "3", "in-review"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Admin { .. }));
    }
}
