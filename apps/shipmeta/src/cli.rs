//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shipmeta",
    version,
    about = "App Store metadata generator and guardrails",
    long_about = "Shipmeta — analyze an app's source tree, generate store listing metadata (subtitle, keywords, description, promotional text), and validate any metadata record against content and length guardrails before upload.\n\nConfiguration precedence: CLI > shipmeta.toml > defaults.",
    after_help = "Examples:\n  shipmeta analyze ./Pulse\n  shipmeta generate ./Pulse --name \"Pulse\"\n  shipmeta validate .shipmeta/pulse_metadata.json\n  shipmeta aso --app-id 123456 --project ./Pulse --apply",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, action = clap::ArgAction::SetTrue, help = "Log debug diagnostics to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for analysis, generation, validation and upload.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current shipmeta version."
    )]
    Version,
    /// Analyze a project tree
    #[command(
        about = "Analyze a project tree",
        long_about = "Scan source files for screens, models, tabs, feature labels and framework imports, then classify the app into store categories. Nothing is written.",
        after_help = "Examples:\n  shipmeta analyze ./Pulse\n  shipmeta analyze ./Pulse --output json"
    )]
    Analyze {
        #[arg(help = "Project root (default: current dir)")]
        project: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Generate a metadata record
    #[command(
        about = "Generate metadata",
        long_about = "Analyze the project, generate a full metadata record, validate it, and write it to <out_dir>/<name>_metadata.json for review. The artifact is overwritten on every run.",
        after_help = "Examples:\n  shipmeta generate ./Pulse --name Pulse\n  shipmeta generate ./Pulse --name Pulse --locale en-GB --out-dir listing"
    )]
    Generate {
        #[arg(help = "Project root (default: current dir)")]
        project: Option<String>,
        #[arg(long, help = "App display name (default: project directory name)")]
        name: Option<String>,
        #[arg(long, help = "Locale for the record (default: en-US)")]
        locale: Option<String>,
        #[arg(long, help = "Artifact directory (default: .shipmeta)")]
        out_dir: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Validate a metadata record file
    #[command(
        about = "Validate metadata",
        long_about = "Run content and length guardrails on a metadata JSON file. BLOCK findings always fail; WARN findings fail unless --force is given.",
        after_help = "Examples:\n  shipmeta validate metadata.json\n  shipmeta validate metadata.json --force --output json"
    )]
    Validate {
        #[arg(help = "Path to a metadata JSON file")]
        file: String,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept WARN findings (recorded as overridden)")]
        force: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Generate and compare against the store, optionally upload
    #[command(
        about = "Generate and compare against the store",
        long_about = "Generate metadata for the project using the app's store name, compare it with the current store record, and report the differences. With --apply the record is uploaded; WARN findings are overridden and recorded, BLOCK findings still stop the upload.",
        after_help = "Examples:\n  shipmeta aso --app-id 123456 --project ./Pulse\n  shipmeta aso --app-id 123456 --project ./Pulse --apply"
    )]
    Aso {
        #[arg(long, help = "Store app identifier")]
        app_id: String,
        #[arg(long, help = "Project root (default: current dir)")]
        project: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Upload the generated record")]
        apply: bool,
        #[arg(long, help = "Locale to compare and update (default: en-US)")]
        locale: Option<String>,
        #[arg(long, help = "Store directory (default: .shipmeta/store)")]
        store: Option<String>,
        #[arg(long, help = "Artifact directory (default: .shipmeta)")]
        out_dir: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Show the current store record
    #[command(
        about = "Show store metadata",
        long_about = "Fetch the current metadata record for an app and locale from the store."
    )]
    Get {
        #[arg(long, help = "Store app identifier")]
        app_id: String,
        #[arg(long, help = "Locale (default: en-US)")]
        locale: Option<String>,
        #[arg(long, help = "Store directory (default: .shipmeta/store)")]
        store: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Upload a metadata record file
    #[command(
        about = "Upload metadata",
        long_about = "Validate a metadata JSON file and upload the fields it contains. Fields absent from the file are left unchanged in the store.",
        after_help = "Examples:\n  shipmeta set --app-id 123456 metadata.json\n  shipmeta set --app-id 123456 metadata.json --force"
    )]
    Set {
        #[arg(long, help = "Store app identifier")]
        app_id: String,
        #[arg(help = "Path to a metadata JSON file")]
        file: String,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept WARN findings (recorded as overridden)")]
        force: bool,
        #[arg(long, help = "Store directory (default: .shipmeta/store)")]
        store: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aso_apply() {
        let cli = Cli::try_parse_from([
            "shipmeta", "aso", "--app-id", "123", "--project", "./Pulse", "--apply", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.cmd {
            Commands::Aso {
                app_id,
                project,
                apply,
                ..
            } => {
                assert_eq!(app_id, "123");
                assert_eq!(project.as_deref(), Some("./Pulse"));
                assert!(apply);
            }
            _ => panic!("expected aso"),
        }
    }

    #[test]
    fn test_set_requires_app_id() {
        assert!(Cli::try_parse_from(["shipmeta", "set", "m.json"]).is_err());
    }
}
