//! Shipmeta CLI binary entry point.
//! Resolves configuration, delegates to the library and prints results.

use clap::Parser;
use shipmeta::artifact::{artifact_path, load_record, write_record};
use shipmeta::cli::{Cli, Commands};
use shipmeta::config::{self, CliOverrides, Effective};
use shipmeta::error::Result;
use shipmeta::guardrail::enforce;
use shipmeta::models::Field;
use shipmeta::publish::{publish_decided, Publisher};
use shipmeta::store::DirStore;
use shipmeta::utils::{error_prefix, init_logging, note_prefix};
use shipmeta::{output, pipeline};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli.cmd) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(e.exit_code());
        }
    }
}

fn effective(ov: CliOverrides<'_>) -> Effective {
    let eff = config::resolve_effective(&ov);
    // Friendly note if no shipmeta config was found
    if eff.output != "json" && config::load_config(&eff.root).is_none() {
        eprintln!("{} No shipmeta.toml found; using defaults.", note_prefix());
    }
    eff
}

/// Display name from the project directory when `--name` is not given.
fn default_app_name(project: &Path) -> String {
    std::fs::canonicalize(project)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "App".to_string())
}

fn run(cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::Analyze { project, output } => {
            let project = PathBuf::from(project.as_deref().unwrap_or("."));
            let eff = effective(CliOverrides {
                root: project.to_str(),
                output: output.as_deref(),
                ..Default::default()
            });
            let analysis = shipmeta::analyze::analyze_project(&project, &eff.extensions);
            output::print_analysis(&analysis, &eff.output);
            Ok(0)
        }
        Commands::Generate {
            project,
            name,
            locale,
            out_dir,
            output,
        } => {
            let project = PathBuf::from(project.as_deref().unwrap_or("."));
            let eff = effective(CliOverrides {
                root: project.to_str(),
                output: output.as_deref(),
                locale: locale.as_deref(),
                out_dir: out_dir.as_deref(),
                ..Default::default()
            });
            let name = name.unwrap_or_else(|| default_app_name(&project));
            let outcome = pipeline::run(&project, &name, &eff.locale, &eff.extensions);
            let decision = enforce(&outcome.generated.record, false);
            let path = artifact_path(&eff.out_dir, &name);
            write_record(&path, &outcome.generated.record)?;
            output::print_generated(&outcome.generated, &path, &decision, &eff.output);
            Ok(if decision.summary.blocks > 0 { 1 } else { 0 })
        }
        Commands::Validate {
            file,
            force,
            output,
        } => {
            let eff = effective(CliOverrides {
                output: output.as_deref(),
                ..Default::default()
            });
            let record = load_record(Path::new(&file))?;
            let decision = enforce(&record, force);
            output::print_decision(&decision, &eff.output);
            Ok(if decision.allowed { 0 } else { 1 })
        }
        Commands::Aso {
            app_id,
            project,
            apply,
            locale,
            store,
            out_dir,
            output,
        } => {
            let project = PathBuf::from(project.as_deref().unwrap_or("."));
            let eff = effective(CliOverrides {
                root: project.to_str(),
                output: output.as_deref(),
                locale: locale.as_deref(),
                out_dir: out_dir.as_deref(),
                store: store.as_deref(),
            });
            let mut store = DirStore::new(&eff.store);
            let report = pipeline::aso(
                &mut store,
                &app_id,
                &project,
                &eff.locale,
                &eff.extensions,
                &eff.out_dir,
                apply,
            )?;
            let sub = &report.submission;
            output::print_aso(&report.app_name, &sub.changes, &sub.decision, sub.applied, &eff.output);
            Ok(if apply && !sub.applied { 1 } else { 0 })
        }
        Commands::Get {
            app_id,
            locale,
            store,
            output,
        } => {
            let eff = effective(CliOverrides {
                output: output.as_deref(),
                locale: locale.as_deref(),
                store: store.as_deref(),
                ..Default::default()
            });
            let store = DirStore::new(&eff.store);
            let record = store.fetch_metadata(&app_id, &eff.locale)?;
            output::print_record(&record, &eff.output);
            Ok(0)
        }
        Commands::Set {
            app_id,
            file,
            force,
            store,
            output,
        } => {
            let eff = effective(CliOverrides {
                output: output.as_deref(),
                store: store.as_deref(),
                ..Default::default()
            });
            let mut record = load_record(Path::new(&file))?;
            if record.locale.is_none() {
                record = record.with(Field::Locale, eff.locale.as_str());
            }
            let decision = enforce(&record, force);
            output::print_decision(&decision, &eff.output);
            let mut store = DirStore::new(&eff.store);
            publish_decided(&mut store, &app_id, &record, decision)?;
            Ok(0)
        }
    }
}
