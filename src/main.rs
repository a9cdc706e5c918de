use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_notion::cli::{run_release_workflow, ReleaseWorkflowArgs};
use release_notion::config::{self, Settings, SettingsOverrides};
use release_notion::github::GitHubClient;
use release_notion::notion::{NotionClient, PageSink};
use release_notion::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-notion",
    about = "Record a GitHub release as a page in a Notion database"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Release tag (defaults to RELEASE_TAG or GITHUB_REF_NAME)")]
    tag: Option<String>,

    #[arg(long, help = "Release event payload (defaults to GITHUB_EVENT_PATH)")]
    event_path: Option<PathBuf>,

    #[arg(long, help = "Classify and print the Notion request without creating a page")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-notion {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_logging(args.verbose)?;

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let overrides = SettingsOverrides {
        tag: args.tag,
        event_path: args.event_path,
    };
    let settings = match Settings::from_env(overrides) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let notion = if args.dry_run {
        None
    } else {
        match settings.notion_credentials() {
            Ok((token, database_id)) => Some(NotionClient::new(&config.notion, token, database_id)),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    };

    let github = GitHubClient::new(
        &config.github,
        settings.repository.clone(),
        settings.github_token.clone(),
    );

    ui::display_status(&format!(
        "Recording release {} of {}",
        settings.tag, settings.repository
    ));

    let workflow_args = ReleaseWorkflowArgs {
        dry_run: args.dry_run,
    };
    let sink = notion.as_ref().map(|client| client as &dyn PageSink);
    let result = match run_release_workflow(&workflow_args, &settings, &config, &github, sink) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Failed to record release '{}': {}", settings.tag, e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_release_summary(&result);

    if let Some(request) = &result.request {
        ui::display_status("Dry run, Notion request not sent:");
        println!("{}", serde_json::to_string_pretty(request)?);
    } else {
        ui::display_success(&format!("Created Notion page for {}", result.tag));
    }

    Ok(())
}
