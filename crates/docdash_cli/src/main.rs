mod config;
mod render;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use docdash_catalog::{fixtures, DocumentLibrary, SortDirection, SortField, SortState};
use docdash_reports::{
    export_report, ExportFormat, FilterField, FixtureReportSource, ReportFilters, ReportGenerator,
};
use docdash_settings::{
    parse_toggle, team_members, NotificationPreference, NotificationPreferences, PasswordChange,
    Profile,
};
use docdash_transfer::{accepts, TransferError, UploadEvent, UploadFile, UploadSimulator};
use futures::StreamExt;
use tracing::{info, warn};

use crate::config::RuntimeConfig;

#[derive(Debug, Parser)]
#[command(author, version, about = "Document dashboard over sample data")]
struct Cli {
    #[arg(long, global = true, default_value = "config/docdash.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Library overview: stats and recent activity.
    Dashboard,
    /// List documents, optionally searched and sorted.
    Documents {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        sort: Option<SortField>,
        #[arg(long)]
        direction: Option<SortDirection>,
        #[arg(long)]
        json: bool,
    },
    /// Version history of one document.
    History { document_id: u64 },
    /// Simulate uploading local files.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Generate the activity report.
    Report {
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        date_from: Option<String>,
        #[arg(long)]
        date_to: Option<String>,
        #[arg(long)]
        document_type: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        export: Option<ExportFormat>,
        #[arg(long)]
        json: bool,
    },
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show the profile, optionally editing fields and saving.
    Profile(ProfileArgs),
    /// Show notification preferences, optionally toggling some and saving.
    Notifications {
        /// `<preference>=<on|off>`, e.g. `weekly-reports=off`. Repeatable.
        #[arg(long = "set", value_parser = parse_toggle)]
        toggles: Vec<(NotificationPreference, bool)>,
    },
    Team,
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Debug, Default, Args)]
struct ProfileArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    save: bool,
}

impl ProfileArgs {
    fn edits(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.department,
            &self.bio,
        ]
        .iter()
        .any(|field| field.is_some())
    }

    fn apply(self, profile: &mut Profile) {
        let fields = [
            (self.first_name, &mut profile.first_name),
            (self.last_name, &mut profile.last_name),
            (self.email, &mut profile.email),
            (self.phone, &mut profile.phone),
            (self.department, &mut profile.department),
            (self.bio, &mut profile.bio),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RuntimeConfig::load(&cli.config)?;

    match cli.command {
        Command::Dashboard => {
            render::dashboard(&fixtures::dashboard_stats(), &fixtures::recent_activity());
            Ok(())
        }
        Command::Documents {
            search,
            sort,
            direction,
            json,
        } => list_documents(search, sort, direction, json),
        Command::History { document_id } => {
            let library = DocumentLibrary::with_fixtures();
            let document = library.find(document_id)?;
            let history = library.version_history(document_id)?;
            render::history(document, &history);
            Ok(())
        }
        Command::Upload { files } => upload(&config, files).await,
        Command::Report {
            user,
            date_from,
            date_to,
            document_type,
            action,
            export,
            json,
        } => {
            let mut filters = ReportFilters::default();
            for (field, value) in [
                (FilterField::User, user),
                (FilterField::DateFrom, date_from),
                (FilterField::DateTo, date_to),
                (FilterField::DocumentType, document_type),
                (FilterField::Action, action),
            ] {
                if let Some(value) = value {
                    filters.set(field, value);
                }
            }
            report(&config, filters, export, json).await
        }
        Command::Settings { command } => settings(command),
    }
}

fn list_documents(
    search: Option<String>,
    sort: Option<SortField>,
    direction: Option<SortDirection>,
    json: bool,
) -> Result<()> {
    let mut library = DocumentLibrary::with_fixtures();
    if let Some(query) = search {
        library.set_query(query);
    }

    let default_sort = SortState::default();
    let state = match (sort, direction) {
        (Some(field), direction) => SortState::new(field, direction.unwrap_or(SortDirection::Asc)),
        (None, Some(direction)) => SortState::new(default_sort.field, direction),
        (None, None) => default_sort,
    };
    library.set_sort(state);

    let rows = library.view();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize documents")?
        );
    } else {
        render::documents(&rows, library.sort_state());
    }
    Ok(())
}

async fn upload(config: &RuntimeConfig, paths: Vec<PathBuf>) -> Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(upload_file(path).await?);
    }

    let simulator = UploadSimulator::new(config.simulator())?;
    let mut events = Box::pin(simulator.events());
    let ids = simulator.add_files(files).await;
    let mut pending: HashSet<_> = ids.iter().copied().collect();

    while !pending.is_empty() {
        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                match event {
                    Ok(UploadEvent::Progress { id, .. }) => {
                        if let Some(task) = simulator.get(id).await {
                            render::upload_progress(&task);
                        }
                    }
                    Ok(UploadEvent::Completed { id } | UploadEvent::Removed { id }) => {
                        pending.remove(&id);
                    }
                    Ok(UploadEvent::Added { .. }) => {}
                    Err(err) => {
                        warn!(error = %err, "upload events missed, resyncing from task list");
                        let unfinished: HashSet<_> =
                            simulator.unfinished().await.into_iter().collect();
                        pending.retain(|id| unfinished.contains(id));
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!(remaining = pending.len(), "upload interrupted, cancelling remaining files");
                for id in pending.drain() {
                    simulator.remove_file(id).await;
                }
            }
        }
    }

    render::upload_summary(&simulator.snapshot().await);
    Ok(())
}

async fn upload_file(path: &Path) -> Result<UploadFile> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("not a file path: {}", path.display()))?
        .to_string();

    if !accepts(&name) {
        warn!(file = %name, "rejected file with unsupported extension");
        return Err(TransferError::UnsupportedFile(name).into());
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("failed to stat {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    Ok(UploadFile::new(name, metadata.len()))
}

async fn report(
    config: &RuntimeConfig,
    filters: ReportFilters,
    export: Option<ExportFormat>,
    json: bool,
) -> Result<()> {
    let source = Arc::new(FixtureReportSource::new(config.report_delay()));
    let generator = ReportGenerator::new(source);

    info!(filtered = !filters.is_empty(), "generating report");
    let rows = generator.generate(&filters).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize report")?
        );
    } else {
        render::report(&rows)?;
    }

    if let Some(format) = export {
        if rows.is_empty() {
            bail!("nothing to export: the report is empty");
        }
        let receipt = export_report(format, &rows, Utc::now().date_naive());
        println!("{}", receipt.message);
    }
    Ok(())
}

fn settings(command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Profile(args) => {
            let save = args.save || args.edits();
            let mut profile = Profile::default();
            args.apply(&mut profile);
            render::profile(&profile);
            if save {
                println!("{}", profile.save());
            }
        }
        SettingsCommand::Notifications { toggles } => {
            let mut preferences = NotificationPreferences::default();
            let changed = !toggles.is_empty();
            for (key, enabled) in toggles {
                preferences.set(key, enabled);
            }
            render::notifications(&preferences);
            if changed {
                println!("{}", preferences.save());
            }
        }
        SettingsCommand::Team => {
            render::team(&team_members());
        }
        SettingsCommand::ChangePassword {
            current,
            new,
            confirm,
        } => {
            let mut form = PasswordChange::new(current, new, confirm);
            let message = form.submit()?;
            println!("{message}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, ProfileArgs, SettingsCommand};
    use clap::Parser;
    use docdash_catalog::{SortDirection, SortField};
    use docdash_reports::ExportFormat;
    use docdash_settings::{NotificationPreference, Profile};

    #[test]
    fn parses_documents_sort_flags() {
        let cli = Cli::try_parse_from([
            "docdash",
            "documents",
            "--sort",
            "last-modified",
            "--direction",
            "asc",
        ])
        .expect("parse");
        match cli.command {
            Command::Documents {
                sort, direction, ..
            } => {
                assert_eq!(sort, Some(SortField::LastModified));
                assert_eq!(direction, Some(SortDirection::Asc));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["docdash", "documents", "--sort", "version"]).is_err());
    }

    #[test]
    fn parses_report_export_format() {
        let cli = Cli::try_parse_from(["docdash", "report", "--export", "pdf"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Report {
                export: Some(ExportFormat::Pdf),
                ..
            }
        ));
    }

    #[test]
    fn change_password_requires_all_fields() {
        assert!(Cli::try_parse_from([
            "docdash",
            "settings",
            "change-password",
            "--current",
            "a",
            "--new",
            "b"
        ])
        .is_err());

        let cli = Cli::try_parse_from([
            "docdash",
            "settings",
            "change-password",
            "--current",
            "a",
            "--new",
            "b",
            "--confirm",
            "b",
        ])
        .expect("parse");
        assert!(matches!(
            cli.command,
            Command::Settings {
                command: SettingsCommand::ChangePassword { .. }
            }
        ));
    }

    #[test]
    fn upload_needs_at_least_one_file() {
        assert!(Cli::try_parse_from(["docdash", "upload"]).is_err());
    }

    #[test]
    fn parses_repeated_notification_toggles() {
        let cli = Cli::try_parse_from([
            "docdash",
            "settings",
            "notifications",
            "--set",
            "weekly-reports=off",
            "--set",
            "versionUpdates=on",
        ])
        .expect("parse");
        match cli.command {
            Command::Settings {
                command: SettingsCommand::Notifications { toggles },
            } => assert_eq!(
                toggles,
                vec![
                    (NotificationPreference::WeeklyReports, false),
                    (NotificationPreference::VersionUpdates, true),
                ]
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_notification_toggle() {
        assert!(Cli::try_parse_from([
            "docdash",
            "settings",
            "notifications",
            "--set",
            "weekly-reports"
        ])
        .is_err());
    }

    #[test]
    fn profile_edits_replace_only_given_fields() {
        let cli = Cli::try_parse_from([
            "docdash",
            "settings",
            "profile",
            "--department",
            "Legal",
            "--save",
        ])
        .expect("parse");
        let Command::Settings {
            command: SettingsCommand::Profile(args),
        } = cli.command
        else {
            panic!("expected settings profile");
        };
        assert!(args.save);
        assert!(args.edits());

        let mut profile = Profile::default();
        args.apply(&mut profile);
        assert_eq!(profile.department, "Legal");
        assert_eq!(profile.display_name(), "John Doe");
        assert!(!ProfileArgs::default().edits());
    }
}
