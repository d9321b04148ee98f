use anyhow::{Context, Result};
use baesloader::{
    config::Config,
    storage::{dropbox::DropboxStorage, Storage},
    table,
    upload::{self, UploadOutcome},
    validate::{Profile, PROFILES},
};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Validate a BAES enrollment workbook and store it in Dropbox under the
/// upcoming month's folder.
#[derive(Parser, Debug)]
struct Args {
    /// Excel workbook to validate and upload
    #[arg(long)]
    file: PathBuf,

    /// Form variant: baes or baes-semestral
    #[arg(long, default_value = "baes")]
    profile: String,

    /// Also create a shared link for the destination folder
    #[arg(long)]
    share: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();

    let profile = Profile::by_name(&args.profile).with_context(|| {
        let known: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
        format!(
            "unknown profile `{}` (known: {})",
            args.profile,
            known.join(", ")
        )
    })?;

    let config = Config::from_env()?;
    let storage = DropboxStorage::new(config.access_token);

    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("reading {}", args.file.display()))?;
    let table = table::read::parse_xlsx(&bytes)
        .with_context(|| format!("parsing {}", args.file.display()))?;
    info!(
        file = %args.file.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "workbook parsed"
    );

    let today = Local::now().date_naive();
    match upload::upload(&table, profile, today, &storage).await? {
        UploadOutcome::Rejected { missing } => {
            error!(?missing, "workbook is not valid; required columns are absent");
            std::process::exit(1);
        }
        UploadOutcome::Done(report) => {
            info!(
                folder = %report.folder_name,
                file = %report.file_name,
                path = %report.full_path,
                "workbook stored"
            );

            if args.share {
                let folder_path = format!("/{}", report.folder_name);
                match storage.create_shared_link(&folder_path).await {
                    Ok(url) => info!(%url, "shared link created"),
                    // The upload already succeeded; a share failure is not fatal.
                    Err(e) => error!(error = %e, "creating shared link failed"),
                }
            }
        }
    }

    Ok(())
}
