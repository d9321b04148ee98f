use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::destination;
use crate::storage::{FolderCreate, Storage};
use crate::table::{write::to_xlsx_bytes, Table};
use crate::validate::{validate, Profile, Validation};

/// How one upload ended. Rejection is an outcome, not an error: the
/// workbook never left the machine and the caller shows the missing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Rejected { missing: Vec<String> },
    Done(UploadReport),
}

/// Where a completed upload landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub folder_name: String,
    pub file_name: String,
    pub full_path: String,
}

/// Run one upload: validate the header against `profile`, resolve the
/// destination for `today`, ensure the folder exists, then overwrite the
/// workbook at the destination path. No storage call is made before the
/// table passes validation and resolution; no call is retried.
pub async fn upload<S: Storage + ?Sized>(
    table: &Table,
    profile: &Profile,
    today: NaiveDate,
    storage: &S,
) -> Result<UploadOutcome> {
    match validate(&table.headers, profile.required_columns) {
        Validation::Invalid { missing } => {
            warn!(profile = profile.name, ?missing, "workbook rejected");
            return Ok(UploadOutcome::Rejected { missing });
        }
        Validation::Valid => {
            info!(profile = profile.name, rows = table.rows.len(), "workbook valid");
        }
    }

    let dest = destination::resolve(today, table)?;

    let folder_path = format!("/{}", dest.folder_name);
    match storage
        .create_folder(&folder_path)
        .await
        .with_context(|| format!("creating folder {folder_path}"))?
    {
        FolderCreate::Created => info!(folder = %dest.folder_name, "folder created"),
        FolderCreate::AlreadyExists => {
            info!(folder = %dest.folder_name, "folder already exists")
        }
    }

    let bytes = to_xlsx_bytes(table)?;
    storage
        .write_file(&dest.full_path, bytes)
        .await
        .with_context(|| format!("writing {}", dest.full_path))?;
    info!(path = %dest.full_path, "workbook stored");

    Ok(UploadOutcome::Done(UploadReport {
        folder_name: dest.folder_name,
        file_name: dest.file_name,
        full_path: dest.full_path,
    }))
}
