use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::secrets_match;
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::screening::pipeline::{score_batch, shortlisted, ResumeText};
use crate::state::AppState;
use crate::storage::ScoreResult;

#[derive(Serialize)]
pub struct ScreeningResponse {
    pub scorer: &'static str,
    pub results: Vec<ScoreResult>,
}

/// POST /api/v1/screenings
///
/// Multipart batch of `resumes` file fields, plus an optional `jd_file`
/// field that replaces the stored JD for this and later runs. Saves each
/// recognized upload, scores it against the JD, persists the full result
/// set, and returns it. Files with unrecognized extensions are skipped at
/// intake.
pub async fn handle_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut resumes = Vec::new();
    let mut jd_upload: Option<Bytes> = None;
    let mut any_file = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name == "jd_file" {
            if field.file_name().is_some_and(|n| !n.is_empty()) {
                jd_upload = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read jd_file upload: {e}"))
                })?);
            }
            continue;
        }
        if field_name != "resumes" {
            continue;
        }
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        any_file = true;

        let Some(kind) = DocumentKind::from_filename(&file_name) else {
            warn!("skipping '{file_name}': unrecognized extension");
            continue;
        };
        let data = field.bytes().await.map_err(|e| {
            AppError::Validation(format!("failed to read upload '{file_name}': {e}"))
        })?;

        let stored = state.storage.save_resume(&file_name, &data).await?;
        let name = stored
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&file_name)
            .to_string();
        resumes.push(ResumeText {
            name,
            text: extract_text(kind, &data),
        });
    }

    if !any_file {
        return Err(AppError::Validation("no resume files selected".to_string()));
    }

    if let Some(data) = jd_upload {
        state.storage.save_job_description(&data).await?;
        info!("job description replaced via screening upload");
    }

    let jd_text = state.storage.load_job_description().await?.ok_or_else(|| {
        AppError::NotFound("job description not found; ask an admin to upload one".to_string())
    })?;

    let results = score_batch(state.scorer.as_ref(), &jd_text, resumes);
    state.storage.results.save(&results)?;
    info!(
        count = results.len(),
        backend = state.scorer.backend(),
        "scored resume batch"
    );

    Ok(Json(ScreeningResponse {
        scorer: state.scorer.backend(),
        results,
    }))
}

/// GET /api/v1/results/download
///
/// The current results file as a CSV attachment; 404 until a batch has
/// been scored.
pub async fn handle_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = match tokio::fs::read(state.storage.results.path()).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(
                "no results file has been saved yet".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"results.csv\"",
            ),
        ],
        data,
    )
        .into_response())
}

#[derive(Serialize)]
pub struct AdminSummary {
    pub job_description_updated: bool,
    pub total_candidates: usize,
    pub shortlisted: Vec<ScoreResult>,
    pub all_candidates: Vec<ScoreResult>,
}

/// POST /api/v1/admin
///
/// Multipart: a `password` text field plus an optional `jd_file` upload.
/// On a correct password, replaces the stored JD (when a file was sent)
/// and returns aggregates over the last saved result set. On a wrong
/// password nothing is touched.
pub async fn handle_admin(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AdminSummary>, AppError> {
    let mut password: Option<String> = None;
    let mut jd_upload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "password" => {
                password = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read password field: {e}"))
                })?);
            }
            "jd_file" => {
                if field.file_name().is_some_and(|n| !n.is_empty()) {
                    jd_upload = Some(field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("failed to read jd_file upload: {e}"))
                    })?);
                }
            }
            _ => {}
        }
    }

    let password =
        password.ok_or_else(|| AppError::Validation("missing password field".to_string()))?;
    if !secrets_match(&password, &state.config.admin_password) {
        return Err(AppError::Unauthorized);
    }

    let mut job_description_updated = false;
    if let Some(data) = jd_upload {
        state.storage.save_job_description(&data).await?;
        job_description_updated = true;
        info!("job description replaced");
    }

    let all_candidates = state.storage.results.load()?;
    Ok(Json(AdminSummary {
        job_description_updated,
        total_candidates: all_candidates.len(),
        shortlisted: shortlisted(&all_candidates),
        all_candidates,
    }))
}

/// GET /api/v1/results/:token
///
/// Read-only view of the current result set behind a capability token.
/// A wrong token looks like a missing page, not an auth failure.
pub async fn handle_results_view(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Vec<ScoreResult>>, AppError> {
    if !secrets_match(&token, &state.config.results_token) {
        return Err(AppError::NotFound("no such page".to_string()));
    }
    Ok(Json(state.storage.results.load()?))
}
