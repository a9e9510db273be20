//! Axum route handler for resume analysis.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::analysis::pdf::extract_text_blocking;
use crate::analysis::prompts::{build_resume_prompt, ANALYSIS_SYSTEM};
use crate::analysis::truncate::truncate_text;
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CompletionOptions};
use crate::state::AppState;

/// Character budget for each document before it goes into the prompt.
pub const MAX_DOCUMENT_CHARS: usize = 2500;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

const MISSING_FILES: &str = "Both job description and resume files are required";
const PDF_ONLY: &str = "Only PDF files are supported";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A file part pulled out of the multipart body. Lives for one request.
#[derive(Debug)]
pub struct UploadedDocument {
    pub filename: String,
    pub data: Bytes,
}

impl UploadedDocument {
    /// Case-sensitive: `cv.PDF` is rejected.
    fn is_pdf(&self) -> bool {
        self.filename.ends_with(".pdf")
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: String,
    pub job_description_length: usize,
    pub resume_length: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-resume
///
/// Multipart body with `job_description` and `resume` PDF parts.
/// Returns the model's free-text feedback plus the lengths of the truncated inputs.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    // A body that is not multipart carries no file parts at all.
    let multipart = multipart.map_err(|e| {
        debug!("Upload is not multipart: {}", e.body_text());
        AppError::Validation(MISSING_FILES.to_string())
    })?;
    let (job_description, resume) = read_documents(multipart).await?;

    analyze(&state, job_description, resume)
        .await
        .map(Json)
        .inspect_err(|e| error!("Error in analyze_resume: {e}"))
}

/// Pulls both file parts out of the body and validates their presence and type.
async fn read_documents(
    mut multipart: Multipart,
) -> Result<(UploadedDocument, UploadedDocument), AppError> {
    let mut job_description = None;
    let mut resume = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let slot = match field.name() {
            Some(JOB_DESCRIPTION_FIELD) => &mut job_description,
            Some(RESUME_FIELD) => &mut resume,
            _ => continue,
        };
        // Parts without a filename are form fields, not files.
        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        if slot.is_some() {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        *slot = Some(UploadedDocument { filename, data });
    }

    let (Some(job_description), Some(resume)) = (job_description, resume) else {
        return Err(AppError::Validation(MISSING_FILES.to_string()));
    };
    if !job_description.is_pdf() || !resume.is_pdf() {
        return Err(AppError::Validation(PDF_ONLY.to_string()));
    }

    Ok((job_description, resume))
}

/// Extract → truncate → prompt → complete.
async fn analyze(
    state: &AppState,
    job_description: UploadedDocument,
    resume: UploadedDocument,
) -> Result<AnalysisResponse, AppError> {
    info!("Extracting text from job description...");
    let job_description_text = extract_text_blocking(job_description.data).await?;

    info!("Extracting text from resume...");
    let resume_text = extract_text_blocking(resume.data).await?;

    let job_description_text = truncate_text(&job_description_text, MAX_DOCUMENT_CHARS);
    let resume_text = truncate_text(&resume_text, MAX_DOCUMENT_CHARS);

    let prompt = build_resume_prompt(&job_description_text, &resume_text);
    let messages = [ChatMessage::system(ANALYSIS_SYSTEM), ChatMessage::user(prompt)];

    info!("Calling completion API for analysis...");
    let analysis = state
        .llm
        .complete(&messages, &CompletionOptions::ANALYSIS)
        .await?;

    Ok(AnalysisResponse {
        success: true,
        analysis,
        job_description_length: job_description_text.chars().count(),
        resume_length: resume_text.chars().count(),
    })
}
