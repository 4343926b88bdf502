//! Upload queue management and verdict reconciliation.
//!
//! Locally selected files sit in a pending queue until the user submits
//! them. Submission is a single multipart request; the backend answers with
//! one verdict per file, and those verdicts decide which pending files
//! become confirmed documents, which were duplicates, and which failed.
//!
//! The staging and reconciliation steps are plain functions over plain data
//! ([`merge_candidates`], [`match_verdicts`], [`upload_summary`]) so they
//! can be tested without a browser or a backend; [`UploadService`] wires
//! them to the signals and the HTTP call.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, UploadVerdict, VerdictStatus};
use crate::services::notification_service::ToastType;
use crate::services::session::{SessionState, UploadedDocument};
use crate::services::storage::{BrowserStorage, StorageBackend};

pub const PDF_MIME: &str = "application/pdf";

// ============================================================================
// Queue data
// ============================================================================

/// A freshly selected file, before any filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// A selected PDF awaiting backend confirmation.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// What happened to a batch of selected files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagePlan {
    /// No candidate had the PDF media type; nothing was queued.
    RejectedNonPdf,
    /// Every PDF candidate was already in the queue; nothing changed.
    AlreadyQueued,
    /// This many files were appended to the queue.
    Staged(usize),
}

/// Filters a selection down to PDFs, drops (name, size) pairs that are
/// already queued, and appends the rest in selection order.
pub fn merge_candidates(
    pending: &mut Vec<PendingFile>,
    candidates: Vec<CandidateFile>,
) -> StagePlan {
    let pdfs: Vec<CandidateFile> = candidates
        .into_iter()
        .filter(|c| c.mime == PDF_MIME)
        .collect();
    if pdfs.is_empty() {
        return StagePlan::RejectedNonPdf;
    }

    let mut fresh: Vec<CandidateFile> = Vec::new();
    for candidate in pdfs {
        let queued = pending
            .iter()
            .any(|p| p.name == candidate.name && p.size == candidate.size)
            || fresh
                .iter()
                .any(|f| f.name == candidate.name && f.size == candidate.size);
        if !queued {
            fresh.push(candidate);
        }
    }
    if fresh.is_empty() {
        return StagePlan::AlreadyQueued;
    }

    let count = fresh.len();
    pending.extend(fresh.into_iter().map(|c| PendingFile {
        name: c.name,
        size: c.size,
        bytes: c.bytes,
    }));
    StagePlan::Staged(count)
}

// ============================================================================
// Verdict reconciliation
// ============================================================================

/// Per-file outcome of one upload submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadOutcome {
    pub accepted: Vec<UploadedDocument>,
    pub duplicates: Vec<String>,
    pub failed: Vec<String>,
}

/// Matches each submitted file to the backend's verdicts by filename.
///
/// Each verdict is consumed at most once and the first unconsumed match
/// wins, so two queued files sharing a name cannot both claim the same
/// verdict. An "ok" verdict without a `pdf_id` counts as failed: a confirmed
/// document's id always comes from the backend.
pub fn match_verdicts(
    pending: &[PendingFile],
    verdicts: &[UploadVerdict],
    uploaded_at: DateTime<Utc>,
) -> UploadOutcome {
    let mut consumed = vec![false; verdicts.len()];
    let mut outcome = UploadOutcome::default();

    for file in pending {
        let matched = verdicts
            .iter()
            .enumerate()
            .find(|(i, v)| !consumed[*i] && v.filename == file.name);

        match matched {
            Some((i, verdict)) => {
                consumed[i] = true;
                match verdict.status {
                    VerdictStatus::Ok => match &verdict.pdf_id {
                        Some(id) => outcome.accepted.push(UploadedDocument {
                            id: id.clone(),
                            name: file.name.clone(),
                            size: file.size,
                            upload_date: uploaded_at,
                        }),
                        None => outcome.failed.push(file.name.clone()),
                    },
                    VerdictStatus::Duplicate => outcome.duplicates.push(file.name.clone()),
                    VerdictStatus::Failed => outcome.failed.push(file.name.clone()),
                }
            }
            None => outcome.failed.push(file.name.clone()),
        }
    }
    outcome
}

/// Collapses an outcome into one status line.
///
/// Severity: error if anything failed, info if there were duplicates but no
/// failures, success otherwise.
pub fn upload_summary(outcome: &UploadOutcome) -> (ToastType, String) {
    let mut parts = Vec::new();
    if !outcome.accepted.is_empty() {
        parts.push(format!("{} uploaded", outcome.accepted.len()));
    }
    if !outcome.duplicates.is_empty() {
        parts.push(format!(
            "{} duplicate: {}",
            outcome.duplicates.len(),
            outcome.duplicates.join(", ")
        ));
    }
    if !outcome.failed.is_empty() {
        parts.push(format!(
            "{} failed: {}",
            outcome.failed.len(),
            outcome.failed.join(", ")
        ));
    }

    let level = if !outcome.failed.is_empty() {
        ToastType::Error
    } else if !outcome.duplicates.is_empty() {
        ToastType::Info
    } else {
        ToastType::Success
    };
    (level, parts.join(", "))
}

// ============================================================================
// Upload service
// ============================================================================

/// Inline status line shown in the upload panel.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadStatus {
    pub level: ToastType,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct UploadService<S: StorageBackend> {
    session: SessionState<S>,
    pub pending: RwSignal<Vec<PendingFile>>,
    pub is_uploading: RwSignal<bool>,
    pub status: RwSignal<Option<UploadStatus>>,
}

impl<S: StorageBackend> UploadService<S> {
    pub fn new(session: SessionState<S>) -> Self {
        Self {
            session,
            pending: RwSignal::new(Vec::new()),
            is_uploading: RwSignal::new(false),
            status: RwSignal::new(None),
        }
    }

    /// Queues a batch of selected files, reporting rejected selections
    /// inline without touching the queue.
    pub fn add_candidates(&self, candidates: Vec<CandidateFile>) {
        let mut plan = StagePlan::RejectedNonPdf;
        self.pending.update(|pending| {
            plan = merge_candidates(pending, candidates);
        });

        match plan {
            StagePlan::RejectedNonPdf => self.status.set(Some(UploadStatus {
                level: ToastType::Error,
                text: "Please select only PDF files".to_string(),
            })),
            StagePlan::AlreadyQueued => self.status.set(Some(UploadStatus {
                level: ToastType::Info,
                text: "Those files are already in the queue".to_string(),
            })),
            StagePlan::Staged(_) => self.status.set(None),
        }
    }

    pub fn remove_pending(&self, index: usize) {
        self.pending.update(|pending| {
            if index < pending.len() {
                pending.remove(index);
            }
        });
    }

    /// Submits the whole queue in one multipart request and reconciles the
    /// verdicts. Ignored while a submission is in flight or the queue is
    /// empty; a transport failure leaves the queue unchanged.
    pub fn upload_pending(&self) {
        if self.is_uploading.get_untracked() {
            return;
        }
        let files = self.pending.get_untracked();
        if files.is_empty() {
            return;
        }

        self.is_uploading.set(true);
        self.status.set(None);

        let service = self.clone();
        let user_id = self.session.session_id.get_untracked();
        spawn_local(async move {
            match api::upload_pdfs(&user_id, &files).await {
                Ok(response) => {
                    let outcome = match_verdicts(&files, &response.results, Utc::now());
                    let (level, text) = upload_summary(&outcome);
                    service.session.add_documents(outcome.accepted);
                    service.pending.set(Vec::new());
                    service.status.set(Some(UploadStatus { level, text }));
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    service.status.set(Some(UploadStatus {
                        level: ToastType::Error,
                        text: format!("Upload failed: {}", e),
                    }));
                }
            }
            service.is_uploading.set(false);
        });
    }
}

// ============================================================================
// File collection
// ============================================================================

/// Snapshots a live `FileList` into plain `File` handles. A `FileList` from
/// an input element mutates when the input is cleared; the `File` objects
/// themselves stay readable.
pub fn file_list_to_vec(files: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Reads selected files into candidates. Bytes are only pulled for files
/// that already look like PDFs; everything else is filtered out during
/// staging anyway.
pub async fn collect_candidates(files: Vec<web_sys::File>) -> Vec<CandidateFile> {
    let mut out = Vec::new();
    for file in files {
        let name = file.name();
        let size = file.size() as u64;
        let mime = file.type_();
        let bytes = if mime == PDF_MIME {
            read_file_bytes(&file).await
        } else {
            Vec::new()
        };
        out.push(CandidateFile {
            name,
            size,
            mime,
            bytes,
        });
    }
    out
}

async fn read_file_bytes(file: &web_sys::File) -> Vec<u8> {
    match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => js_sys::Uint8Array::new(&buffer).to_vec(),
        Err(_) => {
            log::warn!("Failed to read file '{}'", file.name());
            Vec::new()
        }
    }
}

// ============================================================================
// Context plumbing
// ============================================================================

pub type AppUploadService = UploadService<BrowserStorage>;

pub fn provide_upload_service(session: SessionState<BrowserStorage>) {
    provide_context(UploadService::new(session));
}

pub fn use_upload_service() -> AppUploadService {
    expect_context::<AppUploadService>()
}
