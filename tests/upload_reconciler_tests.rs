//! Upload queue and verdict reconciliation tests.
//!
//! Staging, verdict matching, and summary composition are plain functions,
//! and the upload service runs against in-memory storage, so everything
//! here runs without a browser or a backend.

use chrono::Utc;
use leptos::prelude::*;
use pdf_chat_frontend::api::{UploadVerdict, VerdictStatus};
use pdf_chat_frontend::services::notification_service::ToastType;
use pdf_chat_frontend::services::session::SessionState;
use pdf_chat_frontend::services::storage::MemoryStorage;
use pdf_chat_frontend::services::upload::{
    match_verdicts, merge_candidates, upload_summary, CandidateFile, PendingFile, StagePlan,
    UploadService,
};

fn pdf(name: &str, size: u64) -> CandidateFile {
    CandidateFile {
        name: name.to_string(),
        size,
        mime: "application/pdf".to_string(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    }
}

fn other(name: &str, size: u64) -> CandidateFile {
    CandidateFile {
        name: name.to_string(),
        size,
        mime: "text/plain".to_string(),
        bytes: Vec::new(),
    }
}

fn queued(name: &str, size: u64) -> PendingFile {
    PendingFile {
        name: name.to_string(),
        size,
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    }
}

fn verdict(filename: &str, status: VerdictStatus, pdf_id: Option<&str>) -> UploadVerdict {
    UploadVerdict {
        filename: filename.to_string(),
        status,
        pdf_id: pdf_id.map(String::from),
    }
}

// ============================================================================
// Staging Tests
// ============================================================================

#[test]
fn test_staging_appends_in_selection_order() {
    let mut pending = Vec::new();
    let plan = merge_candidates(&mut pending, vec![pdf("a.pdf", 10), pdf("b.pdf", 20)]);

    assert_eq!(plan, StagePlan::Staged(2));
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].name, "a.pdf");
    assert_eq!(pending[1].name, "b.pdf");
}

#[test]
fn test_staging_rejects_non_pdf_without_mutation() {
    let mut pending = vec![queued("kept.pdf", 5)];
    let plan = merge_candidates(&mut pending, vec![other("notes.txt", 10)]);

    assert_eq!(plan, StagePlan::RejectedNonPdf);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "kept.pdf");
}

#[test]
fn test_staging_rejects_empty_selection() {
    let mut pending = Vec::new();
    assert_eq!(merge_candidates(&mut pending, vec![]), StagePlan::RejectedNonPdf);
    assert!(pending.is_empty());
}

#[test]
fn test_staging_filters_mixed_selection_to_pdfs() {
    let mut pending = Vec::new();
    let plan = merge_candidates(
        &mut pending,
        vec![other("a.txt", 1), pdf("b.pdf", 2), other("c.png", 3)],
    );

    assert_eq!(plan, StagePlan::Staged(1));
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "b.pdf");
}

#[test]
fn test_staging_drops_already_queued_pairs() {
    let mut pending = Vec::new();
    merge_candidates(&mut pending, vec![pdf("a.pdf", 10)]);
    let plan = merge_candidates(&mut pending, vec![pdf("a.pdf", 10)]);

    assert_eq!(plan, StagePlan::AlreadyQueued);
    assert_eq!(pending.len(), 1);
}

#[test]
fn test_staging_same_name_different_size_both_kept() {
    let mut pending = Vec::new();
    merge_candidates(&mut pending, vec![pdf("a.pdf", 10)]);
    let plan = merge_candidates(&mut pending, vec![pdf("a.pdf", 11)]);

    assert_eq!(plan, StagePlan::Staged(1));
    assert_eq!(pending.len(), 2);
}

#[test]
fn test_staging_dedupes_within_one_batch() {
    let mut pending = Vec::new();
    let plan = merge_candidates(&mut pending, vec![pdf("a.pdf", 10), pdf("a.pdf", 10)]);

    assert_eq!(plan, StagePlan::Staged(1));
    assert_eq!(pending.len(), 1);
}

#[test]
fn test_pending_set_never_contains_duplicate_pairs() {
    // Arbitrary staging sequences keep the (name, size) pairs unique.
    let mut pending = Vec::new();
    let batches = vec![
        vec![pdf("a.pdf", 1), pdf("b.pdf", 2)],
        vec![pdf("a.pdf", 1), pdf("c.pdf", 3)],
        vec![pdf("b.pdf", 2), pdf("b.pdf", 2), pdf("d.pdf", 4)],
        vec![pdf("a.pdf", 9)],
    ];
    for batch in batches {
        let _ = merge_candidates(&mut pending, batch);
    }

    for (i, file) in pending.iter().enumerate() {
        for later in pending.iter().skip(i + 1) {
            assert!(
                !(file.name == later.name && file.size == later.size),
                "duplicate pair {} ({} bytes)",
                file.name,
                file.size
            );
        }
    }
}

// ============================================================================
// Verdict Matching Tests
// ============================================================================

#[test]
fn test_all_ok_verdicts_become_documents() {
    let pending = vec![queued("a.pdf", 10), queued("b.pdf", 20)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("b.pdf", VerdictStatus::Ok, Some("pdf-2")),
    ];
    let now = Utc::now();
    let outcome = match_verdicts(&pending, &verdicts, now);

    assert_eq!(outcome.accepted.len(), 2);
    assert!(outcome.duplicates.is_empty());
    assert!(outcome.failed.is_empty());

    assert_eq!(outcome.accepted[0].id, "pdf-1");
    assert_eq!(outcome.accepted[0].name, "a.pdf");
    assert_eq!(outcome.accepted[0].size, 10);
    assert_eq!(outcome.accepted[0].upload_date, now);
    assert_eq!(outcome.accepted[1].id, "pdf-2");
}

#[test]
fn test_duplicate_verdict_is_not_confirmed() {
    let pending = vec![queued("a.pdf", 10), queued("b.pdf", 20)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("b.pdf", VerdictStatus::Duplicate, None),
    ];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.duplicates, vec!["b.pdf".to_string()]);
    assert!(outcome.failed.is_empty());
}

#[test]
fn test_unknown_status_counts_as_failed() {
    let pending = vec![queued("a.pdf", 10)];
    let verdicts = vec![verdict("a.pdf", VerdictStatus::Failed, None)];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.failed, vec!["a.pdf".to_string()]);
}

#[test]
fn test_unmatched_file_counts_as_failed() {
    let pending = vec![queued("a.pdf", 10), queued("missing.pdf", 20)];
    let verdicts = vec![verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1"))];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.failed, vec!["missing.pdf".to_string()]);
}

#[test]
fn test_ok_verdict_without_id_counts_as_failed() {
    // A confirmed document's id always comes from the backend.
    let pending = vec![queued("a.pdf", 10)];
    let verdicts = vec![verdict("a.pdf", VerdictStatus::Ok, None)];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.failed, vec!["a.pdf".to_string()]);
}

#[test]
fn test_colliding_names_consume_verdicts_once() {
    // Two queued files share a name but only one verdict came back: the
    // first claims it, the second is unmatched.
    let pending = vec![queued("a.pdf", 10), queued("a.pdf", 99)];
    let verdicts = vec![verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1"))];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].size, 10);
    assert_eq!(outcome.failed, vec!["a.pdf".to_string()]);
}

#[test]
fn test_colliding_names_two_verdicts_matched_in_order() {
    let pending = vec![queued("a.pdf", 10), queued("a.pdf", 99)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("a.pdf", VerdictStatus::Duplicate, None),
    ];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].id, "pdf-1");
    assert_eq!(outcome.duplicates, vec!["a.pdf".to_string()]);
    assert!(outcome.failed.is_empty());
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_summary_all_ok_is_success() {
    let pending = vec![queued("a.pdf", 10), queued("b.pdf", 20)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("b.pdf", VerdictStatus::Ok, Some("pdf-2")),
    ];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());
    let (level, text) = upload_summary(&outcome);

    assert_eq!(level, ToastType::Success);
    assert_eq!(text, "2 uploaded");
}

#[test]
fn test_summary_duplicates_without_failures_is_info() {
    let pending = vec![queued("a.pdf", 10), queued("b.pdf", 20)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("b.pdf", VerdictStatus::Duplicate, None),
    ];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());
    let (level, text) = upload_summary(&outcome);

    assert_eq!(level, ToastType::Info);
    assert_eq!(text, "1 uploaded, 1 duplicate: b.pdf");
}

#[test]
fn test_summary_any_failure_is_error() {
    let pending = vec![queued("a.pdf", 10), queued("b.pdf", 20), queued("c.pdf", 30)];
    let verdicts = vec![
        verdict("a.pdf", VerdictStatus::Ok, Some("pdf-1")),
        verdict("b.pdf", VerdictStatus::Duplicate, None),
        verdict("c.pdf", VerdictStatus::Failed, None),
    ];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());
    let (level, text) = upload_summary(&outcome);

    assert_eq!(level, ToastType::Error);
    assert_eq!(text, "1 uploaded, 1 duplicate: b.pdf, 1 failed: c.pdf");
}

#[test]
fn test_summary_lists_every_affected_filename() {
    let pending = vec![queued("x.pdf", 1), queued("y.pdf", 2)];
    let verdicts = vec![];
    let outcome = match_verdicts(&pending, &verdicts, Utc::now());
    let (level, text) = upload_summary(&outcome);

    assert_eq!(level, ToastType::Error);
    assert_eq!(text, "2 failed: x.pdf, y.pdf");
}

// ============================================================================
// Upload Service Tests
// ============================================================================

fn service() -> UploadService<MemoryStorage> {
    UploadService::new(SessionState::new(MemoryStorage::new()))
}

#[test]
fn test_service_staging_sets_error_status_for_non_pdf() {
    let upload = service();
    upload.add_candidates(vec![other("a.txt", 1)]);

    assert!(upload.pending.get_untracked().is_empty());
    let status = upload.status.get_untracked().expect("status should be set");
    assert_eq!(status.level, ToastType::Error);
    assert_eq!(status.text, "Please select only PDF files");
}

#[test]
fn test_service_staging_reports_already_queued() {
    let upload = service();
    upload.add_candidates(vec![pdf("a.pdf", 10)]);
    upload.add_candidates(vec![pdf("a.pdf", 10)]);

    assert_eq!(upload.pending.get_untracked().len(), 1);
    let status = upload.status.get_untracked().expect("status should be set");
    assert_eq!(status.level, ToastType::Info);
}

#[test]
fn test_service_staging_clears_previous_status() {
    let upload = service();
    upload.add_candidates(vec![other("a.txt", 1)]);
    assert!(upload.status.get_untracked().is_some());

    upload.add_candidates(vec![pdf("a.pdf", 10)]);
    assert!(upload.status.get_untracked().is_none());
}

#[test]
fn test_service_remove_pending() {
    let upload = service();
    upload.add_candidates(vec![pdf("a.pdf", 10), pdf("b.pdf", 20)]);

    upload.remove_pending(0);
    let pending = upload.pending.get_untracked();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "b.pdf");

    // Out-of-range removal is ignored
    upload.remove_pending(7);
    assert_eq!(upload.pending.get_untracked().len(), 1);
}

#[test]
fn test_upload_with_empty_queue_is_noop() {
    let upload = service();
    upload.upload_pending();

    assert!(upload.pending.get_untracked().is_empty());
    assert!(!upload.is_uploading.get_untracked());
    assert!(upload.status.get_untracked().is_none());
}

#[test]
fn test_upload_ignored_while_in_flight() {
    let upload = service();
    upload.add_candidates(vec![pdf("a.pdf", 10)]);
    upload.is_uploading.set(true);

    upload.upload_pending();
    assert_eq!(upload.pending.get_untracked().len(), 1);
}
