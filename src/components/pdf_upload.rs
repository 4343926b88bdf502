//! PDF selection and upload panel.
//!
//! Files arrive by drag-and-drop or the hidden file input, wait in the
//! shared pending queue, and are submitted as one batch. The panel has a
//! full variant for the empty state and a compact variant for "add more"
//! placements.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, FILE_PDF, PLUS, UPLOAD_SIMPLE, X};
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{Button, ButtonVariant, Card, CardBody};
use crate::services::notification_service::ToastType;
use crate::services::upload::{
    collect_candidates, file_list_to_vec, use_upload_service, AppUploadService,
};
use crate::utils::formatting::format_file_size;

#[component]
pub fn PdfUpload(
    /// Compact rendering for the sidebar / "add more" placement
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let upload = use_upload_service();
    let is_drag_over = RwSignal::new(false);

    let stage_file_list = move |files: Option<web_sys::FileList>| {
        let Some(files) = files else { return };
        let files = file_list_to_vec(&files);
        spawn_local(async move {
            let candidates = collect_candidates(files).await;
            upload.add_candidates(candidates);
        });
    };

    let on_file_select = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        stage_file_list(input.files());
        // Allow re-selecting the same file later
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(false);
        stage_file_list(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(true);
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        is_drag_over.set(false);
    };

    let on_upload_click = move |_: ev::MouseEvent| upload.upload_pending();

    let upload_label = move || {
        let count = upload.pending.get().len();
        if upload.is_uploading.get() {
            "Uploading...".to_string()
        } else if count == 1 {
            "Upload 1 PDF".to_string()
        } else {
            format!("Upload {} PDFs", count)
        }
    };

    let input_id = if compact { "pdf-upload-compact" } else { "pdf-upload" };

    if compact {
        view! {
            <Card class="w-full">
                <CardBody>
                    <div class="flex items-center gap-4">
                        <div class="flex-1">
                            <input
                                type="file"
                                multiple
                                accept=".pdf"
                                on:change=on_file_select
                                class="hidden"
                                id=input_id
                            />
                            <label
                                for=input_id
                                class="flex items-center gap-2 cursor-pointer text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white transition-colors"
                            >
                                <Icon icon=PLUS size="16px" />
                                <span>"Add more PDFs"</span>
                            </label>
                        </div>
                        {move || {
                            (!upload.pending.get().is_empty()).then(|| view! {
                                <Button
                                    on_click=on_upload_click
                                    disabled=Signal::derive(move || upload.is_uploading.get())
                                    loading=Signal::derive(move || upload.is_uploading.get())
                                    class="text-sm py-1"
                                >
                                    {upload_label}
                                </Button>
                            })
                        }}
                    </div>
                    <PendingList upload=upload dense=true />
                    <StatusLine upload=upload />
                </CardBody>
            </Card>
        }
        .into_any()
    } else {
        view! {
            <Card class="w-full max-w-2xl mx-auto">
                <CardBody class="p-8">
                    <div class="text-center mb-6">
                        <div class="flex justify-center mb-4 text-gray-400">
                            <Icon icon=UPLOAD_SIMPLE size="48px" />
                        </div>
                        <h2 class="text-2xl font-bold mb-2 text-gray-900 dark:text-white">
                            "Upload Your PDFs"
                        </h2>
                        <p class="text-gray-500 dark:text-gray-400">
                            "Upload one or more PDF files to start chatting with your documents"
                        </p>
                    </div>

                    <div
                        class=move || format!(
                            "border-2 border-dashed rounded-lg p-8 text-center transition-all {}",
                            if is_drag_over.get() {
                                "border-blue-500 bg-blue-500/10"
                            } else {
                                "border-gray-300 dark:border-gray-600"
                            }
                        )
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <input
                            type="file"
                            multiple
                            accept=".pdf"
                            on:change=on_file_select
                            class="hidden"
                            id=input_id
                        />
                        <label for=input_id class="cursor-pointer block">
                            <div class="flex justify-center mb-4 text-gray-400">
                                <Icon icon=FILE_PDF size="64px" />
                            </div>
                            <p class="text-lg font-medium mb-2 text-gray-900 dark:text-white">
                                "Drop PDF files here or click to browse"
                            </p>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Supports multiple PDF files"
                            </p>
                        </label>
                    </div>

                    <PendingList upload=upload dense=false />
                    <StatusLine upload=upload />

                    {move || {
                        (!upload.pending.get().is_empty()).then(|| view! {
                            <div class="mt-6">
                                <Button
                                    on_click=on_upload_click
                                    disabled=Signal::derive(move || upload.is_uploading.get())
                                    loading=Signal::derive(move || upload.is_uploading.get())
                                    class="w-full"
                                >
                                    {upload_label}
                                </Button>
                            </div>
                        })
                    }}
                </CardBody>
            </Card>
        }
        .into_any()
    }
}

/// The queued files with per-file remove buttons.
#[component]
fn PendingList(upload: AppUploadService, dense: bool) -> impl IntoView {
    view! {
        <div class=move || {
            if upload.pending.get().is_empty() {
                "hidden"
            } else if dense {
                "mt-3 space-y-2"
            } else {
                "mt-6 space-y-2"
            }
        }>
            <For
                each=move || {
                    let v: Vec<_> = upload.pending.get().into_iter().enumerate().collect();
                    v
                }
                key=|(i, file)| (*i, file.name.clone(), file.size)
                children=move |(i, file)| {
                    view! {
                        <div class="flex items-center justify-between p-3 bg-gray-100 dark:bg-gray-700/50 rounded-lg">
                            <div class="flex items-center gap-3 min-w-0">
                                <span class="text-gray-500 dark:text-gray-400 flex-shrink-0">
                                    <Icon icon=FILE_PDF size="20px" />
                                </span>
                                <div class="min-w-0">
                                    <p class="font-medium text-sm truncate text-gray-900 dark:text-white" title=file.name.clone()>
                                        {file.name.clone()}
                                    </p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                        {format_file_size(file.size)}
                                    </p>
                                </div>
                            </div>
                            <Button
                                variant=ButtonVariant::Ghost
                                on_click=move |_: ev::MouseEvent| upload.remove_pending(i)
                                class="px-2 py-1"
                                title="Remove from queue"
                            >
                                <Icon icon=X size="14px" />
                            </Button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Inline status line colored by severity.
#[component]
fn StatusLine(upload: AppUploadService) -> impl IntoView {
    view! {
        {move || {
            upload.status.get().map(|status| {
                let color = match status.level {
                    ToastType::Error => "text-red-500",
                    ToastType::Info => "text-blue-500",
                    ToastType::Success => "text-green-500",
                };
                view! {
                    <p class=format!("text-sm mt-3 {}", color)>{status.text}</p>
                }
            })
        }}
    }
}
