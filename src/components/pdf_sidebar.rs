//! Confirmed document list with a compact upload panel beneath it.

use chrono::Local;
use leptos::prelude::*;
use phosphor_leptos::{Icon, CALENDAR, FILE_PDF, HARD_DRIVE};

use crate::components::design_system::{Card, CardBody, CardHeader};
use crate::components::pdf_upload::PdfUpload;
use crate::services::session::use_session_state;
use crate::utils::formatting::{format_file_size, format_upload_date};

#[component]
pub fn PdfSidebar() -> impl IntoView {
    let session = use_session_state();

    view! {
        <div class="flex flex-col h-full">
            <Card class="flex-1 flex flex-col overflow-hidden">
                <CardHeader>
                    <h3 class="flex items-center gap-2 font-semibold text-gray-900 dark:text-white">
                        <Icon icon=FILE_PDF size="18px" />
                        <span>
                            {move || format!("Uploaded PDFs ({})", session.documents.get().len())}
                        </span>
                    </h3>
                </CardHeader>

                <CardBody class="flex-1 overflow-y-auto">
                    {move || {
                        if session.documents.get().is_empty() {
                            view! {
                                <div class="text-center py-8">
                                    <div class="flex justify-center mb-4 text-gray-400">
                                        <Icon icon=FILE_PDF size="48px" />
                                    </div>
                                    <p class="text-gray-500 dark:text-gray-400">"No PDFs uploaded yet"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    <For
                                        each=move || session.documents.get()
                                        key=|doc| doc.id.clone()
                                        children=move |doc| {
                                            let local_date = doc.upload_date.with_timezone(&Local);
                                            view! {
                                                <div class="bg-gray-100 dark:bg-gray-700/50 rounded-lg p-4">
                                                    <div class="flex items-start gap-3">
                                                        <div class="flex-shrink-0 w-10 h-10 bg-blue-500/10 rounded-lg flex items-center justify-center text-blue-500">
                                                            <Icon icon=FILE_PDF size="20px" />
                                                        </div>
                                                        <div class="flex-1 min-w-0">
                                                            <h4 class="font-medium text-sm truncate text-gray-900 dark:text-white" title=doc.name.clone()>
                                                                {doc.name.clone()}
                                                            </h4>
                                                            <div class="flex items-center gap-4 mt-2 text-xs text-gray-500 dark:text-gray-400">
                                                                <div class="flex items-center gap-1">
                                                                    <Icon icon=HARD_DRIVE size="12px" />
                                                                    <span>{format_file_size(doc.size)}</span>
                                                                </div>
                                                                <div class="flex items-center gap-1">
                                                                    <Icon icon=CALENDAR size="12px" />
                                                                    <span>{format_upload_date(&local_date)}</span>
                                                                </div>
                                                            </div>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </CardBody>
            </Card>

            <div class="mt-4">
                <PdfUpload compact=true />
            </div>
        </div>
    }
}
