use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::design_system::ToastContainer;
use crate::components::header::Header;
use crate::components::pdf_sidebar::PdfSidebar;
use crate::components::pdf_upload::PdfUpload;
use crate::components::prompt_settings::PromptSettings;
use crate::services::chat::provide_chat_service;
use crate::services::notification_service::provide_notification_state;
use crate::services::session::{provide_session_state, use_session_state};
use crate::services::theme_service::{apply_theme_class, provide_theme_state, use_theme_state};
use crate::services::upload::provide_upload_service;

/// Mobile tab selection
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Upload,
    Chat,
    Documents,
}

impl Tab {
    fn label(&self, doc_count: usize) -> String {
        match self {
            Tab::Upload => "Upload".to_string(),
            Tab::Chat => "Chat".to_string(),
            Tab::Documents => format!("PDFs ({})", doc_count),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_notification_state();
    provide_theme_state();
    provide_session_state();
    let session = use_session_state();
    provide_upload_service(session);
    provide_chat_service(session);

    // Mirror the theme preference onto the document element
    let theme = use_theme_state();
    Effect::new(move |_| apply_theme_class(theme.mode.get()));

    let prompt_modal_open = RwSignal::new(false);
    let active_tab = RwSignal::new(Tab::Upload);

    let has_pdfs = move || !session.documents.get().is_empty();

    // Jump to the chat tab when the first document lands
    let had_documents = StoredValue::new(!session.documents.get_untracked().is_empty());
    Effect::new(move |_| {
        let has = has_pdfs();
        if has && !had_documents.get_value() {
            active_tab.set(Tab::Chat);
        }
        had_documents.set_value(has);
    });

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white">
            <Header prompt_modal_open=prompt_modal_open />

            <main class="container mx-auto px-4 py-6">
                <div class="max-w-6xl mx-auto">
                    // Desktop layout: sidebar plus main pane
                    <div class="hidden lg:grid lg:grid-cols-4 lg:gap-6 lg:h-[calc(100vh-8rem)]">
                        <div class="lg:col-span-1 flex flex-col">
                            <PdfSidebar />
                        </div>
                        <div class="lg:col-span-3">
                            {move || {
                                if has_pdfs() {
                                    view! { <ChatPanel /> }.into_any()
                                } else {
                                    view! {
                                        <div class="h-full flex items-center justify-center">
                                            <PdfUpload />
                                        </div>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>

                    // Mobile layout: tabbed
                    <div class="lg:hidden">
                        <div class="grid grid-cols-3 gap-1 bg-gray-200 dark:bg-gray-800 rounded-lg p-1">
                            {[Tab::Upload, Tab::Chat, Tab::Documents]
                                .into_iter()
                                .map(|tab| {
                                    let is_locked = move || tab == Tab::Chat && !has_pdfs();
                                    view! {
                                        <button
                                            class=move || format!(
                                                "py-2 text-sm rounded-md transition-colors {} {}",
                                                if active_tab.get() == tab {
                                                    "bg-white dark:bg-gray-700 font-medium text-gray-900 dark:text-white"
                                                } else {
                                                    "text-gray-500 dark:text-gray-400"
                                                },
                                                if is_locked() { "opacity-50 cursor-not-allowed" } else { "" },
                                            )
                                            disabled=is_locked
                                            on:click=move |_| {
                                                if !is_locked() {
                                                    active_tab.set(tab);
                                                }
                                            }
                                        >
                                            {move || tab.label(session.documents.get().len())}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-6">
                            {move || match active_tab.get() {
                                Tab::Upload => view! { <PdfUpload /> }.into_any(),
                                Tab::Chat => {
                                    if has_pdfs() {
                                        view! { <ChatPanel /> }.into_any()
                                    } else {
                                        view! {
                                            <p class="text-center text-gray-500 dark:text-gray-400 py-12">
                                                "Upload a PDF to start chatting"
                                            </p>
                                        }
                                        .into_any()
                                    }
                                }
                                Tab::Documents => view! { <PdfSidebar /> }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </main>

            <PromptSettings is_open=prompt_modal_open />
            <ToastContainer />
        </div>
    }
}
