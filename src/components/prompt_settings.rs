//! Custom prompt dialog.
//!
//! Edits happen on a draft that is only committed on save, so cancelling
//! never touches the stored prompt.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, QUESTION};

use crate::components::design_system::{Button, ButtonVariant, Card, CardBody, CardHeader, Modal, Textarea};
use crate::services::session::use_session_state;

const EXAMPLE_PROMPTS: [(&str, &str); 3] = [
    (
        "Academic Research Assistant",
        "You are an academic research assistant. When answering questions about the uploaded documents, provide detailed analysis with citations and references. Focus on scholarly interpretation and critical thinking.",
    ),
    (
        "Legal Document Analyzer",
        "You are a legal document analyzer. When reviewing documents, identify key legal concepts, potential issues, and important clauses. Provide clear explanations of legal terminology and implications.",
    ),
    (
        "Technical Documentation Helper",
        "You are a technical documentation expert. When answering questions, provide step-by-step explanations, highlight important technical details, and suggest best practices based on the document content.",
    ),
];

#[component]
pub fn PromptSettings(is_open: RwSignal<bool>) -> impl IntoView {
    let session = use_session_state();
    let draft = RwSignal::new(String::new());
    let show_examples = RwSignal::new(false);

    // Re-seed the draft each time the dialog opens
    Effect::new(move |_| {
        if is_open.get() {
            draft.set(session.custom_prompt.get_untracked());
        }
    });

    let on_save = move |_: ev::MouseEvent| {
        session.set_custom_prompt(draft.get_untracked());
        is_open.set(false);
    };

    let on_cancel = move |_: ev::MouseEvent| is_open.set(false);

    let on_clear = move |_: ev::MouseEvent| draft.set(String::new());

    view! {
        <Modal is_open=is_open title="Custom Prompt Settings" class="max-w-2xl w-full max-h-[80vh] overflow-y-auto">
            <div class="p-6 space-y-6">
                <div>
                    <div class="flex items-center justify-between mb-2">
                        <label class="text-sm font-medium text-gray-900 dark:text-white">
                            "Custom Prompt"
                        </label>
                        <Button
                            variant=ButtonVariant::Ghost
                            class="px-2 py-1"
                            on_click=move |_: ev::MouseEvent| show_examples.update(|v| *v = !*v)
                            title="Show example prompts"
                        >
                            <Icon icon=QUESTION size="16px" />
                        </Button>
                    </div>
                    <Textarea
                        value=draft
                        placeholder="Enter your custom prompt here. This will be included in all chat requests to provide context and instructions to the AI model..."
                        rows=5
                    />
                    <p class="text-xs text-gray-500 dark:text-gray-400 mt-2">
                        "This prompt will be sent with every question to provide context and instructions to the AI model. Leave empty to use the default system prompt."
                    </p>
                </div>

                {move || {
                    show_examples.get().then(|| view! {
                        <div>
                            <h3 class="text-sm font-medium mb-3 text-gray-900 dark:text-white">
                                "Example Prompts"
                            </h3>
                            <div class="space-y-3">
                                {EXAMPLE_PROMPTS.iter().map(|(title, prompt)| {
                                    let prompt_text = *prompt;
                                    view! {
                                        <Card class="bg-gray-50 dark:bg-gray-800/50">
                                            <CardHeader class="py-2">
                                                <span class="text-sm font-medium text-gray-900 dark:text-white">
                                                    {*title}
                                                </span>
                                            </CardHeader>
                                            <CardBody class="pt-2">
                                                <p class="text-xs text-gray-500 dark:text-gray-400 mb-2">
                                                    {prompt_text}
                                                </p>
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    class="text-xs py-1"
                                                    on_click=move |_: ev::MouseEvent| draft.set(prompt_text.to_string())
                                                >
                                                    "Use This Prompt"
                                                </Button>
                                            </CardBody>
                                        </Card>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    })
                }}

                <div class="flex items-center justify-between pt-4 border-t border-gray-200 dark:border-gray-700">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=on_clear
                        disabled=Signal::derive(move || draft.get().is_empty())
                    >
                        "Clear"
                    </Button>
                    <div class="flex gap-2">
                        <Button variant=ButtonVariant::Outline on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button on_click=on_save>
                            "Save"
                        </Button>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
