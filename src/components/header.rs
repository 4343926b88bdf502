//! Application header: branding, session reset, model selection, prompt
//! settings, clear-chat, and the theme toggle.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_CLOCKWISE, GEAR, MOON, ROBOT, SUN, X};

use crate::components::design_system::{Button, ButtonVariant, Select};
use crate::services::chat::use_chat_service;
use crate::services::session::{use_session_state, ChatModel};
use crate::services::theme_service::{use_theme_state, ThemeMode};

#[component]
pub fn Header(
    /// Opens the custom prompt dialog
    prompt_modal_open: RwSignal<bool>,
) -> impl IntoView {
    let session = use_session_state();
    let chat = use_chat_service();
    let theme = use_theme_state();

    let has_custom_prompt = move || !session.custom_prompt.get().is_empty();
    let model_value = Signal::derive(move || session.model.get().as_str().to_string());

    let on_model_change = Callback::new(move |value: String| {
        if let Some(model) = ChatModel::from_str(&value) {
            session.set_model(model);
        }
    });

    view! {
        <header class="border-b border-gray-200 dark:border-gray-700 bg-white/70 dark:bg-gray-900/70 backdrop-blur sticky top-0 z-40">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-blue-600 rounded-lg flex items-center justify-center text-white">
                        <Icon icon=ROBOT size="22px" />
                    </div>
                    <div>
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">"PDF Chat"</h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400 hidden sm:block">
                            "Chat with your documents using AI"
                        </p>
                    </div>
                </div>

                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=move |_: ev::MouseEvent| session.reset_session()
                        title="Release this session and start fresh"
                    >
                        <Icon icon=ARROW_CLOCKWISE size="14px" />
                        <span class="hidden sm:inline">"Refresh"</span>
                    </Button>

                    <Select value=model_value on_change=on_model_change>
                        {ChatModel::all()
                            .iter()
                            .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                            .collect_view()}
                    </Select>

                    <Button
                        variant=ButtonVariant::Outline
                        class="relative"
                        on_click=move |_: ev::MouseEvent| prompt_modal_open.set(true)
                        title="Customize the prompt sent with every question"
                    >
                        <span class="pr-1 hidden sm:inline">"Customize your prompt"</span>
                        <Icon icon=GEAR size="14px" />
                        {move || {
                            has_custom_prompt().then(|| view! {
                                <span class="absolute top-1 right-1 w-2 h-2 rounded-full bg-blue-500"></span>
                            })
                        }}
                    </Button>

                    <Button
                        variant=ButtonVariant::Danger
                        on_click=move |_: ev::MouseEvent| chat.clear_history()
                    >
                        <span class="pr-1 hidden sm:inline">"Clear Chat"</span>
                        <Icon icon=X size="14px" />
                    </Button>

                    <Button
                        variant=ButtonVariant::Outline
                        on_click=move |_: ev::MouseEvent| theme.toggle()
                        title="Toggle theme"
                    >
                        {move || {
                            if theme.mode.get() == ThemeMode::Dark {
                                view! { <Icon icon=SUN size="14px" /> }.into_any()
                            } else {
                                view! { <Icon icon=MOON size="14px" /> }.into_any()
                            }
                        }}
                    </Button>
                </div>
            </div>
        </header>
    }
}
