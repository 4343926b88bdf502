//! Conversation view: transcript, typing indicator, and the composer.

use chrono::Local;
use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, PAPER_PLANE_TILT, ROBOT, USER};

use crate::components::design_system::{Button, Card, CardBody, Textarea, TypingIndicator};
use crate::services::chat::use_chat_service;
use crate::services::session::{use_session_state, ChatMessage, MessageRole};
use crate::utils::formatting::format_message_time;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = use_session_state();
    let chat = use_chat_service();
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        session.messages.track();
        chat.is_sending.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_send_click = move |_: ev::MouseEvent| chat.send_message();

    let on_keydown = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            chat.send_message();
        }
    });

    let send_disabled = Signal::derive(move || {
        chat.input.get().trim().is_empty() || chat.is_sending.get()
    });

    view! {
        <div class="flex flex-col h-full max-h-[calc(100vh-12rem)]">
            // Messages area
            <div node_ref=scroll_ref class="flex-1 overflow-y-auto p-4 space-y-4">
                {move || {
                    session.messages.get().is_empty().then(|| view! {
                        <div class="text-center py-12">
                            <div class="flex justify-center mb-4 text-gray-400">
                                <Icon icon=ROBOT size="48px" />
                            </div>
                            <h3 class="text-lg font-medium mb-2 text-gray-900 dark:text-white">
                                "Start a conversation"
                            </h3>
                            <p class="text-gray-500 dark:text-gray-400">
                                {move || format!(
                                    "Ask questions about your uploaded PDFs using the {} model",
                                    session.model.get().as_str()
                                )}
                            </p>
                        </div>
                    })
                }}

                <For
                    each=move || session.messages.get()
                    key=|msg| msg.id.clone()
                    children=move |msg| view! { <MessageBubble message=msg /> }
                />

                {move || {
                    chat.is_sending.get().then(|| view! {
                        <div class="flex justify-start">
                            <div class="flex items-start gap-2">
                                <div class="flex-shrink-0 w-8 h-8 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-500 dark:text-gray-400 flex items-center justify-center">
                                    <Icon icon=ROBOT size="16px" />
                                </div>
                                <Card>
                                    <CardBody class="p-3">
                                        <TypingIndicator />
                                    </CardBody>
                                </Card>
                            </div>
                        </div>
                    })
                }}
            </div>

            // Input area
            <div class="border-t border-gray-200 dark:border-gray-700 p-4">
                <div class="flex gap-2">
                    <div class="flex-1">
                        <Textarea
                            value=chat.input
                            placeholder="Ask a question about your PDFs..."
                            disabled=Signal::derive(move || chat.is_sending.get())
                            on_keydown=on_keydown
                            rows=2
                        />
                    </div>
                    <Button
                        on_click=on_send_click
                        disabled=send_disabled
                        class="px-6 self-stretch"
                        title="Send"
                    >
                        <Icon icon=PAPER_PLANE_TILT size="16px" />
                    </Button>
                </div>
                <div class="flex items-center justify-between mt-2 text-xs text-gray-500 dark:text-gray-400">
                    <span>"Press Enter to send, Shift+Enter for new line"</span>
                    <span>{move || format!("Model: {}", session.model.get().as_str())}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let local_time = message.timestamp.with_timezone(&Local);

    let row_class = if is_user {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let inner_class = if is_user {
        "flex max-w-[80%] flex-row-reverse items-start gap-2"
    } else {
        "flex max-w-[80%] flex-row items-start gap-2"
    };
    let avatar_class = if is_user {
        "flex-shrink-0 w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center"
    } else {
        "flex-shrink-0 w-8 h-8 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-500 dark:text-gray-400 flex items-center justify-center"
    };
    let bubble_class = if is_user {
        "bg-blue-600 text-white rounded-lg"
    } else {
        "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 text-gray-900 dark:text-white rounded-lg"
    };
    let time_class = if is_user {
        "text-xs mt-2 text-blue-100/70"
    } else {
        "text-xs mt-2 text-gray-500 dark:text-gray-400"
    };

    view! {
        <div class=row_class>
            <div class=inner_class>
                <div class=avatar_class>
                    {if is_user {
                        view! { <Icon icon=USER size="16px" /> }.into_any()
                    } else {
                        view! { <Icon icon=ROBOT size="16px" /> }.into_any()
                    }}
                </div>
                <div class=format!("{} shadow-sm", bubble_class)>
                    <div class="p-3">
                        <p class="text-sm whitespace-pre-wrap">{message.content.clone()}</p>
                        <p class=time_class>{format_message_time(&local_time)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
