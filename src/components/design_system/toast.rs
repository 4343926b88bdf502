use leptos::prelude::*;

use crate::services::notification_service::{
    remove_notification, use_notification_state, Notification, ToastType,
};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || state.notifications.get().into_iter().map(|notification| {
                view! {
                    <Toast notification=notification />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let (is_exiting, set_is_exiting) = signal(false);
    let id = notification.id;

    // Handle close
    let close = move || {
        set_is_exiting.set(true);
        // Wait for animation then remove
        set_timeout(
            move || {
                remove_notification(id);
            },
            std::time::Duration::from_millis(300),
        );
    };

    // Auto-close if duration is set
    if let Some(duration) = notification.duration_ms {
        set_timeout(
            move || {
                close();
            },
            std::time::Duration::from_millis(duration),
        );
    }

    let border_class = match notification.toast_type {
        ToastType::Success => "border-l-4 border-l-green-500",
        ToastType::Error => "border-l-4 border-l-red-500",
        ToastType::Info => "border-l-4 border-l-blue-500",
    };

    let icon = match notification.toast_type {
        ToastType::Success => view! { <span class="text-green-500">"✓"</span> },
        ToastType::Error => view! { <span class="text-red-500">"⚠"</span> },
        ToastType::Info => view! { <span class="text-blue-500">"i"</span> },
    };

    view! {
        <div
            class=move || format!(
                "pointer-events-auto min-w-[280px] max-w-md p-4 rounded shadow-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 flex gap-3 transition-all duration-300 transform {} {}",
                border_class,
                if is_exiting.get() { "translate-x-full opacity-0" } else { "translate-x-0 opacity-100" }
            )
            role="alert"
        >
            <div class="flex-shrink-0 text-lg">{icon}</div>
            <div class="flex-1 flex flex-col gap-1">
                <div class="font-medium text-gray-900 dark:text-white">
                    {notification.title}
                </div>
                {notification.message.map(|msg| view! {
                    <div class="text-sm text-gray-500 dark:text-gray-400 break-words">{msg}</div>
                })}
            </div>
            <button
                class="flex-shrink-0 text-gray-400 hover:text-gray-700 dark:hover:text-white text-sm"
                on:click=move |_| remove_notification(id)
            >
                "✕"
            </button>
        </div>
    }
}
