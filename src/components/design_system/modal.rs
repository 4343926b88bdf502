use leptos::ev;
use leptos::prelude::*;

/// A modal dialog component
/// Note: Due to Leptos Children semantics, the modal content is always
/// rendered and the container is shown/hidden via CSS.
#[component]
pub fn Modal(
    /// Whether the modal is visible
    is_open: RwSignal<bool>,
    /// Optional title for the modal header
    #[prop(into, optional)]
    title: String,
    /// Additional CSS classes for the modal content
    #[prop(into, optional)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_backdrop_click = move |_| {
        is_open.set(false);
    };

    let handle_content_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
    };

    let has_title = !title.is_empty();

    view! {
        <div
            class="fixed inset-0 bg-black/70 backdrop-blur-sm flex items-center justify-center z-50 transition-opacity duration-200"
            style:display=move || if is_open.get() { "flex" } else { "none" }
            on:click=handle_backdrop_click
        >
            <div
                class=format!("bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-700 shadow-2xl overflow-hidden {class}")
                on:click=handle_content_click
            >
                {if has_title {
                    Some(view! {
                        <div class="p-4 flex items-center border-b border-gray-200 dark:border-gray-700">
                            <h2 class="text-lg font-bold text-gray-900 dark:text-white">{title.clone()}</h2>
                        </div>
                    })
                } else {
                    None
                }}
                {children()}
            </div>
        </div>
    }
}
