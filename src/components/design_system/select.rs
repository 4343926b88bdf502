use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown component
#[component]
pub fn Select(
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    /// Whether the select is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let base_class = "bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded px-3 py-1.5 text-sm text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500/50 focus:border-blue-500";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        if let Some(ref callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select
            class=full_class
            disabled=disabled
            on:change=handle_change
            prop:value=move || value.get()
        >
            {children()}
        </select>
    }
}
