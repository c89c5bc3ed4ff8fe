use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Search box with a 300 ms debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Currently applied filter value (for the active highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired once typing settles
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce.
    let (input_value, set_input_value) = signal(String::new());
    let generation = StoredValue::new(0u32);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Only the latest pending edit is allowed to fire.
        let current = generation.get_value() + 1;
        generation.set_value(current);

        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.set_value(generation.get_value() + 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            class="search-input__clear"
                            on:click=clear_filter
                            title="Clear"
                        >
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
