use contracts::domain::locations::UserLocation;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::locations::api;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::icons::icon;

/// Delivery address lookup by id. A failed lookup clears the previous
/// result so stale data is never shown against a new id.
#[component]
pub fn LocationsPage() -> impl IntoView {
    let (location, set_location) = signal::<Option<UserLocation>>(None);
    let (location_id, set_location_id) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let search = move || {
        let raw = location_id.get_untracked();
        let id: i64 = match raw.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                set_error.set(Some("Please enter a numeric location ID.".to_string()));
                return;
            }
        };

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_location(id).await {
                Ok(data) => set_location.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to fetch location {}: {}", id, e);
                    set_error.set(Some(
                        "Failed to load location. Please check the ID and try again.".to_string(),
                    ));
                    set_location.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"User Locations"</h1>
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("search")}
                    "Search Location by ID"
                </h3>
                <form class="form-row" on:submit=on_submit>
                    <input
                        type="number"
                        class="input"
                        placeholder="Enter location ID..."
                        prop:value=move || location_id.get()
                        on:input=move |ev| set_location_id.set(event_target_value(&ev))
                    />
                    <button class="btn-primary" type="submit" disabled=move || loading.get()>
                        {icon("search")}
                        {move || if loading.get() { "Searching..." } else { "Search" }}
                    </button>
                </form>
            </div>

            {move || {
                error.get().map(|err| {
                    view! { <div class="alert alert--error"><span>{err}</span></div> }
                })
            }}

            {move || {
                location.get().map(|loc| {
                    let (status, label) = if loc.verify {
                        ("active", "Verified")
                    } else {
                        ("pending", "Unverified")
                    };
                    let address = format!(
                        "{}, {}{}",
                        loc.street,
                        loc.city,
                        if loc.landmark.is_empty() {
                            String::new()
                        } else {
                            format!(" (near {})", loc.landmark)
                        }
                    );
                    view! {
                        <div class="card">
                            <h3 class="card__title">
                                {icon("map-pin")}
                                {loc.name.clone()}
                                <StatusBadge status=status>{label}</StatusBadge>
                            </h3>
                            <div class="detail-grid">
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"Contact"</div>
                                    <div class="detail-grid__value">
                                        {icon("phone")}
                                        {loc.phone_number.clone()}
                                    </div>
                                </div>
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"Alternate"</div>
                                    <div class="detail-grid__value">
                                        {if loc.alternate_number.is_empty() {
                                            "\u{2014}".to_string()
                                        } else {
                                            loc.alternate_number.clone()
                                        }}
                                    </div>
                                </div>
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"Address"</div>
                                    <div class="detail-grid__value">{address}</div>
                                </div>
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"State"</div>
                                    <div class="detail-grid__value">{loc.state.clone()}</div>
                                </div>
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"PIN Code"</div>
                                    <div class="detail-grid__value cell-mono">{loc.pin_code.clone()}</div>
                                </div>
                                <div class="detail-grid__item">
                                    <div class="detail-grid__label">"Coordinates"</div>
                                    <div class="detail-grid__value">
                                        {format!("{:.5}, {:.5}", loc.latitude, loc.longitude)}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
