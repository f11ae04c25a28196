use leptos::prelude::*;

/// Checkbox whose checked position means light mode. The theme controller
/// finds it by `id` once the page is mounted and owns its state from then on.
#[component]
pub fn ThemeSwitch(
    /// Element id the controller looks up, e.g. "dark-mode-toggle"
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <label class="theme-switch" for=id.clone() title="Toggle light/dark theme">
            <input type="checkbox" class="theme-switch-input" id=id.clone() />
            <span class="theme-switch-track">
                <span class="theme-switch-icon theme-switch-dark">"\u{263E}"</span>
                <span class="theme-switch-icon theme-switch-light">"\u{2600}"</span>
            </span>
        </label>
    }
}
