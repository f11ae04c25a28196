use leptos::prelude::*;

use crate::browser;
use crate::components::theme_switch::ThemeSwitch;

#[component]
pub fn App() -> impl IntoView {
    let config = browser::page_config();
    let toggle_id = config.toggle_id.clone();

    // Effects run after the view is mounted, so the switch is in the DOM here
    Effect::new(move |_| {
        if let Err(e) = browser::start(config.clone()) {
            log::error!("Theme controller failed to start: {}", e);
            wasm_bindgen::throw_str(&String::from(e));
        }
    });

    view! {
        <header class="site-header">
            <ThemeSwitch id=toggle_id />
        </header>
    }
}
