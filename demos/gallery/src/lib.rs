use leptos_discord_components::Registries;

pub mod app;

#[cfg(feature = "ssr")]
#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub leptos_options: leptos::prelude::LeptosOptions,
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

/// The profiles and avatars shown in the gallery.
pub fn gallery_registries() -> anyhow::Result<Registries> {
    Registries::from_json(include_str!("../registries.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_registries_parse() {
        let registries = gallery_registries().unwrap();

        for id in ["ada", "helper", "announcements"] {
            assert!(registries.profiles().get(id).is_some(), "missing profile {id}");
        }
        assert!(registries.avatars().get("ada").is_some());
    }
}
