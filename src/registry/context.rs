use leptos::prelude::*;

use crate::Registries;

/// Call this in your root component to make your own profiles and avatars available to every
/// component below it.
///
/// ```
/// # use leptos::prelude::*;
/// # use leptos_discord_components::{provide_registries, Profile, Registries};
/// #
/// #[component]
/// pub fn App() -> impl IntoView {
///     provide_registries(Registries::builtin().with_profile(
///         "ada",
///         Profile {
///             author: Some("Ada Lovelace".to_string()),
///             ..Default::default()
///         },
///     ));
///
///     view! { "..." }
/// }
/// ```
#[inline(always)]
pub fn provide_registries(registries: Registries) {
    provide_context(registries);
}

/// Returns the registries provided by [`provide_registries`], or the built-in ones if nothing was
/// provided.
pub fn use_registries() -> Registries {
    use_context().unwrap_or_else(|| super::BUILTIN.clone())
}
