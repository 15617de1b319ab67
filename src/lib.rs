//! Fake Discord-style message components for Leptos, for documentation and mockups.
//!
//! ## Usage
//!
//! ```
//! # use leptos::prelude::*;
//! # use leptos_discord_components::DiscordThreadMessage;
//! #
//! #[component]
//! pub fn Thread() -> impl IntoView {
//!     view! {
//!         <DiscordThreadMessage author="Ada" role_color="#ff0000" edited=true>
//!             "Has anyone seen my notes on the Analytical Engine?"
//!         </DiscordThreadMessage>
//!
//!         <DiscordThreadMessage profile="babbage" relative_timestamp="just now">
//!             "They're in the drawer."
//!         </DiscordThreadMessage>
//!     }
//! }
//! ```
//!
//! Authors that show up again and again can be registered once as profiles. Provide them in your
//! root component:
//!
//! ```
//! # use leptos::prelude::*;
//! # use leptos_discord_components::{provide_registries, Profile, Registries};
//! #
//! #[component]
//! pub fn App() -> impl IntoView {
//!     provide_registries(
//!         Registries::builtin()
//!             .with_avatar("babbage", "/avatars/babbage.png")
//!             .with_profile(
//!                 "babbage",
//!                 Profile {
//!                     author: Some("Charles Babbage".to_string()),
//!                     avatar: Some("babbage".to_string()),
//!                     ..Default::default()
//!                 },
//!             ),
//!     );
//!
//!     view! { "..." }
//! }
//! ```
//!
//! Or load them from JSON with [`Registries::from_json`].
//!
//! Unknown profiles and avatars never fail. They fall back to the attributes set on the message and
//! the default avatar.

pub mod components;
pub mod profile;
pub mod registry;

pub use crate::components::*;
pub use crate::profile::{Badge, ResolvedProfile, ThreadMessageAttrs, resolve_profile};
pub use crate::registry::*;
