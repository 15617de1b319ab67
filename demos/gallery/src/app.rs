use leptos::prelude::*;
use leptos_discord_components::{DiscordThreadMessage, Registries, provide_registries};
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::gallery_registries;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_registries(gallery_registries().unwrap_or_else(|err| {
        tracing::error!("Falling back to the built-in registries: {err:#}");

        Registries::builtin()
    }));

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery.css" />

        <Title text="Discord thread messages" />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=Gallery />
                </Routes>
            </main>
        </Router>
    }
}

/// Every variant of the thread message next to each other.
#[component]
fn Gallery() -> impl IntoView {
    view! {
        <h1>"Thread messages"</h1>

        <div class="discord-thread">
            <DiscordThreadMessage author="Charles" avatar="gray">
                "Has anyone seen my notes on the Difference Engine?"
            </DiscordThreadMessage>
            <DiscordThreadMessage profile="ada" relative_timestamp="just now" edited=true>
                "They're in the drawer, next to the punch cards."
            </DiscordThreadMessage>
        </div>

        <div class="discord-thread">
            <DiscordThreadMessage profile="helper">"Reminder set for 9:00."</DiscordThreadMessage>
            <DiscordThreadMessage author="Unverified" bot=true avatar="red">
                "I am definitely a real bot."
            </DiscordThreadMessage>
        </div>

        <div class="discord-thread">
            <DiscordThreadMessage profile="announcements" relative_timestamp="3h ago">
                "Engine v2 ships next week!"
            </DiscordThreadMessage>
            // server wins over bot
            <DiscordThreadMessage author="Crosspost" bot=true server=true role_color="gold">
                "Both flags set"
            </DiscordThreadMessage>
            // not registered, uses the attributes
            <DiscordThreadMessage profile="nobody" author="Fallback" />
        </div>
    }
}
