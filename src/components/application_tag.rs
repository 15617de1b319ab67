use leptos::{either::EitherOf3, prelude::*};

use crate::{Badge, components::VerifiedTick};

/// Renders the "Bot" or "Server" tag for the given badge, or nothing for [`Badge::None`].
#[component]
pub fn ApplicationTag(badge: Badge) -> impl IntoView {
    match badge {
        Badge::None => EitherOf3::A(()),
        Badge::Bot { verified } => EitherOf3::B(view! {
            <span class="discord-application-tag">
                {verified.then(|| view! { <VerifiedTick /> })}
                "Bot"
            </span>
        }),
        Badge::Server => EitherOf3::C(view! { <span class="discord-application-tag">"Server"</span> }),
    }
}
