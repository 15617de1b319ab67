use leptos::{either::Either, prelude::*};

use crate::{
    Badge, ResolvedProfile, ThreadMessageAttrs, components::ApplicationTag,
    profile::{DEFAULT_AUTHOR, DEFAULT_RELATIVE_TIMESTAMP},
    resolve_profile, use_registries,
};

/// A message inside a Discord thread preview.
///
/// The author's attributes can be given one by one or taken from a profile registered with
/// [`provide_registries`](crate::provide_registries). Attributes set on the profile win.
///
/// ```
/// # use leptos::prelude::*;
/// # use leptos_discord_components::DiscordThreadMessage;
/// #
/// #[component]
/// pub fn Preview() -> impl IntoView {
///     view! {
///         <DiscordThreadMessage author="Ada" avatar="green" bot=true verified=true>
///             "Beep boop"
///         </DiscordThreadMessage>
///     }
/// }
/// ```
#[component]
pub fn DiscordThreadMessage(
    /// Id of the registered profile to use.
    #[prop(optional, into)]
    profile: Option<String>,
    /// The author's username.
    #[prop(into, default = DEFAULT_AUTHOR.to_string())]
    author: String,
    /// Avatar shortcut, relative path or external link.
    #[prop(optional, into)]
    avatar: Option<String>,
    /// Whether the author is a bot. Has no effect if `server` is `true`.
    #[prop(optional)]
    bot: bool,
    /// Whether the author is a server crosspost webhook.
    #[prop(optional)]
    server: bool,
    /// Whether the bot is verified. Only has an effect on bots.
    #[prop(optional)]
    verified: bool,
    /// Whether the message has been edited.
    #[prop(optional)]
    edited: bool,
    /// The author's primary role color. Can be any CSS color value.
    #[prop(optional, into)]
    role_color: Option<String>,
    #[prop(into, default = DEFAULT_RELATIVE_TIMESTAMP.to_string())]
    relative_timestamp: String,
    /// The message content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let attrs = ThreadMessageAttrs {
        author,
        avatar,
        bot,
        server,
        verified,
        role_color,
    };

    let profile = resolve_profile(attrs, profile.as_deref(), &use_registries());

    render_thread_message(profile, edited, relative_timestamp, children)
}

/// Renders an already resolved profile. This is what [`DiscordThreadMessage`] uses after resolving
/// its attributes.
pub fn render_thread_message(
    profile: ResolvedProfile,
    edited: bool,
    relative_timestamp: String,
    children: Option<Children>,
) -> impl IntoView {
    let badge = Badge::for_profile(&profile);

    let ResolvedProfile {
        author,
        avatar,
        role_color,
        ..
    } = profile;

    let username = match role_color {
        Some(color) => Either::Left(view! {
            <span class="discord-thread-message-username" style=format!("color: {color}")>
                {author.clone()}
            </span>
        }),
        None => Either::Right(view! {
            <span class="discord-thread-message-username">{author.clone()}</span>
        }),
    };

    view! {
        <div class="discord-thread-message">
            <img src=avatar class="discord-thread-message-avatar" alt=author />
            <ApplicationTag badge />
            {username}
            <div class="discord-thread-message-content">
                {children.map(|children| children())}
                {edited.then(|| view! { <span class="discord-message-edited">"(edited)"</span> })}
            </div>
            <span class="discord-thread-message-timestamp">{relative_timestamp}</span>
        </div>
    }
}
