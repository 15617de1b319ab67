use tracing::{debug, instrument};

use crate::{Profile, Registries};

pub const DEFAULT_AUTHOR: &str = "User";
pub const DEFAULT_RELATIVE_TIMESTAMP: &str = "1m ago";

/// The author attributes set directly on a message, before any profile is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadMessageAttrs {
    pub author: String,
    /// Avatar shortcut, relative path or absolute URL. Only used if the profile has no avatar.
    pub avatar: Option<String>,
    pub bot: bool,
    pub server: bool,
    pub verified: bool,
    pub role_color: Option<String>,
}

impl Default for ThreadMessageAttrs {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            avatar: None,
            bot: false,
            server: false,
            verified: false,
            role_color: None,
        }
    }
}

/// The display attributes a message is actually rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub author: String,
    /// Always a URL or path, never a shortcut.
    pub avatar: String,
    pub bot: bool,
    pub server: bool,
    pub verified: bool,
    pub role_color: Option<String>,
}

/// Merges the message attributes with the profile `profile_id` and resolves the avatar.
///
/// Fields set on the profile win over the attributes. An unknown or missing profile id simply
/// applies no overrides.
#[instrument(level = "trace", skip(registries))]
pub fn resolve_profile(
    attrs: ThreadMessageAttrs,
    profile_id: Option<&str>,
    registries: &Registries,
) -> ResolvedProfile {
    let preset = match profile_id {
        Some(id) => registries.profiles().get(id).cloned().unwrap_or_else(|| {
            debug!("Profile {id:?} not found, using the message attributes");

            Profile::default()
        }),
        None => Profile::default(),
    };

    let Profile {
        author,
        avatar,
        bot,
        server,
        verified,
        role_color,
    } = preset;

    let avatar = registries
        .avatars()
        .resolve(avatar.as_deref().or(attrs.avatar.as_deref()));

    ResolvedProfile {
        author: author.unwrap_or(attrs.author),
        avatar,
        bot: bot.unwrap_or(attrs.bot),
        server: server.unwrap_or(attrs.server),
        verified: verified.unwrap_or(attrs.verified),
        role_color: role_color.or(attrs.role_color),
    }
}

/// The application tag shown next to the author's name. A message shows at most one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Badge {
    #[default]
    None,
    Bot {
        verified: bool,
    },
    /// Crosspost webhook. Takes precedence over [`Badge::Bot`].
    Server,
}

impl Badge {
    pub fn for_profile(profile: &ResolvedProfile) -> Self {
        if profile.server {
            Self::Server
        } else if profile.bot {
            Self::Bot {
                verified: profile.verified,
            }
        } else {
            Self::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada_registries() -> Registries {
        Registries::builtin().with_profile(
            "ada",
            Profile {
                author: Some("Ada Lovelace".to_string()),
                server: Some(true),
                role_color: Some("#ff0000".to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn without_profile_uses_attributes() {
        let registries = Registries::builtin();
        let attrs = ThreadMessageAttrs {
            author: "Ada".to_string(),
            bot: true,
            verified: true,
            role_color: Some("teal".to_string()),
            ..Default::default()
        };

        let profile = resolve_profile(attrs, None, &registries);

        assert_eq!(
            profile,
            ResolvedProfile {
                author: "Ada".to_string(),
                avatar: registries.avatars().default_avatar().to_string(),
                bot: true,
                server: false,
                verified: true,
                role_color: Some("teal".to_string()),
            }
        );
    }

    #[test]
    fn unknown_profile_uses_attributes() {
        let registries = ada_registries();
        let attrs = ThreadMessageAttrs {
            avatar: Some("orange".to_string()),
            ..Default::default()
        };

        let with_unknown = resolve_profile(attrs.clone(), Some("nobody"), &registries);
        let without = resolve_profile(attrs, None, &registries);

        assert_eq!(with_unknown, without);
        assert_eq!(with_unknown.author, DEFAULT_AUTHOR);
        assert_eq!(
            with_unknown.avatar,
            "https://cdn.discordapp.com/embed/avatars/3.png"
        );
    }

    #[test]
    fn profile_overrides_attributes() {
        let attrs = ThreadMessageAttrs {
            author: "Someone".to_string(),
            bot: true,
            ..Default::default()
        };

        let profile = resolve_profile(attrs, Some("ada"), &ada_registries());

        assert_eq!(profile.author, "Ada Lovelace");
        assert_eq!(profile.role_color.as_deref(), Some("#ff0000"));
        assert!(profile.server);
        // not set on the profile
        assert!(profile.bot);
        assert_eq!(Badge::for_profile(&profile), Badge::Server);
    }

    #[test]
    fn profile_avatar_wins_over_attribute_avatar() {
        let registries = Registries::builtin().with_profile(
            "cat",
            Profile {
                avatar: Some("/cat.png".to_string()),
                ..Default::default()
            },
        );
        let attrs = ThreadMessageAttrs {
            avatar: Some("red".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_profile(attrs.clone(), Some("cat"), &registries).avatar,
            "/cat.png"
        );
        assert_eq!(
            resolve_profile(attrs, Some("ada"), &registries).avatar,
            "https://cdn.discordapp.com/embed/avatars/4.png"
        );
    }

    #[test]
    fn profile_avatar_shortcut_is_resolved() {
        let registries = Registries::builtin().with_profile(
            "g",
            Profile {
                avatar: Some("green".to_string()),
                ..Default::default()
            },
        );

        let profile = resolve_profile(ThreadMessageAttrs::default(), Some("g"), &registries);

        assert_eq!(
            profile.avatar,
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );
    }

    #[test]
    fn profile_can_switch_flags_off() {
        let registries = Registries::builtin().with_profile(
            "human",
            Profile {
                bot: Some(false),
                ..Default::default()
            },
        );
        let attrs = ThreadMessageAttrs {
            bot: true,
            verified: true,
            ..Default::default()
        };

        let profile = resolve_profile(attrs, Some("human"), &registries);

        assert!(!profile.bot);
        assert_eq!(Badge::for_profile(&profile), Badge::None);
    }

    #[test]
    fn badge_precedence() {
        let profile = |bot, server, verified| ResolvedProfile {
            author: DEFAULT_AUTHOR.to_string(),
            avatar: String::new(),
            bot,
            server,
            verified,
            role_color: None,
        };

        assert_eq!(Badge::for_profile(&profile(false, false, true)), Badge::None);
        assert_eq!(
            Badge::for_profile(&profile(true, false, false)),
            Badge::Bot { verified: false }
        );
        assert_eq!(
            Badge::for_profile(&profile(true, false, true)),
            Badge::Bot { verified: true }
        );
        assert_eq!(Badge::for_profile(&profile(false, true, true)), Badge::Server);
        assert_eq!(Badge::for_profile(&profile(true, true, true)), Badge::Server);
    }
}
