use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

mod context;

pub use context::*;

/// Name of the avatar every unresolved avatar falls back to.
pub const DEFAULT_AVATAR_KEY: &str = "default";

/// Discord's own embed avatars, keyed by color.
pub const BUILTIN_AVATARS: &[(&str, &str)] = &[
    ("blue", "https://cdn.discordapp.com/embed/avatars/0.png"),
    ("gray", "https://cdn.discordapp.com/embed/avatars/1.png"),
    ("green", "https://cdn.discordapp.com/embed/avatars/2.png"),
    ("orange", "https://cdn.discordapp.com/embed/avatars/3.png"),
    ("red", "https://cdn.discordapp.com/embed/avatars/4.png"),
    ("pink", "https://cdn.discordapp.com/embed/avatars/5.png"),
];

lazy_static! {
    pub(crate) static ref BUILTIN: Registries = Registries::builtin();
}

/// A named preset of display attributes for a message author.
///
/// Every field is optional. Fields that are set override the attributes given to the component,
/// fields that are `None` leave them alone.
///
/// ```
/// # use leptos_discord_components::Profile;
/// let profile: Profile = serde_json::from_str(
///     r##"{ "author": "Ada Lovelace", "server": true, "roleColor": "#ff0000" }"##,
/// ).unwrap();
///
/// assert_eq!(profile.role_color.as_deref(), Some("#ff0000"));
/// assert_eq!(profile.bot, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Avatar shortcut, relative path or absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Whether the author is a server crosspost webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<bool>,
    /// Only has an effect on bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Any CSS color value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_color: Option<String>,
}

/// Lookup table from avatar shortcut to image URL. Always contains a `default` entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct AvatarRegistry {
    avatars: HashMap<String, String>,
}

impl Default for AvatarRegistry {
    fn default() -> Self {
        let mut avatars: HashMap<String, String> = BUILTIN_AVATARS
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect();

        avatars.insert(
            DEFAULT_AVATAR_KEY.to_string(),
            BUILTIN_AVATARS[0].1.to_string(),
        );

        Self { avatars }
    }
}

impl From<HashMap<String, String>> for AvatarRegistry {
    /// Layers the given avatars over the built-in ones.
    fn from(avatars: HashMap<String, String>) -> Self {
        let mut registry = Self::default();
        registry.avatars.extend(avatars);
        registry
    }
}

impl AvatarRegistry {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.avatars.get(name).map(String::as_str)
    }

    pub fn default_avatar(&self) -> &str {
        self.get(DEFAULT_AVATAR_KEY)
            .unwrap_or(BUILTIN_AVATARS[0].1)
    }

    /// Turns an avatar shortcut into its URL.
    ///
    /// Values that aren't registered shortcuts are returned unchanged, so resolving an already
    /// resolved URL is a no-op. `None` resolves to the default avatar.
    pub fn resolve(&self, raw: Option<&str>) -> String {
        match raw {
            Some(raw) => self.get(raw).unwrap_or(raw).to_string(),
            None => self.default_avatar().to_string(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, url: String) {
        self.avatars.insert(name, url);
    }
}

/// Lookup table from profile id to [`Profile`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
}

impl ProfileRegistry {
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RegistriesConfig {
    avatars: AvatarRegistry,
    profiles: ProfileRegistry,
}

/// The profile and avatar lookup tables the components resolve against.
///
/// Cloning is cheap. Once built the tables are never mutated; the builder methods return a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registries {
    profiles: Arc<ProfileRegistry>,
    avatars: Arc<AvatarRegistry>,
}

impl Registries {
    /// The built-in avatars and no profiles.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parses registries from JSON of the form
    /// `{ "avatars": { "<name>": "<url>" }, "profiles": { "<id>": <Profile> } }`.
    ///
    /// Both keys are optional. The parsed avatars are layered over the built-in ones.
    ///
    /// ```
    /// # use leptos_discord_components::Registries;
    /// let registries = Registries::from_json(
    ///     r#"{ "profiles": { "ada": { "author": "Ada Lovelace", "avatar": "green" } } }"#,
    /// ).unwrap();
    ///
    /// assert_eq!(registries.profiles().get("ada").unwrap().author.as_deref(), Some("Ada Lovelace"));
    /// assert!(registries.avatars().get("green").is_some());
    /// ```
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let RegistriesConfig { avatars, profiles } =
            serde_json::from_str(json).context("Failed to parse registries JSON")?;

        debug!("Loaded {} profiles", profiles.len());

        Ok(Self {
            profiles: Arc::new(profiles),
            avatars: Arc::new(avatars),
        })
    }

    pub fn with_avatar(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.avatars).insert(name.into(), url.into());
        self
    }

    pub fn with_profile(mut self, id: impl Into<String>, profile: Profile) -> Self {
        Arc::make_mut(&mut self.profiles)
            .profiles
            .insert(id.into(), profile);
        self
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    pub fn avatars(&self) -> &AvatarRegistry {
        &self.avatars
    }
}
