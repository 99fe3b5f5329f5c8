//! Shared preference record and partial-merge patch.
//!
//! A single unkeyed record with no per-user scoping; every caller reads and
//! writes the same document. This matches the observed single-tenant
//! contract and is a documented limitation rather than hidden behaviour.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared preference record.
///
/// `language` and `privacy` are enum-like strings with no allowed-set
/// validation; any string is accepted and stored verbatim (documented
/// limitation, kept deliberately).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Dark mode toggle.
    pub dark_mode: bool,
    /// Notifications toggle.
    pub notifications: bool,
    /// Display language.
    #[schema(example = "English")]
    pub language: String,
    /// Privacy level.
    #[schema(example = "Public")]
    pub privacy: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: false,
            language: "English".to_owned(),
            privacy: "Public".to_owned(),
        }
    }
}

impl Settings {
    /// Apply a partial patch; only supplied fields overwrite.
    pub fn apply(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            dark_mode,
            notifications,
            language,
            privacy,
        } = patch;
        if let Some(dark_mode) = dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(notifications) = notifications {
            self.notifications = notifications;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(privacy) = privacy {
            self.privacy = privacy;
        }
    }
}

/// Partial update for [`Settings`]; unset fields retain prior values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SettingsPatch {
    /// Dark mode toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// Notifications toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    /// Display language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Privacy level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}
