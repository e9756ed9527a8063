use serde::Deserialize;
use url::Url;

use crate::core::IgError;
use crate::profile::model::{FALLBACK_PROFILE_PIC_URL, Profile};

/// Strip a single leading `@`. Idempotent.
pub(crate) fn clean_username(raw: &str) -> &str {
    raw.strip_prefix('@').unwrap_or(raw)
}

/* ------------- Minimal serde mapping of the run-sync body ------------- */

/// The `run-sync` endpoint answers with either a plain array of profile
/// objects or a legacy envelope. Nothing upstream guarantees either, so every
/// field is optional and classification happens after deserialization.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RunSyncBody {
    Profiles(Vec<WireProfile>),
    Legacy(LegacyEnvelope),
}

#[derive(Deserialize, Default)]
pub(crate) struct WireProfile {
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(rename = "fullName", default)]
    pub(crate) full_name: Option<String>,
    #[serde(rename = "profilePicUrlHD", default)]
    pub(crate) profile_pic_url_hd: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct LegacyEnvelope {
    #[serde(rename = "urlsFromSearch", default)]
    pub(crate) urls_from_search: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) data: Option<LegacyData>,
}

#[derive(Deserialize, Default)]
pub(crate) struct LegacyData {
    #[serde(default)]
    pub(crate) items: Option<Vec<WireProfile>>,
}

/* ---------------- Shape classification + normalization ---------------- */

/// The four recognized response shapes, in priority order.
pub(crate) enum ProfileShape {
    /// A non-empty array body; the first element carries the profile.
    Listing(WireProfile),
    /// Legacy envelope with a non-empty `urlsFromSearch`; a first `data.items`
    /// element, when present, overrides the URL-derived defaults.
    SearchUrl {
        url: String,
        details: Option<WireProfile>,
    },
    /// Legacy envelope with only a non-empty `data.items`.
    Details(WireProfile),
    /// None of the above.
    Empty,
}

pub(crate) fn parse_body(body: &str) -> Result<ProfileShape, IgError> {
    let parsed: RunSyncBody = serde_json::from_str(body)?;
    Ok(classify(parsed))
}

fn classify(body: RunSyncBody) -> ProfileShape {
    match body {
        RunSyncBody::Profiles(profiles) => match profiles.into_iter().next() {
            Some(first) => ProfileShape::Listing(first),
            None => ProfileShape::Empty,
        },
        RunSyncBody::Legacy(envelope) => {
            let mut items = envelope
                .data
                .and_then(|d| d.items)
                .unwrap_or_default()
                .into_iter();
            match envelope
                .urls_from_search
                .unwrap_or_default()
                .into_iter()
                .next()
            {
                Some(url) => ProfileShape::SearchUrl {
                    url,
                    details: items.next(),
                },
                None => match items.next() {
                    Some(first) => ProfileShape::Details(first),
                    None => ProfileShape::Empty,
                },
            }
        }
    }
}

/// Map a classified shape to the normalized profile record. Pure; the only
/// other input is the already-cleaned username the lookup started from.
pub(crate) fn normalize(shape: ProfileShape, clean: &str) -> Profile {
    match shape {
        ProfileShape::Listing(w) => Profile {
            username: non_empty(w.username).unwrap_or_else(|| clean.to_string()),
            full_name: w.full_name,
            // The listing shape historically fell back to the profile-page
            // URL rather than the stock avatar.
            profile_pic_url_hd: non_empty(w.profile_pic_url_hd)
                .unwrap_or_else(|| format!("https://www.instagram.com/{clean}/")),
            exists: true,
        },
        ProfileShape::SearchUrl { url, details } => {
            let username = username_from_url(&url).unwrap_or_else(|| clean.to_string());
            let details = details.unwrap_or_default();
            Profile {
                full_name: Some(
                    non_empty(details.full_name).unwrap_or_else(|| username.clone()),
                ),
                profile_pic_url_hd: non_empty(details.profile_pic_url_hd)
                    .unwrap_or_else(|| FALLBACK_PROFILE_PIC_URL.to_string()),
                username,
                exists: true,
            }
        }
        ProfileShape::Details(w) => Profile {
            username: non_empty(w.username).unwrap_or_else(|| clean.to_string()),
            full_name: w.full_name,
            profile_pic_url_hd: non_empty(w.profile_pic_url_hd)
                .unwrap_or_else(|| FALLBACK_PROFILE_PIC_URL.to_string()),
            exists: true,
        },
        ProfileShape::Empty => Profile::missing(clean),
    }
}

/// Upstream occasionally sends `""` where it means "no value".
fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// Extract the username from an instagram.com profile URL: the first path
/// segment under the instagram.com host (any subdomain).
fn username_from_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    if host != "instagram.com" && !host.ends_with(".instagram.com") {
        return None;
    }
    url.path_segments()?
        .find(|s| !s.is_empty())
        .map(ToString::to_string)
}
