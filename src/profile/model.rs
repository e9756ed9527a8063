use serde::Serialize;

/// Picture URL used whenever the upstream response carries no usable
/// `profilePicUrlHD`. Points at Instagram's stock anonymous-avatar asset.
pub const FALLBACK_PROFILE_PIC_URL: &str = "https://scontent-cdg4-1.cdninstagram.com/v/t51.2885-19/44884218_345707102882519_2446069589734326272_n.jpg?_nc_ht=scontent-cdg4-1.cdninstagram.com&_nc_cat=1&_nc_ohc=Yx4hrjVrjIsQ7kNvgGrTEdY&_nc_gid=bef4e65e5c2c4055bfb7e55c90e77d7e&edm=APs17CUBAAAA&ccb=7-5&oh=00_AYAawJlcHJQFKcDGz9xW4DH0bQkr2WOc8J6nqUOe2R_9XA&oe=67771FDA&_nc_sid=10d13b";

/// A normalized Instagram profile record.
///
/// Always well-formed: lookups that fail at any stage produce
/// [`Profile::missing`] rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The profile's username, without a leading `@`.
    pub username: String,
    /// The display name, when the upstream response carried one.
    pub full_name: Option<String>,
    /// HD profile picture URL, or a fallback when none was returned.
    #[serde(rename = "profilePicUrlHD")]
    pub profile_pic_url_hd: String,
    /// Whether the upstream response indicated the profile exists.
    ///
    /// Best-effort: an unrecognized response shape and a genuinely missing
    /// profile both report `false`.
    pub exists: bool,
}

impl Profile {
    /// The default record returned when the lookup yields nothing usable.
    pub fn missing(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: None,
            profile_pic_url_hd: FALLBACK_PROFILE_PIC_URL.to_string(),
            exists: false,
        }
    }
}
