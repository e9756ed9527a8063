mod api;
mod model;
mod wire;

pub use model::{FALLBACK_PROFILE_PIC_URL, Profile};

use crate::IgClient;

/// Looks up a profile with default settings.
///
/// Never fails: any upstream problem yields [`Profile::missing`] for the
/// cleaned username.
pub async fn fetch(client: &IgClient, username: impl Into<String>) -> Profile {
    ProfileBuilder::new(client, username).fetch().await
}

/// A builder for looking up a single Instagram profile.
#[derive(Debug)]
pub struct ProfileBuilder {
    client: IgClient,
    username: String,
}

impl ProfileBuilder {
    /// Creates a new `ProfileBuilder` for a given username. A leading `@` is
    /// accepted and stripped before the lookup.
    pub fn new(client: &IgClient, username: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            username: username.into(),
        }
    }

    /// Executes the lookup and returns the normalized profile.
    ///
    /// This call never returns an error. An HTTP failure, an unreachable
    /// upstream, or a body in none of the recognized shapes all degrade to
    /// the same default record with `exists = false`. Whether that means
    /// "profile not found" or "response not understood" is not distinguished
    /// by the upstream service, so it is not distinguished here either.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(username = %self.username))
    )]
    pub async fn fetch(self) -> Profile {
        let clean = wire::clean_username(&self.username).to_string();
        match api::fetch_profile(&self.client, &clean).await {
            Ok(profile) => profile,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "lookup degraded to default profile");
                Profile::missing(clean)
            }
        }
    }
}
