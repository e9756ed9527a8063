use serde::Serialize;

use crate::{
    core::{IgClient, IgError, net},
    profile::{model::Profile, wire},
};

/// Search parameters for the instagram-scraper actor task: a single-result
/// user search keyed on the cleaned username.
#[derive(Serialize)]
struct RunSyncPayload<'a> {
    #[serde(rename = "addParentData")]
    add_parent_data: bool,
    #[serde(rename = "enhanceUserSearchWithFacebookPage")]
    enhance_user_search_with_facebook_page: bool,
    #[serde(rename = "isUserReelFeedURL")]
    is_user_reel_feed_url: bool,
    #[serde(rename = "isUserTaggedFeedURL")]
    is_user_tagged_feed_url: bool,
    #[serde(rename = "resultsLimit")]
    results_limit: u32,
    #[serde(rename = "resultsType")]
    results_type: &'a str,
    search: &'a str,
    #[serde(rename = "searchLimit")]
    search_limit: u32,
    #[serde(rename = "searchType")]
    search_type: &'a str,
}

pub(super) async fn fetch_profile(client: &IgClient, clean: &str) -> Result<Profile, IgError> {
    let payload = RunSyncPayload {
        add_parent_data: true,
        enhance_user_search_with_facebook_page: false,
        is_user_reel_feed_url: false,
        is_user_tagged_feed_url: false,
        results_limit: 1,
        results_type: "details",
        search: clean,
        search_limit: 1,
        search_type: "user",
    };

    let resp = client
        .http()
        .post(client.run_sync_url())
        .json(&payload)
        .send()
        .await?;

    let body = net::get_text(resp).await?;
    let shape = wire::parse_body(&body)?;
    Ok(wire::normalize(shape, clean))
}
