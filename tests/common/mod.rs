use httpmock::MockServer;
use igprofile_rs::IgClient;
use serde_json::{Value, json};
use url::Url;

pub const TEST_TOKEN: &str = "apify_api_test_token";

pub const RUN_SYNC_PATH: &str = "/v2/actor-tasks/test~instagram-scraper-task/run-sync";

/// A client pointed at the mock server's run-sync endpoint.
pub fn mock_client(server: &MockServer) -> IgClient {
    IgClient::builder()
        .token(TEST_TOKEN)
        .base_run_sync(Url::parse(&format!("{}{RUN_SYNC_PATH}", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// The exact JSON body the fetcher sends for a given (cleaned) username.
pub fn expected_payload(search: &str) -> Value {
    json!({
        "addParentData": true,
        "enhanceUserSearchWithFacebookPage": false,
        "isUserReelFeedURL": false,
        "isUserTaggedFeedURL": false,
        "resultsLimit": 1,
        "resultsType": "details",
        "search": search,
        "searchLimit": 1,
        "searchType": "user"
    })
}
