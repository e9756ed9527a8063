use crate::core::IgError;

/// Check the status and read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, IgError> {
    if !resp.status().is_success() {
        return Err(IgError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
