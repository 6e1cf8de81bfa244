use crate::Result;

use chipp_http::{HttpClient, NoInterceptor};
use log::trace;

pub struct Client {
    url: String,
    http_client: HttpClient<NoInterceptor>,
}

impl Client {
    /// `url` is the full address of the sensor's `data.json`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let http_client = HttpClient::new(url.as_str())?;

        Ok(Self { url, http_client })
    }

    /// Downloads the raw `data.json` body. Non-200 responses are errors.
    pub async fn download(&self) -> Result<Vec<u8>> {
        let request = self.http_client.new_request_with_url(self.url.clone())?;

        let body = self
            .http_client
            .perform_request(request, |req, res| {
                if res.status_code == 200 {
                    Ok(res.body)
                } else {
                    Err((req, res).into())
                }
            })
            .await?;

        trace!("data.json: {}", String::from_utf8_lossy(&body));

        Ok(body)
    }
}
