use crate::Result;

use chipp_http::{HttpClient, NoInterceptor};
use log::{debug, trace};
use url::form_urlencoded;

pub struct Client {
    base_url: String,
    http_client: HttpClient<NoInterceptor>,
}

impl Client {
    /// `base_url` is the server root, e.g. `http://192.168.42.31:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let http_client = HttpClient::new(base_url.as_str())?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Sets the value of the virtual device `idx`.
    ///
    /// The response body is ignored; transport failures and non-2xx statuses
    /// are errors.
    pub async fn update_device(&self, idx: u32, value: f64) -> Result<()> {
        let url = udevice_url(&self.base_url, idx, value);
        debug!("{url}");

        let request = self.http_client.new_request_with_url(url)?;

        self.http_client
            .perform_request(request, |req, res| {
                trace!("response: {}", String::from_utf8_lossy(&res.body));

                if (200..300).contains(&res.status_code) {
                    Ok(())
                } else {
                    Err((req, res).into())
                }
            })
            .await?;

        Ok(())
    }
}

pub fn udevice_url(base_url: &str, idx: u32, value: f64) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("type", "command")
        .append_pair("param", "udevice")
        .append_pair("idx", &idx.to_string())
        .append_pair("nvalue", "0")
        .append_pair("svalue", &value.to_string())
        .finish();

    format!("{}/json.htm?{query}", base_url.trim_end_matches('/'))
}
