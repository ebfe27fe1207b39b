use log::debug;
use reqwest::blocking::Client;

/// Blocking HTTP. Unlike file access, a failure here is reported to the
/// runtime and stops the program.
pub trait Network {
    fn http_get(&mut self, url: &str) -> Result<String, String>;
    fn http_post(&mut self, url: &str, body: &str) -> Result<String, String>;
}

/// reqwest blocking client, built on first request.
#[derive(Debug, Default)]
pub struct HttpClient {
    client: Option<Client>,
}

impl HttpClient {
    pub fn new() -> HttpClient {
        HttpClient::default()
    }

    fn client(&mut self) -> Result<Client, String> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .user_agent(concat!("label-basic/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| e.to_string())?;
        self.client = Some(client.clone());
        Ok(client)
    }
}

impl Network for HttpClient {
    fn http_get(&mut self, url: &str) -> Result<String, String> {
        debug!("GET {}", url);
        self.client()?
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| e.to_string())
    }

    fn http_post(&mut self, url: &str, body: &str) -> Result<String, String> {
        debug!("POST {}", url);
        self.client()?
            .post(url)
            .body(body.to_string())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| e.to_string())
    }
}
