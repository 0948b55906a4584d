use super::*;

/// Sends requests to the origin the page was served from, with the page's
/// cookies.
pub struct Api {
  client: reqwest::Client,
  origin: String,
}

impl Api {
  pub fn new() -> Result<Self, Error> {
    let origin = window()?
      .location()
      .origin()
      .map_err(Error::js("reading location origin"))?;

    Ok(Self {
      client: reqwest::Client::new(),
      origin,
    })
  }

  async fn request(&self, request: Request) -> Result<String, Error> {
    let url = format!("{}{}", self.origin, request.path);

    let method = match request.method {
      Method::Get => reqwest::Method::GET,
      Method::Post => reqwest::Method::POST,
    };

    let mut builder = self.client.request(method, url.as_str());

    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response = builder
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    response
      .text()
      .await
      .with_context(|_| error::Request { url: url.clone() })
  }
}

impl agora::Transport for Api {
  type Error = Error;

  async fn send(&self, request: Request) -> Result<String, Error> {
    self.request(request).await
  }
}
