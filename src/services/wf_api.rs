use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode, Url};

use crate::auth_store;
use crate::model::{
    api_response::ApiResponse, cli_error::CliError, collection::Collection,
    forms::create_collection::CreateCollection,
};

pub struct WriteFreelyClient {
    client: Client,
    base_url: Url,
}

impl WriteFreelyClient {
    pub fn new(base_url: Url) -> Result<Self, CliError> {
        let token = auth_store::get(base_url.as_str())?;
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", format!("Token {}", token.trim()).parse()?);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, base_url })
    }

    fn collections_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .unwrap()
            .push("api")
            .push("collections");
        url
    }

    // Bodies are read as text and decoded separately so that a malformed
    // response surfaces as a decode failure, not a request failure.
    async fn decode_collection(res: Response) -> Result<Collection, CliError> {
        let body = res.text().await?;
        let envelope: ApiResponse = serde_json::from_str(&body)?;
        Ok(Collection::from_response(&envelope.data)?)
    }

    async fn error_for(res: Response) -> CliError {
        let status = res.status();
        if status == StatusCode::UNAUTHORIZED {
            return CliError::APIAuthError;
        }
        if let Ok(body) = res.text().await {
            if let Ok(envelope) = serde_json::from_str::<ApiResponse>(&body) {
                if let Some(msg) = envelope.error_msg {
                    eprintln!("Server error {}: {}", envelope.code, msg);
                }
            }
        }
        CliError::UnexpectedResponse(status)
    }

    pub async fn get_collection(&self, alias: &str) -> Result<Collection, CliError> {
        let mut url = self.collections_url();
        url.path_segments_mut().unwrap().push(alias);

        let res = self.client.get(url).send().await?;
        let status = res.status();

        if status == StatusCode::OK {
            Self::decode_collection(res).await
        } else {
            Err(Self::error_for(res).await)
        }
    }

    /// Creates a collection with the given title. If `alias` is `None` the
    /// server picks one; the returned collection carries whatever the server
    /// assigned.
    pub async fn create_collection(
        &self,
        title: String,
        alias: Option<String>,
    ) -> Result<Collection, CliError> {
        let collection = Collection::new(title, alias);

        let res = self
            .client
            .post(self.collections_url())
            .json(&CreateCollection::from(&collection))
            .send()
            .await?;
        let status = res.status();

        if status == StatusCode::CREATED {
            Self::decode_collection(res).await
        } else {
            Err(Self::error_for(res).await)
        }
    }

    pub async fn delete_collection(&self, alias: &str) -> Result<(), CliError> {
        let mut url = self.collections_url();
        url.path_segments_mut().unwrap().push(alias);

        let res = self.client.delete(url).send().await?;
        let status = res.status();

        if status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(Self::error_for(res).await)
        }
    }
}
