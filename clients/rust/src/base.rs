use healthsphere_api_structs::MessageResponse;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub status: Option<StatusCode>,
    /// The `message` of the response body when the server gave one
    pub message: Option<String>,
}

impl APIError {
    fn new(variant: APIErrorVariant) -> Self {
        Self {
            variant,
            status: None,
            message: None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        self.client.request(method, url)
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Result<reqwest::Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = res.map_err(|_| APIError::new(APIErrorVariant::Network))?;

        let status = res.status();
        if status != expected_status_code {
            let message = res
                .json::<MessageResponse>()
                .await
                .ok()
                .map(|body| body.message);
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                status: Some(status),
                message,
            });
        }

        res.json::<T>()
            .await
            .map_err(|_| APIError::new(APIErrorVariant::MalformedResponse))
    }

    pub async fn get_text(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<String> {
        let res = self
            .get_client(Method::GET, path)
            .send()
            .await
            .map_err(|_| APIError::new(APIErrorVariant::Network))?;

        let status = res.status();
        if status != expected_status_code {
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                status: Some(status),
                message: None,
            });
        }

        res.text()
            .await
            .map_err(|_| APIError::new(APIErrorVariant::MalformedResponse))
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::POST, path).json(&body).send().await;
        self.handle_api_response(res, expected_status_code).await
    }
}
