//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    BulkTransition, Category, DiningTable, MessageResponse, NewOrderLine, OptionName, OrderLine,
    PrintOrderRequest, Product, ProductOption, TableNumber,
};

use crate::api::{OrderQuery, PosApi};
use crate::{ClientConfig, ClientError, ClientResult};

type Query<'a> = &'a [(&'static str, String)];

/// HTTP client for making requests to the restaurant API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    reference_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            reference_url: config.reference_base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Make a GET request against the API host
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query<'_>) -> ClientResult<T> {
        self.get_from(&self.base_url, path, query).await
    }

    async fn get_from<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        query: Query<'_>,
    ) -> ClientResult<T> {
        let url = Self::url(base, path);
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        query: Query<'_>,
        body: &B,
    ) -> ClientResult<T> {
        let url = Self::url(&self.base_url, path);
        tracing::debug!(url = %url, "POST");
        let response = self.client.post(&url).query(query).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with an empty JSON object, ignoring the reply body
    pub async fn post_empty(&self, path: &str, query: Query<'_>) -> ClientResult<()> {
        let url = Self::url(&self.base_url, path);
        tracing::debug!(url = %url, "POST");
        let response = self
            .client
            .post(&url)
            .query(query)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Server {
                status: status.as_u16(),
                message: text,
            },
        })
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::InvalidResponse("Empty response body".to_string()));
        }
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

#[async_trait]
impl PosApi for HttpClient {
    async fn tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.get_from(&self.reference_url, "tables", &[]).await
    }

    async fn reference_products(&self) -> ClientResult<Vec<Product>> {
        self.get_from(&self.reference_url, "products", &[]).await
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get("categories", &[]).await
    }

    async fn products(&self, category_number: i64) -> ClientResult<Vec<Product>> {
        self.get("products", &[("category_number", category_number.to_string())])
            .await
    }

    async fn product_options(&self, option_group_number: i64) -> ClientResult<Vec<ProductOption>> {
        self.get(
            "product_options",
            &[("option_group_number", option_group_number.to_string())],
        )
        .await
    }

    async fn option_names(&self, ids: &[i64]) -> ClientResult<Vec<OptionName>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.get("options", &[("ids", joined)]).await
    }

    async fn orders(&self, query: &OrderQuery) -> ClientResult<Vec<OrderLine>> {
        self.get("orders", &query.to_query()).await
    }

    async fn create_order(&self, order: &NewOrderLine) -> ClientResult<MessageResponse> {
        self.post("orders", &[], order).await
    }

    async fn remove_order(&self, order_id: i64) -> ClientResult<MessageResponse> {
        self.post(&format!("remove_order/{}", order_id), &[], &serde_json::json!({}))
            .await
    }

    async fn discard_order(&self, order_id: i64) -> ClientResult<MessageResponse> {
        self.post(&format!("discard_order/{}", order_id), &[], &serde_json::json!({}))
            .await
    }

    async fn bulk_transition(
        &self,
        transition: BulkTransition,
        table_number: &TableNumber,
    ) -> ClientResult<()> {
        self.post_empty(
            transition.endpoint(),
            &[("table_number", table_number.to_string())],
        )
        .await
    }

    async fn print_order(&self, request: &PrintOrderRequest) -> ClientResult<MessageResponse> {
        self.post("print_order", &[], request).await
    }
}
