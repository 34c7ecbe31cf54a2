use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, Category, CategoryDraft, ErrorResponse, LoginRequest, PagedProducts, Product,
    ProductDetail, ProductDraft, RegisterRequest, SortBy, SortDir,
};

use crate::config::FrontendConfig;
use crate::{session, storage};

thread_local! {
    static SHARED_CLIENT: OnceCell<EmporiumClient> = OnceCell::new();
}

/// Uniform error raised for transport failures and non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        status: u16,
        body: String,
        message: String,
    },
    /// The request never produced a response.
    #[error("Unable to connect to server")]
    Transport(String),
    /// The response arrived but was not the shape the caller expected.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether this failure means the bearer credential is no longer
    /// accepted.
    pub fn is_auth_expired(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Successful response body, parsed according to its content type.
#[derive(Debug, Clone, PartialEq)]
enum Payload {
    /// The content type indicated JSON.
    Json(serde_json::Value),
    /// Anything else is handed back as raw text.
    Text(String),
}

#[derive(Debug, Clone)]
struct ApiBody {
    content_type: String,
    text: String,
}

impl ApiBody {
    /// Decode into the caller's type. Bodies whose content type does
    /// not indicate JSON are surfaced as [`ApiError::Decode`] with the
    /// raw text, never silently parsed.
    fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self.into_payload() {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
            }
            Payload::Text(text) => Err(ApiError::Decode(text)),
        }
    }

    fn into_payload(self) -> Payload {
        if is_json(&self.content_type) {
            match serde_json::from_str(&self.text) {
                Ok(value) => Payload::Json(value),
                Err(_) => Payload::Text(self.text),
            }
        } else {
            Payload::Text(self.text)
        }
    }
}

fn is_json(content_type: &str) -> bool {
    content_type.to_lowercase().contains("application/json")
}

/// Best human-readable message for a failed response: a structured
/// error body wins, then the raw body, then the bare status code.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return parsed.to_string();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP error {status}")
    } else {
        trimmed.to_string()
    }
}

fn product_matches(product: &Product, title: &str, category: Option<&str>) -> bool {
    let same_title = product.title.trim().to_lowercase() == title.trim().to_lowercase();
    match category {
        // The listing returns category names; an id passed here can
        // only be compared when it happens to equal the name.
        Some(category) => {
            same_title && product.category.trim().to_lowercase() == category.trim().to_lowercase()
        }
        None => same_title,
    }
}

#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

/// REST client for the storefront backend.
///
/// One instance is shared per process; the bearer token is read from
/// storage at the moment of each request, so a login in the meantime
/// is picked up without recreating the client.
#[derive(Clone, Debug)]
pub struct EmporiumClient {
    base_url: String,
    client: Client,
}

impl EmporiumClient {
    /// Create a new API client with the provided base URL. An empty
    /// base keeps paths relative so a dev proxy can forward them.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide shared client.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default().api_base_url))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            format!("/{}", path.trim_start_matches('/'))
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Attach the current bearer token, when one is stored.
    fn bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match storage::get(storage::TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiBody, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &text),
                body: text,
            });
        }
        Ok(ApiBody { content_type, text })
    }

    /// Send with the bearer token attached. A 401 on a call that
    /// carried a token means the session is stale: the stored session
    /// is wiped and the page reloaded so the app restarts in a
    /// consistent unauthenticated state.
    async fn send_authed(&self, request: RequestBuilder) -> Result<ApiBody, ApiError> {
        let had_token = storage::get(storage::TOKEN_KEY).is_some();
        match self.send(self.bearer(request)).await {
            Err(err) if had_token && err.is_auth_expired() => {
                session::expire_and_reload();
                Err(err)
            }
            other => other,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("api/login");
        self.send(self.client.post(url).json(payload)).await?.json()
    }

    /// Create an account; the response is an authenticated session.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("api/auth");
        self.send(self.client.post(url).json(payload)).await?.json()
    }

    /// Terminate the current session on the backend. Callers treat
    /// failures as non-fatal; local logout proceeds regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("api/logout");
        self.send(self.bearer(self.client.post(url))).await?;
        Ok(())
    }

    /// List all categories.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.api_url("Test/categories");
        self.send_authed(self.client.get(url)).await?.json()
    }

    /// Best-effort duplicate check by category name.
    ///
    /// Degrades through three strategies so a missing endpoint never
    /// blocks creation: a dedicated exists endpoint, a filtered
    /// listing, then a full listing scanned client-side. When all
    /// fail, the category is assumed not to exist.
    pub async fn category_exists(&self, name: &str) -> bool {
        let url = self.api_url("Test/categories/exists");
        if let Ok(body) = self
            .send_authed(self.client.get(url).query(&[("name", name)]))
            .await
        {
            if let Ok(ExistsResponse { exists }) = body.json::<ExistsResponse>() {
                return exists;
            }
        }

        let url = self.api_url("Test/categories");
        if let Ok(body) = self
            .send_authed(self.client.get(url).query(&[("name", name)]))
            .await
        {
            if let Ok(filtered) = body.json::<Vec<Category>>() {
                return filtered.iter().any(|category| category.name_matches(name));
            }
        }

        match self.categories().await {
            Ok(all) => all.iter().any(|category| category.name_matches(name)),
            Err(_) => false,
        }
    }

    /// Create a category.
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let url = self.api_url("Test/categories");
        self.send_authed(self.client.post(url).json(&draft.to_wire()))
            .await?
            .json()
    }

    /// Fetch a page of the product catalog.
    pub async fn products(
        &self,
        page: u32,
        page_size: u32,
        sort: Option<(SortBy, SortDir)>,
    ) -> Result<PagedProducts, ApiError> {
        let url = self.api_url("store/products");
        let mut query = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some((by, dir)) = sort {
            query.push(("sortBy", by.as_str().to_string()));
            query.push(("sortDir", dir.as_str().to_string()));
        }
        self.send_authed(self.client.get(url).query(&query))
            .await?
            .json()
    }

    /// Fetch one product's detail record.
    pub async fn product(&self, id: &str) -> Result<ProductDetail, ApiError> {
        let url = self.api_url(&format!("api/product/{id}"));
        self.send_authed(self.client.get(url)).await?.json()
    }

    /// Fetch every approved product.
    pub async fn approved_products(&self) -> Result<Vec<ProductDetail>, ApiError> {
        let url = self.api_url("api/product/approved");
        self.send_authed(self.client.get(url)).await?.json()
    }

    /// Best-effort duplicate check by product title and category, with
    /// the same degradation ladder as [`Self::category_exists`].
    pub async fn product_exists(&self, title: &str, category: Option<&str>) -> bool {
        let url = self.api_url("store/products/exists");
        let mut query = vec![("title", title.to_string())];
        if let Some(category) = category {
            query.push(("categoryId", category.to_string()));
        }
        if let Ok(body) = self.send_authed(self.client.get(url).query(&query)).await {
            if let Ok(ExistsResponse { exists }) = body.json::<ExistsResponse>() {
                return exists;
            }
        }

        let url = self.api_url("store/products");
        let mut query = vec![
            ("page", "1".to_string()),
            ("pageSize", "1".to_string()),
            ("title", title.to_string()),
        ];
        if let Some(category) = category {
            query.push(("categoryId", category.to_string()));
        }
        if let Ok(body) = self.send_authed(self.client.get(url).query(&query)).await {
            if let Ok(paged) = body.json::<PagedProducts>() {
                return !paged.items.is_empty();
            }
        }

        match self.products(1, 1000, None).await {
            Ok(paged) => paged
                .items
                .iter()
                .any(|product| product_matches(product, title, category)),
            Err(_) => false,
        }
    }

    /// Create a product.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.api_url("store/products");
        self.send_authed(self.client.post(url).json(draft))
            .await?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_content_types() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("Application/JSON"));
        assert!(!is_json("text/plain"));
        assert!(!is_json(""));
    }

    #[test]
    fn error_message_prefers_structured_body() {
        let message = error_message(409, r#"{"message":"Category already exists."}"#);
        assert_eq!(message, "Category already exists.");
    }

    #[test]
    fn error_message_falls_back_to_text_then_status() {
        assert_eq!(error_message(500, "  boom  "), "boom");
        assert_eq!(error_message(401, ""), "HTTP error 401");
    }

    #[test]
    fn status_error_carries_status_and_body() {
        let err = ApiError::Status {
            status: 401,
            body: "denied".into(),
            message: "denied".into(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_auth_expired());
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("dns".into());
        assert_eq!(err.status(), None);
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn payload_parses_json_by_content_type() {
        let body = ApiBody {
            content_type: "application/json".into(),
            text: r#"{"a":1}"#.into(),
        };
        assert_eq!(
            body.into_payload(),
            Payload::Json(serde_json::json!({"a": 1}))
        );
    }

    #[test]
    fn payload_keeps_non_json_as_text() {
        let body = ApiBody {
            content_type: "text/plain".into(),
            text: r#"{"a":1}"#.into(),
        };
        assert_eq!(body.into_payload(), Payload::Text(r#"{"a":1}"#.into()));
    }

    #[test]
    fn product_match_is_case_insensitive() {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","title":"  Desk Lamp ","price":10.0,"category":"Lighting"}"#,
        )
        .unwrap();
        assert!(product_matches(&product, "desk lamp", None));
        assert!(product_matches(&product, "desk lamp", Some("lighting")));
        assert!(!product_matches(&product, "desk lamp", Some("furniture")));
        assert!(!product_matches(&product, "lamp", None));
    }
}
