use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

use common::api::{CategoriesResponse, MenuId, MenuItem, MenuResponse, OrderRequest, OrderResponse};
use image::DynamicImage;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// One failure kind per endpoint. Transport errors, non-200 statuses and
/// undecodable bodies all collapse into the variant for the call that was
/// made, so callers match on what they asked for rather than on how the
/// request came apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClientError {
    CategoriesUnavailable,
    MenuItemsUnavailable,
    OrderSubmissionFailed,
    ImageUnavailable,
}

impl fmt::Display for MenuClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MenuClientError::CategoriesUnavailable => {
                write!(f, "could not fetch the category list")
            }
            MenuClientError::MenuItemsUnavailable => {
                write!(f, "could not fetch the menu items")
            }
            MenuClientError::OrderSubmissionFailed => {
                write!(f, "order submission failed")
            }
            MenuClientError::ImageUnavailable => {
                write!(f, "could not fetch the item image")
            }
        }
    }
}

impl Error for MenuClientError {}

/// Typed access to the menu backend. Construct one per backend and hand it
/// to whoever needs it; it holds no mutable state and never touches the
/// in-progress order.
pub struct MenuClient {
    base_url: Url,
    http: reqwest::Client,
}

impl MenuClient {
    pub fn new(base_url: Url) -> Self {
        MenuClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// `GET /categories`, the names of the menu sections on offer.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, MenuClientError> {
        let url = self.endpoint("categories", MenuClientError::CategoriesUnavailable)?;
        let response: CategoriesResponse = self
            .expect_json(self.http.get(url), MenuClientError::CategoriesUnavailable)
            .await?;
        Ok(response.categories)
    }

    /// `GET /menu?category=<name>`, the items in one category. The name is
    /// sent verbatim as a query parameter, percent-encoded as needed.
    pub async fn fetch_menu_items(&self, category: &str) -> Result<Vec<MenuItem>, MenuClientError> {
        let url = self.endpoint("menu", MenuClientError::MenuItemsUnavailable)?;
        let request = self.http.get(url).query(&[("category", category)]);
        let response: MenuResponse = self
            .expect_json(request, MenuClientError::MenuItemsUnavailable)
            .await?;
        Ok(response.items)
    }

    /// `POST /order` with the selected ids, returning the kitchen's estimate
    /// in minutes. A body that fails to encode fails the call rather than
    /// going out empty.
    pub async fn submit_order(&self, menu_ids: &[MenuId]) -> Result<u32, MenuClientError> {
        debug!("submitting order for {} items", menu_ids.len());
        let url = self.endpoint("order", MenuClientError::OrderSubmissionFailed)?;
        let body = OrderRequest {
            menu_ids: menu_ids.to_vec(),
        };
        let request = self.http.post(url).json(&body);
        let response: OrderResponse = self
            .expect_json(request, MenuClientError::OrderSubmissionFailed)
            .await?;
        Ok(response.prep_time)
    }

    /// Fetch and decode an item image from an arbitrary URL.
    pub async fn fetch_image(&self, url: Url) -> Result<DynamicImage, MenuClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| MenuClientError::ImageUnavailable)?;
        if response.status() != StatusCode::OK {
            return Err(MenuClientError::ImageUnavailable);
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|_| MenuClientError::ImageUnavailable)?;
        image::load_from_memory(&bytes).map_err(|_| MenuClientError::ImageUnavailable)
    }

    fn endpoint(&self, path: &str, kind: MenuClientError) -> Result<Url, MenuClientError> {
        self.base_url.join(path).map_err(|_| kind)
    }

    // Single round trip, status must be exactly 200, body must decode.
    async fn expect_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        kind: MenuClientError,
    ) -> Result<T, MenuClientError> {
        let response = request.send().await.map_err(|_| kind)?;
        if response.status() != StatusCode::OK {
            return Err(kind);
        }
        response.json().await.map_err(|_| kind)
    }
}

#[cfg(test)]
mod tests {
    use super::MenuClientError;

    #[test]
    fn error_messages_name_the_endpoint() {
        assert_eq!(
            MenuClientError::CategoriesUnavailable.to_string(),
            "could not fetch the category list"
        );
        assert_eq!(
            MenuClientError::OrderSubmissionFailed.to_string(),
            "order submission failed"
        );
    }
}
