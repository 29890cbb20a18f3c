//! Admin Backend HTTP Client
//!
//! Thin `reqwest` wrapper implementing [`AdminApi`]. Non-2xx statuses
//! and connection failures become `DomainError::Transport`; malformed
//! bodies become `DomainError::Internal`; business errors inside the
//! envelope surface as `DomainError::Backend` via the adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::AdminApi;
use super::types::{
    normalize_forest, normalize_record, normalize_vendor, Envelope, MapCategoriesBody,
    MappedPayload, RawCategory, UnmapCategoryBody, VendorsPayload,
};
use crate::config::ApiConfig;
use crate::domain::{Category, DomainError, DomainResult, MappingRecord, Vendor};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP implementation of [`AdminApi`]
pub struct HttpAdminApi {
    http: Client,
    config: ApiConfig,
}

impl HttpAdminApi {
    pub fn new(config: ApiConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.http.request(method, url).header("Accept", "application/json");
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> DomainResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(DomainError::Transport(format!(
                "{} returned {}: {}",
                path, status, snippet
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::Internal(format!("failed to parse response from {}: {}", path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> DomainResult<T> {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("failed to reach {}: {}", path, e)))?;

        self.read_json(path, response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DomainResult<T> {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("failed to reach {}: {}", path, e)))?;

        self.read_json(path, response).await
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn our_categories(&self) -> DomainResult<Vec<Category>> {
        let envelope: Envelope<Vec<RawCategory>> =
            self.get("/admin/get-our-categories", &[]).await?;
        Ok(normalize_forest(envelope.into_data("our categories")?))
    }

    async fn vendor_categories(&self, vendor_id: &str) -> DomainResult<Vec<Category>> {
        let envelope: Envelope<Vec<RawCategory>> = self
            .get("/admin/get-category-for-mappings", &[("vendorId", vendor_id)])
            .await?;
        Ok(normalize_forest(envelope.into_data("vendor categories")?))
    }

    async fn mapped_categories(&self, vendor_id: &str) -> DomainResult<Vec<MappingRecord>> {
        let envelope: Envelope<MappedPayload> = self
            .get("/admin/get-mapped-categories", &[("vendorId", vendor_id)])
            .await?;

        let payload = envelope.into_data("mapped categories")?;
        if let Some(pages) = payload.total_pages {
            // The grouped table paginates locally; the backend's page
            // count is informational only.
            log::debug!("mapped list for vendor {} reports {} backend pages", vendor_id, pages);
        }

        Ok(payload.data.into_iter().map(normalize_record).collect())
    }

    async fn map_categories(
        &self,
        our_category_id: &str,
        vendor_category_ids: Vec<String>,
    ) -> DomainResult<String> {
        let body = MapCategoriesBody {
            our_category_id: our_category_id.to_string(),
            vendor_category_id: vendor_category_ids,
        };
        let envelope: Envelope<serde_json::Value> =
            self.post("/admin/map-vendor-category", &body).await?;
        envelope.into_ack("map")
    }

    async fn unmap_category(&self, vendor_category_id: &str) -> DomainResult<String> {
        let body = UnmapCategoryBody {
            vendor_category_id: vendor_category_id.to_string(),
        };
        let envelope: Envelope<serde_json::Value> =
            self.post("/admin/unmap-vendor-category", &body).await?;
        envelope.into_ack("unmap")
    }

    async fn vendors(&self) -> DomainResult<Vec<Vendor>> {
        let envelope: Envelope<VendorsPayload> = self.get("/admin/get-vendor-list", &[]).await?;
        let payload = envelope.into_data("vendor list")?;
        Ok(payload.vendors.into_iter().map(normalize_vendor).collect())
    }
}
