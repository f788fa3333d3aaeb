use async_trait::async_trait;
use communication::{decode, ErrorBody, Seller, SellerId, SellerList, ToggleBanResponse};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiError, SellerApi};

/// [`SellerApi`] backed by the marketplace's REST endpoints.
pub struct HttpSellerApi {
    base_url: String,
    login_key: Option<String>,
}

impl HttpSellerApi {
    pub fn new(base_url: impl Into<String>, login_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_key,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn send<T>(&self, method: &str, endpoint: &str, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("{method} request to: {}", self.url(endpoint));

        let request = match &self.login_key {
            Some(key) => request.header("Authorization", &format!("Bearer {key}")),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("{method} {endpoint} - {err}");
            err
        })?;

        let status = response.status();
        let ok = response.ok();
        let body = response.binary().await.map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("{method} {endpoint} - {err}");
            err
        })?;

        if !ok {
            let message = decode::<ErrorBody>(&body).ok().and_then(|b| b.message);
            let err = ApiError::Status { status, message };
            log::error!("{method} {endpoint} - {err} ({:?})", err.message());
            return Err(err);
        }

        log::trace!("{method} {endpoint} - Response received, parsing JSON");
        let value = decode(&body).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            log::error!("{method} {endpoint} - {err}");
            err
        })?;

        log::info!("{method} {endpoint} - Success");
        Ok(value)
    }
}

/// Ids are opaque to us, so they go into the path as a single escaped segment.
fn toggle_ban_endpoint(seller_id: &SellerId) -> String {
    format!("/sellers/{}/toggle-ban", urlencoding::encode(seller_id.as_str()))
}

#[async_trait(?Send)]
impl SellerApi for HttpSellerApi {
    async fn get_all_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        let endpoint = "/sellers";
        let list: SellerList = self
            .send("GET", endpoint, Request::get(&self.url(endpoint)))
            .await?;
        Ok(list.into())
    }

    async fn toggle_seller_ban(&self, seller_id: &SellerId) -> Result<ToggleBanResponse, ApiError> {
        let endpoint = toggle_ban_endpoint(seller_id);
        self.send("PATCH", &endpoint, Request::patch(&self.url(&endpoint)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_do_not_double_slashes() {
        let api = HttpSellerApi::new("https://shop.example/api/", None);
        assert_eq!(api.url("/sellers"), "https://shop.example/api/sellers");

        let api = HttpSellerApi::new("https://shop.example/api", None);
        assert_eq!(
            api.url("/sellers/64f1c0/toggle-ban"),
            "https://shop.example/api/sellers/64f1c0/toggle-ban"
        );
    }

    #[test]
    fn seller_id_stays_inside_its_path_segment() {
        let api = HttpSellerApi::new("https://shop.example/api", None);
        assert_eq!(
            api.url(&toggle_ban_endpoint(&SellerId::from("a/b?x=1#f"))),
            "https://shop.example/api/sellers/a%2Fb%3Fx%3D1%23f/toggle-ban"
        );
        assert_eq!(
            toggle_ban_endpoint(&SellerId::from("64f1c0")),
            "/sellers/64f1c0/toggle-ban"
        );
    }
}
