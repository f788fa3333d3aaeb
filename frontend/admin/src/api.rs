use std::{ops::Deref, rc::Rc};

use async_trait::async_trait;
use communication::{Seller, SellerId, ToggleBanResponse};
use thiserror::Error;

mod http;

pub use http::HttpSellerApi;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Status {
        status: u16,
        /// Explanation from the response body, when the backend gave one.
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable reason to show the operator, if there is one.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ApiError::Network(message) | ApiError::Decode(message) => Some(message.as_str()),
            ApiError::Status { message, .. } => message.as_deref(),
        };
        message.filter(|m| !m.trim().is_empty())
    }

    /// The backend refused the admin login key.
    pub fn rejects_login(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// The two backend operations the seller page needs.
#[async_trait(?Send)]
pub trait SellerApi {
    /// Every seller, in the order the backend keeps them.
    async fn get_all_sellers(&self) -> Result<Vec<Seller>, ApiError>;

    /// Flip the banned flag of one seller, returning the backend's confirmation.
    async fn toggle_seller_ban(&self, seller_id: &SellerId) -> Result<ToggleBanResponse, ApiError>;
}

/// Shared handle to a [`SellerApi`] that can be passed as a component prop.
/// Two handles are equal when they point at the same client.
#[derive(Clone)]
pub struct SellerApiHandle(Rc<dyn SellerApi>);

impl SellerApiHandle {
    pub fn new(api: impl SellerApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for SellerApiHandle {
    type Target = dyn SellerApi;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SellerApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
