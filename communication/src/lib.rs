use serde::{Deserialize, Serialize};

pub mod seller;

pub use seller::{Seller, SellerId, SellerImage, SellerList, ToggleBanResponse};

pub type DecodeError = serde_json::Error;

pub fn decode<'de, T>(data: &'de [u8]) -> Result<T, DecodeError>
where
    T: Deserialize<'de>,
{
    serde_json::from_slice::<'de, T>(data)
}

/// Body the backend sends along with a non-2xx status.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
