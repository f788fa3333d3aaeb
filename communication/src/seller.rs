use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend identifier of a seller account.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(transparent)]
pub struct SellerId(pub String);

impl SellerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SellerId {
    fn from(value: &str) -> Self {
        SellerId(value.to_string())
    }
}

impl From<String> for SellerId {
    fn from(value: String) -> Self {
        SellerId(value)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SellerImage {
    pub url: String,
}

/// A marketplace seller account, as the backend reports it.
/// Field names follow the backend's JSON (`_id`, `isBanned`).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Seller {
    #[serde(rename = "_id", alias = "id")]
    pub id: SellerId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<SellerImage>,
    #[serde(rename = "isBanned", default)]
    pub is_banned: bool,
}

impl Seller {
    /// Picture url, if the seller has a usable one.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Same seller with the ban flag inverted.
    pub fn with_ban_toggled(&self) -> Seller {
        Seller {
            is_banned: !self.is_banned,
            ..self.clone()
        }
    }
}

/// Response of the seller listing endpoint.
/// Some deployments answer with a bare array, others wrap it.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum SellerList {
    Bare(Vec<Seller>),
    Wrapped { sellers: Vec<Seller> },
}

impl From<SellerList> for Vec<Seller> {
    fn from(value: SellerList) -> Self {
        match value {
            SellerList::Bare(sellers) => sellers,
            SellerList::Wrapped { sellers } => sellers,
        }
    }
}

/// Confirmation returned after a ban toggle.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ToggleBanResponse {
    #[serde(default)]
    pub message: String,
}
