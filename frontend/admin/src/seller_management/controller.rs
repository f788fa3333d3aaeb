//! The two things the seller page does against the backend: load the list,
//! and toggle a seller's ban. Both report through a [`Notifier`] and change
//! local state only through `dispatch`.

use common::Notifier;
use communication::{Seller, SellerId};
use thiserror::Error;

use super::state::SellersAction;
use crate::api::{ApiError, SellerApi};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch sellers data";
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update seller status";

#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to fetch sellers")]
pub struct FetchError(#[source] pub ApiError);

impl FetchError {
    pub fn notification_text(&self) -> &str {
        self.0.message().unwrap_or(FETCH_FAILED_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to toggle ban for seller {seller_id}")]
pub struct ToggleError {
    pub seller_id: SellerId,
    #[source]
    pub source: ApiError,
}

impl ToggleError {
    pub fn notification_text(&self) -> &str {
        self.source.message().unwrap_or(TOGGLE_FAILED_MESSAGE)
    }
}

/// Load the whole seller list.
///
/// The loading flag is raised first and always lowered before returning.
/// On failure the current list stays as it is and the operator gets an error toast.
pub async fn fetch_sellers<A, N, D>(api: &A, notifier: &N, dispatch: D) -> Result<Vec<Seller>, FetchError>
where
    A: SellerApi + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(SellersAction),
{
    dispatch(SellersAction::FetchStarted);

    let result = api.get_all_sellers().await.map_err(FetchError);
    match &result {
        Ok(sellers) => {
            log::info!("Fetched {} sellers", sellers.len());
            dispatch(SellersAction::FetchSucceeded(sellers.clone()));
        }
        Err(err) => {
            log::error!("{err}: {}", err.0);
            notifier.notify_error(err.notification_text());
        }
    }

    dispatch(SellersAction::FetchFinished);
    result
}

/// Ask the backend to flip a seller's ban, then mirror it locally.
///
/// Local state changes only after the backend confirms.
pub async fn toggle_ban<A, N, D>(
    api: &A,
    notifier: &N,
    dispatch: D,
    seller_id: &SellerId,
) -> Result<String, ToggleError>
where
    A: SellerApi + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(SellersAction),
{
    log::debug!("Toggling ban for seller {seller_id}");

    match api.toggle_seller_ban(seller_id).await {
        Ok(response) => {
            log::info!("Toggled ban for seller {seller_id}: {}", response.message);
            notifier.notify_success(&response.message);
            dispatch(SellersAction::BanToggled(seller_id.clone()));
            Ok(response.message)
        }
        Err(source) => {
            let err = ToggleError {
                seller_id: seller_id.clone(),
                source,
            };
            log::error!("{err}: {}", err.source);
            notifier.notify_error(err.notification_text());
            Err(err)
        }
    }
}
