use std::rc::Rc;

use communication::{Seller, SellerId};
use yew::prelude::*;

/// Everything the seller page knows about the sellers it shows.
#[derive(Clone, PartialEq, Debug)]
pub struct SellerViewState {
    /// Backend order, never re-sorted here.
    pub sellers: Vec<Seller>,
    /// Only true while the initial list is being fetched.
    pub is_loading: bool,
}

impl Default for SellerViewState {
    fn default() -> Self {
        Self {
            sellers: vec![],
            is_loading: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SellersAction {
    FetchStarted,
    FetchSucceeded(Vec<Seller>),
    FetchFinished,
    /// The backend confirmed a ban toggle for this seller.
    BanToggled(SellerId),
}

impl Reducible for SellerViewState {
    type Action = SellersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SellersAction::FetchStarted => Self {
                sellers: self.sellers.clone(),
                is_loading: true,
            }
            .into(),
            SellersAction::FetchSucceeded(sellers) => Self {
                sellers,
                is_loading: self.is_loading,
            }
            .into(),
            SellersAction::FetchFinished => Self {
                sellers: self.sellers.clone(),
                is_loading: false,
            }
            .into(),
            SellersAction::BanToggled(id) => match with_ban_toggled(&self.sellers, &id) {
                Some(sellers) => Self {
                    sellers,
                    is_loading: self.is_loading,
                }
                .into(),
                None => {
                    log::debug!("Seller {id} is not in the local list, nothing to update");
                    self
                }
            },
        }
    }
}

/// New list where the seller with `id` has its ban flag flipped.
/// `None` if no seller has that id.
fn with_ban_toggled(sellers: &[Seller], id: &SellerId) -> Option<Vec<Seller>> {
    let position = sellers.iter().position(|seller| &seller.id == id)?;
    let mut sellers = sellers.to_vec();
    sellers[position] = sellers[position].with_ban_toggled();
    Some(sellers)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn seller(id: &str, name: &str, is_banned: bool) -> Seller {
        Seller {
            id: id.into(),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            image: None,
            is_banned,
        }
    }

    fn loaded(sellers: Vec<Seller>) -> Rc<SellerViewState> {
        Rc::new(SellerViewState {
            sellers,
            is_loading: false,
        })
    }

    #[test]
    fn starts_loading_with_no_sellers() {
        let state = SellerViewState::default();
        assert!(state.is_loading);
        assert!(state.sellers.is_empty());
    }

    #[test]
    fn fetch_replaces_the_whole_list_in_backend_order() {
        let state = loaded(vec![seller("9", "Old", false)]);
        let fresh = vec![seller("2", "Zed", true), seller("1", "Ann", false)];

        let state = state.reduce(SellersAction::FetchStarted);
        assert!(state.is_loading);
        let state = state.reduce(SellersAction::FetchSucceeded(fresh.clone()));
        let state = state.reduce(SellersAction::FetchFinished);

        assert!(!state.is_loading);
        assert_eq!(state.sellers, fresh);
    }

    #[test]
    fn toggle_flips_only_the_matching_seller() {
        let before = vec![
            seller("1", "Ann", false),
            seller("2", "Bob", true),
            seller("3", "Cid", false),
        ];
        let state = loaded(before.clone()).reduce(SellersAction::BanToggled("2".into()));

        assert!(!state.sellers[1].is_banned);
        assert_eq!(state.sellers[0], before[0]);
        assert_eq!(state.sellers[2], before[2]);
        assert_eq!(
            state.sellers[1],
            Seller {
                is_banned: false,
                ..before[1].clone()
            }
        );
    }

    #[test]
    fn toggle_of_unknown_seller_is_a_no_op() {
        let state = loaded(vec![seller("1", "Ann", false)]);
        let after = state.clone().reduce(SellersAction::BanToggled("404".into()));

        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn toggle_does_not_touch_loading_flag() {
        let state = Rc::new(SellerViewState {
            sellers: vec![seller("1", "Ann", false)],
            is_loading: true,
        });
        let state = state.reduce(SellersAction::BanToggled("1".into()));

        assert!(state.is_loading);
        assert!(state.sellers[0].is_banned);
    }
}
