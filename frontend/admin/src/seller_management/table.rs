use communication::{Seller, SellerId};
use yew::prelude::*;

pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/40x40";

const CELL: &str = "px-2 first:pl-5 last:pr-5 py-3 whitespace-nowrap";

pub fn avatar_src(seller: &Seller) -> &str {
    seller.image_url().unwrap_or(PLACEHOLDER_AVATAR)
}

/// Label and colours of the status pill.
pub fn status_badge(is_banned: bool) -> (&'static str, &'static str) {
    if is_banned {
        (
            "Banned",
            "bg-red-100 dark:bg-red-400/30 text-red-600 dark:text-red-400",
        )
    } else {
        (
            "Active",
            "bg-emerald-100 dark:bg-emerald-400/30 text-emerald-600 dark:text-emerald-400",
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct SellerTableProps {
    pub sellers: Vec<Seller>,
    pub is_loading: bool,
    pub on_toggle_ban: Callback<SellerId>,
}

#[function_component]
pub fn SellerTable(props: &SellerTableProps) -> Html {
    if props.is_loading {
        return html! { <div class="text-center py-4">{"Loading..."}</div> };
    }

    log::trace!("Rendering {} seller rows", props.sellers.len());
    let rows = props.sellers.iter().map(|seller| {
        html! {
            <SellerRow key={seller.id.to_string()} seller={seller.clone()} on_toggle_ban={props.on_toggle_ban.clone()} />
        }
    });

    html! {
        <div class="overflow-x-auto">
            <table class="table-auto w-full dark:text-gray-300">
                <thead class="text-xs uppercase text-gray-400 dark:text-gray-500 bg-gray-50 dark:bg-gray-700/50">
                    <tr>
                        <th class={CELL}><div class="font-semibold text-left">{"Name"}</div></th>
                        <th class={CELL}><div class="font-semibold text-left">{"Email"}</div></th>
                        <th class={CELL}><div class="font-semibold text-left">{"Status"}</div></th>
                        <th class={CELL}><div class="font-semibold text-right">{"Actions"}</div></th>
                    </tr>
                </thead>
                <tbody class="text-sm divide-y divide-gray-100 dark:divide-gray-700">
                    { for rows }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SellerRowProps {
    seller: Seller,
    on_toggle_ban: Callback<SellerId>,
}

#[function_component]
fn SellerRow(props: &SellerRowProps) -> Html {
    let seller = &props.seller;
    let (label, colours) = status_badge(seller.is_banned);

    let toggle_cb = {
        let on_toggle_ban = props.on_toggle_ban.clone();
        let id = seller.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_ban.emit(id.clone());
        })
    };

    html! {
        <tr>
            <td class={CELL}>
                <div class="flex items-center">
                    <div class="w-10 h-10 shrink-0 mr-2 sm:mr-3">
                        <img class="rounded-full" src={avatar_src(seller).to_string()} width="40" height="40" alt={seller.name.clone()} />
                    </div>
                    <div class="font-medium text-gray-800 dark:text-gray-100">{&seller.name}</div>
                </div>
            </td>
            <td class={CELL}>
                <div class="text-left">{&seller.email}</div>
            </td>
            <td class={CELL}>
                <div class={classes!("inline-flex", "font-medium", "rounded-full", "text-center", "px-2.5", "py-0.5", colours)}>
                    {label}
                </div>
            </td>
            <td class={CELL}>
                <div class="flex justify-end">
                    <button class="text-gray-400 hover:text-gray-500 dark:text-gray-500 dark:hover:text-gray-400 rounded-full" title={if seller.is_banned { "Unban seller" } else { "Ban seller" }} onclick={toggle_cb}>
                        <span class="sr-only">{"Toggle Ban"}</span>
                        {"⋯"}
                    </button>
                </div>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use communication::SellerImage;
    use futures::executor::block_on;
    use yew::ServerRenderer;

    use super::*;
    use crate::seller_management::state::{tests::seller, SellerViewState, SellersAction};

    fn render(sellers: Vec<Seller>, is_loading: bool) -> String {
        let renderer = ServerRenderer::<SellerTable>::with_props(move || SellerTableProps {
            sellers,
            is_loading,
            on_toggle_ban: Callback::noop(),
        })
        .hydratable(false);
        block_on(renderer.render())
    }

    /// Seller rows only; the header row is not counted.
    fn body_rows(html: &str) -> usize {
        html.matches("<tr>").count().saturating_sub(1)
    }

    #[test]
    fn badge_reflects_ban_flag() {
        assert_eq!(status_badge(false).0, "Active");
        assert_eq!(status_badge(true).0, "Banned");
        assert_ne!(status_badge(false).1, status_badge(true).1);
    }

    #[test]
    fn avatar_falls_back_to_placeholder() {
        let mut ann = seller("1", "Ann", false);
        assert_eq!(avatar_src(&ann), PLACEHOLDER_AVATAR);

        ann.image = Some(SellerImage {
            url: "https://cdn.example/ann.png".to_string(),
        });
        assert_eq!(avatar_src(&ann), "https://cdn.example/ann.png");
    }

    #[test]
    fn loading_shows_only_the_placeholder() {
        let html = render(vec![seller("1", "Ann", false)], true);

        assert_eq!(html.matches("Loading...").count(), 1);
        assert!(!html.contains("<table"));
        assert!(!html.contains("Ann"));
    }

    #[test]
    fn one_row_per_seller_in_backend_order() {
        let html = render(
            vec![
                seller("2", "Zed", true),
                seller("1", "Ann", false),
                seller("3", "Moe", false),
            ],
            false,
        );

        assert!(!html.contains("Loading..."));
        assert_eq!(body_rows(&html), 3);
        let zed = html.find("Zed").unwrap();
        let ann = html.find("Ann").unwrap();
        let moe = html.find("Moe").unwrap();
        assert!(zed < ann && ann < moe);
    }

    #[test]
    fn fetched_seller_is_active_until_toggled() {
        let state = Rc::new(SellerViewState::default())
            .reduce(SellersAction::FetchSucceeded(vec![seller("1", "Ann", false)]))
            .reduce(SellersAction::FetchFinished);

        let html = render(state.sellers.clone(), state.is_loading);
        assert_eq!(body_rows(&html), 1);
        assert!(html.contains("ann@x.com"));
        assert!(html.contains("Active"));
        assert!(!html.contains("Banned"));
        assert!(html.contains(PLACEHOLDER_AVATAR));

        let state = state.reduce(SellersAction::BanToggled("1".into()));
        let html = render(state.sellers.clone(), state.is_loading);
        assert_eq!(body_rows(&html), 1);
        assert!(html.contains("Banned"));
        assert!(!html.contains("Active"));
    }
}
