use common::{
    filter::FilterButton,
    layout::DashboardShell,
    toast::ToastContext,
};
use communication::SellerId;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::SellerApiHandle;
use crate::seller_management::{
    state::{SellerViewState, SellersAction},
    table::SellerTable,
};

mod controller;
mod state;
mod table;

#[derive(Properties, PartialEq)]
pub struct SellerManagementProps {
    pub api: SellerApiHandle,
    /// Called when the backend refuses the admin login key.
    pub on_login_rejected: Callback<()>,
}

/// Seller list with a ban/unban action per row.
#[function_component]
pub fn SellerManagement(props: &SellerManagementProps) -> Html {
    let toasts: ToastContext = use_context().expect("SellerManagement needs a ToastProvider");
    let sidebar_open = use_state(|| false);
    let state = use_reducer(SellerViewState::default);

    {
        let api = props.api.clone();
        let toasts = toasts.clone();
        let dispatcher = state.dispatcher();
        let on_login_rejected = props.on_login_rejected.clone();
        use_mount(move || {
            spawn_local(async move {
                let dispatch = |action: SellersAction| dispatcher.dispatch(action);
                // The operator has already seen the error as a toast.
                if let Err(err) = controller::fetch_sellers(&*api, &toasts, dispatch).await {
                    if err.0.rejects_login() {
                        on_login_rejected.emit(());
                    }
                }
            });
        });
    }

    let on_toggle_ban = {
        let api = props.api.clone();
        let dispatcher = state.dispatcher();
        let on_login_rejected = props.on_login_rejected.clone();
        Callback::from(move |seller_id: SellerId| {
            let api = api.clone();
            let toasts = toasts.clone();
            let dispatcher = dispatcher.clone();
            let on_login_rejected = on_login_rejected.clone();
            spawn_local(async move {
                let dispatch = |action: SellersAction| dispatcher.dispatch(action);
                if let Err(err) = controller::toggle_ban(&*api, &toasts, dispatch, &seller_id).await {
                    if err.source.rejects_login() {
                        on_login_rejected.emit(());
                    }
                }
            });
        })
    };

    let on_sidebar_toggle = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |open: bool| sidebar_open.set(open))
    };

    html! {
        <DashboardShell sidebar_open={*sidebar_open} {on_sidebar_toggle}>
            <div class="sm:flex sm:justify-between sm:items-center mb-8">
                <div class="mb-4 sm:mb-0">
                    <h1 class="text-2xl md:text-3xl text-gray-800 dark:text-gray-100 font-bold">{"Seller Management"}</h1>
                </div>
                <div class="grid grid-flow-col sm:auto-cols-max justify-start sm:justify-end gap-2">
                    <FilterButton />
                </div>
            </div>

            <div class="bg-white dark:bg-gray-800 shadow-sm rounded-xl">
                <header class="px-5 py-4 border-b border-gray-100 dark:border-gray-700/60">
                    <h2 class="font-semibold text-gray-800 dark:text-gray-100">
                        {"All Sellers "}
                        <span class="text-gray-400 dark:text-gray-500 font-medium">{state.sellers.len()}</span>
                    </h2>
                </header>
                <div class="p-3">
                    <SellerTable sellers={state.sellers.clone()} is_loading={state.is_loading} {on_toggle_ban} />
                </div>
            </div>
        </DashboardShell>
    }
}
