use common::layout::CenteredPanel;
use common::toast::ToastProvider;
use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{HttpSellerApi, SellerApiHandle};
use crate::seller_management::SellerManagement;

mod api;
mod seller_management;
mod settings;

const LOGIN_KEY_STORAGE: &str = "admin_login_key";

#[derive(Properties, PartialEq)]
struct MainAppProps {
    login_key: String,
    on_login_rejected: Callback<()>,
}

#[function_component(MainApp)]
fn main_app(props: &MainAppProps) -> Html {
    let settings = settings::get_settings();

    // One client per login key, so the page's mount-time fetch is not redone on re-render.
    let api = {
        let base_url = settings.api_base_url.clone();
        use_memo(
            move |login_key: &String| {
                SellerApiHandle::new(HttpSellerApi::new(base_url, Some(login_key.clone())))
            },
            props.login_key.clone(),
        )
    };

    html! {
        <ToastProvider duration_ms={settings.toast_duration_ms}>
            <SellerManagement api={(*api).clone()} on_login_rejected={props.on_login_rejected.clone()} />
        </ToastProvider>
    }
}

#[function_component(AppWrapper)]
fn app_wrapper() -> Html {
    let login_key = use_state(|| SessionStorage::get::<String>(LOGIN_KEY_STORAGE).ok());
    let pending_login_key = use_state(String::new);

    let pending_login_key_input = {
        let pending_login_key = pending_login_key.clone();
        Callback::from(move |e: InputEvent| {
            let event: Event = e.dyn_into().unwrap_throw();
            let event_target = event.target().unwrap_throw();
            let target: HtmlInputElement = event_target.dyn_into().unwrap_throw();
            pending_login_key.set(target.value());
        })
    };

    let pending_login_key_submit = {
        let pending_login_key = pending_login_key.clone();
        let login_key = login_key.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let key = pending_login_key.trim().to_string();
            if key.is_empty() {
                return;
            }
            if let Err(why) = SessionStorage::set(LOGIN_KEY_STORAGE, &key) {
                // The key still works for this page view, it just won't survive a reload.
                log::warn!("Could not remember admin login key: {why}");
            }
            login_key.set(Some(key));
        })
    };

    // A key the backend refuses is forgotten, so the operator is asked again.
    let login_rejected = {
        let login_key = login_key.clone();
        Callback::from(move |_: ()| {
            log::warn!("Backend rejected the admin login key");
            SessionStorage::delete(LOGIN_KEY_STORAGE);
            login_key.set(None);
        })
    };

    match &*login_key {
        Some(key) => html!(<MainApp login_key={key.clone()} on_login_rejected={login_rejected} />),
        None => html! {
            <CenteredPanel>
                <h3 class="text-xl font-semibold">{"Please input admin login key"}</h3>
                <form class="flex gap-2" onsubmit={pending_login_key_submit}>
                    <input type="password" class="form-input" value={(*pending_login_key).clone()} oninput={pending_login_key_input} />
                    <input type="submit" class="btn bg-violet-500 hover:bg-violet-600 text-white" value="Login" />
                </form>
            </CenteredPanel>
        },
    }
}

fn main() {
    settings::init_settings();
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("Seller admin starting");
    log::debug!("Settings: {settings:?}");

    yew::Renderer::<AppWrapper>::new().render();
}
