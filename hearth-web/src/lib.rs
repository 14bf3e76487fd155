//! Hearth web UI
//!
//! Client-side rendered listings interface built with Yew.
//! Members manage their own property listings: browse, add, edit,
//! mark as sold, and delete.

pub mod api;
pub mod components;
pub mod config;
pub mod device;
pub mod pages;
pub mod router;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use config::{AppConfig, ConfigProvider};
use router::{switch, Route};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Configuration supplied by the mounting code
    #[prop_or_default]
    pub config: AppConfig,
}

/// Main application component
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ConfigProvider config={props.config.clone()}>
            <BrowserRouter>
                <div class="hearth-app">
                    <TopNav />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ConfigProvider>
    }
}

/// Top navigation bar
#[function_component(TopNav)]
fn top_nav() -> Html {
    let navigator = use_navigator().unwrap();

    let go_my_page = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::MyPage))
    };

    html! {
        <nav class="top-nav">
            <span class="nav-brand">{"Hearth"}</span>
            <button class="nav-item" onclick={go_my_page}>
                {"My Page"}
            </button>
        </nav>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
