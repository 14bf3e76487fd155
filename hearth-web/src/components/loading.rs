//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or("Loading...")]
    pub message: &'static str,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p>{props.message}</p>
        </div>
    }
}
