//! Router configuration for the web UI

use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{my_page, property_detail};

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mypage")]
    MyPage,
    #[at("/property/detail")]
    PropertyDetail,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Category value that selects the listing form on the my-page hub
pub const CATEGORY_ADD_PROPERTY: &str = "addProperty";

/// Query parameters of the my-page hub
/// (`/mypage?category=addProperty&propertyId=...`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MyPageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "propertyId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub property_id: Option<String>,
}

/// Query parameters of the detail route (`/property/detail?id=...`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DetailQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Switch function to render pages
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::MyPage} /> },
        Route::MyPage => html! { <my_page::MyPage /> },
        Route::PropertyDetail => html! { <property_detail::PropertyDetail /> },
        Route::NotFound => html! { <h1>{"404 - Page Not Found"}</h1> },
    }
}
