//! My-page hub: the member's own listings and the listing form

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use hearth_common::{Property, PropertyStatus};

use crate::api::ApiClient;
use crate::components::{Header, Loading, PropertyCard};
use crate::pages::property_form::PropertyForm;
use crate::router::{MyPageQuery, CATEGORY_ADD_PROPERTY};

/// Hub page; the `category` query parameter selects the section
#[function_component(MyPage)]
pub fn my_page() -> Html {
    let query = use_location()
        .and_then(|location| location.query::<MyPageQuery>().ok())
        .unwrap_or_default();

    if query.category.as_deref() == Some(CATEGORY_ADD_PROPERTY) {
        return html! { <PropertyForm property_id={query.property_id} /> };
    }

    html! { <MyProperties /> }
}

/// The member's own listings
#[function_component(MyProperties)]
fn my_properties() -> Html {
    let properties = use_state(|| Vec::<Property>::new());
    let loading = use_state(|| true);

    // Fetch listings on mount
    {
        let properties = properties.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(list) = ApiClient::list_my_properties().await {
                    properties.set(list);
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_delete = {
        let properties = properties.clone();

        Callback::from(move |id: String| {
            let properties = properties.clone();

            spawn_local(async move {
                let _ = ApiClient::delete_property(&id).await;

                // Refresh the list
                if let Ok(list) = ApiClient::list_my_properties().await {
                    properties.set(list);
                }
            });
        })
    };

    let on_status_change = {
        let properties = properties.clone();

        Callback::from(move |(status, id): (PropertyStatus, String)| {
            let properties = properties.clone();

            spawn_local(async move {
                let _ = ApiClient::update_property_status(&id, status).await;

                // Refresh the list
                if let Ok(list) = ApiClient::list_my_properties().await {
                    properties.set(list);
                }
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="my-properties-page">
            <Header title="My Properties" />

            <div class="page-content">
                {if properties.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No listings yet"}</p>
                        </div>
                    }
                } else {
                    properties.iter().map(|property| html! {
                        <PropertyCard
                            key={property.id.clone()}
                            property={property.clone()}
                            on_delete={Some(on_delete.clone())}
                            on_status_change={Some(on_status_change.clone())}
                        />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}
