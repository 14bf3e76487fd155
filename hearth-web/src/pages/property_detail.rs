//! Read-only listing detail page

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use hearth_common::Property;

use crate::api::ApiClient;
use crate::components::{Header, Loading, StatusBadge};
use crate::config::use_app_config;
use crate::router::DetailQuery;
use crate::utils::{format_listed_date, format_price, format_views};

/// Detail page; the listing id arrives as the `id` query parameter
#[function_component(PropertyDetail)]
pub fn property_detail() -> Html {
    let config = use_app_config();
    let id = use_location()
        .and_then(|location| location.query::<DetailQuery>().ok())
        .and_then(|query| query.id);

    let property = use_state(|| None::<Property>);
    let loading = use_state(|| true);

    // Fetch the listing
    {
        let property = property.clone();
        let loading = loading.clone();

        use_effect_with(id, move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    if let Ok(found) = ApiClient::get_property(&id).await {
                        property.set(Some(found));
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }

            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="property-detail-page">
            <Header title="Listing" back={true} />

            <div class="page-content">
                {if let Some(ref property) = *property {
                    html! {
                        <div class="detail-card">
                            <div class="detail-image">
                                {if let Some(image) = property.images.first() {
                                    html! {
                                        <img
                                            src={format!("{}/{}", config.media_base_url, image)}
                                            alt={property.title.clone()}
                                        />
                                    }
                                } else {
                                    html! { <div class="no-photo">{"No photo"}</div> }
                                }}
                            </div>

                            <div class="detail-rows">
                                <div class="detail-row">
                                    <span class="label">{"Title:"}</span>
                                    <span class="value">{&property.title}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="label">{"Address:"}</span>
                                    <span class="value">{&property.address}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="label">{"Price:"}</span>
                                    <span class="value">
                                        {format!("${}", format_price(property.price))}
                                    </span>
                                </div>
                                <div class="detail-row">
                                    <span class="label">{"Status:"}</span>
                                    <StatusBadge status={property.status} />
                                </div>
                                <div class="detail-row">
                                    <span class="label">{"Listed:"}</span>
                                    <span class="value">{format_listed_date(&property.created_at)}</span>
                                </div>
                                <div class="detail-row">
                                    <span class="label">{"Views:"}</span>
                                    <span class="value">{format_views(property.views)}</span>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="empty-state">
                            <p>{"Listing not found"}</p>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
