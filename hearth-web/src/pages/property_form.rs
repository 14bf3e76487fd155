//! Listing form: create a new listing or re-save an existing one

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiClient, PropertyInput};
use crate::components::Header;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct PropertyFormProps {
    /// Present when re-saving an existing listing
    #[prop_or_default]
    pub property_id: Option<String>,
}

#[function_component(PropertyForm)]
pub fn property_form(props: &PropertyFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let title = use_state(|| String::new());
    let address = use_state(|| String::new());
    let price = use_state(|| String::new());
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Prefill the fields when editing an existing listing
    {
        let title = title.clone();
        let address = address.clone();
        let price = price.clone();

        use_effect_with(props.property_id.clone(), move |property_id| {
            if let Some(id) = property_id.clone() {
                spawn_local(async move {
                    if let Ok(property) = ApiClient::get_property(&id).await {
                        title.set(property.title);
                        address.set(property.address);
                        price.set(property.price.to_string());
                    }
                });
            }

            || ()
        });
    }

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_address_change = {
        let address = address.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            address.set(input.value());
        })
    };

    let on_price_change = {
        let price = price.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let address = address.clone();
        let price = price.clone();
        let error = error.clone();
        let saving = saving.clone();
        let navigator = navigator.clone();
        let property_id = props.property_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_price = match price.trim().parse::<u64>() {
                Ok(value) => value,
                Err(_) => {
                    error.set(Some("Price must be a whole number".to_string()));
                    return;
                }
            };

            let input = PropertyInput {
                title: (*title).clone(),
                address: (*address).clone(),
                price: parsed_price,
            };

            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            let property_id = property_id.clone();

            saving.set(true);

            spawn_local(async move {
                let result = match property_id {
                    Some(ref id) => ApiClient::update_property(id, &input).await,
                    None => ApiClient::create_property(&input).await,
                };

                match result {
                    Ok(_) => navigator.push(&Route::MyPage),
                    Err(e) => {
                        error.set(Some(format!("Save failed: {}", e)));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let header_title = if props.property_id.is_some() {
        "Edit Listing"
    } else {
        "New Listing"
    };

    html! {
        <div class="property-form-page">
            <Header title={header_title} back={true} />

            <div class="page-content">
                <form class="property-form" onsubmit={on_submit}>
                    {if let Some(err) = (*error).as_ref() {
                        html! { <div class="error-message">{err}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label>{"Title"}</label>
                        <input
                            type="text"
                            placeholder="Sunny two-bedroom loft"
                            value={(*title).clone()}
                            onchange={on_title_change}
                            disabled={*saving}
                            class="form-input"
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Address"}</label>
                        <input
                            type="text"
                            placeholder="12 Harbor Lane"
                            value={(*address).clone()}
                            onchange={on_address_change}
                            disabled={*saving}
                            class="form-input"
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Price"}</label>
                        <input
                            type="text"
                            placeholder="250000"
                            value={(*price).clone()}
                            onchange={on_price_change}
                            disabled={*saving}
                            class="form-input"
                        />
                    </div>

                    <button type="submit" disabled={*saving} class="form-submit">
                        {if *saving { "Saving..." } else { "Save Listing" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
