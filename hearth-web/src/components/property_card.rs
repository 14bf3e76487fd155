//! Property card for the my-page listing grid

use serde::Serialize;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use hearth_common::{Property, PropertyStatus};

use crate::components::status_menu::MenuState;
use crate::components::{StatusBadge, StatusMenu};
use crate::config::use_app_config;
use crate::device::{detect_device, DeviceClass};
use crate::router::{Route, CATEGORY_ADD_PROPERTY};
use crate::utils::{format_listed_date, format_price, format_views};

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub property: Property,
    /// Emits the listing id; absent means deletion is not offered here
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
    /// Emits the new status and the listing id
    #[prop_or_default]
    pub on_status_change: Option<Callback<(PropertyStatus, String)>>,
    /// True when the card shows another member's listing
    #[prop_or(false)]
    pub member_page: bool,
}

/// Whether the status badge opens the change menu.
/// Never on a member page, never once the listing is sold.
fn shows_status_menu(status: PropertyStatus, member_page: bool) -> bool {
    !member_page && status != PropertyStatus::Sold
}

/// Whether the edit/delete buttons render
fn shows_action_buttons(status: PropertyStatus, member_page: bool) -> bool {
    !member_page && status == PropertyStatus::Active
}

/// Statuses the change menu offers for the current status
fn menu_entries(status: PropertyStatus) -> Vec<PropertyStatus> {
    match status {
        PropertyStatus::Active => vec![PropertyStatus::Sold],
        _ => Vec::new(),
    }
}

#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let config = use_app_config();
    let navigator = use_navigator().unwrap();
    let menu = use_state(|| MenuState::Closed);

    if detect_device() == DeviceClass::Mobile {
        return html! {
            <div class="property-card-mobile">{"MOBILE PROPERTY CARD"}</div>
        };
    }

    let property = &props.property;

    let push_detail = {
        let navigator = navigator.clone();
        let member_page = props.member_page;
        let id = property.id.clone();

        Callback::from(move |_| {
            if !member_page {
                return;
            }

            #[derive(Serialize)]
            struct DetailQuery<'a> {
                id: &'a str,
            }

            let _ = navigator.push_with_query(&Route::PropertyDetail, &DetailQuery { id: &id });
        })
    };

    let push_edit = {
        let navigator = navigator.clone();
        let id = property.id.clone();

        Callback::from(move |_| {
            #[derive(Serialize)]
            struct EditQuery<'a> {
                category: &'a str,
                #[serde(rename = "propertyId")]
                property_id: &'a str,
            }

            let query = EditQuery {
                category: CATEGORY_ADD_PROPERTY,
                property_id: &id,
            };
            let _ = navigator.push_with_query(&Route::MyPage, &query);
        })
    };

    let open_menu = {
        let menu = menu.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(anchor) = e.target_dyn_into::<Element>() {
                let rect = anchor.get_bounding_client_rect();
                menu.set(MenuState::open_at(rect.bottom() + 4.0, rect.left()));
            }
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set(MenuState::Closed))
    };

    let on_menu_select = {
        let on_status_change = props.on_status_change.clone();
        let id = property.id.clone();

        Callback::from(move |status: PropertyStatus| {
            if let Some(ref callback) = on_status_change {
                callback.emit((status, id.clone()));
            }
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = property.id.clone();

        Callback::from(move |_| {
            if let Some(ref callback) = on_delete {
                callback.emit(id.clone());
            }
        })
    };

    let menu_available = shows_status_menu(property.status, props.member_page);

    html! {
        <div class="property-card">
            <div class="image-box" onclick={push_detail.clone()}>
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

            <div class="information-box" onclick={push_detail}>
                <p class="name">{&property.title}</p>
                <p class="address">{&property.address}</p>
                <p class="price">
                    <strong>{format!("${}", format_price(property.price))}</strong>
                </p>
            </div>

            <div class="date-box">
                <p class="date">{format_listed_date(&property.created_at)}</p>
            </div>

            <div class="status-box">
                {if menu_available {
                    html! { <StatusBadge status={property.status} onclick={Some(open_menu)} /> }
                } else {
                    html! { <StatusBadge status={property.status} /> }
                }}
            </div>

            {if let MenuState::Open { top, left } = *menu {
                if menu_available {
                    html! {
                        <StatusMenu
                            top={top}
                            left={left}
                            entries={menu_entries(property.status)}
                            on_select={Some(on_menu_select)}
                            on_close={close_menu}
                        />
                    }
                } else {
                    html! {}
                }
            } else {
                html! {}
            }}

            <div class="views-box">
                <p class="views">{format_views(property.views)}</p>
            </div>

            {if shows_action_buttons(property.status, props.member_page) {
                html! {
                    <div class="action-box">
                        <button class="icon-button" title="Edit" onclick={push_edit}>
                            {"✎"}
                        </button>
                        <button class="icon-button" title="Delete" onclick={on_delete_click}>
                            {"🗑"}
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sold_listings_never_offer_the_menu() {
        assert!(!shows_status_menu(PropertyStatus::Sold, false));
        assert!(!shows_status_menu(PropertyStatus::Sold, true));
    }

    #[test]
    fn member_page_never_offers_the_menu() {
        assert!(!shows_status_menu(PropertyStatus::Active, true));
        assert!(!shows_status_menu(PropertyStatus::Deleted, true));
    }

    #[test]
    fn own_active_listing_offers_menu_and_actions() {
        assert!(shows_status_menu(PropertyStatus::Active, false));
        assert!(shows_action_buttons(PropertyStatus::Active, false));
    }

    #[test]
    fn action_buttons_require_active_own_listing() {
        assert!(!shows_action_buttons(PropertyStatus::Sold, false));
        assert!(!shows_action_buttons(PropertyStatus::Deleted, false));
        assert!(!shows_action_buttons(PropertyStatus::Active, true));
    }

    #[test]
    fn active_listing_offers_only_sold() {
        assert_eq!(
            menu_entries(PropertyStatus::Active),
            vec![PropertyStatus::Sold]
        );
        assert!(menu_entries(PropertyStatus::Sold).is_empty());
        assert!(menu_entries(PropertyStatus::Deleted).is_empty());
    }
}
