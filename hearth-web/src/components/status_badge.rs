//! Status badge component

use yew::prelude::*;

use hearth_common::PropertyStatus;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: PropertyStatus,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = match props.status {
        PropertyStatus::Active => "status-badge status-active",
        PropertyStatus::Sold => "status-badge status-sold",
        PropertyStatus::Deleted => "status-badge status-deleted",
    };

    let onclick = props.onclick.clone();
    let handle_click = move |e: MouseEvent| {
        if let Some(ref callback) = onclick {
            callback.emit(e);
        }
    };

    html! {
        <span class={class} onclick={handle_click}>
            {props.status.to_string()}
        </span>
    }
}
