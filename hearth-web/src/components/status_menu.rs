//! Anchored status-change menu

use yew::prelude::*;

use hearth_common::PropertyStatus;

/// Open/closed state of a card's status menu.
///
/// `Open` carries the popover position derived from the clicked anchor
/// at open time; the DOM element itself is not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuState {
    Closed,
    Open { top: f64, left: f64 },
}

impl MenuState {
    pub fn open_at(top: f64, left: f64) -> Self {
        MenuState::Open { top, left }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMenuProps {
    pub top: f64,
    pub left: f64,
    /// Statuses offered for selection
    pub entries: Vec<PropertyStatus>,
    #[prop_or_default]
    pub on_select: Option<Callback<PropertyStatus>>,
    pub on_close: Callback<()>,
}

/// Transient popover listing the statuses a listing can move to.
/// Clicking the backdrop dismisses; selecting an entry closes the menu
/// first, then emits `on_select`.
#[function_component(StatusMenu)]
pub fn status_menu(props: &StatusMenuProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let style = format!("top: {}px; left: {}px;", props.top, props.left);

    html! {
        <div class="status-menu-backdrop" onclick={on_backdrop_click}>
            <div class="status-menu" style={style} onclick={|e: MouseEvent| e.stop_propagation()}>
                {props.entries.iter().map(|status| {
                    let onclick = {
                        let on_close = props.on_close.clone();
                        let on_select = props.on_select.clone();
                        let status = *status;

                        Callback::from(move |_| {
                            on_close.emit(());
                            if let Some(ref callback) = on_select {
                                callback.emit(status);
                            }
                        })
                    };

                    html! {
                        <button class="status-menu-item" onclick={onclick}>
                            {entry_label(*status)}
                        </button>
                    }
                }).collect::<Html>()}
            </div>
        </div>
    }
}

fn entry_label(status: PropertyStatus) -> &'static str {
    match status {
        PropertyStatus::Active => "Active",
        PropertyStatus::Sold => "Sold",
        PropertyStatus::Deleted => "Deleted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_state_transitions() {
        let state = MenuState::open_at(120.0, 40.0);
        assert!(state.is_open());
        assert_eq!(state, MenuState::Open { top: 120.0, left: 40.0 });

        assert!(!MenuState::Closed.is_open());
    }
}
