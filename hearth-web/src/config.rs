//! Composition-time configuration for the web UI

use yew::prelude::*;

/// Configuration the mounting code supplies to the component tree.
/// Components read it from context instead of ambient environment state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL prefixed to listing image references
    pub media_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            media_base_url: "/api".to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigProviderProps {
    #[prop_or_default]
    pub config: AppConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Provides [`AppConfig`] to descendant components
#[function_component(ConfigProvider)]
pub fn config_provider(props: &ConfigProviderProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            {props.children.clone()}
        </ContextProvider<AppConfig>>
    }
}

/// Read the ambient [`AppConfig`], falling back to defaults when no
/// provider is mounted
#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
