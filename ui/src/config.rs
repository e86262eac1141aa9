use dioxus::logger::tracing::{error, info};
use modal_demo_common::greeting::{GreetingError, GreetingInput};
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum ConfigError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("failed to read page location: {0}")]
    Location(String),
    #[error("invalid greeting parameters: {0}")]
    Greeting(#[from] GreetingError),
}

/// Reads the greeting configuration from the page URL, falling back to the
/// defaults when it is missing or malformed.
pub fn greeting_input_from_location() -> GreetingInput {
    match read_location() {
        Ok(input) => {
            info!("Greeting configuration: {:?}", input);
            input
        }
        Err(e) => {
            error!("Ignoring page configuration: {}", e);
            GreetingInput::default()
        }
    }
}

pub fn parse_params(name: Option<String>, hour: Option<String>) -> Result<GreetingInput, ConfigError> {
    Ok(GreetingInput::from_params(name.as_deref(), hour.as_deref())?)
}

#[cfg(target_arch = "wasm32")]
fn read_location() -> Result<GreetingInput, ConfigError> {
    use crate::constants::{HOUR_PARAM, NAME_PARAM};
    use web_sys::{window, UrlSearchParams};

    let window = window().ok_or(ConfigError::NoWindow)?;
    let search = window
        .location()
        .search()
        .map_err(|e| ConfigError::Location(format!("{:?}", e)))?;
    let params =
        UrlSearchParams::new_with_str(&search).map_err(|e| ConfigError::Location(format!("{:?}", e)))?;

    parse_params(params.get(NAME_PARAM), params.get(HOUR_PARAM))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_location() -> Result<GreetingInput, ConfigError> {
    parse_params(None, None)
}
