pub const APP_TITLE: &str = "Testing Library Example";
pub const SHOW_MODAL_LABEL: &str = "Show Modal";

/// Query parameters read from the page URL, e.g. `?name=Diego&hour=14`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const NAME_PARAM: &str = "name";
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const HOUR_PARAM: &str = "hour";
