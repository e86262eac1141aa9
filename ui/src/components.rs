pub mod app;
pub mod modal;

#[cfg(test)]
mod test_utils;
