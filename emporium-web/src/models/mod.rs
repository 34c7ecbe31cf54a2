pub(crate) mod app_state;
