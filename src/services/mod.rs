pub mod i18n;
pub mod nav;
pub mod sessions;
pub mod store;
