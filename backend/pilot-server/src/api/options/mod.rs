pub mod option_catalog_response;
#[allow(clippy::module_inception)]
pub mod options;
