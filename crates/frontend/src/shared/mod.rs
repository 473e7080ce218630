pub mod api_utils;
pub mod date_utils;
pub mod form_utils;
pub mod icons;
