//! Suggestion dropdown rendered under the search field

pub mod dropdown_render;
