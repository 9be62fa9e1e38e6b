//! Small layout helpers shared by renderers

pub mod popup;
