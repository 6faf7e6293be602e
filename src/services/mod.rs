pub mod navigation;
pub mod submit;
pub mod upload;
