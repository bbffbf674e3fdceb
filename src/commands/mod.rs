pub mod configure;
pub mod profile;
pub mod render;
pub mod serve;
