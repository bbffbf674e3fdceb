pub mod error;
pub mod interactive;
pub mod output;

pub use error::{AppError, AppResult, report_error};
pub use output::{OutputStyle, print_success, set_color_enabled};
