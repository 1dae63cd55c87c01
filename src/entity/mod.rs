mod api_error;
mod category;
mod sort_key;
mod state;
mod token;

pub use api_error::ApiError;
pub use category::Category;
pub use sort_key::SortKey;
pub use state::{CategoryState, DashboardState, Section, TokenDetailState};
pub use token::Token;
