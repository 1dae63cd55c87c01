pub mod category_view;
pub mod dashboard_view;
pub mod screen;
pub mod token_table;
pub mod token_view;

pub use category_view::{CategoryView, TerminalCategoryView};
pub use dashboard_view::{DashboardView, TerminalDashboardView};
pub use screen::{Capture, Screen};
pub use token_table::{render_token_table, token_rows, TokenRow, NO_DATA_MESSAGE};
pub use token_view::{TerminalTokenView, TokenView};
