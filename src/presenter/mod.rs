pub mod category_presenter;
pub mod dashboard_presenter;
pub mod token_presenter;

pub use category_presenter::{CategoryPresenter, CategoryPresenterImpl};
pub use dashboard_presenter::{DashboardPresenter, DashboardPresenterImpl};
pub use token_presenter::{TokenPresenter, TokenPresenterImpl};
