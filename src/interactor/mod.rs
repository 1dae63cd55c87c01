pub mod category_interactor;
pub mod dashboard_interactor;
pub mod token_interactor;

pub use category_interactor::{CategoryInteractor, CategoryInteractorImpl};
pub use dashboard_interactor::{DashboardInteractor, DashboardInteractorImpl, DashboardSnapshot};
pub use token_interactor::{TokenInteractor, TokenInteractorImpl};
