use anyhow::{bail, Result};
use log::{error, info};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::di::ServiceContainer;
use crate::entity::SortKey;
use crate::interactor::{CategoryInteractorImpl, DashboardInteractorImpl, TokenInteractorImpl};
use crate::presenter::{
    CategoryPresenter, CategoryPresenterImpl, DashboardPresenter, DashboardPresenterImpl,
    TokenPresenter, TokenPresenterImpl,
};
use crate::view::{Screen, TerminalCategoryView, TerminalDashboardView, TerminalTokenView};

pub mod route;

pub use route::{Route, RouteError};

/// The mounted page of the current route.
#[derive(Clone)]
pub enum Page {
    Dashboard(Arc<dyn DashboardPresenter>),
    Category(Arc<dyn CategoryPresenter>),
    Token(Arc<dyn TokenPresenter>),
}

/// Mounts pages for routes and runs their fetches in the background.
///
/// Fetches are never awaited inline, so a new command can supersede a fetch
/// that is still in flight.
pub struct Router {
    services: Arc<ServiceContainer>,
    screen: Screen,
    current: Option<(Route, Page)>,
    pending: Vec<JoinHandle<Result<()>>>,
}

impl Router {
    pub fn new(services: Arc<ServiceContainer>, screen: Screen) -> Self {
        Self {
            services,
            screen,
            current: None,
            pending: Vec::new(),
        }
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.current.as_ref().map(|(route, _)| route)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.as_ref().map(|(_, page)| page)
    }

    pub fn navigate(&mut self, route: Route) {
        info!("Navigating to {}", route);

        // Moving between categories keeps the page and its sort selection
        let page = match (&self.current, &route) {
            (Some((_, Page::Category(presenter))), Route::Category(_)) => {
                Page::Category(presenter.clone())
            }
            _ => self.mount(&route),
        };

        self.current = Some((route.clone(), page.clone()));
        self.load(&route, page);
    }

    pub fn refresh(&mut self) -> Result<()> {
        match self.current.clone() {
            Some((route, page)) => {
                self.load(&route, page);
                Ok(())
            }
            None => bail!("Nothing to refresh, open a page first"),
        }
    }

    pub fn select_sort(&mut self, sort: SortKey) -> Result<()> {
        let presenter = self.category_page()?;
        self.spawn(async move { presenter.select_sort(sort).await });
        Ok(())
    }

    pub fn load_more(&mut self) -> Result<()> {
        let presenter = self.category_page()?;
        self.spawn(async move { presenter.load_more().await });
        Ok(())
    }

    /// Asks the backend to refresh its data in the background, then reloads
    /// the page shown when the sync was requested.
    pub fn sync(&mut self) {
        let api = self.services.token_api();
        let screen = self.screen.clone();
        let current = self.current.clone();

        self.spawn(async move {
            let status = match api.trigger_sync().await {
                Ok(status) => status,
                Err(e) => {
                    error!("Backend sync failed: {}", e);
                    return screen.show(&format!("Sync failed: {}", e));
                }
            };
            info!("Backend sync answered {}", status.status);
            screen.show(&format!(
                "Sync {}: {}",
                status.status,
                status.message.as_deref().unwrap_or("done")
            ))?;

            match current {
                Some((route, page)) => load_page(route, page).await,
                None => Ok(()),
            }
        });
    }

    /// Waits for every fetch started so far.
    pub async fn settle(&mut self) {
        for handle in self.pending.drain(..) {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Page update failed: {}", e),
                Err(e) => error!("Page task panicked: {}", e),
            }
        }
    }

    fn category_page(&self) -> Result<Arc<dyn CategoryPresenter>> {
        match self.current_page() {
            Some(Page::Category(presenter)) => Ok(presenter.clone()),
            _ => bail!("Sorting and paging are only available on a category page"),
        }
    }

    fn mount(&self, route: &Route) -> Page {
        let api = self.services.token_api();
        let config = self.services.config();

        match route {
            Route::Dashboard => Page::Dashboard(Arc::new(DashboardPresenterImpl::new(
                Arc::new(DashboardInteractorImpl::new(api, config.top_tokens_limit)),
                Arc::new(TerminalDashboardView::new(self.screen.clone())),
            ))),
            Route::Category(id) => Page::Category(Arc::new(CategoryPresenterImpl::new(
                Arc::new(CategoryInteractorImpl::new(
                    api,
                    config.category_tokens_limit,
                )),
                Arc::new(TerminalCategoryView::new(self.screen.clone())),
                id,
            ))),
            Route::Token(id) => Page::Token(Arc::new(TokenPresenterImpl::new(
                Arc::new(TokenInteractorImpl::new(api)),
                Arc::new(TerminalTokenView::new(self.screen.clone())),
                id,
            ))),
        }
    }

    fn load(&mut self, route: &Route, page: Page) {
        self.spawn(load_page(route.clone(), page));
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(tokio::spawn(task));
    }
}

async fn load_page(route: Route, page: Page) -> Result<()> {
    match (&route, page) {
        (Route::Category(id), Page::Category(presenter)) => presenter.show_category(id).await,
        (Route::Token(id), Page::Token(presenter)) => presenter.show_token(id).await,
        (_, Page::Dashboard(presenter)) => presenter.show_dashboard().await,
        (route, _) => bail!("Page does not match route {}", route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tests::common::{category, token, StubApi};

    fn router(api: Arc<StubApi>) -> (Router, crate::view::Capture) {
        let (screen, capture) = Screen::capture();
        let services = Arc::new(ServiceContainer::new(api, AppConfig::default()));
        (Router::new(services, screen), capture)
    }

    #[tokio::test]
    async fn dashboard_route_renders_dashboard() {
        let api = Arc::new(StubApi::new(
            vec![category("pump-fun", "PumpFun", 5, 1.2e9, 3e7)],
            vec![token("bonk", "Bonk", "BONK", 1.5e9)],
        ));
        let (mut router, capture) = router(api.clone());

        router.navigate(Route::Dashboard);
        router.settle().await;

        assert!(capture.contents().contains("PumpFun"));
        assert_eq!(api.queries()[0].limit, 20);
        assert!(matches!(router.current_page(), Some(Page::Dashboard(_))));
    }

    #[tokio::test]
    async fn category_page_survives_category_change() {
        let api = Arc::new(StubApi::new(vec![], vec![token("a", "A", "A", 1e6)]));
        let (mut router, _capture) = router(api.clone());

        router.navigate(Route::Category("pump-fun".into()));
        router.settle().await;
        router.select_sort(SortKey::Volume24h).unwrap();
        router.settle().await;
        router.navigate(Route::Category("ai-meme-coins".into()));
        router.settle().await;

        let last = api.queries().pop().unwrap();
        assert_eq!(last.category.as_deref(), Some("ai-meme-coins"));
        assert_eq!(last.sort, SortKey::Volume24h);
        assert_eq!(
            router.current_route(),
            Some(&Route::Category("ai-meme-coins".into()))
        );
    }

    #[tokio::test]
    async fn sorting_requires_category_page() {
        let api = Arc::new(StubApi::new(vec![], vec![]));
        let (mut router, _capture) = router(api);

        assert!(router.select_sort(SortKey::Volume24h).is_err());
        assert!(router.refresh().is_err());

        router.navigate(Route::Dashboard);
        assert!(router.load_more().is_err());
        router.settle().await;
    }

    #[tokio::test]
    async fn dashboard_resets_category_sort() {
        let api = Arc::new(StubApi::new(vec![], vec![]));
        let (mut router, _capture) = router(api.clone());

        router.navigate(Route::Category("pump-fun".into()));
        router.select_sort(SortKey::PriceChange24h).unwrap();
        router.settle().await;
        router.navigate(Route::Dashboard);
        router.settle().await;
        router.navigate(Route::Category("pump-fun".into()));
        router.settle().await;

        let last = api.queries().pop().unwrap();
        assert_eq!(last.sort, SortKey::MarketCap);
    }
}
