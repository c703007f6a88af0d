//! The `/<slug>` list page.
//!
//! Fetches the whole collection once, pages through it locally and offers a
//! per-row menu with edit and delete to signed-in users.

use std::marker::PhantomData;
use std::sync::Arc;

use shelf_core::types::ItemId;
use shelf_core::CatalogEntity;

use crate::auth::AuthProvider;
use crate::client::CatalogApi;
use crate::context_menu::ContextMenu;
use crate::geometry::Rect;
use crate::listeners::Document;
use crate::pagination::{Pager, PaginationProps};
use crate::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<E> {
    Loading,
    Loaded(Vec<E>),
    /// The fetch failed; holds the message shown in place of the list.
    Failed(String),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub id: ItemId,
    pub title: &'a str,
    pub creator: &'a str,
    /// Whether the "⋮" trigger is rendered.
    pub show_menu: bool,
}

pub struct ListPage<E, C> {
    client: Arc<C>,
    auth: Arc<dyn AuthProvider>,
    state: LoadState<E>,
    pager: Pager,
    menu: ContextMenu,
    notice: Option<String>,
    action_error: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, C> ListPage<E, C>
where
    E: CatalogEntity,
    C: CatalogApi,
{
    pub fn new(client: Arc<C>, auth: Arc<dyn AuthProvider>, document: Document) -> Self {
        Self::with_pager(client, auth, document, Pager::default())
    }

    pub fn with_pager(
        client: Arc<C>,
        auth: Arc<dyn AuthProvider>,
        document: Document,
        pager: Pager,
    ) -> Self {
        Self {
            client,
            auth,
            state: LoadState::Loading,
            pager,
            menu: ContextMenu::new(document),
            notice: None,
            action_error: None,
            _entity: PhantomData,
        }
    }

    /// Fetch the collection. Failures are logged and replaced with a fixed
    /// message. Any open menu and previous action message are cleared.
    pub async fn load(&mut self) {
        self.menu.close();
        self.notice = None;
        self.action_error = None;
        self.state = LoadState::Loading;
        self.state = match self.client.list::<E>().await {
            Ok(items) => {
                self.pager.clamp(items.len());
                LoadState::Loaded(items)
            }
            Err(err) => {
                tracing::warn!(kind = %E::KIND, error = %err, "Failed to fetch catalog list");
                LoadState::Failed(format!("Failed to fetch {} data", E::KIND.slug()))
            }
        };
    }

    pub fn state(&self) -> &LoadState<E> {
        &self.state
    }

    /// Loaded records; empty while loading or after a failed fetch.
    pub fn items(&self) -> &[E] {
        match &self.state {
            LoadState::Loaded(items) => items,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// The current page's rows.
    pub fn rows(&self) -> Vec<ListRow<'_>> {
        let show_menu = self.auth.can_manage();
        self.pager
            .slice(self.items())
            .iter()
            .map(|item| ListRow {
                id: item.id(),
                title: item.title(),
                creator: item.creator(),
                show_menu,
            })
            .collect()
    }

    pub fn show_add(&self) -> bool {
        self.auth.can_manage()
    }

    pub fn add_route(&self) -> Route {
        Route::Add(E::KIND)
    }

    pub fn pagination(&self) -> PaginationProps {
        self.pager.props(self.items().len())
    }

    /// Pagination control callback. Out-of-range pages are clamped.
    pub fn go_to_page(&mut self, page: usize) {
        let len = self.items().len();
        self.pager.go_to(page, len);
    }

    /// Success message of the last action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Failure message of the last action; the list stays visible.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Open the row menu for `id` under the trigger at `trigger`. Returns
    /// `false` (and stays closed) when the user cannot manage records.
    pub fn open_menu(&mut self, id: ItemId, trigger: Rect) -> bool {
        if !self.auth.can_manage() {
            return false;
        }
        self.menu.open(id, trigger);
        true
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Menu "delete": soft-delete the selected record and drop it from the
    /// local list without refetching. Returns whether a record was removed.
    pub async fn delete_selected(&mut self) -> bool {
        let Some(id) = self.menu.selected() else {
            return false;
        };

        match self.client.delete::<E>(id).await {
            Ok(_) => {
                if let LoadState::Loaded(items) = &mut self.state {
                    items.retain(|item| item.id() != id);
                    self.pager.clamp(items.len());
                }
                self.menu.close();
                self.action_error = None;
                self.notice = Some(format!("{} successfully deleted", E::KIND.label()));
                tracing::info!(kind = %E::KIND, %id, "Catalog item deleted");
                true
            }
            Err(err) => {
                tracing::warn!(kind = %E::KIND, %id, error = %err, "Failed to delete catalog item");
                self.notice = None;
                self.action_error = Some(format!("Failed to delete {}", E::KIND.slug()));
                false
            }
        }
    }

    /// Menu "edit": close the menu and return the edit page for the selected
    /// record.
    pub fn edit_selected(&mut self) -> Option<Route> {
        let id = self.menu.selected()?;
        self.menu.close();
        Some(Route::Edit(E::KIND, id))
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::genre::GenreList;
    use shelf_core::movie::NewMovie;
    use shelf_core::Movie;

    use super::*;
    use crate::auth::StaticAuth;
    use crate::geometry::Point;
    use crate::testing::FakeCatalog;

    fn dune(n: usize) -> NewMovie {
        NewMovie {
            title: format!("Dune {n}"),
            director: "Villeneuve".into(),
            genre: GenreList::from("SF"),
        }
    }

    async fn seeded(count: usize) -> Arc<FakeCatalog> {
        let catalog = Arc::new(FakeCatalog::new());
        for n in 1..=count {
            catalog.seed::<Movie>(dune(n)).await;
        }
        catalog
    }

    fn page(
        catalog: &Arc<FakeCatalog>,
        auth: StaticAuth,
        document: &Document,
    ) -> ListPage<Movie, FakeCatalog> {
        ListPage::new(Arc::clone(catalog), Arc::new(auth), document.clone())
    }

    fn trigger() -> Rect {
        Rect::new(400.0, 100.0, 24.0, 24.0)
    }

    #[tokio::test]
    async fn load_then_paginate() {
        let catalog = seeded(12).await;
        let mut page = page(&catalog, StaticAuth::Anonymous, &Document::new());
        assert_eq!(page.state(), &LoadState::Loading);

        page.load().await;
        assert_eq!(page.items().len(), 12);
        assert_eq!(
            page.pagination(),
            PaginationProps { current_page: 1, total_pages: 3 }
        );

        page.go_to_page(3);
        let titles: Vec<_> = page.rows().iter().map(|r| r.title.to_string()).collect();
        assert_eq!(titles, ["Dune 11", "Dune 12"]);

        page.go_to_page(7);
        assert_eq!(page.pagination().current_page, 3);
    }

    #[tokio::test]
    async fn failed_fetch_shows_generic_message() {
        let catalog = seeded(1).await;
        catalog.set_failing(true);
        let mut page = page(&catalog, StaticAuth::Anonymous, &Document::new());

        page.load().await;

        assert_eq!(
            page.state(),
            &LoadState::Failed("Failed to fetch movie data".into())
        );
        assert!(page.rows().is_empty());
    }

    #[tokio::test]
    async fn management_controls_need_a_resolved_user() {
        let catalog = seeded(1).await;
        let document = Document::new();

        for auth in [StaticAuth::Loading, StaticAuth::Anonymous] {
            let mut page = page(&catalog, auth, &document);
            page.load().await;
            assert!(!page.show_add());
            assert!(!page.rows()[0].show_menu);
            let id = page.rows()[0].id;
            assert!(!page.open_menu(id, trigger()));
            assert_eq!(document.listener_count(), 0);
        }

        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &document);
        page.load().await;
        assert!(page.show_add());
        assert!(page.rows()[0].show_menu);
        assert_eq!(page.add_route(), Route::Add(shelf_core::CatalogKind::Movie));
    }

    #[tokio::test]
    async fn delete_removes_locally_and_closes_menu() {
        let catalog = seeded(6).await;
        let document = Document::new();
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &document);
        page.load().await;
        page.go_to_page(2);

        let last = page.rows()[0].id;
        assert!(page.open_menu(last, trigger()));
        let requests_before = catalog.requests();

        assert!(page.delete_selected().await);

        assert_eq!(catalog.requests(), requests_before + 1, "no refetch");
        assert_eq!(page.items().len(), 5);
        assert!(page.items().iter().all(|m| m.id != last));
        assert!(!page.menu().is_open());
        assert_eq!(document.listener_count(), 0);
        assert_eq!(page.notice(), Some("Movie successfully deleted"));
        assert_eq!(page.pagination().current_page, 1);
    }

    #[tokio::test]
    async fn failed_delete_keeps_list_and_reports() {
        let catalog = seeded(2).await;
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &Document::new());
        page.load().await;
        let id = page.rows()[0].id;
        page.open_menu(id, trigger());

        catalog.set_failing(true);
        assert!(!page.delete_selected().await);

        assert_eq!(page.items().len(), 2);
        assert_eq!(page.action_error(), Some("Failed to delete movie"));
        assert!(page.menu().is_open());
    }

    #[tokio::test]
    async fn reload_closes_menu_and_clears_messages() {
        let catalog = seeded(2).await;
        let document = Document::new();
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &document);
        page.load().await;
        let id = page.rows()[0].id;
        page.open_menu(id, trigger());
        catalog.set_failing(true);
        assert!(!page.delete_selected().await);
        assert!(page.action_error().is_some());

        catalog.set_failing(false);
        page.load().await;

        assert!(!page.menu().is_open());
        assert_eq!(document.listener_count(), 0);
        assert_eq!(page.action_error(), None);
        assert_eq!(page.notice(), None);
        let before = catalog.requests();
        assert!(!page.delete_selected().await);
        assert_eq!(catalog.requests(), before);
    }

    #[tokio::test]
    async fn delete_without_selection_does_nothing() {
        let catalog = seeded(1).await;
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &Document::new());
        page.load().await;
        let before = catalog.requests();

        assert!(!page.delete_selected().await);
        assert_eq!(catalog.requests(), before);
    }

    #[tokio::test]
    async fn edit_returns_the_edit_route() {
        let catalog = seeded(1).await;
        let document = Document::new();
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &document);
        page.load().await;
        let id = page.rows()[0].id;
        page.open_menu(id, trigger());

        assert_eq!(
            page.edit_selected(),
            Some(Route::Edit(shelf_core::CatalogKind::Movie, id))
        );
        assert!(!page.menu().is_open());
        assert_eq!(document.listener_count(), 0);
    }

    #[tokio::test]
    async fn outside_click_closes_menu_and_page_drop_leaks_nothing() {
        let catalog = seeded(1).await;
        let document = Document::new();
        let mut page = page(&catalog, StaticAuth::signed_in("u1", "Ada"), &document);
        page.load().await;
        let id = page.rows()[0].id;

        page.open_menu(id, trigger());
        document.pointer_down(Point::new(300.0, 150.0));
        assert!(page.menu().is_open());
        document.pointer_down(Point::new(5.0, 5.0));
        assert!(!page.menu().is_open());

        page.open_menu(id, trigger());
        assert_eq!(document.listener_count(), 1);
        drop(page);
        assert_eq!(document.listener_count(), 0);
    }
}
