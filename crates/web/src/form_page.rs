//! The `/<slug>/add` and `/<slug>/<id>/edit` form page.

use std::marker::PhantomData;
use std::sync::Arc;

use shelf_core::entity::{DraftFields, PatchFields};
use shelf_core::error::CoreError;
use shelf_core::genre::GenreSelection;
use shelf_core::types::ItemId;
use shelf_core::validation::into_core_error;
use shelf_core::CatalogEntity;
use validator::Validate;

use crate::auth::AuthProvider;
use crate::client::{CatalogApi, ClientError};
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ItemId),
}

pub struct FormPage<E, C> {
    client: Arc<C>,
    auth: Arc<dyn AuthProvider>,
    mode: FormMode,
    title: String,
    creator: String,
    genres: GenreSelection,
    submitting: bool,
    error: Option<String>,
    notice: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, C> FormPage<E, C>
where
    E: CatalogEntity,
    C: CatalogApi,
{
    /// Empty add form.
    pub fn create(client: Arc<C>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            client,
            auth,
            mode: FormMode::Create,
            title: String::new(),
            creator: String::new(),
            genres: GenreSelection::new(),
            submitting: false,
            error: None,
            notice: None,
            _entity: PhantomData,
        }
    }

    /// Edit form prefilled from `record`.
    pub fn edit(client: Arc<C>, auth: Arc<dyn AuthProvider>, record: &E) -> Self {
        let mut page = Self::create(client, auth);
        page.mode = FormMode::Edit(record.id());
        page.title = record.title().to_string();
        page.creator = record.creator().to_string();
        page.genres = record.genre().iter().cloned().collect();
        page
    }

    /// Fetch record `id` and open the edit form for it.
    pub async fn load_edit(
        client: Arc<C>,
        auth: Arc<dyn AuthProvider>,
        id: ItemId,
    ) -> Result<Self, ClientError> {
        let record = client.get::<E>(id).await?;
        Ok(Self::edit(client, auth, &record))
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Where to send a visitor who may not use this page: the list page,
    /// once the session has resolved without a user.
    pub fn redirect(&self) -> Option<Route> {
        if !self.auth.is_loading() && self.auth.current_user().is_none() {
            Some(Route::List(E::KIND))
        } else {
            None
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    /// Director, artist or author.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn set_creator(&mut self, value: impl Into<String>) {
        self.creator = value.into();
    }

    /// Name of the creator input (`director`, `artist`, `author`).
    pub fn creator_field(&self) -> &'static str {
        E::KIND.creator_field()
    }

    /// Checkbox options.
    pub fn genre_options(&self) -> &'static [&'static str] {
        E::KIND.genres()
    }

    pub fn is_checked(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    pub fn selected_genres(&self) -> &[String] {
        self.genres.tags()
    }

    /// Checkbox change handler.
    pub fn toggle_genre(&mut self, genre: &str, checked: bool) {
        self.genres.toggle(genre, checked);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (FormMode::Create, false) => "ADD",
            (FormMode::Create, true) => "adding...",
            (FormMode::Edit(_), false) => "SAVE",
            (FormMode::Edit(_), true) => "saving...",
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn draft(&self) -> E::Draft {
        E::Draft::from(DraftFields {
            title: self.title.clone(),
            creator: self.creator.clone(),
            genre: self.genres.to_list(),
        })
    }

    /// Required-field check run before anything is sent.
    pub fn validate(&self) -> Result<(), String> {
        self.draft()
            .validate()
            .map_err(|errors| match into_core_error(E::KIND, &errors) {
                CoreError::Validation(message) => message,
                other => other.to_string(),
            })
    }

    /// Submit the form. Returns the route to navigate to on success.
    ///
    /// Does nothing while a submission is already in flight. A failing local
    /// check sets the error and sends nothing.
    pub async fn submit(&mut self) -> Option<Route> {
        if self.submitting {
            return None;
        }
        if let Err(message) = self.validate() {
            self.error = Some(message);
            return None;
        }

        self.error = None;
        self.notice = None;

        let result = match self.mode {
            FormMode::Create => {
                let draft = self.draft();
                let _in_flight = InFlight::start(&mut self.submitting);
                self.client.create::<E>(&draft).await
            }
            FormMode::Edit(id) => {
                let patch = E::Patch::from(PatchFields {
                    title: Some(self.title.clone()),
                    creator: Some(self.creator.clone()),
                    genre: Some(self.genres.to_list()),
                });
                let _in_flight = InFlight::start(&mut self.submitting);
                self.client.update::<E>(id, &patch).await
            }
        };

        let slug = E::KIND.slug();
        match result {
            Ok(record) => {
                tracing::info!(kind = %E::KIND, id = %record.id(), mode = ?self.mode, "Catalog form submitted");
                match self.mode {
                    FormMode::Create => {
                        self.notice = Some(format!("successfully added {slug}"));
                        self.reset();
                    }
                    FormMode::Edit(_) => {
                        self.notice = Some(format!("successfully updated {slug}"));
                    }
                }
                Some(Route::List(E::KIND))
            }
            Err(err) => {
                tracing::warn!(kind = %E::KIND, error = %err, "Catalog form submission failed");
                self.error = Some(match self.mode {
                    FormMode::Create => format!("fail to add {slug}"),
                    FormMode::Edit(_) => format!("fail to update {slug}"),
                });
                None
            }
        }
    }

    fn reset(&mut self) {
        self.title.clear();
        self.creator.clear();
        self.genres.clear();
    }
}

/// Holds the submitting flag up for as long as it lives, so dropping a
/// pending submit leaves the form usable.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
