//! Client side of the shelf catalog.
//!
//! Page models for the list and add/edit pages, free of any rendering
//! toolkit: a view layer reads their state and forwards user input to
//! their methods. They talk to the API through [`client::CatalogApi`] and
//! learn about the signed-in user through [`auth::AuthProvider`].

pub mod auth;
pub mod client;
pub mod context_menu;
pub mod form_page;
pub mod geometry;
pub mod list_page;
pub mod listeners;
pub mod pagination;
pub mod route;

#[cfg(test)]
mod testing;

pub use client::{CatalogApi, ClientError, HttpCatalogClient};
pub use form_page::{FormMode, FormPage};
pub use list_page::{ListPage, LoadState};
pub use route::Route;
