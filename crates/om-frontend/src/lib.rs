//! Storefront shell around the spherical grid menu
//!
//! A thin eframe host: it owns the window and the catalog, renders the
//! menu into an offscreen texture shown through egui, forwards pointer
//! input, and draws the card for whichever item faces the camera.

pub mod app;
pub mod demo;
pub mod panels;
pub mod state;

pub use app::StorefrontApp;
