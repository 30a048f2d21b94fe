//! Review proxy engine library.
//!
//! HTTP service that proxies storefront review queries to Judge.me.
//!
//! ## Structure
//!
//! - `use_cases/` - One use case per endpoint (product, ratings, reviews)
//! - `infrastructure/` - Judge.me client, port traits, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
