//! Headless core of the Tavolo recipe and grocery list app.
//!
//! Everything the native shells need apart from drawing lives here: the
//! bundled cookbook catalog, ingredient filtering, link classification,
//! mock grocery list generation and the view state of each screen. The
//! [`ffi`] module exports it all through UniFFI.

pub mod classify;
pub mod config;
pub mod ffi;
pub mod filter;
pub mod generate;
pub mod model;
pub mod preferences;
pub mod sample;
pub mod state;

uniffi::setup_scaffolding!();

pub use classify::{classify_link, extract_video_id, LinkClassification, LinkKind};
pub use config::Settings;
pub use filter::IngredientFilter;
pub use generate::{CancellationToken, GeneratedList, Generator, IngredientSource, MockSource};
pub use model::*;
pub use preferences::PreferenceStore;
pub use sample::SampleData;
