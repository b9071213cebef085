//! User interface layer: view models, their derivations and HTML rendering.
//!
//! # Architecture
//!
//! ```text
//! AppState + Page → compute_view → PageView → render_document → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`health`]: Dependency health badge, progress bar and row toggles
//! - [`sections`]: SBOM, changelog and build history views
//! - [`dashboard`]: Card filtering, counts and pull commands
//! - [`renderer`]: HTML output with `maud`
//! - [`theme`]: Light/dark mode and system detection

pub mod dashboard;
pub mod health;
pub mod renderer;
pub mod sections;
pub mod theme;
pub mod viewmodel;

pub use health::dependency_health;
pub use renderer::{render_document, render_page};
pub use theme::ThemeMode;
pub use viewmodel::{
    CardView, ChangelogView, DashboardView, DependencyHealthView, HealthBadge, HistoryView,
    LineageView, MetaView, PageView, ProgressView, RowToggle, SbomView,
};
