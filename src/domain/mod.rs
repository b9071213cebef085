//! Domain layer for imagedeck.
//!
//! Core types describing container images and their metadata, independent of
//! how a page embeds them or how views are rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`variant`]: Image variants, build arguments and their name set
//! - [`dependency`]: Dependency catalog and available updates
//! - [`sbom`]: Package inventory summaries
//! - [`changelog`]: Package changes between builds
//! - [`history`]: Build history and build-date normalization
//! - [`registry`]: Target registries and pull commands
//! - [`card`]: Dashboard container cards and status filters

pub mod card;
pub mod changelog;
pub mod dependency;
pub mod error;
pub mod history;
pub mod registry;
pub mod sbom;
pub mod variant;

pub use card::{CardStatus, CardVariant, ContainerCard, StatusFilter};
pub use changelog::{ChangeKind, Changelog, ChangelogEntry, ChangelogSummary};
pub use dependency::{DependencyData, DependencyRecord, DependencyStatus, DependencyUpdate};
pub use error::{DashboardError, Result};
pub use history::{format_build_date, ChangesSummary, HistoryEntry};
pub use registry::{pull_command, Registry};
pub use sbom::SbomSummary;
pub use variant::{size_or, ArgNames, BuildArg, Variant, CARD_PLACEHOLDER, DETAIL_PLACEHOLDER};
