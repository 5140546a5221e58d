//! pcert Domain Layer
//!
//! Core record types for research project participation certificates.
//! Like every domain crate in this workspace it has ZERO external dependencies;
//! parsing, date handling and output live in the other crates.
//!
//! ## Key Concepts
//!
//! - **ProjectRecord**: attributes of one project, keyed by its project number
//! - **ProjectField**: the closed set of labels that may appear in a project-info block
//! - **ResearcherRecord**: one participation line for one person in one project
//! - **ParticipationRow**: a researcher record joined with the project's funding agency
//!
//! ## Architecture
//!
//! ```text
//! text → pcert-extractor → records → pcert-merger → pcert-report → sink
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod project;
pub mod researcher;

// Re-exports for convenience
pub use project::{ProjectField, ProjectRecord, PROJECT_COLUMNS};
pub use researcher::{ParticipationRow, ResearcherRecord, PARTICIPATION_COLUMNS};
