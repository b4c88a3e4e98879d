//! Hand and Five Domain Layer
//!
//! This crate contains the domain model for the dataset on the colexification
//! of ‘hand’ and ‘five’ in Austronesian languages. It defines the entities that
//! end up as rows of the CLDF tables, the fixed catalog of parameters and
//! source datasets, and the trait boundary to the genealogical classification.
//!
//! ## Key Concepts
//!
//! - **Language**: A Glottolog language-level languoid in the sample
//! - **Form**: The counterpart for ‘hand’ or ‘five’ picked for a language
//! - **Parameter / Code**: The nine analytical dimensions and their categories
//! - **Value**: The coded answer for one language and one parameter
//! - **Replacement event**: A probable loss of the inherited word in a subgroup
//!
//! ## Architecture
//!
//! The only external dependency is `serde`, so that entities can be written to
//! and read from the CLDF tables directly. Loading of raw sheets, the
//! classification and all I/O live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod concept;
pub mod entities;
pub mod slug;
pub mod traits;

// Re-exports for convenience
pub use catalog::{CodeSpec, Coding, ContributionSpec, ParameterSpec, ValueSource};
pub use concept::Concept;
pub use entities::{Code, Contribution, Form, Language, Parameter, ReplacementEvent, Value};
pub use slug::slug;
pub use traits::{Classification, LineageEntry, Languoid, LanguoidLevel};
