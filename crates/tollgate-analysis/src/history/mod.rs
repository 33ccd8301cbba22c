//! Build history access and reference build resolution.

pub mod build_history;
pub mod policy;
pub mod resolver;
pub mod walk;

pub use build_history::{BuildHistory, InMemoryHistory};
pub use policy::ReferencePolicy;
pub use resolver::ReferenceResolver;
pub use walk::{AnalysisHistory, BuildWalk};
