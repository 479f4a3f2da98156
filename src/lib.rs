//! bean-depend - coupling analysis for dependency-injection containers
//!
//! This library reads a bean container description, computes dependency
//! layers, reverse dependencies and bounded-depth circular dependencies,
//! and renders them as text, JSON or a Cypher import script. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Generic graph utilities, domain models and services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bean_depend::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let path = Path::new("beans.toml");
//! let content = FileSystemReader::new().read_manifest(path)?;
//! let container = TomlManifestContainer::parse(&content, path)?;
//!
//! let use_case = AnalyzeDependenciesUseCase::new(container, StderrProgressReporter::new());
//! let request = AnalysisRequest::builder()
//!     .configuration_root("com.example.RootConfig")
//!     .max_depth(4)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CypherFormatter, JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::manifest::TomlManifestContainer;
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::use_cases::AnalyzeDependenciesUseCase;
    pub use crate::dependency_analysis::domain::{
        BeanCycles, BeanName, CircularDependencyReport, ClassName, ReportMetadata,
    };
    pub use crate::dependency_analysis::graph::{
        find_cycles, CycleDescription, DependencyGraph, FlatDependencyMap, Layers,
    };
    pub use crate::dependency_analysis::services::{BeanFilter, DependencyAnalyzer};
    pub use crate::ports::outbound::{
        BeanContainer, ManifestReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
