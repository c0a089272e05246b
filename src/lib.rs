//! fsio-gen - FSIO settings file generator
//!
//! Writes the two artifacts the firmware build needs for FSIO-visible
//! configuration fields: an enum of setting constants and a block of getter
//! `case` arms. Follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`fsio_settings`): Settings model, header rendering and output lifecycle
//! - **Application Layer** (`application`): Generation use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File, in-memory and console implementations of the ports
//! - **Shared** (`shared`): Errors, result alias and path checks
//!
//! # Example
//!
//! ```no_run
//! use fsio_gen::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let emitter = FileSettingsEmitter::new(
//!     "out/fsio_enums.h",
//!     "out/fsio_getters.h",
//!     EmitterConfig::default(),
//! );
//!
//! let mut use_case = GenerateFsioFilesUseCase::new(
//!     FileSystemReader::new(),
//!     emitter,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = GenerateRequest::new(PathBuf::from("fsio_settings.yml"));
//! let response = use_case.execute(request)?;
//! println!("{} settings generated", response.constant_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod fsio_settings;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{NullProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSettingsEmitter, FileSystemReader, OutputTarget,
    };
    pub use crate::adapters::outbound::memory::InMemorySettingsEmitter;
    pub use crate::application::dto::{GenerateRequest, GenerateResponse};
    pub use crate::application::use_cases::GenerateFsioFilesUseCase;
    pub use crate::fsio_settings::domain::{
        EmitterConfig, EnumerationDescription, FsioSettingsModel, GettersContent, LineEnding,
        OutputState, SettingField, SettingsManifest,
    };
    pub use crate::fsio_settings::services::FsioSettingsBuilder;
    pub use crate::ports::outbound::{ProgressReporter, SettingsConsumer, SettingsManifestReader};
    pub use crate::shared::error::FsioError;
    pub use crate::shared::Result;
}
