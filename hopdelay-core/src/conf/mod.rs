//! Analysis profiles.
//!
//! HCL file
//! ProfileSpec (serde, deny_unknown_fields)
//! validate_spec (all violations at once)
//! lower (runtime types)
//! ResolvedConfig

mod error;
mod loader;
mod lower;
pub mod types;
mod validate;


pub use error::ConfigError;
pub use loader::{ResolvedConfig, load_config, load_profile_spec, parse_profile_spec, resolve};
pub use lower::{lower_runs, lower_settings};
pub use types::{
    ChannelsSpec, DropSide, ProfileSpec, RecordSpec, ReportSpec, RunSpec, SecondarySpec, TimeFormatSpec,
    ToleranceSpec,
};
pub use validate::validate_spec;
