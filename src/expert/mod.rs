//! Expert definitions: persona records and their transport bindings.

mod definition;
mod params;

pub use definition::{ExpertDefinition, ExpertRecord};
pub use params::{ModelParams, ParamUpdate};
