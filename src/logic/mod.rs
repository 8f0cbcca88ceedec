//! Logic modules: turn a selection into a setup script.
//!
//! Every module here is pure. Nothing reads the clock, the filesystem or the
//! network; the generator passes in everything they need.
//!
//! # Modules
//!
//! - `validator` - unknown ids, ill-typed values, sudo/warning/conflict advisories
//! - `resolver` - install ordering, tweak resolution, time and flag aggregation
//! - `render` - shell script text, section by section
//! - `report` - the `GenerationResult` handed back to callers

pub mod render;
pub mod report;
pub mod resolver;
pub mod validator;
