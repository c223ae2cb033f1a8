//! LADSPA-RDF vocabulary
//!
//! Types and flag constants describing LADSPA plugins together with the
//! extra metadata (title, creator, units, scale points) that an RDF
//! descriptor file supplies on top of the binary plugin descriptor.
//!
//! ## Layout
//!
//! - `units` - Unit codes, unit classes and their predicates
//! - `port` - Port type and hint flags, `RdfPort` and `RdfScalePoint`
//! - `class` - Plugin class flags and the functional group masks
//! - `descriptor` - `RdfDescriptor`, the per-plugin record
//! - `validate` - Checking a descriptor against a loaded plugin
//!
//! The numeric value of every constant here is shared with the loader
//! that fills these records, so none of them may change.

pub mod class;
pub mod descriptor;
pub mod port;
pub mod units;
pub mod validate;

pub use class::*;
pub use descriptor::RdfDescriptor;
pub use port::*;
pub use units::*;
pub use validate::is_port_compatible;

/// Value type of defaults and scale points.
pub type LadspaData = f32;

/// Port type, hint and unit values.
pub type LadspaProperty = i32;

/// Plugin class bitmask.
pub type LadspaPluginType = u64;

/// Port descriptor as reported by the binary LADSPA plugin.
pub type LadspaPortDescriptor = i32;
