//! Parametric **enclosures for single-board computers**, carved with
//! Constructive Solid Geometry on BSP trees and exported as STL.
//!
//! The default parameters describe an Arduino Uno Rev 4: [`enclosure::base`]
//! is an open tray with USB and DC-jack openings in its short wall, and
//! [`enclosure::top`] is a recessed lid slotted for the pin headers.
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export,
//!   the generator binary and [`enclosure::generate`]

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod enclosure;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod traits;

pub use enclosure::{EnclosureParams, EnclosurePart, Feature};
pub use mesh::Mesh;
pub use traits::CSGOps;
