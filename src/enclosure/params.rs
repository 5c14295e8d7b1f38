//! Board, wall and port dimensions for the enclosure.
//!
//! All lengths are millimetres. The `const`s describe an Arduino Uno Rev 4;
//! [`EnclosureParams::default`] is built from them and a JSON file can
//! override any subset of fields.

use crate::errors::{ValidationError, require_non_negative, require_positive};
use crate::float_types::Real;
use crate::io::IoError;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;

pub const BOARD_WIDTH: Real = 68.6;
pub const BOARD_LENGTH: Real = 53.4;
pub const BOARD_HEIGHT: Real = 13.0;
pub const THICKNESS: Real = 2.0;
pub const CLEARANCE: Real = 1.0;
pub const SCREW_HOLE_RADIUS: Real = 1.7;
/// Mounting hole centres, relative to the board's own corner.
pub const SCREW_HOLE_SPACING: [(Real, Real); 4] =
    [(3.2, 3.2), (3.2, 49.5), (64.4, 3.2), (64.4, 49.5)];

// Ports on the short side (x = 0 wall): (x, y) position and (height, width) size.
pub const USB_PORT_POSITION: (Real, Real) = (0.0, 15.0);
pub const USB_PORT_SIZE: (Real, Real) = (12.0, 8.0);
pub const DC_JACK_POSITION: (Real, Real) = (0.0, 35.0);
pub const DC_JACK_SIZE: (Real, Real) = (10.0, 12.0);

// Header pin slots in the top cover.
pub const HEADER_LENGTH: Real = 52.0;
pub const HEADER_WIDTH: Real = 5.0;
/// Distance from the inner wall to the start of each header slot, along x.
pub const HEADER_X_OFFSET: Real = 8.0;
/// Distance from the inner wall to each header slot's centre line, along y.
pub const HEADER_EDGE_INSET: Real = 5.5;

pub const CYLINDER_SEGMENTS: usize = 32;

/// Every number the generator needs.
///
/// Unknown keys in a parameter file are rejected, so a misspelt override
/// fails loudly instead of silently keeping the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnclosureParams {
    pub board_width: Real,
    pub board_length: Real,
    pub board_height: Real,
    pub thickness: Real,
    pub clearance: Real,
    pub screw_hole_radius: Real,
    pub screw_hole_spacing: Vec<(Real, Real)>,
    pub usb_port_position: (Real, Real),
    pub usb_port_size: (Real, Real),
    pub dc_jack_position: (Real, Real),
    pub dc_jack_size: (Real, Real),
    pub header_length: Real,
    pub header_width: Real,
    pub header_x_offset: Real,
    pub header_edge_inset: Real,
    /// Cut the mounting holes through the base floor. Off by default, so the
    /// default output carries no screw holes.
    pub screw_holes: bool,
    /// Flat sides used to approximate each screw hole.
    pub cylinder_segments: usize,
}

impl Default for EnclosureParams {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_length: BOARD_LENGTH,
            board_height: BOARD_HEIGHT,
            thickness: THICKNESS,
            clearance: CLEARANCE,
            screw_hole_radius: SCREW_HOLE_RADIUS,
            screw_hole_spacing: SCREW_HOLE_SPACING.to_vec(),
            usb_port_position: USB_PORT_POSITION,
            usb_port_size: USB_PORT_SIZE,
            dc_jack_position: DC_JACK_POSITION,
            dc_jack_size: DC_JACK_SIZE,
            header_length: HEADER_LENGTH,
            header_width: HEADER_WIDTH,
            header_x_offset: HEADER_X_OFFSET,
            header_edge_inset: HEADER_EDGE_INSET,
            screw_holes: false,
            cylinder_segments: CYLINDER_SEGMENTS,
        }
    }
}

impl EnclosureParams {
    /// Parse parameters from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON parameter file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject dimensions no solid can be built from.
    ///
    /// Layout problems (overlapping or out-of-bounds cutouts) are not checked;
    /// the boolean operations simply produce whatever they produce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("board_width", self.board_width)?;
        require_positive("board_length", self.board_length)?;
        require_positive("board_height", self.board_height)?;
        require_positive("thickness", self.thickness)?;
        require_non_negative("clearance", self.clearance)?;

        require_non_negative("usb_port_position.y", self.usb_port_position.1)?;
        require_positive("usb_port_size.height", self.usb_port_size.0)?;
        require_positive("usb_port_size.width", self.usb_port_size.1)?;
        require_non_negative("dc_jack_position.y", self.dc_jack_position.1)?;
        require_positive("dc_jack_size.height", self.dc_jack_size.0)?;
        require_positive("dc_jack_size.width", self.dc_jack_size.1)?;

        require_positive("header_length", self.header_length)?;
        require_positive("header_width", self.header_width)?;
        require_non_negative("header_x_offset", self.header_x_offset)?;
        require_non_negative("header_edge_inset", self.header_edge_inset)?;

        if self.screw_holes {
            require_positive("screw_hole_radius", self.screw_hole_radius)?;
            for &(x, y) in &self.screw_hole_spacing {
                require_non_negative("screw_hole_spacing.x", x)?;
                require_non_negative("screw_hole_spacing.y", y)?;
            }
            if self.cylinder_segments < 3 {
                return Err(ValidationError::TooFewSegments(self.cylinder_segments));
            }
        }

        Ok(())
    }

    /// Distance from the outer wall to the board footprint: thickness plus clearance.
    pub fn inner_offset(&self) -> Real {
        self.thickness + self.clearance
    }

    pub fn outer_width(&self) -> Real {
        self.board_width + 2.0 * self.clearance + 2.0 * self.thickness
    }

    pub fn outer_length(&self) -> Real {
        self.board_length + 2.0 * self.clearance + 2.0 * self.thickness
    }

    /// Floor plus the full board height.
    pub fn base_height(&self) -> Real {
        self.board_height + self.thickness
    }

    pub fn top_height(&self) -> Real {
        self.thickness * 2.0
    }

    pub fn base_extents(&self) -> Vector3<Real> {
        Vector3::new(self.outer_width(), self.outer_length(), self.base_height())
    }

    pub fn top_extents(&self) -> Vector3<Real> {
        Vector3::new(self.outer_width(), self.outer_length(), self.top_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_uno_constants() {
        let params = EnclosureParams::default();
        assert_eq!(params.board_width, 68.6);
        assert_eq!(params.screw_hole_spacing.len(), 4);
        assert!(!params.screw_holes);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn derived_extents() {
        let params = EnclosureParams::default();
        assert!((params.outer_width() - 74.6).abs() < 1e-12);
        assert!((params.outer_length() - 59.4).abs() < 1e-12);
        assert!((params.base_height() - 15.0).abs() < 1e-12);
        assert!((params.top_height() - 4.0).abs() < 1e-12);
        assert!((params.inner_offset() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let params =
            EnclosureParams::from_json_str(r#"{ "thickness": 3.0, "screw_holes": true }"#)
                .expect("valid json");
        assert_eq!(params.thickness, 3.0);
        assert!(params.screw_holes);
        assert_eq!(params.board_length, BOARD_LENGTH);
        assert_eq!(params.usb_port_size, USB_PORT_SIZE);
    }

    #[test]
    fn tuples_are_json_arrays() {
        let params = EnclosureParams::from_json_str(r#"{ "usb_port_size": [10.0, 9.0] }"#)
            .expect("valid json");
        assert_eq!(params.usb_port_size, (10.0, 9.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EnclosureParams::from_json_str("{ thickness: }"),
            Err(IoError::Json(_))
        ));
    }

    #[test]
    fn misspelt_key_is_an_error() {
        let result = EnclosureParams::from_json_str(r#"{ "thicknes": 5.0 }"#);
        assert!(matches!(result, Err(IoError::Json(_))), "{result:?}");
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let mut params = EnclosureParams {
            thickness: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::NonPositiveDimension { name: "thickness", value: 0.0 })
        );

        params.thickness = THICKNESS;
        params.clearance = Real::NAN;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonFiniteDimension { name: "clearance", .. })
        ));
    }

    #[test]
    fn segments_only_matter_with_screw_holes() {
        let mut params = EnclosureParams {
            cylinder_segments: 2,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
        params.screw_holes = true;
        assert_eq!(params.validate(), Err(ValidationError::TooFewSegments(2)));
    }
}
