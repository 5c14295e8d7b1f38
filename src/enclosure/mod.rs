//! The two enclosure shells and the cutouts carved from them.
//!
//! Each part is an outer box with one corner on the origin, minus an ordered
//! list of [`Cutout`]s. Every polygon of the result is tagged with the
//! [`Feature`] that produced it.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::traits::CSGOps;
use log::debug;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "stl-io")]
pub mod export;
pub mod params;

#[cfg(feature = "stl-io")]
pub use export::{EnclosureError, export_part, generate};
pub use params::EnclosureParams;

/// What a polygon of a finished part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// The outer box
    Shell,
    /// Board cavity in the base, or the matching recess under the top
    Cavity,
    UsbPort,
    DcJack,
    DigitalHeader,
    AnalogHeader,
    ScrewHole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnclosurePart {
    Base,
    Top,
}

impl EnclosurePart {
    pub const ALL: [EnclosurePart; 2] = [EnclosurePart::Base, EnclosurePart::Top];

    /// Solid name, also the file stem.
    pub const fn name(self) -> &'static str {
        match self {
            EnclosurePart::Base => "arduino_enclosure_base",
            EnclosurePart::Top => "arduino_enclosure_top",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            EnclosurePart::Base => "arduino_enclosure_base.stl",
            EnclosurePart::Top => "arduino_enclosure_top.stl",
        }
    }

    /// Width, length and height of the part's outer box.
    pub fn outer_extents(self, params: &EnclosureParams) -> Vector3<Real> {
        match self {
            EnclosurePart::Base => params.base_extents(),
            EnclosurePart::Top => params.top_extents(),
        }
    }
}

/// Shape of one subtraction.
#[derive(Debug, Clone, PartialEq)]
pub enum CutoutShape {
    /// Axis-aligned box given by its full extents and its centre point
    Box {
        extents: Vector3<Real>,
        center: Point3<Real>,
    },
    /// Vertical cylinder standing on `base`
    Cylinder {
        radius: Real,
        height: Real,
        base: Point3<Real>,
        segments: usize,
    },
}

/// A solid to subtract from a part's outer box.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutout {
    pub feature: Feature,
    pub shape: CutoutShape,
}

impl Cutout {
    pub fn boxed(feature: Feature, extents: Vector3<Real>, center: Point3<Real>) -> Self {
        Cutout {
            feature,
            shape: CutoutShape::Box { extents, center },
        }
    }

    /// Build the positioned solid, every face tagged with this cutout's feature.
    pub fn to_mesh(&self) -> Mesh<Feature> {
        match self.shape {
            CutoutShape::Box { extents, center } => {
                Mesh::centered_cuboid(extents, Some(self.feature)).translate(
                    center.x,
                    center.y,
                    center.z,
                )
            },
            CutoutShape::Cylinder {
                radius,
                height,
                base,
                segments,
            } => Mesh::cylinder(radius, height, segments, Some(self.feature))
                .translate(base.x, base.y, base.z),
        }
    }

    /// Axis-aligned bounds of the ideal shape as `(mins, maxs)`.
    pub fn bounds(&self) -> (Point3<Real>, Point3<Real>) {
        match self.shape {
            CutoutShape::Box { extents, center } => {
                let half = extents * 0.5;
                (center - half, center + half)
            },
            CutoutShape::Cylinder {
                radius,
                height,
                base,
                ..
            } => (
                base - Vector3::new(radius, radius, 0.0),
                base + Vector3::new(radius, radius, height),
            ),
        }
    }
}

/// The outer box of `part`, with one corner at the origin.
pub fn outer_shell(part: EnclosurePart, params: &EnclosureParams) -> Mesh<Feature> {
    let extents = part.outer_extents(params);
    Mesh::centered_cuboid(extents, Some(Feature::Shell)).translate(
        extents.x * 0.5,
        extents.y * 0.5,
        extents.z * 0.5,
    )
}

/// Ordered list of everything subtracted from `part`.
pub fn cutouts(part: EnclosurePart, params: &EnclosureParams) -> Vec<Cutout> {
    match part {
        EnclosurePart::Base => base_cutouts(params),
        EnclosurePart::Top => top_cutouts(params),
    }
}

fn base_cutouts(p: &EnclosureParams) -> Vec<Cutout> {
    let t = p.thickness;
    let inner = p.inner_offset();

    // Ports sit in the x = 0 wall. Their boxes are 2t deep centred on t/2, so
    // they start outside the part and run into the clearance band behind the wall.
    let port = |feature, position: (Real, Real), size: (Real, Real)| {
        Cutout::boxed(
            feature,
            Vector3::new(t * 2.0, size.1, size.0),
            Point3::new(
                t / 2.0,
                position.1 + size.1 / 2.0,
                size.0 / 2.0 + p.board_height / 2.0,
            ),
        )
    };

    let mut list = vec![
        Cutout::boxed(
            Feature::Cavity,
            Vector3::new(p.board_width, p.board_length, p.board_height),
            Point3::new(
                inner + p.board_width / 2.0,
                inner + p.board_length / 2.0,
                t + p.board_height / 2.0,
            ),
        ),
        port(Feature::UsbPort, p.usb_port_position, p.usb_port_size),
        port(Feature::DcJack, p.dc_jack_position, p.dc_jack_size),
    ];

    if p.screw_holes {
        list.extend(p.screw_hole_spacing.iter().map(|&(x, y)| Cutout {
            feature: Feature::ScrewHole,
            shape: CutoutShape::Cylinder {
                radius: p.screw_hole_radius,
                height: t * 2.0,
                base: Point3::new(inner + x, inner + y, -t / 2.0),
                segments: p.cylinder_segments,
            },
        }));
    }

    list
}

fn top_cutouts(p: &EnclosureParams) -> Vec<Cutout> {
    let t = p.thickness;
    let inner = p.inner_offset();
    let height = p.top_height();

    let header = |feature, center_y: Real| {
        Cutout::boxed(
            feature,
            Vector3::new(p.header_length, p.header_width, height),
            Point3::new(
                inner + p.header_x_offset + p.header_length / 2.0,
                center_y,
                height / 2.0,
            ),
        )
    };

    vec![
        Cutout::boxed(
            Feature::Cavity,
            Vector3::new(p.board_width, p.board_length, t),
            Point3::new(
                inner + p.board_width / 2.0,
                inner + p.board_length / 2.0,
                t / 2.0,
            ),
        ),
        header(
            Feature::DigitalHeader,
            inner + p.board_length - p.header_edge_inset,
        ),
        header(Feature::AnalogHeader, inner + p.header_edge_inset),
    ]
}

/// Outer shell minus each cutout, in order.
pub fn build(part: EnclosurePart, params: &EnclosureParams) -> Mesh<Feature> {
    cutouts(part, params)
        .iter()
        .fold(outer_shell(part, params), |shell, cutout| {
            let (mins, maxs) = cutout.bounds();
            debug!(
                "{}: subtracting {:?} spanning {:?} .. {:?}",
                part.name(),
                cutout.feature,
                mins.coords.as_slice(),
                maxs.coords.as_slice()
            );
            shell.difference(&cutout.to_mesh())
        })
}

/// The open-topped tray the board sits in.
pub fn base(params: &EnclosureParams) -> Mesh<Feature> {
    build(EnclosurePart::Base, params)
}

/// The lid, recessed underneath and slotted for the pin headers.
pub fn top(params: &EnclosureParams) -> Mesh<Feature> {
    build(EnclosurePart::Top, params)
}
