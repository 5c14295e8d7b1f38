mod support;

use csg_enclosure::{
    enclosure::{self, Cutout, EnclosureParams, EnclosurePart, Feature, cutouts},
    float_types::{Real, TAU},
    traits::CSGOps,
};

use crate::support::{approx_eq, bounding_box, box_volume, overlap_volume};

fn cutout_for(part: EnclosurePart, params: &EnclosureParams, feature: Feature) -> Cutout {
    cutouts(part, params)
        .into_iter()
        .find(|c| c.feature == feature)
        .unwrap_or_else(|| panic!("{part:?} has no {feature:?} cutout"))
}

#[test]
fn outer_footprint_matches_board_plus_walls() {
    let params = EnclosureParams::default();
    let width = params.board_width + 2.0 * params.clearance + 2.0 * params.thickness;
    let length = params.board_length + 2.0 * params.clearance + 2.0 * params.thickness;

    for (mesh, height) in [
        (enclosure::base(&params), params.board_height + params.thickness),
        (enclosure::top(&params), params.thickness * 2.0),
    ] {
        let bb = mesh.bounding_box();
        assert!(bb.mins.coords.norm() < 1e-6);
        assert!(approx_eq(bb.maxs.x, width, 1e-6));
        assert!(approx_eq(bb.maxs.y, length, 1e-6));
        assert!(approx_eq(bb.maxs.z, height, 1e-6));
    }
}

#[test]
fn base_cavity_is_the_board_inside_the_shell() {
    let params = EnclosureParams::default();
    let outer = (
        nalgebra::Point3::origin(),
        nalgebra::Point3::from(params.base_extents()),
    );
    let cavity = cutout_for(EnclosurePart::Base, &params, Feature::Cavity).bounds();

    let extents = cavity.1 - cavity.0;
    assert!(approx_eq(extents.x, params.board_width, 1e-9));
    assert!(approx_eq(extents.y, params.board_length, 1e-9));
    assert!(approx_eq(extents.z, params.board_height, 1e-9));
    assert!(approx_eq(
        overlap_volume(cavity, outer),
        box_volume(cavity),
        1e-6
    ));

    // the carved faces of the cavity span exactly the board plus floor
    let base = enclosure::base(&params);
    let bb = bounding_box(base.polygons_tagged(&Feature::Cavity));
    let inner = params.inner_offset();
    assert!(approx_eq(bb[0], inner, 1e-6));
    assert!(approx_eq(bb[1], inner, 1e-6));
    assert!(approx_eq(bb[2], params.thickness, 1e-6));
    assert!(approx_eq(bb[3], inner + params.board_width, 1e-6));
    assert!(approx_eq(bb[4], inner + params.board_length, 1e-6));
    assert!(approx_eq(bb[5], params.base_height(), 1e-6));
}

#[test]
fn ports_cut_the_near_wall_without_overlapping() {
    let params = EnclosureParams::default();
    let usb = cutout_for(EnclosurePart::Base, &params, Feature::UsbPort).bounds();
    let dc = cutout_for(EnclosurePart::Base, &params, Feature::DcJack).bounds();

    for (mins, maxs) in [usb, dc] {
        assert!(mins.x < 0.0);
        assert!(maxs.x > 0.0);
        assert!(maxs.x <= params.inner_offset() + 1e-9);
    }
    assert_eq!(overlap_volume(usb, dc), 0.0);
}

#[test]
fn header_slots_stay_inside_the_inner_rectangle() {
    let params = EnclosureParams::default();
    let lo = params.inner_offset();
    let hi_x = params.outer_width() - lo;
    let hi_y = params.outer_length() - lo;

    for feature in [Feature::DigitalHeader, Feature::AnalogHeader] {
        let (mins, maxs) = cutout_for(EnclosurePart::Top, &params, feature).bounds();
        assert!(mins.x >= lo - 1e-9 && maxs.x <= hi_x + 1e-9, "{feature:?}");
        assert!(mins.y >= lo - 1e-9 && maxs.y <= hi_y + 1e-9, "{feature:?}");
        assert!(approx_eq(maxs.z - mins.z, params.top_height(), 1e-9));
    }
}

#[test]
fn base_volume_is_shell_minus_removed_material() {
    let params = EnclosureParams::default();
    let outer = (
        nalgebra::Point3::origin(),
        nalgebra::Point3::from(params.base_extents()),
    );
    let cavity = cutout_for(EnclosurePart::Base, &params, Feature::Cavity).bounds();

    let ports: Real = [Feature::UsbPort, Feature::DcJack]
        .into_iter()
        .map(|f| {
            let port = cutout_for(EnclosurePart::Base, &params, f).bounds();
            overlap_volume(port, outer) - overlap_volume(port, cavity)
        })
        .sum();
    // 3 x 8 x 8.5 and 3 x 12 x 8.5
    assert!(approx_eq(ports, 204.0 + 306.0, 1e-9));

    let expected = box_volume(outer) - box_volume(cavity) - ports;
    let base = enclosure::base(&params);
    assert!(
        approx_eq(base.volume(), expected, 1e-6),
        "{} != {}",
        base.volume(),
        expected
    );
}

#[test]
fn top_volume_is_shell_minus_recess_and_slots() {
    let params = EnclosureParams::default();
    let outer = params.top_extents();
    let t = params.thickness;
    let expected = outer.x * outer.y * outer.z
        - params.board_width * params.board_length * t
        - 2.0 * params.header_length * params.header_width * (params.top_height() - t);

    let top = enclosure::top(&params);
    assert!(
        approx_eq(top.volume(), expected, 1e-6),
        "{} != {}",
        top.volume(),
        expected
    );
}

#[test]
fn every_face_is_tagged_with_its_feature() {
    let params = EnclosureParams::default();
    let base = enclosure::base(&params);
    let top = enclosure::top(&params);

    assert!(base.polygons.iter().all(|p| p.metadata.is_some()));
    for feature in [Feature::Shell, Feature::Cavity, Feature::UsbPort, Feature::DcJack] {
        assert!(base.polygons_tagged(&feature).count() > 0, "{feature:?}");
    }
    assert_eq!(base.polygons_tagged(&Feature::ScrewHole).count(), 0);

    for feature in [
        Feature::Shell,
        Feature::Cavity,
        Feature::DigitalHeader,
        Feature::AnalogHeader,
    ] {
        assert!(top.polygons_tagged(&feature).count() > 0, "{feature:?}");
    }
}

#[test]
fn screw_holes_go_through_the_floor() {
    let plain = EnclosureParams::default();
    let drilled = EnclosureParams {
        screw_holes: true,
        ..Default::default()
    };

    let without = enclosure::base(&plain).volume();
    let base = enclosure::base(&drilled);

    let n = drilled.cylinder_segments as Real;
    let r = drilled.screw_hole_radius;
    let hole_area = 0.5 * n * r * r * (TAU / n).sin();
    let expected = without - 4.0 * hole_area * drilled.thickness;
    assert!(
        approx_eq(base.volume(), expected, 1e-6),
        "{} != {}",
        base.volume(),
        expected
    );

    let walls = bounding_box(base.polygons_tagged(&Feature::ScrewHole));
    assert!(approx_eq(walls[2], 0.0, 1e-9));
    assert!(approx_eq(walls[5], drilled.thickness, 1e-9));
}

#[test]
fn thicker_walls_grow_the_part() {
    let params = EnclosureParams {
        thickness: 3.0,
        clearance: 0.5,
        ..Default::default()
    };
    let bb = enclosure::top(&params).bounding_box();
    assert!(approx_eq(bb.maxs.x, 68.6 + 1.0 + 6.0, 1e-6));
    assert!(approx_eq(bb.maxs.z, 6.0, 1e-6));
}

#[test]
fn building_is_deterministic() {
    let params = EnclosureParams::default();
    let a = enclosure::base(&params);
    let b = enclosure::base(&params);
    assert_eq!(a.polygons, b.polygons);

    #[cfg(feature = "stl-io")]
    {
        let first = a.to_stl_binary().expect("in-memory write");
        let second = b.to_stl_binary().expect("in-memory write");
        assert_eq!(first, second);
    }
}
