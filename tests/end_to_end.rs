#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use roomgen::error::GeometryError;
use roomgen::operations::{ComputeFloorExtent, DegenerateEdgePolicy, DeriveWalls, WallParams};
use roomgen::plan::{FloorPlan, LengthUnit, Room, UnitNormalizer};
use roomgen::scene::{ComposeFloorPlan, ComposeRoomScene, SceneParams};
use roomgen::tessellation::TessellateRoom;
use roomgen::RoomgenError;

fn living_room_plan() -> FloorPlan {
    FloorPlan::from_json(
        r#"{
            "units": "cm",
            "rooms": [{
                "id": "room-1",
                "name": "Living Room",
                "polygon": [[0, 0], [500, 0], [500, 400], [0, 400]],
                "height": 300
            }],
            "openings": [],
            "furniture": []
        }"#,
    )
    .unwrap()
}

#[test]
fn living_room_end_to_end() {
    let plan = living_room_plan();
    let groups = ComposeFloorPlan::new(&plan).execute().unwrap();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];

    assert_relative_eq!(group.floor.width, 5.0);
    assert_relative_eq!(group.floor.depth, 4.0);
    assert_relative_eq!(group.floor.center.x, 2.5);
    assert_relative_eq!(group.floor.center.z, 2.0);

    let expected = [(5.0, 0.0), (4.0, FRAC_PI_2), (5.0, PI), (4.0, -FRAC_PI_2)];
    assert_eq!(group.walls.len(), expected.len());
    for (wall, (length, rotation)) in group.walls.iter().zip(expected) {
        assert_relative_eq!(wall.length(), length);
        assert_relative_eq!(wall.rotation_y, rotation);
        assert_relative_eq!(wall.center.y, 1.5);
        assert_relative_eq!(wall.height(), 3.0);
        assert_relative_eq!(wall.thickness(), 0.1);
    }
}

#[test]
fn rectangle_round_trip_for_arbitrary_size() {
    let (w, d, h) = (730.0, 415.0, 260.0);
    let room = Room::new("r", "R", vec![[0.0, 0.0], [w, 0.0], [w, d], [0.0, d]], h);
    let normalized = UnitNormalizer::new(LengthUnit::Centimeters).room(&room);

    let walls = DeriveWalls::new(&normalized.polygon, normalized.height).execute().unwrap();
    let lengths: Vec<f64> = walls.iter().map(|w| w.length()).collect();
    for (got, want) in lengths.iter().zip([w, d, w, d]) {
        assert_relative_eq!(*got, want / 100.0, epsilon = 1e-12);
    }
    assert!(walls.iter().all(|wall| (wall.center.y - h / 200.0).abs() < 1e-12));

    let extent = ComputeFloorExtent::new(&normalized.polygon).execute().unwrap();
    assert_relative_eq!(extent.width, w / 100.0, epsilon = 1e-12);
    assert_relative_eq!(extent.depth, d / 100.0, epsilon = 1e-12);
    assert_relative_eq!(extent.center.x, w / 200.0, epsilon = 1e-12);
    assert_relative_eq!(extent.center.y, d / 200.0, epsilon = 1e-12);
}

#[test]
fn recomposition_is_stable() {
    let plan = living_room_plan();
    let room = &plan.rooms[0];
    let first = ComposeRoomScene::new(room, plan.units).execute().unwrap();
    let second = ComposeRoomScene::new(room, plan.units).execute().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        TessellateRoom::new(&first).execute(),
        TessellateRoom::new(&second).execute()
    );
}

#[test]
fn boundary_failures() {
    let two_points = Room::new("a", "A", vec![[0.0, 0.0], [100.0, 0.0]], 300.0);
    assert!(matches!(
        ComposeRoomScene::new(&two_points, LengthUnit::Centimeters).execute(),
        Err(RoomgenError::Geometry(GeometryError::InvalidPolygon(_)))
    ));

    let flat = Room::new("b", "B", vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]], 0.0);
    assert!(matches!(
        ComposeRoomScene::new(&flat, LengthUnit::Centimeters).execute(),
        Err(RoomgenError::Geometry(GeometryError::InvalidHeight(_)))
    ));
}

#[test]
fn repeated_point_never_yields_zero_length_wall() {
    let room = Room::new(
        "r",
        "R",
        vec![[0.0, 0.0], [500.0, 0.0], [500.0, 400.0], [500.0, 400.0], [0.0, 400.0]],
        300.0,
    );

    let rejected = ComposeRoomScene::new(&room, LengthUnit::Centimeters).execute();
    assert!(matches!(
        rejected,
        Err(RoomgenError::Geometry(GeometryError::DegenerateEdge { index: 2 }))
    ));

    let params = SceneParams {
        walls: WallParams {
            degenerate_edges: DegenerateEdgePolicy::Skip,
            ..WallParams::default()
        },
    };
    let group = ComposeRoomScene::new(&room, LengthUnit::Centimeters)
        .with_params(params)
        .execute()
        .unwrap();
    assert_eq!(group.walls.len(), 4);
    assert!(group.walls.iter().all(|w| w.length() > 0.0));
}
