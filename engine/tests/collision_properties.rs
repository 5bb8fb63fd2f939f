//! Collision Properties - Randomized Resolver and Broad-Phase Checks
//!
//! Properties that must hold for every position, displacement and wall set,
//! not just the hand-picked scenarios.

use glam::Vec3;
use maze_walk_engine::physics::{Aabb, SpatialIndex, UniformGrid};
use maze_walk_engine::{CollisionPolicy, CollisionResolver, GeometryRegistry, MazeLayout, PlayerFootprint};
use proptest::prelude::*;

fn vec3(range: f32) -> impl Strategy<Value = Vec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn horizontal(range: f32) -> impl Strategy<Value = Vec3> {
    (-range..range, -range..range).prop_map(|(x, z)| Vec3::new(x, 0.0, z))
}

fn standing_position() -> impl Strategy<Value = Vec3> {
    (-15.0f32..15.0, -15.0f32..15.0).prop_map(|(x, z)| Vec3::new(x, 1.8, z))
}

fn wall_box() -> impl Strategy<Value = Aabb> {
    (vec3(15.0), 0.1f32..10.0, 0.5f32..4.0, 0.1f32..10.0, -3.2f32..3.2).prop_map(
        |(center, sx, sy, sz, yaw)| Aabb::from_yawed_box(center, Vec3::new(sx, sy, sz), yaw),
    )
}

fn policy() -> impl Strategy<Value = CollisionPolicy> {
    prop_oneof![Just(CollisionPolicy::Rigid), Just(CollisionPolicy::AxisSlide)]
}

proptest! {
    #[test]
    fn resolved_position_never_enters_a_wall(
        start in standing_position(),
        velocity in horizontal(3.0),
        policy in policy(),
    ) {
        let registry = GeometryRegistry::from_layout(&MazeLayout::reference()).unwrap();
        let footprint = PlayerFootprint::default();
        prop_assume!(!registry.overlaps_any(&footprint.aabb_at(start)));

        let resolver = CollisionResolver::new(policy);
        let end = resolver.resolve(start, velocity, &footprint, &registry);
        prop_assert!(!registry.overlaps_any(&footprint.aabb_at(end)));
    }

    #[test]
    fn resolved_position_never_enters_random_walls(
        start in vec3(15.0),
        velocity in vec3(3.0),
        walls in prop::collection::vec(wall_box(), 0..8),
        policy in policy(),
    ) {
        let footprint = PlayerFootprint::default();
        prop_assume!(!walls.overlaps_any(&footprint.aabb_at(start)));

        let end = CollisionResolver::new(policy).resolve(start, velocity, &footprint, &walls);
        prop_assert!(!walls.overlaps_any(&footprint.aabb_at(end)));
    }

    #[test]
    fn rigid_moves_all_or_nothing(
        start in standing_position(),
        velocity in horizontal(3.0),
    ) {
        let registry = GeometryRegistry::from_layout(&MazeLayout::reference()).unwrap();
        let end = CollisionResolver::new(CollisionPolicy::Rigid)
            .resolve(start, velocity, &PlayerFootprint::default(), &registry);
        prop_assert!(end == start || end == start + velocity);
    }

    #[test]
    fn zero_velocity_is_identity(
        start in vec3(20.0),
        walls in prop::collection::vec(wall_box(), 0..12),
        policy in policy(),
    ) {
        // Holds even when the start position is already inside a wall
        let end = CollisionResolver::new(policy).resolve(start, Vec3::ZERO, &PlayerFootprint::default(), &walls);
        prop_assert_eq!(end, start);
    }

    #[test]
    fn grid_agrees_with_linear_scan(
        walls in prop::collection::vec(wall_box(), 0..24),
        queries in prop::collection::vec(wall_box(), 1..16),
        cell_size in 0.5f32..12.0,
    ) {
        let grid = UniformGrid::new(cell_size, walls.iter().copied());
        for query in &queries {
            prop_assert_eq!(grid.first_overlap(query), walls.first_overlap(query));
        }
    }
}
