use bevy::asset::RenderAssetUsages;
use bevy::camera::ScalingMode;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use hexx::{HexLayout, HexOrientation, PlaneMeshBuilder};

use super::entities::ItemAssets;

/// Height of the camera above the ground plane. Any value inside the
/// orthographic far plane works.
const CAMERA_HEIGHT: f32 = 100.0;

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns a top-down orthographic camera where one world unit is one logical
/// pixel and screen-down is `+Z`.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, CAMERA_HEIGHT, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));
}

/// Builds the shared flat-topped hexagon mesh and inserts [`ItemAssets`].
pub fn create_item_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let unit_layout = HexLayout {
        orientation: HexOrientation::Flat,
        scale: Vec2::splat(1.0),
        ..default()
    };
    let hex_mesh_info = PlaneMeshBuilder::new(&unit_layout).build();
    let hex_mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, hex_mesh_info.vertices)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, hex_mesh_info.normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, hex_mesh_info.uvs)
    .with_inserted_indices(Indices::U16(hex_mesh_info.indices));

    commands.insert_resource(ItemAssets {
        mesh: meshes.add(hex_mesh),
    });
}
