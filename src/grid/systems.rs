use bevy::log::{debug, info, warn};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::egui;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::HexGridConfig;
use super::entities::{HexItem, ItemAssets, ItemSlot, LayoutState};
use crate::layout::{self, ItemState};
use crate::math;

// ── Update: config edits ───────────────────────────────────────────

/// `+`/`-` change the radius, `]`/`[` the item count, `H` hides item 0.
pub fn adjust_config(
    keys: Res<ButtonInput<KeyCode>>,
    mut cfg: ResMut<HexGridConfig>,
    mut items: Query<&mut HexItem>,
) {
    let step = cfg.radius_step;
    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        cfg.radius = cfg.radius.saturating_add(step);
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        cfg.radius = (cfg.radius - step).max(step);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        cfg.item_count += 1;
    }
    if keys.just_pressed(KeyCode::BracketLeft) && cfg.item_count > 0 {
        cfg.item_count -= 1;
    }
    if keys.just_pressed(KeyCode::KeyH) {
        for mut item in &mut items {
            if item.index == 0 {
                item.gone = !item.gone;
            }
        }
    }
}

/// Spawns or despawns [`HexItem`]s so that indices `0..item_count` exist.
pub fn sync_item_count(
    mut commands: Commands,
    cfg: Res<HexGridConfig>,
    assets: Res<ItemAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    items: Query<(Entity, &HexItem)>,
) {
    if !cfg.is_changed() {
        return;
    }

    let mut kept = 0;
    let mut despawned = 0;
    for (entity, item) in &items {
        if item.index >= cfg.item_count {
            commands.entity(entity).despawn();
            despawned += 1;
        } else {
            kept += 1;
        }
    }

    let t = &cfg.tint;
    let tint_fbm: Fbm<Perlin> = Fbm::new(t.seed).set_octaves(t.octaves);
    for index in kept..cfg.item_count {
        let noise_val = tint_fbm.get([f64::from(index) * t.frequency, 0.5]);
        let lightness = math::map_noise_to_range(noise_val, t.min_lightness, t.max_lightness);
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.5 * lightness, lightness),
            unlit: true,
            ..default()
        });
        commands.spawn((
            HexItem::new(index),
            ItemSlot::default(),
            Name::new(format!("HexItem({index})")),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(material),
            Transform::default(),
            Visibility::Hidden,
        ));
    }

    let spawned = cfg.item_count.saturating_sub(kept);
    if spawned > 0 || despawned > 0 {
        debug!("hex items: spawned {spawned}, despawned {despawned}");
    }
}

// ── Update: layout pass ────────────────────────────────────────────

/// Measures the window, lays out every item and writes transforms.
///
/// Skips the pass when neither the window size, the config nor the item set
/// changed. An invalid geometry hides every item.
pub fn run_layout_pass(
    cfg: Res<HexGridConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<LayoutState>,
    changed: Query<(), Changed<HexItem>>,
    mut removed: RemovedComponents<HexItem>,
    mut items: Query<(&HexItem, &mut Transform, &mut Visibility, &mut ItemSlot)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let window_size = window.size();
    let container = math::container_size(window_size);
    let removed_any = removed.read().count() > 0;
    if !cfg.is_changed() && !removed_any && changed.is_empty() && state.container == container {
        return;
    }

    let measurement = match layout::measure(container, cfg.padding, cfg.radius, cfg.min_size) {
        Ok(measurement) => measurement,
        Err(err) => {
            warn!("hex grid layout skipped for {container}: {err}");
            for (_, _, mut visibility, mut slot) in &mut items {
                *visibility = Visibility::Hidden;
                *slot = ItemSlot::default();
            }
            *state = LayoutState {
                container,
                desired_size: container.max(cfg.min_size),
                ..default()
            };
            return;
        }
    };
    let geometry = measurement.geometry;

    let count = items
        .iter()
        .map(|(item, ..)| item.index + 1)
        .max()
        .unwrap_or(0);
    let mut states = vec![ItemState::Gone; count as usize];
    for (item, ..) in &items {
        states[item.index as usize] = item.state();
    }
    let pass = layout::layout_pass(&geometry, states);

    let scale = math::item_scale(measurement.child_size, cfg.tile_fill);
    for (item, mut transform, mut visibility, mut slot) in &mut items {
        match pass.get(item.index) {
            Some(placement) => {
                let center = math::rect_center(placement.rect);
                transform.translation = math::pixel_to_world(center, window_size);
                transform.scale = scale;
                *visibility = Visibility::Inherited;
                *slot = ItemSlot {
                    cell: Some(placement.cell),
                    center,
                };
            }
            None => {
                *visibility = Visibility::Hidden;
                *slot = ItemSlot::default();
            }
        }
    }

    let capacity = geometry.supported_child_count();
    if state.geometry.map(|g| g.supported_child_count()) != Some(capacity) {
        info!(
            "hex grid {container}: {}x{} cells, capacity {capacity}",
            geometry.column_count, geometry.row_count
        );
    }
    if pass.dropped > 0 {
        debug!(
            "hex grid: {} items past capacity {capacity} not placed",
            pass.dropped
        );
    }

    *state = LayoutState {
        container,
        desired_size: measurement.desired_size,
        geometry: Some(geometry),
        placed: pass.placements.len() as u32,
        gone: pass.gone,
        dropped: pass.dropped,
    };
}

// ── Debug overlay ──────────────────────────────────────────────────

/// Paints each placed item's index and cell over it.
pub fn draw_item_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    items: Query<(&HexItem, &ItemSlot)>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    for (item, slot) in &items {
        let Some(cell) = slot.cell else {
            continue;
        };
        painter.text(
            egui::pos2(slot.center.x, slot.center.y),
            egui::Align2::CENTER_CENTER,
            format!("{}\n{},{}", item.index, cell.column, cell.row),
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
    }
}
