use std::collections::{HashMap, HashSet};

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::{PointerInput, SpawnGesture};
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

/// Mesh entity drawing the body with this id
#[derive(Component)]
struct BodyIndex(pub BodyId);

/// Text entity labelling the body with this id
#[derive(Component)]
struct BodyLabel(pub BodyId);

#[derive(Component)]
struct PreviewLabel;

/// Spawn gesture carried between frames
#[derive(Resource, Default)]
struct Gesture(SpawnGesture);

/// Unit circle shared by every body, scaled by the radius
#[derive(Resource)]
struct BodyAssets {
    mesh: Mesh2dHandle,
    material: Handle<ColorMaterial>,
}

const BODY_COLOR: Color = Color::srgb(0.0, 0.89, 0.19);
const PREVIEW_COLOR: Color = Color::srgb(0.9, 0.16, 0.22);
const LAUNCH_LINE_COLOR: Color = Color::srgb(0.99, 0.98, 0.0);
const TRAIL_COLOR: Color = Color::srgb(1.0, 0.63, 0.0);
const LABEL_COLOR: Color = Color::srgb(0.78, 0.78, 0.78);
const LABEL_SIZE: f32 = 14.0;
const LABEL_GAP: f32 = 14.0;
const PIXELS_PER_LINE: f64 = 40.0; // trackpad pixel scroll -> wheel lines

pub fn run_2d(scenario: Scenario) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<Gesture>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Simulator".into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                exit_on_escape_system,
                spawn_input_system,
                physics_step_system,
                sync_bodies_system,
                sync_preview_label_system,
                draw_overlays_system,
            )
                .chain(),
        )
        .run();
}

fn setup_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera, one world unit per pixel
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(BodyAssets {
        mesh: Mesh2dHandle(meshes.add(Circle::new(1.0))),
        material: materials.add(ColorMaterial::from(BODY_COLOR)),
    });

    commands.spawn((
        Text2dBundle {
            text: Text::from_section("", label_style()),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        PreviewLabel,
    ));

    info!("starting 2D viewer with {} bodies", scenario.system.len());
}

fn exit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

/// Turn this frame's mouse state into a `PointerInput` and feed the gesture
fn spawn_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut gesture: ResMut<Gesture>,
    mut scenario: ResMut<Scenario>,
) {
    let scroll: f64 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y as f64,
            MouseScrollUnit::Pixel => ev.y as f64 / PIXELS_PER_LINE,
        })
        .sum();

    // Off-window cursor: keep sizing against the last known pointer
    let position = match (cursor_world_position(&windows, &cameras), gesture.0) {
        (Some(p), _) => p,
        (None, SpawnGesture::Sizing { pointer, .. }) => pointer,
        (None, SpawnGesture::Idle) => return,
    };

    let input = PointerInput {
        position,
        pressed: buttons.just_pressed(MouseButton::Left),
        held: buttons.pressed(MouseButton::Left),
        released: buttons.just_released(MouseButton::Left),
        scroll,
    };

    let (next, launched) = gesture.0.advance(&input, &scenario.spawn);
    gesture.0 = next;

    if let Some(body) = launched {
        let id = scenario.launch(body);
        debug!("launched body {} ({} live)", id.0, scenario.system.len());
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let report = scenario.step(time.delta_seconds_f64());
    for anomaly in &report.anomalies {
        trace!("{anomaly}");
    }
}

/// Keep one mesh and one label per live body, keyed by `BodyId`
fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    assets: Res<BodyAssets>,
    mut bodies: Query<(Entity, &BodyIndex, &mut Transform), Without<BodyLabel>>,
    mut labels: Query<(Entity, &BodyLabel, &mut Transform, &mut Text), Without<BodyIndex>>,
) {
    let live: HashMap<BodyId, &CelestialBody> = scenario.system.bodies.iter().map(|b| (b.id, b)).collect();
    let mut drawn = HashSet::new();

    for (entity, BodyIndex(id), mut transform) in &mut bodies {
        match live.get(id) {
            Some(b) => {
                *transform = body_transform(b);
                drawn.insert(*id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (entity, BodyLabel(id), mut transform, mut text) in &mut labels {
        match live.get(id) {
            Some(b) => {
                *transform = label_transform(b.x, b.radius);
                text.sections[0].value = label_text(b.radius, b.mass, b.x);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for b in scenario.system.bodies.iter().filter(|b| !drawn.contains(&b.id)) {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: assets.mesh.clone(),
                material: assets.material.clone(),
                transform: body_transform(b),
                ..Default::default()
            },
            BodyIndex(b.id),
        ));
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(label_text(b.radius, b.mass, b.x), label_style()),
                transform: label_transform(b.x, b.radius),
                ..Default::default()
            },
            BodyLabel(b.id),
        ));
    }
}

fn sync_preview_label_system(
    scenario: Res<Scenario>,
    gesture: Res<Gesture>,
    mut label: Query<(&mut Text, &mut Transform, &mut Visibility), With<PreviewLabel>>,
) {
    let Ok((mut text, mut transform, mut visibility)) = label.get_single_mut() else {
        return;
    };

    match gesture.0.preview(&scenario.spawn) {
        Some(p) => {
            text.sections[0].value = label_text(p.radius, p.mass, p.origin);
            *transform = label_transform(p.origin, p.radius);
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// Trails and the spawn preview, redrawn every frame
fn draw_overlays_system(mut gizmos: Gizmos, scenario: Res<Scenario>, gesture: Res<Gesture>) {
    for b in &scenario.system.bodies {
        if b.trail.len() > 1 {
            gizmos.linestrip_2d(b.trail.iter().map(to_vec2), TRAIL_COLOR);
        }
    }

    if let Some(p) = gesture.0.preview(&scenario.spawn) {
        gizmos.circle_2d(to_vec2(&p.origin), p.radius as f32, PREVIEW_COLOR);
        gizmos.line_2d(to_vec2(&p.origin), to_vec2(&p.line_end), LAUNCH_LINE_COLOR);
    }
}

fn cursor_world_position(windows: &Query<&Window, With<PrimaryWindow>>, cameras: &Query<(&Camera, &GlobalTransform)>) -> Option<NVec2> {
    let window = windows.get_single().ok()?;
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let cursor = window.cursor_position()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor)?;
    Some(NVec2::new(world.x as f64, world.y as f64))
}

fn to_vec2(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn body_transform(b: &CelestialBody) -> Transform {
    Transform::from_xyz(b.x.x as f32, b.x.y as f32, 0.0).with_scale(Vec3::splat(b.radius as f32))
}

fn label_transform(x: NVec2, radius: f64) -> Transform {
    Transform::from_xyz(x.x as f32, (x.y + radius) as f32 + LABEL_GAP, 1.0)
}

fn label_text(radius: f64, mass: f64, x: NVec2) -> String {
    format!("r = {radius:.2}, m = {mass:.2}\nx = {:.1}, y = {:.1}", x.x, x.y)
}

fn label_style() -> TextStyle {
    TextStyle {
        font_size: LABEL_SIZE,
        color: LABEL_COLOR,
        ..Default::default()
    }
}
