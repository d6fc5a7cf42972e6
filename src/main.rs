//! Bowlmaster - a bowling ball launcher built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use bowlmaster::{
    Ball, BallAssets, ConfigWatcher, EventBus, EventLogConfig, EventLogger, LaunchConfig,
    LaunchTweaks, apply_velocity, ball_update, config_watcher, constants::*, events,
    launch_new_balls, respawn_ball_on_key, spawn_ball, tuning, update_event_bus_time,
};

/// Mesh and material shared by every ball
#[derive(Resource)]
struct BallVisuals {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let no_event_log = args.iter().any(|a| a == "--no-event-log");

    // Check for --speed <f32> override
    let speed_override = args
        .iter()
        .position(|a| a == "--speed")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<f32>().ok()));

    // Load tuning (uses defaults if file doesn't exist)
    let mut tweaks = LaunchTweaks::default();
    if let Err(e) = tuning::apply_ball_tuning(&mut tweaks) {
        warn!("{}, using defaults", e);
    }
    if let Some(speed) = speed_override {
        tweaks.launch_speed = speed;
    }

    let log_config = if no_event_log {
        EventLogConfig::disabled()
    } else {
        EventLogConfig::default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bowlmaster".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(tweaks)
        .insert_resource(EventBus::new())
        .insert_resource(EventLogger::new(log_config))
        .init_resource::<ConfigWatcher>()
        .add_systems(Startup, setup)
        // Launch must see new balls before the physics step moves them
        .add_systems(
            Update,
            (
                update_event_bus_time,
                respawn_ball_on_key,
                launch_new_balls,
                apply_velocity,
                ball_update,
                events::sample_ball_ticks,
                events::flush_event_bus,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                dress_new_balls,
                follow_ball_camera,
                config_watcher::check_config_changes,
            ),
        )
        .add_systems(Last, end_event_log_on_exit)
        .run();
}

fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tweaks: Res<LaunchTweaks>,
    mut logger: ResMut<EventLogger>,
) {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    logger.start_session(&timestamp);
    logger.log_config(LaunchConfig::from(&*tweaks));

    // Lane runs from the foul line at z=0 toward +Z
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(LANE_WIDTH, LANE_LENGTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: LANE_COLOR,
            perceptual_roughness: 0.3,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, LANE_LENGTH / 2.0),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(200.0, 600.0, -200.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 80.0, -160.0).looking_at(Vec3::new(0.0, 0.0, 200.0), Vec3::Y),
    ));

    let assets = BallAssets {
        launch_sound: asset_server.load(LAUNCH_SOUND_PATH),
    };
    commands.insert_resource(BallVisuals {
        mesh: meshes.add(Sphere::new(tweaks.ball_radius)),
        material: materials.add(StandardMaterial {
            base_color: BALL_COLOR,
            metallic: 0.2,
            ..default()
        }),
    });

    let start = Vec3::new(0.0, tweaks.ball_radius, 0.0);
    spawn_ball(&mut commands, tweaks.launch_speed, assets.launch_sound.clone(), start);
    commands.insert_resource(assets);

    info!("Press R to bowl a new ball (launch speed {:.1})", tweaks.launch_speed);
}

/// Give newly spawned balls their mesh
fn dress_new_balls(
    mut commands: Commands,
    visuals: Option<Res<BallVisuals>>,
    balls: Query<Entity, Added<Ball>>,
) {
    let Some(visuals) = visuals else {
        return;
    };
    for entity in &balls {
        commands.entity(entity).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
        ));
    }
}

/// Keep the camera behind the ball while it rolls down the lane
fn follow_ball_camera(
    balls: Query<&Transform, (With<Ball>, Without<Camera3d>)>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Some(ball) = balls.iter().next() else {
        return;
    };
    let target_z = ball.translation.z.clamp(0.0, LANE_LENGTH);
    for mut camera in &mut cameras {
        camera.translation.z = target_z - 160.0;
    }
}

fn end_event_log_on_exit(
    mut exits: MessageReader<AppExit>,
    time: Res<Time>,
    mut logger: ResMut<EventLogger>,
) {
    if exits.read().next().is_some() {
        logger.end_session(time.elapsed_secs());
    }
}
