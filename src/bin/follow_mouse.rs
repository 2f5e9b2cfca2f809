//! Follow-the-mouse demo.
//!
//! A yellow triangle chases the mouse cursor, rotating to point at it, with a
//! small magenta marker on the cursor itself. Runs on the same ECS pieces as
//! the game: [`MapPosition`], [`Rotation`], [`MouseControlled`] and the mouse
//! controller system.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use fruitfall::components::inputcontrolled::MouseControlled;
use fruitfall::components::mapposition::MapPosition;
use fruitfall::components::rotation::Rotation;
use fruitfall::resources::screensize::ScreenSize;
use fruitfall::resources::worldtime::WorldTime;
use fruitfall::systems::mousecontroller::mouse_controller;
use fruitfall::systems::time::update_world_time;

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;

/// Distance moved toward the cursor per tick.
const CHASE_SPEED: f32 = 3.0;
/// Stop chasing inside this radius so the triangle doesn't jitter in place.
const DEAD_ZONE: f32 = 0.5;

/// Chases the single mouse-controlled entity.
#[derive(Component, Clone, Copy, Debug)]
struct ChaseMouse {
    speed: f32,
}

/// Flat-colored triangle, drawn point-up at `Rotation` zero.
#[derive(Component, Clone, Copy, Debug)]
struct TriangleShape {
    size: f32,
    color: Color,
}

/// Step every chaser toward the pointer and rotate it to face the pointer.
fn chase_pointer(
    mut chasers: Query<(&ChaseMouse, &mut MapPosition, &mut Rotation), Without<MouseControlled>>,
    pointers: Query<&MapPosition, With<MouseControlled>>,
) {
    let Ok(target) = pointers.single() else {
        return;
    };
    for (chase, mut position, mut rotation) in chasers.iter_mut() {
        let to_target = target.pos - position.pos;
        let distance = to_target.length();
        if distance <= DEAD_ZONE {
            continue;
        }
        let step = chase.speed.min(distance);
        position.pos += to_target.normalized().scale_by(step);
        // Triangle points up at zero rotation; align its tip with the target.
        rotation.degrees = to_target.y.atan2(to_target.x).to_degrees() - 90.0;
    }
}

/// Triangle vertices in screen space for a given world pose.
fn triangle_points(
    position: Vector2,
    degrees: f32,
    size: f32,
    screen_h: f32,
) -> (Vector2, Vector2, Vector2) {
    // Point-up unit triangle, rotated in the y-up world then flipped to the
    // y-down screen.
    let local = [
        Vector2 { x: 0.0, y: 0.5 },
        Vector2 { x: -0.5, y: -0.5 },
        Vector2 { x: 0.5, y: -0.5 },
    ];
    let (sin, cos) = degrees.to_radians().sin_cos();
    let mut out = [Vector2::zero(); 3];
    for (i, p) in local.iter().enumerate() {
        let rotated = Vector2 {
            x: p.x * cos - p.y * sin,
            y: p.x * sin + p.y * cos,
        };
        let world = position + rotated.scale_by(size);
        out[i] = Vector2 {
            x: world.x,
            y: screen_h - world.y,
        };
    }
    (out[0], out[1], out[2])
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut rl, thread) = raylib::init()
        .size(WIDTH, HEIGHT)
        .title("Follow Mouse")
        .build();
    rl.set_target_fps(120);

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: WIDTH,
        h: HEIGHT,
    });
    world.insert_non_send_resource(rl);

    // The cursor marker drives the chase target.
    world.spawn((
        MapPosition::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
        MouseControlled::new(true, true),
        Rotation::default(),
        TriangleShape {
            size: 10.0,
            color: Color::MAGENTA,
        },
    ));
    world.spawn((
        MapPosition::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
        Rotation::default(),
        ChaseMouse { speed: CHASE_SPEED },
        TriangleShape {
            size: 50.0,
            color: Color::YELLOW,
        },
    ));

    let mut update = Schedule::default();
    update.add_systems(mouse_controller);
    update.add_systems(chase_pointer.after(mouse_controller));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    loop {
        if world
            .non_send_resource::<raylib::RaylibHandle>()
            .window_should_close()
        {
            break;
        }

        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        // Draw the triangles directly; the demo has no textures.
        let screen_h = world.resource::<ScreenSize>().h as f32;
        let shapes: Vec<(MapPosition, Rotation, TriangleShape)> = {
            let mut q = world.query::<(&MapPosition, &Rotation, &TriangleShape)>();
            q.iter(&world).map(|(p, r, s)| (*p, *r, *s)).collect()
        };

        let mut rl = world
            .remove_non_send_resource::<raylib::RaylibHandle>()
            .expect("RaylibHandle missing from world");
        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            for (position, rotation, shape) in &shapes {
                let (tip, left, right) =
                    triangle_points(position.pos, rotation.degrees, shape.size, screen_h);
                // The y flip mirrors winding; raylib wants counter-clockwise
                // in screen space.
                d.draw_triangle(tip, right, left, shape.color);
            }
        }
        world.insert_non_send_resource(rl);

        world.clear_trackers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_points_flip_to_screen_space() {
        let (tip, _, _) = triangle_points(
            Vector2 { x: 400.0, y: 300.0 },
            0.0,
            50.0,
            600.0,
        );
        // World y 325 maps to screen y 275.
        assert!((tip.x - 400.0).abs() < 1e-4);
        assert!((tip.y - 275.0).abs() < 1e-4);
    }
}
