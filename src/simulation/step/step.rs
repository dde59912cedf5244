use crate::systems::{kinematics, InputState};

use super::perf_timer::timed;
use super::WorldCore;

/// Clamp a host frame delta into `[0, max_dt]`. NaN and negative deltas
/// (tab switches, clock skew) become zero. The flag is set when the
/// delta was changed.
pub(super) fn clamp_dt(dt: f32, max_dt: f32) -> (f32, bool) {
    if dt.is_nan() || dt < 0.0 {
        (0.0, true)
    } else if dt > max_dt {
        (max_dt, true)
    } else {
        (dt, false)
    }
}

/// One frame: camera, kinematics, collision
pub(super) fn step(world: &mut WorldCore, input: &InputState, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let generated_before = world.grid.store().generated_total();

    let max_dt = world.config.physics.max_dt;
    let dt_in = dt;
    let (dt, clamped) = clamp_dt(dt_in, max_dt);
    if clamped {
        log::trace!("frame delta {} clamped to {}", dt_in, dt);
    }

    let ((), step_ms) = timed(perf_on, || {
        world.camera.follow(&world.player);

        let ((), kinematics_ms) = timed(perf_on, || {
            kinematics::step(&mut world.player, input, &world.config.physics, dt);
        });

        let (_, collision_ms) = timed(perf_on, || {
            world.resolver.resolve(&mut world.player, &mut world.grid, dt)
        });

        world.perf_stats.kinematics_ms = kinematics_ms;
        world.perf_stats.collision_ms = collision_ms;
    });

    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.step_ms = step_ms;
        stats.dt_clamped = clamped;
        stats.chunks_loaded = world.grid.store().chunk_count() as u32;
        stats.chunks_generated = (world.grid.store().generated_total() - generated_before) as u32;
    }
}
