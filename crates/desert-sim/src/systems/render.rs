use crate::api::simulation::Snapshot;
use crate::api::types::InstanceKind;
use crate::components::instance::Instance;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::systems::animation::{render_scale, PulseConfig};

/// Build the render buffer from a frame snapshot.
/// The player is always record 0; active props follow in kind order.
pub fn build_render_buffer(snapshot: &Snapshot<'_>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let p = snapshot.player_pos;
    buffer.push(RenderInstance {
        x: p.x,
        y: p.y,
        z: p.z,
        rotation: snapshot.player_heading,
        scale: 1.0,
        kind: InstanceKind::Player.code(),
        phase: 0.0,
        _pad: 0.0,
    });

    for instance in snapshot.active_instances() {
        buffer.push(instance_record(instance, &snapshot.pulse));
    }
}

fn instance_record(instance: &Instance, pulse: &PulseConfig) -> RenderInstance {
    RenderInstance {
        x: instance.pos.x,
        y: instance.pos.y,
        z: instance.pos.z,
        rotation: instance.rotation,
        scale: render_scale(instance, pulse),
        kind: instance.kind.code(),
        phase: instance.pulse.map_or(0.0, |p| p.phase),
        _pad: 0.0,
    }
}
