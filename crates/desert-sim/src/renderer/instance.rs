use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer from linear memory.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space.
    pub x: f32,
    /// Height in world space, ground plus hover.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Rotation about the vertical axis in degrees.
    pub rotation: f32,
    /// Uniform scale to draw at, pulse included.
    pub scale: f32,
    /// Model selector, see [`crate::api::types::InstanceKind::code`].
    pub kind: f32,
    /// Pulse phase in radians, 0 for non-pulsing kinds.
    pub phase: f32,
    /// Keeps the 8-float stride.
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Everything the host draws this frame: the player first, then every active prop.
pub struct RenderBuffer {
    /// Instances in draw order.
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(128),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// The instances as one flat float slice, 8 floats per record.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for direct host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
