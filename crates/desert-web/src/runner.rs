use desert_sim::{
    build_render_buffer, flatten_lines, FixedTimestep, GameEvent, InMemoryMeshSource, InputQueue,
    RenderBuffer, SimError, Simulation, TerrainMesh, WorldManifest,
};

/// Drives a [`Simulation`] from the browser frame loop.
///
/// The host calls [`SimRunner::tick`] once per animation frame with the elapsed time, then
/// reads the flat buffers through the pointer accessors. Buffers stay valid until the next
/// tick.
pub struct SimRunner {
    sim: Simulation,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    /// Events from every step of the last frame, in order.
    events: Vec<GameEvent>,
    /// Hitbox outlines as `[x, y, z]` floats, empty while hitboxes are hidden.
    hitbox_floats: Vec<f32>,
    /// Points per outline in `hitbox_floats`.
    hitbox_counts: Vec<u32>,
}

impl SimRunner {
    pub fn new(sim: Simulation) -> Self {
        let timestep = FixedTimestep::new(sim.config().fixed_dt);
        let mut runner = Self {
            sim,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            events: Vec::with_capacity(32),
            hitbox_floats: Vec::new(),
            hitbox_counts: Vec::new(),
        };
        runner.rebuild_frame_data();
        runner
    }

    /// Build from what the host hands over at startup: the manifest JSON and the terrain
    /// mesh as flat xyz / index arrays. `entropy` supplies a seed when the manifest has none.
    pub fn from_host(
        manifest_json: &str,
        vertices: &[f32],
        indices: &[u32],
        entropy: impl FnOnce() -> u64,
    ) -> Result<Self, SimError> {
        let manifest = WorldManifest::from_json(manifest_json)?;
        let seed = manifest.seed.unwrap_or_else(entropy);
        let meshes = InMemoryMeshSource::new()
            .with_mesh(manifest.terrain.mesh.clone(), TerrainMesh::from_flat(vertices, indices));
        Ok(Self::new(Simulation::from_world(manifest, &meshes, seed)))
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Queue a command press. Returns false for unknown codes.
    pub fn command_down(&mut self, code: u32) -> bool {
        self.input.press_code(code)
    }

    /// Queue a command release. Returns false for unknown codes.
    pub fn command_up(&mut self, code: u32) -> bool {
        self.input.release_code(code)
    }

    /// Run one frame: apply input, run whole fixed steps, rebuild the host buffers.
    pub fn tick(&mut self, dt: f32) {
        // Clear per-frame transient data
        self.events.clear();

        self.sim.handle_input(&self.input);
        self.input.drain();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.update(self.timestep.dt());
            self.collect_events();
        }

        self.rebuild_frame_data();
    }

    /// Restart immediately instead of waiting for the next step.
    pub fn restart(&mut self) {
        self.events.clear();
        self.sim.restart();
        self.collect_events();
        self.timestep.reset();
        self.rebuild_frame_data();
    }

    fn collect_events(&mut self) {
        self.events
            .extend(self.sim.events().iter().map(|e| e.to_game_event()));
    }

    fn rebuild_frame_data(&mut self) {
        build_render_buffer(&self.sim.snapshot(), &mut self.render_buffer);

        if self.sim.show_hitboxes() {
            flatten_lines(&self.sim.hitbox_lines(), &mut self.hitbox_floats, &mut self.hitbox_counts);
        } else {
            self.hitbox_floats.clear();
            self.hitbox_counts.clear();
        }
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn hitbox_ptr(&self) -> *const f32 {
        self.hitbox_floats.as_ptr()
    }

    /// Total points across all outlines.
    pub fn hitbox_point_count(&self) -> u32 {
        (self.hitbox_floats.len() / 3) as u32
    }

    pub fn hitbox_counts_ptr(&self) -> *const u32 {
        self.hitbox_counts.as_ptr()
    }

    pub fn hitbox_line_count(&self) -> u32 {
        self.hitbox_counts.len() as u32
    }

    // ---- UI getters ----

    pub fn energy_percent(&self) -> f32 {
        self.sim.energy_percent()
    }

    pub fn score(&self) -> u32 {
        self.sim.score()
    }

    pub fn remaining_cans(&self) -> u32 {
        self.sim.remaining_cans() as u32
    }

    pub fn remaining_suns(&self) -> u32 {
        self.sim.remaining_suns() as u32
    }

    pub fn is_game_over(&self) -> bool {
        self.sim.is_game_over()
    }

    #[cfg(test)]
    fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
