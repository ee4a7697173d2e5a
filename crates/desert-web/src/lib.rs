//! Browser bridge for the desert simulation.
//!
//! One [`SimRunner`] lives in `thread_local!` storage and is driven through free
//! `#[wasm_bindgen]` functions, because wasm-bindgen cannot export the runner directly.
//! The host reads render instances, game events and hitbox outlines straight out of
//! linear memory through the pointer/length pairs below.

pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

/// Run `f` against the runner, or return `None` (with a console warning) before `sim_init`.
fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                web_sys::console::warn_1(&"desert-web: call sim_init() first".into());
                None
            }
        }
    })
}

/// Build the world. `vertices` is flat xyz, `indices` is flat triangle triples.
#[wasm_bindgen]
pub fn sim_init(manifest_json: &str, vertices: &[f32], indices: &[u32]) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let entropy = || (js_sys::Math::random() * u32::MAX as f64) as u64;
    let runner = SimRunner::from_host(manifest_json, vertices, indices, entropy)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("desert-web: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn sim_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Press a command by code (0 forward, 1 backward, 2 left, 3 right, 4 restart, 5 hitboxes).
#[wasm_bindgen]
pub fn sim_command_down(code: u32) -> bool {
    with_runner(|r| r.command_down(code)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn sim_command_up(code: u32) -> bool {
    with_runner(|r| r.command_up(code)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn sim_restart() {
    with_runner(|r| r.restart());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_hitbox_ptr() -> *const f32 {
    with_runner(|r| r.hitbox_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_hitbox_point_count() -> u32 {
    with_runner(|r| r.hitbox_point_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_hitbox_counts_ptr() -> *const u32 {
    with_runner(|r| r.hitbox_counts_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_hitbox_line_count() -> u32 {
    with_runner(|r| r.hitbox_line_count()).unwrap_or(0)
}

// ---- UI getters ----

#[wasm_bindgen]
pub fn get_energy_percent() -> f32 {
    with_runner(|r| r.energy_percent()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.score()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_remaining_cans() -> u32 {
    with_runner(|r| r.remaining_cans()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_remaining_suns() -> u32 {
    with_runner(|r| r.remaining_suns()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn is_game_over() -> bool {
    with_runner(|r| r.is_game_over()).unwrap_or(false)
}
