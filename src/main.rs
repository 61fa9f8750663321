use anyhow::Context;
use discs::{
    bounds::Bounds,
    logging::init_logging,
    render::sdl::{init_graphics, DisplayConfig},
    simulation::{build_schedule, init_simulation, SimulationConfig, SimulationData},
    world_gen::{init_world, GenerationConfig},
};
use legion::{Resources, World};
use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

pub fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Setup.
    let (graphics, mut event_pump) = init_graphics(DisplayConfig::default())?;
    let (width, height) = graphics.surface.size();
    let bounds = Bounds::from_size(width, height);
    let mut world = World::default();
    let mut resources = Resources::default();

    // Initialize world.
    init_world(&mut resources, &bounds, &GenerationConfig::default())
        .context("failed to place bodies")?;
    resources.insert(bounds);
    resources.insert(graphics);
    init_simulation(&mut resources, SimulationConfig::default());

    let mut schedule = build_schedule();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    if let Some(mut bounds) = resources.get_mut::<Bounds>() {
                        bounds.resize(width.max(0) as u32, height.max(0) as u32);
                        info!("Canvas resized to {}x{}", bounds.width, bounds.height);
                    }
                }
                _ => {}
            }
        }

        schedule.execute(&mut world, &mut resources);
    }

    if let Some(simulation_data) = resources.get::<SimulationData>() {
        info!("Exiting after {} frames", simulation_data.frame);
    }
    Ok(())
}
