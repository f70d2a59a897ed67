use std::sync::Arc;
use std::time::Duration;

use mandelbrot_explorer::{
    DisplayPort, EngineConfig, InteractiveSession, Location, PaletteKind, PpmFilePresenter,
    RenderScheduler, Resolution,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let display: Arc<dyn DisplayPort> = Arc::new(PpmFilePresenter::new("output"));
    let scheduler = RenderScheduler::new(display, EngineConfig::default());
    let mut session = InteractiveSession::new(scheduler, Resolution::new(800, 600)?);

    session.set_palette(PaletteKind::YellowBlue);
    let generation = session.go_to(Location::Nice2)?;

    if !session
        .scheduler()
        .wait_for_final(generation, Duration::from_secs(120))
    {
        return Err("timed out waiting for the final frame".into());
    }

    Ok(())
}
