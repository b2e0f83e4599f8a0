use clap::Parser;
use winit::event_loop::EventLoop;

use shape_spinner::app::App;
use shape_spinner::cli::Cli;
use shape_spinner::rng::ThreadDice;
use shape_spinner::scene::Scene;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut dice = ThreadDice::new();
    let scene = Scene::generate(&mut dice);

    log::info!("controls: WASD to move, mouse to look, Escape to quit");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene, cli.texture);
    event_loop.run_app(&mut app)?;

    Ok(())
}
