use chipcalc::app::App;
use chipcalc::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Off by default; RUST_LOG enables fetch diagnostics.
    env_logger::init();

    let mut app = App::from_env();
    let mut tui = TuiManager::new()?;

    // Run the main TUI event loop
    tui.run_event_loop(&mut app)?;

    Ok(())
}
