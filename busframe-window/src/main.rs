/// Busframe - spinning wireframe bus
///
/// Opens an 800x600 window and rotates the model one degree per frame.
/// Close the window to quit.
use anyhow::Result;
use busframe_window::WindowSettings;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Starting busframe...");

    busframe_window::run(WindowSettings::default())?;
    Ok(())
}
