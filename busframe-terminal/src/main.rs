/// Busframe Terminal Demo - Spinning wireframe bus
///
/// Controls:
///   - Q/ESC: Quit
use busframe_core::BusModel;
use busframe_terminal::TerminalApp;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io;

fn main() -> io::Result<()> {
    // Anything chattier than warnings would tear the frame
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let model = BusModel::new().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut app = TerminalApp::new(model)?;
    app.run()?;

    println!("Stopped after {} frames", app.frame_loop().frames());
    Ok(())
}
