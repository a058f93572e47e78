//! spin3d terminal demo: rotating cube
//!
//! Usage: spin3d-terminal [config.toml]
//!
//! Controls:
//!   - WASD / Arrow Keys: Rotate the cube
//!   - E/R: Roll rotation
//!   - Space: Pause the automatic spin
//!   - Q/ESC: Quit

use spin3d_core::Mesh;
use spin3d_terminal::{AppConfig, AppError, TerminalApp};
use std::env;

fn main() -> Result<(), AppError> {
    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading config: {path}");
            AppConfig::from_toml_file(&path)?
        }
        None => AppConfig::default(),
    };

    // The canonical unit cube, spanning -1..1 on every axis
    let cube = Mesh::cube(2.0);

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(cube, config)?;
    app.run()?;

    println!("Thank you for using spin3d!");
    Ok(())
}
