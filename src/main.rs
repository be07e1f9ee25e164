//! This crate contains the source code for the binary for the game mazerun.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use color_eyre::{eyre::Result, install};
use mazerun::{install_logger, App, MazeEngine, Settings};

fn main() -> Result<()> {
    install()?;

    let settings = Settings::from_args();
    install_logger(&settings)?;

    if settings.print {
        let engine = MazeEngine::new_game(settings.size, &mut settings.rng());
        println!("{}", engine.grid());
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(settings);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    if let Some(report) = app.report() {
        println!("{report}");
    }

    Ok(())
}
