//! Application entry point and event loop

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::PlotConfig;
use crate::core::control;
use crate::session::handlers::handle_msg;
use crate::session::messages::Effect;
use crate::session::state::AppState;

/// Output file used when none is given on the command line
pub const DEFAULT_OUTPUT: &str = "parafit.png";

/// Run a session: events from stdin, coefficient form on stdout,
/// notices on stderr, final frame written to the output PNG
pub fn run() -> anyhow::Result<()> {
    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let config = PlotConfig::load();
    log::info!(
        "parafit v{} starting: {}px surface, grid cell {}",
        env!("CARGO_PKG_VERSION"),
        config.canvas_size,
        config.grid_cell_size
    );

    let mut state = AppState::new(&config)?;
    state.repaint();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    process_events(&mut state, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;

    save_frame(&state, &output)
}

/// Feed every control line to the session, one event at a time
pub fn process_events<R: BufRead, W: Write, N: Write>(
    state: &mut AppState,
    input: R,
    form_out: &mut W,
    notices: &mut N,
) -> anyhow::Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading control input")?;
        let msg = match control::parse_line(&line) {
            Ok(Some(msg)) => msg,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("Skipping line {}: {}", index + 1, err);
                writeln!(notices, "line {}: {}", index + 1, err)?;
                continue;
            }
        };

        match handle_msg(state, msg) {
            Ok(Effect::FormUpdated) => {
                if let Some(form) = &state.form {
                    writeln!(form_out, "{}", form)?;
                }
            }
            Ok(Effect::Repainted | Effect::Nothing) => {}
            Err(err) => {
                log::warn!("Event handling failed: {}", err);
                writeln!(notices, "{}", err)?;
            }
        }
    }
    Ok(())
}

/// Write the current surface as a PNG
pub fn save_frame(state: &AppState, path: &Path) -> anyhow::Result<()> {
    let image = state.renderer.to_image()?;
    image
        .save(path)
        .with_context(|| format!("saving frame to {}", path.display()))?;
    log::info!("Saved {}x{} frame to {}", image.width(), image.height(), path.display());
    Ok(())
}
