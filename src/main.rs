//! parafit
//!
//! Reads click and edit commands from stdin, fits the parabola and writes
//! the plotted surface to a PNG.

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    parafit::core::app::run()
}
