use anyhow::Result;
use debug_demo::report::{write_report, Sample};

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_env("DEBUG_DEMO_LOG")
        .init();

    let Sample { x, y } = Sample::DEFAULT;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &Sample { x, y })?;

    Ok(())
}
