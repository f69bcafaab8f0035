use bubbletea_rs::{MouseMotion, Program};
use countdown_tui::{logging, App};

#[tokio::main]
async fn main() -> countdown_tui::Result<()> {
    let _guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e}, continuing without a log file");
            None
        }
    };

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .signal_handler(true)
        .build()?;

    program.run().await?;
    tracing::info!("countdown exited");
    Ok(())
}
