mod tests;

use anyhow::Result;

use ev12aq600::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cnt = Controller::open_with_option(
        Nop::new(),
        SessionOption::new().with_sleeper(VirtualSleeper::new()),
    )?;

    tests::run(cnt)
}
