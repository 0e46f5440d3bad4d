use anyhow::Result;

use crate::app::App;
use crate::view::ConsoleView;

pub fn run() -> Result<()> {
    let conn = crate::store::open()?;
    let app = App::open(conn, ConsoleView)?;

    if app.repo().is_empty() {
        println!("No quotes stored.");
        return Ok(());
    }
    for quote in app.repo().quotes() {
        println!("{quote}");
    }
    Ok(())
}
