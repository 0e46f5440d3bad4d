use anyhow::Result;

use crate::app::App;
use crate::view::{ConsoleView, View};

pub fn run() -> Result<()> {
    let conn = crate::store::open()?;
    let app = App::open(conn, ConsoleView)?;
    let categories = app.repo().categories();
    ConsoleView.render_categories(&categories);
    Ok(())
}
