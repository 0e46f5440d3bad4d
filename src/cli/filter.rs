use anyhow::Result;

use crate::app::App;
use crate::view::ConsoleView;

pub fn run(category: &str) -> Result<()> {
    let conn = crate::store::open()?;
    let mut app = App::open(conn, ConsoleView)?;
    app.set_filter(category)?;
    println!("Active category: {category}");
    Ok(())
}
