use crate::quotes::Quote;

/// Narrow rendering seam. Core logic never prints directly; everything
/// user-visible goes through this trait, so tests can capture output and
/// the status line is observable.
pub trait View {
    fn render_quote(&mut self, quote: &Quote);
    fn render_categories(&mut self, categories: &[String]);
    fn set_status(&mut self, status: &str);
}

/// Stdout-backed view used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn render_quote(&mut self, quote: &Quote) {
        println!("{quote}");
    }

    fn render_categories(&mut self, categories: &[String]) {
        for category in categories {
            println!("{category}");
        }
    }

    fn set_status(&mut self, status: &str) {
        eprintln!("{status}");
    }
}
