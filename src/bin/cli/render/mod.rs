mod terminal;

pub use terminal::{print_summary, Pane};
