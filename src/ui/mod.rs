pub mod colors;
pub mod formatting;
pub mod interactive;
pub mod render;
pub mod view;

pub use interactive::{InteractiveOptions, run_interactive_ui};
pub use render::{RenderOptions, render_plain, render_screen};
pub use view::{Pane, ViewState};
