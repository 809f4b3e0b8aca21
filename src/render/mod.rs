pub mod canvas;
pub mod line;
pub mod summary;

pub use canvas::Canvas;
pub use line::{plot, plot_canvas};
pub use summary::{ComposeOptions, caption, compose, compose_with, x_axis_ruler};
