pub mod grid_renderer;
