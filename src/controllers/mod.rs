pub mod backend;
pub mod cli;
pub mod iteration_slider;
pub mod ports;
pub mod render_scheduler;
pub mod session;
