pub mod render_pair;
