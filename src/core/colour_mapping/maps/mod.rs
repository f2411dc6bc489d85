pub mod aqua;
pub mod dark_red;
pub mod viridis;
