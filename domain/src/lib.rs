pub mod canvas;
pub mod error;
pub mod frame;
