pub mod caps;
pub mod constants;
pub mod frame;
