pub mod error;
pub mod frame;
pub mod consts;
pub mod filters;
pub mod io;
pub mod pyramid;
pub mod align;
pub mod aperture;
pub mod session;
