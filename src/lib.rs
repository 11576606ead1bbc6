//! A small pixel arcade: an RGB565 surface with a software rasterizer,
//! edge-triggered button sampling, a fixed-tick clock and the games that
//! run on top of them. The `host` module puts it all in a terminal.

pub mod clock;
pub mod color;
pub mod config;
pub mod games;
pub mod host;
pub mod input;
pub mod logging;
pub mod raster;
pub mod session;
pub mod sound;
pub mod surface;
