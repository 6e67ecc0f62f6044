//! svgstego - hide text in the numeric attributes of SVG images.
//!
//! Each character of the message becomes eight bits, and each bit is planted
//! in the thousandths digit of one numeric literal (`42` → `42.001`). The
//! image renders the same; the message is read back by walking the same
//! literals in the same order.
//!
//! - [`svg`]: XML document model the codec works on
//! - [`stego`]: the codec itself (hide, reveal, capacity)
//! - [`config`], [`cli`]: `svgstego.toml` and the command-line front end
//! - [`logger`]: colored terminal output

pub mod cli;
pub mod config;
pub mod logger;
pub mod stego;
pub mod svg;
