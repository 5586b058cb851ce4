// Gallery Art: a camera kiosk where a colored badge hovers over a row of pictures.
//
// Per frame: segment the badge color, take the blob centroid, hit-test it against
// the gallery slots, then draw the gallery and a box around the badge.
// Camera and window live in the binary; everything here works on plain images.

pub mod compose;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod gallery;
pub mod hover;
pub mod layout;
pub mod types;
pub mod vision;

pub use config::{Config, HsvRange};
pub use error::Error;
pub use frame_loop::{FrameSink, FrameSource, Kiosk, LoopExit};
pub use types::{Frame, HoverState, Mask, Point, Rect};
