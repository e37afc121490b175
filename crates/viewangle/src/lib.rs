//! viewangle: camera view-angle presets for simulation viewers.
//!
//! The [`ViewAngle`] widget sits between a viewer's UI and its simulation message
//! bus. Preset buttons and drag gestures become camera requests sent through a
//! [`Transport`]; camera pose reports from the simulation are stored and fanned
//! out to subscribed observers.
//!
//! # Quick Start
//!
//! ```
//! use viewangle::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let (transport, requests) = ChannelTransport::new();
//!     let widget = ViewAngle::new(ViewAngleConfig::default(), transport)?;
//!     widget.subscribe(|pose| println!("camera at {pose:?}"));
//!
//!     // The host's bus subscription feeds pose reports back in.
//!     let on_pose = widget.pose_callback();
//!     on_pose(Pose::new(1.0, 2.0, 3.0, 0.0, 0.0, 1.57));
//!     assert_eq!(widget.current_pose(), [1.0, 2.0, 3.0, 0.0, 0.0, 1.57]);
//!
//!     widget.set_pose(0.0, -5.0, 2.0, 0.0, 0.3, 1.57)?;
//!     assert_eq!(requests.try_recv().unwrap().endpoint, "/gui/move_to/pose");
//!
//!     widget.shutdown();
//!     Ok(())
//! }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// set_pose mirrors the six scalar slots of the UI binding
#![allow(clippy::too_many_arguments)]
#![allow(clippy::many_single_char_names)]

mod init;
pub mod transport;
pub mod widget;

pub use init::init_logging;
pub use transport::{
    ChannelTransport, NullTransport, OutboundRequest, Transport, TransportError, ViewAngleRequest,
};
pub use widget::{SubscriptionId, ViewAngle};

// Re-export core types
pub use viewangle_core::{
    config::{DEFAULT_CAMERA_POSE_TOPIC, DEFAULT_MOVE_TO_POSE_SERVICE, DEFAULT_SERVICE},
    DQuat, DVec3, Pose, Result, ViewAngleConfig, ViewAngleError, ViewAnglePose, ViewDirection,
};
