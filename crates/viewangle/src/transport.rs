//! Outbound request plumbing.
//!
//! The widget never talks to the message bus directly. It hands each request to a
//! [`Transport`], which is expected to return promptly.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use viewangle_core::{Pose, ViewDirection};

/// A request asking the simulation to move the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAngleRequest {
    /// Look along a preset direction, or return home for `(0, 0, 0)`.
    Direction(ViewDirection),
    /// Move to an explicit pose.
    MoveToPose(Pose),
}

/// A request together with the endpoint it was sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundRequest {
    pub endpoint: String,
    pub request: ViewAngleRequest,
}

/// Failure reported by a transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Nothing is listening on the endpoint.
    #[error("endpoint '{0}' is unavailable")]
    Unavailable(String),

    /// The transport has been closed.
    #[error("transport closed")]
    Closed,
}

/// Sends fire-and-forget requests to named endpoints.
pub trait Transport {
    /// Sends `request` to `endpoint`.
    fn send(&self, endpoint: &str, request: ViewAngleRequest) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, endpoint: &str, request: ViewAngleRequest) -> Result<(), TransportError> {
        (**self).send(endpoint, request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, endpoint: &str, request: ViewAngleRequest) -> Result<(), TransportError> {
        (**self).send(endpoint, request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, endpoint: &str, request: ViewAngleRequest) -> Result<(), TransportError> {
        (**self).send(endpoint, request)
    }
}

/// A transport that discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn send(&self, _endpoint: &str, _request: ViewAngleRequest) -> Result<(), TransportError> {
        Ok(())
    }
}

/// An in-process transport forwarding requests over an mpsc channel.
///
/// The receiving half is typically drained by the host's bus adapter.
#[derive(Debug)]
pub struct ChannelTransport {
    sender: Sender<OutboundRequest>,
}

impl ChannelTransport {
    /// Creates a transport and the receiver its requests arrive on.
    #[must_use]
    pub fn new() -> (Self, Receiver<OutboundRequest>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl Transport for ChannelTransport {
    fn send(&self, endpoint: &str, request: ViewAngleRequest) -> Result<(), TransportError> {
        self.sender
            .send(OutboundRequest {
                endpoint: endpoint.to_string(),
                request,
            })
            .map_err(|_| TransportError::Closed)
    }
}
