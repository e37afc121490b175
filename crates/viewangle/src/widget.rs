//! The view-angle widget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use viewangle_core::{
    Pose, Result, ViewAngleConfig, ViewAngleError, ViewAnglePose, ViewDirection,
};

use crate::transport::{Transport, ViewAngleRequest};

/// Handle returned by [`ViewAngle::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type PoseObserver = Arc<dyn Fn(&Pose) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, PoseObserver)>,
}

/// State shared between the widget and detached pose callbacks.
struct Shared {
    pose: RwLock<Pose>,
    target: RwLock<Option<Pose>>,
    observers: Mutex<Observers>,
    shut_down: AtomicBool,
}

impl Shared {
    fn new(home: Pose) -> Self {
        Self {
            pose: RwLock::new(home),
            target: RwLock::new(None),
            observers: Mutex::new(Observers::default()),
            shut_down: AtomicBool::new(false),
        }
    }

    fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    fn pose(&self) -> Pose {
        *self.pose.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_target(&self, pose: Pose) {
        *self.target.write().unwrap_or_else(PoisonError::into_inner) = Some(pose);
    }

    fn target(&self) -> Option<Pose> {
        *self.target.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_update(&self, pose: Pose) {
        {
            // The flag is re-checked under the write lock that `shutdown` also takes.
            let mut current = self.pose.write().unwrap_or_else(PoisonError::into_inner);
            if self.is_shut_down() {
                log::trace!("ignoring camera pose update after shutdown");
                return;
            }
            // The stored pose is always finite, so a rejected update never equals it.
            let sanitized = ViewAnglePose::sanitize(pose, &current);
            if sanitized != pose {
                log::warn!("dropping non-finite camera pose update: {pose:?}");
                return;
            }
            *current = sanitized;
        }
        log::trace!("camera pose updated: {pose:?}");

        // Observers run without any lock held so they can read the pose back.
        let observers: Vec<PoseObserver> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(&self.pose());
        }
    }
}

/// Camera view-angle presets and custom pose requests for a simulation viewer.
///
/// The widget holds the most recently observed camera pose, fed by
/// [`on_pose_update`](Self::on_pose_update), and sends camera requests through
/// its [`Transport`]. It is `Send + Sync` whenever the transport is, so UI
/// callbacks and transport deliveries may arrive on different threads.
///
/// # Example
///
/// ```
/// use viewangle::{ChannelTransport, ViewAngle, ViewAngleConfig};
///
/// let (transport, requests) = ChannelTransport::new();
/// let widget = ViewAngle::new(ViewAngleConfig::default(), transport)?;
///
/// // "Top" button
/// let target = widget.on_angle_mode(0, 0, -1)?;
/// assert!(target.z > 0.0);
/// assert_eq!(requests.try_recv().unwrap().endpoint, "/gui/view_angle");
/// # Ok::<(), viewangle::ViewAngleError>(())
/// ```
pub struct ViewAngle<T: Transport> {
    config: ViewAngleConfig,
    placement: ViewAnglePose,
    shared: Arc<Shared>,
    transport: T,
}

impl<T: Transport> ViewAngle<T> {
    /// Creates the widget. The current pose starts at the configured home pose.
    pub fn new(config: ViewAngleConfig, transport: T) -> Result<Self> {
        config.validate()?;
        log::info!(
            "view angle widget using service '{}' (move to pose: '{}')",
            config.service,
            config.move_to_pose_service
        );
        Ok(Self {
            placement: ViewAnglePose::from_config(&config),
            shared: Arc::new(Shared::new(config.home_pose)),
            config,
            transport,
        })
    }

    /// Returns the configuration the widget was created with.
    pub fn config(&self) -> &ViewAngleConfig {
        &self.config
    }

    /// Returns the direction-to-pose mapping.
    pub fn placement(&self) -> &ViewAnglePose {
        &self.placement
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handles a view-angle button press.
    ///
    /// `(x, y, z)` is the look direction with components in {-1, 0, 1};
    /// `(0, 0, 0)` requests the home pose. Sends one request to the view-angle
    /// service and returns the pose the camera is expected to assume.
    pub fn on_angle_mode(&self, x: i32, y: i32, z: i32) -> Result<Pose> {
        self.ensure_running()?;
        let direction = ViewDirection::new(x, y, z)?;
        let target = self
            .placement
            .pose_for_direction(direction, &self.shared.pose());

        self.shared.set_target(target);
        self.dispatch(&self.config.service, ViewAngleRequest::Direction(direction));
        Ok(target)
    }

    /// Requests an explicit camera pose.
    ///
    /// Non-finite input is rejected and nothing is sent. The current pose is left
    /// alone either way; it only changes when the simulation reports back.
    pub fn set_pose(&self, x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Result<()> {
        self.ensure_running()?;
        let pose = Pose::new(x, y, z, roll, pitch, yaw);
        if !pose.is_finite() {
            log::warn!("rejecting non-finite camera pose request: {pose:?}");
            return Err(ViewAngleError::NonFinitePose);
        }

        self.shared.set_target(pose);
        self.dispatch(
            &self.config.move_to_pose_service,
            ViewAngleRequest::MoveToPose(pose),
        );
        Ok(())
    }

    /// Records a camera pose reported by the simulation and notifies observers.
    pub fn on_pose_update(&self, pose: Pose) {
        self.shared.apply_update(pose);
    }

    /// Returns a callback that feeds pose updates into this widget.
    ///
    /// The callback owns a handle to the widget's state, so a transport
    /// subscription can hold it independently of the widget.
    pub fn pose_callback(&self) -> impl Fn(Pose) + Send + Sync + 'static {
        let shared = Arc::clone(&self.shared);
        move |pose| shared.apply_update(pose)
    }

    /// Returns the current pose as `[x, y, z, roll, pitch, yaw]`.
    pub fn current_pose(&self) -> [f64; 6] {
        self.shared.pose().to_array()
    }

    /// Returns the current pose.
    pub fn pose(&self) -> Pose {
        self.shared.pose()
    }

    /// Returns the most recently requested pose, if any.
    pub fn target_pose(&self) -> Option<Pose> {
        self.shared.target()
    }

    /// Registers a callback invoked after each accepted pose update.
    ///
    /// The callback receives the stored pose as read at call time, not the
    /// update that triggered it. Under racing updates it may see a later value
    /// twice and skip an intermediate one, but never an older one than the
    /// update that triggered it.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Pose) + Send + Sync + 'static,
    {
        let mut observers = self
            .shared
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));
        id
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .shared
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.entries.len();
        observers.entries.retain(|(entry, _)| *entry != id);
        observers.entries.len() != before
    }

    /// Tears the widget down.
    ///
    /// Observers are dropped, further requests fail with [`ViewAngleError::ShutDown`]
    /// and pose updates are ignored. The last pose stays readable.
    pub fn shutdown(&self) {
        {
            let _pose = self
                .shared
                .pose
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if self.shared.shut_down.swap(true, Ordering::AcqRel) {
                return;
            }
        }
        self.shared
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
        log::info!("view angle widget shut down");
    }

    /// Returns whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shared.is_shut_down()
    }

    fn ensure_running(&self) -> Result<()> {
        if self.shared.is_shut_down() {
            Err(ViewAngleError::ShutDown)
        } else {
            Ok(())
        }
    }

    fn dispatch(&self, endpoint: &str, request: ViewAngleRequest) {
        match self.transport.send(endpoint, request) {
            Ok(()) => log::debug!("sent {request:?} to '{endpoint}'"),
            Err(e) => log::debug!("request to '{endpoint}' not delivered: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ChannelTransport, NullTransport};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_starts_at_home() {
        let home = Pose::new(-6.0, 0.0, 6.0, 0.0, 0.5, 0.0);
        let widget =
            ViewAngle::new(ViewAngleConfig::new().with_home_pose(home), NullTransport).unwrap();
        assert_eq!(widget.current_pose(), home.to_array());
        assert_eq!(widget.target_pose(), None);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ViewAngleConfig::new().with_service("");
        assert!(matches!(
            ViewAngle::new(config, NullTransport),
            Err(ViewAngleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_angle_mode_sends_direction() {
        let (transport, rx) = ChannelTransport::new();
        let widget =
            ViewAngle::new(ViewAngleConfig::new().with_service("/custom"), transport).unwrap();
        let target = widget.on_angle_mode(1, 0, 0).unwrap();

        let sent = rx.try_recv().unwrap();
        assert_eq!(sent.endpoint, "/custom");
        assert_eq!(sent.request, ViewAngleRequest::Direction(ViewDirection::BACK));
        assert_eq!(widget.target_pose(), Some(target));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_invalid_angle_mode_sends_nothing() {
        let (transport, rx) = ChannelTransport::new();
        let widget = ViewAngle::new(ViewAngleConfig::default(), transport).unwrap();
        assert!(matches!(
            widget.on_angle_mode(0, 2, 0),
            Err(ViewAngleError::InvalidDirection { x: 0, y: 2, z: 0 })
        ));
        assert!(rx.try_recv().is_err());
        assert_eq!(widget.target_pose(), None);
        assert_eq!(widget.current_pose(), [0.0; 6]);
    }

    #[test]
    fn test_observer_sees_update_and_can_read_back() {
        let widget = Arc::new(ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap());
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            let reader = Arc::clone(&widget);
            widget.subscribe(move |pose| {
                assert_eq!(reader.pose(), *pose);
                seen.lock().unwrap().push(*pose);
            });
        }
        let pose = Pose::new(1.0, 2.0, 3.0, 0.0, 0.0, 1.57);
        widget.on_pose_update(pose);
        assert_eq!(*seen.lock().unwrap(), vec![pose]);
    }

    #[test]
    fn test_observer_gets_latest_pose_after_nested_update() {
        let widget = Arc::new(ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap());
        let first = Pose::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let second = Pose::new(2.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        {
            let nested = Arc::clone(&widget);
            let fired = AtomicBool::new(false);
            widget.subscribe(move |_| {
                if !fired.swap(true, Ordering::SeqCst) {
                    nested.on_pose_update(second);
                }
            });
        }
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            widget.subscribe(move |pose| seen.lock().unwrap().push(*pose));
        }

        widget.on_pose_update(first);

        assert_eq!(widget.pose(), second);
        assert_eq!(*seen.lock().unwrap(), vec![second, second]);
    }

    #[test]
    fn test_unsubscribe() {
        let widget = ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let id = widget.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        widget.on_pose_update(Pose::IDENTITY);
        assert!(widget.unsubscribe(id));
        assert!(!widget.unsubscribe(id));
        widget.on_pose_update(Pose::IDENTITY);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_finite_update_not_notified() {
        let widget = ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        widget.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        widget.on_pose_update(Pose::new(0.0, f64::INFINITY, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(widget.current_pose(), [0.0; 6]);
    }

    #[test]
    fn test_preserve_distance_uses_current_pose() {
        let config = ViewAngleConfig::new().with_preserve_distance(true);
        let widget = ViewAngle::new(config, NullTransport).unwrap();
        widget.on_pose_update(Pose::new(0.0, 3.0, 4.0, 0.0, 0.0, 0.0));
        let target = widget.on_angle_mode(0, 0, -1).unwrap();
        assert!((target.z - 5.0).abs() < 1e-9);
    }
}
