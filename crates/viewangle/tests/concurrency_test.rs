//! Cross-thread behavior of the stored camera pose.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use viewangle::*;

const UPDATES_PER_WRITER: u32 = 20_000;

/// Every pose written here has all six components equal, so any mix of two
/// writes shows up as unequal components.
fn uniform_pose(value: f64) -> Pose {
    Pose::from_array([value; 6])
}

fn assert_not_torn(values: [f64; 6]) {
    assert!(
        values.iter().all(|v| *v == values[0]),
        "torn pose observed: {values:?}"
    );
}

#[test]
fn test_concurrent_updates_never_tear() {
    let widget = Arc::new(ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap());
    let done = Arc::new(AtomicBool::new(false));

    widget.subscribe(|pose| assert_not_torn(pose.to_array()));

    let writers: Vec<_> = [1.0f64, -1.0]
        .into_iter()
        .map(|sign| {
            let callback = widget.pose_callback();
            thread::spawn(move || {
                for i in 1..=UPDATES_PER_WRITER {
                    callback(uniform_pose(sign * f64::from(i)));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let widget = Arc::clone(&widget);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut reads = 0u64;
                while !done.load(Ordering::Acquire) {
                    assert_not_torn(widget.current_pose());
                    reads += 1;
                }
                reads
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::Release);
    for reader in readers {
        assert!(reader.join().unwrap() > 0);
    }

    // The survivor is the final write of one of the two writers.
    let last = widget.current_pose();
    assert_not_torn(last);
    assert_eq!(last[0].abs(), f64::from(UPDATES_PER_WRITER));
}

#[test]
fn test_requests_from_ui_thread_during_updates() {
    let (transport, rx) = ChannelTransport::new();
    let widget = Arc::new(ViewAngle::new(ViewAngleConfig::default(), transport).unwrap());

    let updater = {
        let callback = widget.pose_callback();
        thread::spawn(move || {
            for i in 0..1_000 {
                callback(uniform_pose(f64::from(i)));
            }
        })
    };

    let ui = {
        let widget = Arc::clone(&widget);
        thread::spawn(move || {
            for preset in ViewDirection::presets().into_iter().cycle().take(700) {
                let [x, y, z] = preset.components();
                let target = widget.on_angle_mode(x, y, z).unwrap();
                assert!(target.is_finite());
            }
        })
    };

    updater.join().unwrap();
    ui.join().unwrap();

    assert_eq!(rx.try_iter().count(), 700);
    assert_eq!(widget.current_pose(), [999.0; 6]);
}

#[test]
fn test_no_update_lands_after_shutdown() {
    let widget = Arc::new(ViewAngle::new(ViewAngleConfig::default(), NullTransport).unwrap());
    let started = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let callback = widget.pose_callback();
            let started = Arc::clone(&started);
            thread::spawn(move || {
                for i in 1..=UPDATES_PER_WRITER {
                    callback(uniform_pose(f64::from(w * UPDATES_PER_WRITER + i)));
                    started.store(true, Ordering::Release);
                }
            })
        })
        .collect();

    while !started.load(Ordering::Acquire) {
        thread::yield_now();
    }
    widget.shutdown();
    let at_shutdown = widget.pose();

    for writer in writers {
        writer.join().unwrap();
    }
    assert!(widget.is_shut_down());
    assert_eq!(widget.pose(), at_shutdown);
}
