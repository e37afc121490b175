//! View-angle demo.
//!
//! Wires the widget to an in-process "simulation" thread that answers every
//! request by publishing the resulting camera pose back, the way a real
//! message bus would. Run with `RUST_LOG=debug` to see the request traffic.

use std::thread;

use viewangle::*;

fn main() -> Result<()> {
    init_logging();

    let config = ViewAngleConfig::from_json(
        r#"{
            "service": "/gui/view_angle",
            "home_pose": { "x": -6.0, "y": 0.0, "z": 6.0, "roll": 0.0, "pitch": 0.6, "yaw": 0.0 },
            "standard_distance": 8.0
        }"#,
    )?;

    let (transport, requests) = ChannelTransport::new();
    let widget = ViewAngle::new(config, transport)?;
    widget.subscribe(|pose| {
        println!(
            "camera -> pos ({:6.2}, {:6.2}, {:6.2})  rpy ({:5.2}, {:5.2}, {:5.2})",
            pose.x, pose.y, pose.z, pose.roll, pose.pitch, pose.yaw
        );
    });

    // Stand-in for the render side: resolve each request to a pose and report it.
    let placement = widget.placement().clone();
    let report = widget.pose_callback();
    let simulation = thread::spawn(move || {
        let mut camera = placement.home;
        for OutboundRequest { endpoint, request } in requests {
            log::debug!("simulation received {request:?} on '{endpoint}'");
            camera = match request {
                ViewAngleRequest::Direction(direction) => {
                    placement.pose_for_direction(direction, &camera)
                }
                ViewAngleRequest::MoveToPose(pose) => pose,
            };
            report(camera);
        }
    });

    for preset in ViewDirection::presets() {
        let [x, y, z] = preset.components();
        println!("{} view", preset.name().unwrap_or("corner"));
        widget.on_angle_mode(x, y, z)?;
    }
    println!("isometric corner view");
    widget.on_angle_mode(-1, -1, -1)?;

    println!("custom pose");
    widget.set_pose(0.0, -5.0, 2.0, 0.0, 0.3, std::f64::consts::FRAC_PI_2)?;

    // Dropping the widget drops the transport, which ends the simulation loop.
    let current = widget.current_pose();
    widget.shutdown();
    drop(widget);
    simulation.join().expect("simulation thread panicked");

    println!("last reported pose before shutdown: {current:?}");
    Ok(())
}
