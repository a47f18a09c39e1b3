use kuka_krl::{CartesianPoint, Frame, GeneratorConfig, KrlError, Smoothing, SrcGenerator};
use tracing::info;

/// Generates a small demonstration program: approach, a blended square at
/// working height, a spline pass over the same corners, and a clean
/// retract to home.
fn main() -> Result<(), KrlError> {
    tracing_subscriber::fmt().init();

    let out_dir = std::env::temp_dir();
    let config = GeneratorConfig {
        advance_run: 5,
        ..GeneratorConfig::default()
    };
    let mut generator = SrcGenerator::create("demo_square", &out_dir, config)?;

    generator.set_tool_by_id(1)?;
    generator.set_base_frame(Frame {
        x: 450.0,
        y: -200.0,
        z: 35.0,
        ..Frame::default()
    })?;
    generator.set_joint_speed(30.0)?;
    generator.set_lin_speed(0.25)?;
    generator.set_lin_smoothing(2.0)?;

    let corners = [
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (0.0, 100.0),
        (0.0, 0.0),
    ];
    let at = |(x, y): (f64, f64), z: f64| CartesianPoint {
        x,
        y,
        z,
        a: 180.0,
        ..CartesianPoint::default()
    };

    // Approach above the first corner, then drop to working height.
    generator.ptp_motion(at(corners[0], 50.0), Smoothing::CPtp)?;
    generator.set_digital_out(1, true)?;
    generator.lin_motion(at(corners[0], 0.0))?;

    for corner in &corners[1..] {
        generator.lin_motion(at(*corner, 0.0))?;
    }

    // Same contour again as a single spline block.
    let spline: Vec<CartesianPoint> = corners.iter().map(|c| at(*c, 0.0)).collect();
    generator.spline_motion(spline)?;

    generator.set_digital_out(1, false)?;
    generator.delay(0.5)?;
    generator.lin_motion(at(corners[0], 50.0))?;
    generator.home_motion()?;
    generator.close()?;

    info!(path = %out_dir.join("demo_square.src").display(), "program written");
    Ok(())
}
