use color_tracker::image::RgbaFrame;
use color_tracker::{NullRobot, Tracker, TrackerParams};

fn main() {
    // Demo stub: paints an orange disc and runs one tracking cycle
    let (w, h) = (640usize, 480usize);
    let mut frame = RgbaFrame::new(w, h);
    let (cx, cy, r) = (320.0f32, 240.0f32, 60.0f32);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                frame.set(x, y, [255, 128, 0, 255]);
            }
        }
    }

    let mut tracker = Tracker::new(TrackerParams::default(), NullRobot);
    let report = tracker.process(&mut frame, true);
    println!("found={} latency_ms={:.3}", report.found, report.latency_ms);
    if let Some(target) = report.target {
        println!(
            "target center=({:.1}, {:.1}) radius={:.1}",
            target.center.x, target.center.y, target.radius
        );
    }
}
