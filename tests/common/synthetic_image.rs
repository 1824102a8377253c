use color_tracker::image::RgbaFrame;

/// Generates a frame of one uniform color.
pub fn uniform_frame(width: usize, height: usize, color: [u8; 4]) -> RgbaFrame {
    let mut frame = RgbaFrame::new(width, height);
    frame.fill(color);
    frame
}

/// Generates a frame with a single solid disc on a uniform background.
pub fn disc_frame(
    width: usize,
    height: usize,
    center: (f32, f32),
    radius: f32,
    color: [u8; 4],
    background: [u8; 4],
) -> RgbaFrame {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    let mut frame = uniform_frame(width, height, background);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            if dx * dx + dy * dy <= radius * radius {
                frame.set(x, y, color);
            }
        }
    }
    frame
}
