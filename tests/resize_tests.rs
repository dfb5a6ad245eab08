use sundae::resize::{fit_frame, handle_resize, DrawSurface};
use three_d::*;

fn camera(viewport: Viewport) -> Camera {
    Camera::new_perspective(
        viewport,
        vec3(0.0, 0.0, 5.0),
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(75.0),
        0.1,
        100.0,
    )
}

#[test]
fn test_resize_to_800x600() {
    let mut surface = DrawSurface::new(1024, 1024, 1.0);
    let mut cam = camera(surface.viewport());

    handle_resize(&mut cam, &mut surface, 800, 600, 1.0);

    assert_eq!((surface.width, surface.height), (800, 600));
    assert!((cam.viewport().aspect() - 800.0 / 600.0).abs() < 1e-6);
    assert!((surface.aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn test_resize_updates_projection() {
    let mut surface = DrawSurface::new(600, 600, 1.0);
    let mut cam = camera(surface.viewport());
    let square = *cam.projection();

    handle_resize(&mut cam, &mut surface, 1200, 600, 1.0);

    assert!(*cam.projection() != square);
    // wider aspect shrinks the horizontal scale by the aspect ratio
    assert!((cam.projection()[0][0] * 2.0 - square[0][0]).abs() < 1e-4);
}

#[test]
fn test_resize_clamps_high_density_displays() {
    let mut surface = DrawSurface::new(800, 600, 1.0);
    let mut cam = camera(surface.viewport());

    handle_resize(&mut cam, &mut surface, 800, 600, 3.0);

    assert_eq!(surface.pixel_ratio, 2.0);
    assert_eq!(surface.physical_size(), (1600, 1200));
    assert_eq!(cam.viewport().width, 1600);
    assert_eq!(cam.viewport().height, 1200);
}

#[test]
fn test_resize_keeps_low_ratios() {
    let mut surface = DrawSurface::new(800, 600, 1.0);
    let mut cam = camera(surface.viewport());

    handle_resize(&mut cam, &mut surface, 400, 300, 1.5);

    assert_eq!(surface.pixel_ratio, 1.5);
    assert_eq!(surface.physical_size(), (600, 450));
}

#[test]
fn test_frames_draw_at_clamped_size_on_dense_displays() {
    let framebuffer = Viewport::new_at_origo(2400, 1800);
    let mut surface = DrawSurface::new(800, 600, 1.0);
    let mut cam = camera(surface.viewport());

    for _ in 0..3 {
        let drawn = fit_frame(&mut cam, &mut surface, framebuffer, 3.0);
        assert_eq!((drawn.width, drawn.height), (1600, 1200));
        assert_eq!(cam.viewport(), drawn);
    }
    assert_eq!((surface.width, surface.height), (800, 600));
    assert!((cam.viewport().aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn test_frames_use_whole_framebuffer_below_the_cap() {
    let framebuffer = Viewport::new_at_origo(1201, 901);
    let mut surface = DrawSurface::new(10, 10, 1.0);
    let mut cam = camera(surface.viewport());

    let drawn = fit_frame(&mut cam, &mut surface, framebuffer, 1.5);

    assert_eq!(drawn, framebuffer);
    assert_eq!(cam.viewport(), framebuffer);
    assert_eq!(surface.pixel_ratio, 1.5);
}

#[test]
fn test_frame_resize_follows_the_host() {
    let mut surface = DrawSurface::new(800, 600, 2.0);
    let mut cam = camera(surface.viewport());

    fit_frame(&mut cam, &mut surface, Viewport::new_at_origo(1600, 1200), 2.0);
    let drawn = fit_frame(&mut cam, &mut surface, Viewport::new_at_origo(1000, 1000), 2.0);

    assert_eq!((surface.width, surface.height), (500, 500));
    assert_eq!((drawn.width, drawn.height), (1000, 1000));
    assert!((cam.viewport().aspect() - 1.0).abs() < 1e-6);
}
