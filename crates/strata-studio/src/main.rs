use anyhow::{Context, Result};
use glam::IVec2;

use strata_engine::coords::{ColorRgba, Rect, Viewport};
use strata_engine::logging::{init_logging, LoggingConfig};
use strata_engine::render::{
    bulk_quads, decode_order_list, decode_window_list, encode_order_list, encode_per_draw,
    encode_window_list, per_draw_offset, resolve_source, single_quad, FrameRecorder, ImageSlots,
    SurfaceSource,
};
use strata_engine::scene::{OrderList, Window, WindowList};
use strata_engine::CompositorConfig;

const RESOLUTION: IVec2 = IVec2::new(1280, 720);

/// Sample desktop: wallpaper, two clients, one color-filled popup.
fn sample_desktop(images: &mut ImageSlots<&'static str>) -> (WindowList, OrderList) {
    let wallpaper = images.insert("wallpaper.png");
    let terminal = images.insert("terminal");
    let editor = images.insert("editor");

    let mut windows = WindowList::new();
    let bg = windows.push(Window::image(wallpaper, Rect::new(0, 0, 1280, 720)));
    let term = windows.push(
        Window::image(terminal, Rect::new(80, 60, 640, 400))
            .with_opaque(Rect::new(0, 0, 640, 400)),
    );
    let edit = windows.push(Window::image(editor, Rect::new(520, 200, 700, 460)));
    let popup = windows.push(Window::color(
        ColorRgba::new(0.1, 0.1, 0.12, 0.9),
        Rect::new(600, 240, 240, 80),
    ));

    // Front to back.
    let mut order = OrderList::new();
    for index in [popup, edit, term, bg] {
        order.push(index);
    }
    (windows, order)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::with_filter("info,strata_engine=debug"));

    let mut images = ImageSlots::new();
    let (windows, order) = sample_desktop(&mut images);

    // GPU-side copies of the lists, checked by decoding them back.
    let window_bytes = encode_window_list(&windows);
    let order_bytes = encode_order_list(&order);
    decode_window_list(&window_bytes).context("window list buffer does not decode")?;
    decode_order_list(&order_bytes).context("order list buffer does not decode")?;
    log::info!(
        "buffers: window list {} bytes, order list {} bytes",
        window_bytes.len(),
        order_bytes.len()
    );

    let mut recorder = FrameRecorder::new(CompositorConfig::default());
    recorder
        .set_viewport(&Viewport::new(0, 0, RESOLUTION.x, RESOLUTION.y))
        .context("failed to set the output viewport")?;
    recorder.begin_frame(RESOLUTION).context("failed to begin frame")?;

    // Desktop in one instanced draw.
    let bulk = recorder
        .submit_bulk(&windows, &order)
        .context("bulk submission rejected")?;
    let quads =
        bulk_quads(&windows, &order, &bulk.constants).context("bulk transform failed")?;
    for (instance, quad) in quads.iter().enumerate() {
        let index = quad[0]
            .window_index
            .context("bulk quad without window index")?;
        let window = windows.get(index)?;
        let source = match resolve_source(window, &images)? {
            SurfaceSource::Texture { handle, .. } => (*handle).to_owned(),
            SurfaceSource::Color(c) => format!("color {:?}", c.to_array()),
        };
        log::info!(
            "bulk #{instance}: window {index} ({source}) tl={} br={} z={}",
            quad[0].clip_position,
            quad[2].clip_position,
            quad[0].clip_position.z
        );
    }

    // Overlay tooltips on top of the desktop, one draw each.
    let mut tooltips_vp = Viewport::new(0, 0, RESOLUTION.x, RESOLUTION.y);
    tooltips_vp.set_scroll_region(RESOLUTION.x, RESOLUTION.y * 2);
    tooltips_vp.update_scroll_amount(0, 40);
    recorder.set_viewport(&tooltips_vp)?;

    let tooltips = [
        Window::color(ColorRgba::new(1.0, 1.0, 0.8, 1.0), Rect::new(100, 100, 160, 24)),
        Window::color(ColorRgba::new(1.0, 1.0, 0.8, 1.0), Rect::new(700, 300, 200, 24)),
    ];
    let draws = recorder.draw_list(&tooltips).context("tooltip list rejected")?;
    let model = recorder.config().model;
    for (i, draw) in draws.iter().enumerate() {
        let quad = single_quad(draw, &model);
        log::info!(
            "tooltip #{i} at dynamic offset {}: tl={} z={}",
            per_draw_offset(i),
            quad[0].clip_position,
            draw.starting_depth
        );
    }
    let per_draw_bytes = encode_per_draw(&draws);

    let summary = recorder.end_frame().context("failed to end frame")?;
    log::info!(
        "frame {}: {} bulk windows, {} lists, {} depth slots, per-draw buffer {} bytes",
        summary.frame_index,
        summary.bulk_windows.unwrap_or(0),
        summary.draw_lists,
        summary.depth_slots_used,
        per_draw_bytes.len()
    );

    Ok(())
}
