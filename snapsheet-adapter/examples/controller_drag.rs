use snapsheet::{FieldRect, LayoutFrame, SheetOptions};
use snapsheet_adapter::Controller;

fn main() {
    // Example: a framework-neutral controller driving a sheet without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer events (down/move/up) with timestamps
    // - call tick(now_ms) in a frame loop / timer while it returns Some
    // - lay the sheet out at `extent_px()`, offset its content by `scroll_offset()` and pad its
    //   bottom by `bottom_padding()`
    let mut c = Controller::new(SheetOptions::new().with_anchors([0.3, 0.8])).expect("valid options");
    c.on_viewport_size(900.0);

    c.on_pointer_down(450.0, 0);
    for step in 1..=10u64 {
        c.on_pointer_move(450.0 - step as f32 * 25.0, step * 16);
    }
    let velocity = c.on_pointer_up(176).unwrap_or_default();
    println!(
        "released: extent={:.3} velocity={velocity:.0}px/s target={:?}",
        c.sheet().extent(),
        c.sheet().target_anchor()
    );

    let mut now_ms = 176u64;
    while let Some(extent) = c.tick(now_ms) {
        if now_ms % 64 == 0 {
            println!("t={now_ms} extent={extent:.3} px={:.0}", c.extent_px());
        }
        now_ms += 16;
    }

    // The keyboard opens over a focused field near the bottom of the screen.
    let frame = LayoutFrame {
        viewport_height: 900.0,
        keyboard_inset: 320.0,
        focused_field: Some(FieldRect {
            top: 700.0,
            height: 48.0,
        }),
    };
    println!("keyboard: {:?}", c.on_layout(frame, now_ms));
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }
    println!(
        "done: extent={:.3} scroll_offset={:.1} bottom_padding={:.0}",
        c.sheet().extent(),
        c.sheet().scroll_offset(),
        c.bottom_padding()
    );
}
