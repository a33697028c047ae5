use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use snapsheet::{
    Easing, FieldRect, GestureMode, Interpolation, KEYBOARD_PADDING_MS, LayoutFrame, Progress,
    SheetOptions,
};

fn layout(viewport_height: f32) -> LayoutFrame {
    LayoutFrame {
        viewport_height,
        keyboard_inset: 0.0,
        focused_field: None,
    }
}

#[test]
fn tween_samples_linearly_and_clamps() {
    let tween = Tween::new(0.0, 100.0, 1_000, 200, Easing::Linear);
    assert_eq!(tween.sample(0), 0.0);
    assert_eq!(tween.sample(1_050), 25.0);
    assert_eq!(tween.sample(1_400), 100.0);
    assert!(!tween.is_done(1_199));
    assert!(tween.is_done(1_200));

    let instant = Tween::new(1.0, 0.0, 0, 0, Easing::Linear);
    assert_eq!(instant.duration_ms, 1);
    assert!(instant.is_done(1));
}

#[test]
fn tweener_reports_completion_until_reset() {
    let mut tweener = Tweener::default();
    assert_eq!(tweener.advance(0), Progress::Idle);
    assert!(tweener.tween().is_none());

    tweener.start(0.5, 1.0, 200, Easing::Linear, 1_000);
    assert!(tweener.is_running());
    assert_eq!(tweener.advance(1_100), Progress::Running(0.75));
    assert_eq!(tweener.advance(1_200), Progress::Completed(1.0));
    assert_eq!(tweener.advance(1_300), Progress::Completed(1.0));

    tweener.reset();
    assert!(!tweener.is_running());
    assert_eq!(tweener.advance(1_400), Progress::Idle);
}

#[test]
fn controller_drag_snaps_with_tweens() {
    let mut c = Controller::new(SheetOptions::new().with_anchors([0.25])).unwrap();
    c.on_viewport_size(1000.0);
    assert_eq!(c.extent_px(), 500.0);
    assert_eq!(c.tick(0), None);

    c.on_pointer_down(500.0, 0);
    assert!(c.is_dragging());
    assert_eq!(c.on_pointer_move(400.0, 16), Some(GestureMode::Resize));
    assert_eq!(c.on_pointer_move(300.0, 32), Some(GestureMode::Resize));
    let velocity = c.on_pointer_up(40).unwrap();
    assert_eq!(velocity, -6250.0);
    assert!(!c.is_dragging());

    assert_eq!(c.sheet().target_anchor(), Some(1.0));
    let mut last = c.sheet().extent();
    let mut now_ms = 40;
    while let Some(extent) = c.tick(now_ms) {
        assert!(extent >= last);
        last = extent;
        now_ms += 16;
    }
    assert_eq!(c.sheet().extent(), 1.0);
    assert_eq!(c.sheet().current_anchor(), 1.0);
    assert_eq!(c.extent_px(), 1000.0);
}

#[test]
fn controller_ignores_moves_without_pointer_down() {
    let mut c = Controller::new(SheetOptions::new()).unwrap();
    c.on_viewport_size(1000.0);
    assert_eq!(c.on_pointer_move(100.0, 0), None);
    assert_eq!(c.on_pointer_up(0), None);
    assert_eq!(c.sheet().extent(), 0.5);
}

#[test]
fn pointer_down_cancels_settle_animation() {
    let mut c = Controller::new(SheetOptions::new().with_anchors([0.75])).unwrap();
    c.on_viewport_size(1000.0);
    c.sheet_mut().animate_to_anchor(1.0, 0);
    c.tick(100);
    assert!(c.is_animating());

    c.on_pointer_down(0.0, 120);
    assert!(!c.is_animating());
    assert_eq!(c.sheet().extent(), 0.75);
}

#[test]
fn controller_drag_to_close_requests_pop_once() {
    let dismissed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&dismissed);
    let options = SheetOptions::collapsible().with_on_dismiss(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let mut c = Controller::new(options).unwrap();
    c.on_layout(layout(800.0), 0);

    c.on_pointer_down(400.0, 0);
    c.on_pointer_move(700.0, 16);
    c.on_pointer_move(900.0, 32);
    c.on_pointer_up(48);

    assert_eq!(c.sheet().extent(), 0.0);
    assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    assert!(c.take_pop_request());
    assert!(!c.take_pop_request());
    c.teardown();
    assert!(c.sheet().is_torn_down());
}

#[test]
fn controller_keyboard_scroll_runs_from_tick() {
    let mut c = Controller::new(SheetOptions::new().with_init_extent(1.0)).unwrap();
    let frame = LayoutFrame {
        viewport_height: 800.0,
        keyboard_inset: 300.0,
        focused_field: Some(FieldRect {
            top: 560.0,
            height: 40.0,
        }),
    };
    c.on_layout(frame, 0);
    assert!(c.sheet().has_pending_scroll());

    let mut now_ms = 0;
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }
    assert_eq!(c.sheet().scroll_offset(), 110.0);
}

#[test]
fn controller_ignores_drags_before_viewport_is_known() {
    let mut c = Controller::new(SheetOptions::new()).unwrap();
    c.on_pointer_down(500.0, 0);
    assert_eq!(c.on_pointer_move(450.0, 16), None);
    assert_eq!(c.sheet().scroll_offset(), 0.0);
    assert_eq!(c.sheet().extent(), 0.5);
}

#[test]
fn keyboard_padding_eases_toward_inset() {
    let mut c = Controller::new(SheetOptions::new().with_init_extent(1.0)).unwrap();
    let mut frame = layout(800.0);
    frame.keyboard_inset = 300.0;
    c.on_layout(frame, 0);
    assert_eq!(c.bottom_padding(), 0.0);
    assert!(c.is_animating());

    c.tick(KEYBOARD_PADDING_MS / 2);
    assert_eq!(c.bottom_padding(), 150.0);
    c.tick(KEYBOARD_PADDING_MS);
    assert_eq!(c.bottom_padding(), 300.0);
    assert_eq!(c.tick(KEYBOARD_PADDING_MS + 16), None);

    // Same inset again: nothing to animate.
    c.on_layout(frame, 200);
    assert!(!c.is_animating());

    frame.keyboard_inset = 0.0;
    c.on_layout(frame, 300);
    c.tick(300 + KEYBOARD_PADDING_MS / 4);
    assert_eq!(c.bottom_padding(), 225.0);
    while c.tick(400).is_some() {}
    assert_eq!(c.bottom_padding(), 0.0);
}

#[test]
fn sections_pin_header_and_clip_its_height() {
    let mut sheet = snapsheet::Sheet::<Tweener>::new(
        SheetOptions::new()
            .with_init_extent(1.0)
            .with_header_extent(48.0, 96.0),
    )
    .unwrap();
    sheet.set_scroll_offset(30.0);

    let content: SheetContent<Vec<&'static str>, String> = SheetContent::sections(
        |log: &mut Vec<&'static str>, extent| {
            log.push("header");
            format!("header@{extent}")
        },
        |log: &mut Vec<&'static str>, extent| {
            log.push("body");
            format!("body@{extent}")
        },
    );
    let mut log = Vec::new();
    assert_eq!(
        content.build(&mut log, &sheet),
        SheetLayout::Sections {
            header: "header@1".to_string(),
            header_height: Some(66.0),
            body: "body@1".to_string(),
        }
    );
    assert_eq!(log, ["header", "body"]);

    sheet.set_scroll_offset(500.0);
    let SheetLayout::Sections { header_height, .. } = content.clone().build(&mut log, &sheet)
    else {
        panic!("expected sections");
    };
    assert_eq!(header_height, Some(48.0));
}

#[test]
fn full_builder_replaces_default_layout() {
    let mut sheet = snapsheet::Sheet::<Tweener>::new(SheetOptions::new()).unwrap();
    sheet.set_scroll_offset(12.0);
    let content: SheetContent<(), (f32, f32)> =
        SheetContent::full(|_, scroll, extent| (scroll.offset(), extent));
    assert_eq!(content.build(&mut (), &sheet), SheetLayout::Full((12.0, 0.5)));
}
