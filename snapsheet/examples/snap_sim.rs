// Example: adapter-supplied interpolation driving a sheet through drag, snap and collapse.
use snapsheet::{Easing, Interpolation, Progress, Sheet, SheetOptions};

#[derive(Clone, Copy, Debug, Default)]
struct Lerp {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
    active: bool,
}

impl Interpolation for Lerp {
    fn start(&mut self, begin: f32, end: f32, duration_ms: u64, easing: Easing, now_ms: u64) {
        debug_assert_eq!(easing, Easing::Linear);
        *self = Self {
            from: begin,
            to: end,
            start_ms: now_ms,
            duration_ms: duration_ms.max(1),
            active: true,
        };
    }

    fn advance(&mut self, now_ms: u64) -> Progress {
        if !self.active {
            return Progress::Idle;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return Progress::Completed(self.to);
        }
        let t = elapsed as f32 / self.duration_ms as f32;
        Progress::Running(self.from + (self.to - self.from) * t)
    }

    fn reset(&mut self) {
        self.active = false;
    }

    fn is_running(&self) -> bool {
        self.active
    }
}

fn main() {
    let options = SheetOptions::collapsible()
        .with_anchors([0.25, 0.75])
        .with_on_dismiss(|| println!("dismissed"));
    let mut sheet = Sheet::<Lerp>::new(options).expect("valid options");
    sheet.set_viewport_height(800.0);

    // Drag up by 120px (15%) and release: past 20% of the way to 0.75, so it moves on.
    sheet.drag_start();
    for _ in 0..6 {
        sheet.drag_update(-20.0);
    }
    sheet.drag_end(-900.0, 0);
    println!(
        "released at {:.3}, settling toward {:?}",
        sheet.extent(),
        sheet.target_anchor()
    );

    let mut now_ms = 0u64;
    while sheet.tick(now_ms) {
        now_ms += 16;
        println!("t={now_ms}ms extent={:.3}", sheet.extent());
    }

    // Drag all the way down: the sheet collapses and asks to be removed.
    sheet.drag_start();
    sheet.drag_update(800.0);
    sheet.drag_end(1200.0, now_ms);
    println!(
        "closing={} pop_requested={}",
        sheet.is_closing(),
        sheet.take_pop_request()
    );
    sheet.teardown();
}
