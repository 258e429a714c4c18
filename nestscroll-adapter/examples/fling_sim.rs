use nestscroll::ScrollState;
use nestscroll_adapter::{GestureCoordinator, GestureEvent, PanTracker};

fn main() {
    // Example: an upward flick that fills the outer headroom and hands the rest to the inner view.
    //
    // An adapter would:
    // - forward the recognizer's began/changed/ended events
    // - call tick_at(now_ms) from its frame callback while needs_tick() is true
    // - disable the inner view's own touches while inner_interaction_enabled() is false
    let outer = ScrollState::new(100.0, 3_000.0, 600.0);
    let inner = ScrollState::new(0.0, 20_000.0, 600.0).with_origin(400.0);
    let mut c = GestureCoordinator::new(outer, inner);

    // The recognizer reports cumulative translation; PanTracker turns it into increments.
    let mut pan = PanTracker::new();
    c.handle(GestureEvent::Began);
    for total in [-20.0, -60.0, -120.0] {
        c.handle(pan.changed(total));
        println!(
            "drag total={total}: outer={} inner={}",
            c.outer().offset,
            c.inner().offset
        );
    }
    c.handle(GestureEvent::Ended { velocity: -2_000.0 });

    let mut now_ms = 0u64;
    let mut frames = 0;
    while let Some(r) = c.tick_at(now_ms) {
        frames += 1;
        if frames % 30 == 0 || r.terminated {
            println!(
                "frame={frames} kind={:?} outer={:.2} inner={:.2} inner_touch={}",
                r.kind,
                c.outer().offset,
                c.inner().offset,
                c.inner_interaction_enabled()
            );
        }
        now_ms += 16;
    }
    println!("settled: phase={:?} frames={frames}", c.phase());
}
