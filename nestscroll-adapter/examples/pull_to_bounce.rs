use nestscroll::ScrollState;
use nestscroll_adapter::GestureCoordinator;

fn main() {
    // Example: pulling the outer region past its top and letting go.
    //
    // Each drag step is attenuated more the further the region already hangs past the top,
    // and the release springs it back to 0 without a fling.
    let mut outer = ScrollState::new(0.0, 3_000.0, 300.0);
    let mut inner = ScrollState::new(0.0, 20_000.0, 300.0).with_origin(200.0);

    // Host-owned regions can be borrowed for the duration of the gesture.
    let mut c = GestureCoordinator::new(&mut outer, &mut inner);
    c.begin();
    for step in 1..=8 {
        let d = c.change(25.0);
        println!(
            "pull step={step}: applied={:.2} outer={:.2} rubber_banded={}",
            d.outer_delta,
            c.outer().offset,
            d.rubber_banded
        );
    }
    c.end(900.0);
    println!("released: behavior={:?}", c.active_behavior());

    // Fixed 60 Hz frames.
    let mut frames = 0;
    while let Some(r) = c.tick(1.0 / 60.0) {
        frames += 1;
        if frames % 5 == 0 || r.terminated {
            println!("frame={frames} motion={:?} outer={:.2}", r.motion, c.outer().offset);
        }
    }
    println!("final: outer={} inner={}", outer.offset, inner.offset);
}
