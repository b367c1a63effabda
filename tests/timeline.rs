use craft_wasm::grid::{DotGrid, DotState, GridSize, SHOWCASES};
use craft_wasm::gradients::GRADIENTS;
use craft_wasm::onboard::{OnboardFlow, Phase, GREETINGS};
use craft_wasm::palette::ScrollingPalette;
use craft_wasm::Pattern;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn smoothed_dots_track_a_still_target() {
    // A pulse sampled at the same instant every frame is a fixed target.
    let mut grid = DotGrid::new(GridSize::Three, Pattern::Pulse);
    for _ in 0..200 {
        grid.tick(0.0);
    }
    let target = Pattern::Pulse.sample(0, 0, GridSize::Three, 0.0);
    for dot in grid.dots() {
        assert!((dot.opacity - target.opacity).abs() < 1e-6);
        assert!((dot.scale - target.scale).abs() < 1e-6);
    }
}

#[test]
fn every_showcase_animates_within_bounds_for_ten_seconds() {
    for showcase in &SHOWCASES {
        let mut grid = DotGrid::new(showcase.size, showcase.pattern);
        let mut moved = false;
        for frame in 0..600 {
            for dot in grid.tick(frame as f64 * FRAME_MS) {
                assert!((0.0..=1.0).contains(&dot.opacity), "{}", showcase.label());
                assert!((0.0..=1.0).contains(&dot.scale), "{}", showcase.label());
                moved |= *dot != DotState::IDLE;
            }
        }
        assert!(moved, "{} never left idle", showcase.label());
    }
}

#[test]
fn greeting_cycle_then_introduction() {
    let mut flow = OnboardFlow::new(0.0);
    let mut now = 0.0;
    let mut seen = vec![flow.greeting()];

    while seen.len() < GREETINGS.len() {
        now += FRAME_MS;
        if flow.tick(now) && flow.greeting() != *seen.last().unwrap() {
            seen.push(flow.greeting());
        }
    }
    assert_eq!(seen, GREETINGS.to_vec());

    flow.set_hovered(true, now);
    assert!(flow.click());
    let submitted_at = now;
    flow.submit("Grace", now).unwrap();

    while *flow.phase() != Phase::Greeting {
        now += FRAME_MS;
        flow.tick(now);
    }
    // 1.5 s to completion, 2 s more to reset; each lands on the next frame.
    let waited = now - submitted_at;
    assert!((3500.0..3500.0 + 2.0 * FRAME_MS).contains(&waited), "waited {waited}");
    assert_eq!(flow.greeting(), GREETINGS[GREETINGS.len() - 1]);
    assert!(!flow.is_hovered());
}

#[test]
fn scrolling_through_the_palette_visits_every_gradient_once() {
    let mut palette = ScrollingPalette::new(GRADIENTS.len());
    let mut visited = vec![palette.active()];
    for step in 0..=1000 {
        if let Some(index) = palette.update(step as f64 / 1000.0) {
            visited.push(index);
        }
    }
    assert_eq!(visited, (0..GRADIENTS.len()).collect::<Vec<_>>());
}
