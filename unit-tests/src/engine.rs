use embassy_futures::block_on;
use embassy_time::Instant;
use signal_light_composer::color::{AMBER, BLACK, Hsv, RED, WHITE, hsv2rgb};
use signal_light_composer::processor::TYPICAL_LED_STRIP;
use signal_light_composer::{ColorCorrection, EffectSet, Mode, Rgb, SharedMode};

use crate::new_engine;

const LEDS: usize = 30;

fn rainbow_pixel(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 240,
        val: 255,
    })
}

#[test]
fn rainbow_rotates_base_hue_by_one_per_frame() {
    let shared = SharedMode::new();
    let mut engine = new_engine::<LEDS>(&shared);

    for frame in 0..300u32 {
        let expected = (frame % 256) as u8;
        assert_eq!(engine.effects().rainbow.base_hue(), expected);
        let delay = engine.render_frame();
        assert_eq!(delay.as_millis(), 50);
        assert_eq!(engine.frame()[0], rainbow_pixel(expected));
        assert_eq!(engine.frame()[1], rainbow_pixel(expected.wrapping_add(5)));
    }
    assert_eq!(engine.effects().rainbow.base_hue(), (300 % 256) as u8);
}

#[test]
fn blink_modes_alternate_edges_and_keep_the_interior() {
    let blink_state = |effects: &EffectSet, mode: Mode| match mode {
        Mode::ReverseBlink => effects.reverse.is_lit(),
        _ => effects.hazard.is_lit(),
    };

    for (mode, color) in [(Mode::ReverseBlink, WHITE), (Mode::IntermittentBlink, AMBER)] {
        let shared = SharedMode::new();
        let mut engine = new_engine::<40>(&shared);

        engine.render_frame();
        let rainbow = *engine.frame();

        shared.set(mode);
        assert!(!blink_state(engine.effects(), mode));
        for step in 0..4 {
            assert_eq!(engine.render_frame().as_millis(), 500);
            let lit = blink_state(engine.effects(), mode);
            assert_eq!(lit, step % 2 == 0);

            let frame = engine.frame();
            let expected = if lit { color } else { BLACK };
            assert!(frame[..15].iter().all(|p| *p == expected));
            assert!(frame[25..].iter().all(|p| *p == expected));
            assert_eq!(frame[15..25], rainbow[15..25]);
        }
    }
}

#[test]
fn scroll_left_cursor_walks_down_and_wraps() {
    let shared = SharedMode::with_mode(Mode::ScrollLeft);
    let mut engine = new_engine::<LEDS>(&shared);

    let mut visited = Vec::new();
    for _ in 0..=LEDS {
        visited.push(engine.effects().left.cursor());
        assert_eq!(engine.render_frame().as_millis(), 100);
    }

    let expected: Vec<usize> = (0..LEDS).rev().chain([LEDS - 1]).collect();
    assert_eq!(visited, expected);
}

#[test]
fn scroll_right_cursor_walks_up_and_wraps() {
    let shared = SharedMode::with_mode(Mode::ScrollRight);
    let mut engine = new_engine::<LEDS>(&shared);

    let mut visited = Vec::new();
    for _ in 0..=LEDS {
        visited.push(engine.effects().right.cursor());
        engine.render_frame();
        let lit = engine.frame().iter().filter(|p| **p != BLACK).count();
        assert_eq!(lit, 2);
    }

    let expected: Vec<usize> = (0..LEDS).chain([0]).collect();
    assert_eq!(visited, expected);
}

#[test]
fn scroll_right_wraps_the_trailing_pixel() {
    let shared = SharedMode::with_mode(Mode::ScrollRight);
    let mut engine = new_engine::<LEDS>(&shared);

    for _ in 0..LEDS {
        engine.render_frame();
    }
    let frame = engine.frame();
    assert_ne!(frame[LEDS - 1], BLACK);
    assert_ne!(frame[0], BLACK);
}

#[test]
fn stop_is_stable_and_blacks_out_the_interior() {
    let shared = SharedMode::new();
    let mut engine = new_engine::<40>(&shared);
    engine.render_frame();

    shared.set(Mode::Stop);
    assert_eq!(engine.render_frame().as_millis(), 500);
    let first = *engine.frame();
    assert!(first[..15].iter().all(|p| *p == RED));
    assert!(first[25..].iter().all(|p| *p == RED));
    assert!(first[15..25].iter().all(|p| *p == BLACK));

    for _ in 0..3 {
        engine.render_frame();
        assert_eq!(*engine.frame(), first);
    }
}

#[test]
fn mode_state_survives_switching_away() {
    let shared = SharedMode::with_mode(Mode::ScrollRight);
    let mut engine = new_engine::<LEDS>(&shared);

    for _ in 0..3 {
        engine.render_frame();
    }
    shared.set(Mode::Rainbow);
    engine.render_frame();
    engine.render_frame();
    shared.set(Mode::ScrollRight);

    assert_eq!(engine.effects().right.cursor(), 3);
    assert_eq!(engine.effects().rainbow.base_hue(), 2);
    assert_eq!(engine.effects().left.cursor(), LEDS - 1);
}

#[test]
fn short_strip_edges_are_clamped() {
    let shared = SharedMode::with_mode(Mode::Stop);
    let mut engine = new_engine::<12>(&shared);
    engine.render_frame();
    assert!(engine.frame().iter().all(|p| *p == RED));

    shared.set(Mode::ReverseBlink);
    engine.render_frame();
    assert!(engine.frame().iter().all(|p| *p == WHITE));
    engine.render_frame();
    assert!(engine.frame().iter().all(|p| *p == BLACK));
}

#[test]
fn color_correction_applies_to_output_only() {
    let shared = SharedMode::with_mode(Mode::ReverseBlink);
    let mut engine = new_engine::<LEDS>(&shared)
        .with_color_correction(ColorCorrection::from_rgb(TYPICAL_LED_STRIP));

    engine.render_frame();
    assert_eq!(engine.frame()[0], WHITE);
    let written = engine.driver().last().copied().unwrap_or([BLACK; LEDS]);
    assert_eq!(written[0], Rgb { r: 255, g: 176, b: 240 });
}

#[test]
fn every_render_is_written_once() {
    let shared = SharedMode::new();
    let mut engine = new_engine::<LEDS>(&shared);

    for mode in Mode::ALL {
        shared.set(mode);
        engine.render_frame();
    }
    assert_eq!(engine.driver().frames().len(), Mode::ALL.len());

    engine.clear();
    assert_eq!(engine.driver().clears(), 1);
    assert_eq!(*engine.frame(), [BLACK; LEDS]);
    assert_eq!(engine.driver().last(), Some(&[BLACK; LEDS]));
}

#[test]
fn tick_writes_one_frame_then_sleeps_for_the_mode_delay() {
    for (mode, delay_ms) in [(Mode::Rainbow, 50), (Mode::ScrollRight, 100), (Mode::Stop, 500)] {
        let shared = SharedMode::with_mode(mode);
        let mut engine = new_engine::<LEDS>(&shared);

        let started = Instant::now();
        block_on(engine.tick());
        let elapsed = started.elapsed();

        assert_eq!(engine.driver().frames().len(), 1);
        assert!(
            elapsed.as_millis() >= delay_ms,
            "{mode:?} slept {}ms",
            elapsed.as_millis()
        );
    }
}
