use signal_light_composer::color::{BLACK, PURPLE};
use signal_light_composer::{CommandInterpreter, Mode, Notice, SharedMode};

use crate::new_engine;

#[test]
fn left_scroll_round_trip_on_a_thirty_pixel_strip() {
    let shared = SharedMode::new();
    let interpreter = CommandInterpreter::new(&shared);
    let mut engine = new_engine::<30>(&shared);

    engine.render_frame();
    assert_eq!(engine.mode(), Mode::Rainbow);

    assert_eq!(interpreter.handle(b'l'), Some(Notice::ModeChanged(Mode::ScrollLeft)));
    assert_eq!(engine.mode(), Mode::ScrollLeft);
    assert_eq!(engine.effects().left.cursor(), 29);

    engine.render_frame();
    let frame = engine.driver().last().copied().unwrap_or([BLACK; 30]);
    for (index, pixel) in frame.iter().enumerate() {
        let expected = if index == 28 || index == 29 { PURPLE } else { BLACK };
        assert_eq!(*pixel, expected, "pixel {index}");
    }

    assert_eq!(interpreter.handle(b'L'), Some(Notice::ModeChanged(Mode::Rainbow)));
    assert_eq!(engine.mode(), Mode::Rainbow);
}

#[test]
fn line_endings_between_commands_do_nothing() {
    let shared = SharedMode::new();
    let interpreter = CommandInterpreter::new(&shared);

    let notices: Vec<Notice> = b"s\r\nz\ns\r\n"
        .iter()
        .filter_map(|byte| interpreter.handle(*byte))
        .collect();

    assert_eq!(
        notices,
        [
            Notice::ModeChanged(Mode::Stop),
            Notice::Unrecognized(b'z'),
            Notice::ModeChanged(Mode::Rainbow),
        ]
    );
}
