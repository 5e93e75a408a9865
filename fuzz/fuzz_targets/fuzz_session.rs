#![no_main]

use libfuzzer_sys::fuzz_target;

use fibscroll_core::{Direction, InputSource, NavKey, Session, WidgetConfig};

fuzz_target!(|data: &[u8]| {
    let config = WidgetConfig::default();
    let Ok(mut session) = Session::new(&config) else {
        return;
    };
    let mut now = 0u64;

    // Each byte pair is one input: opcode, then an argument
    for chunk in data.chunks_exact(2) {
        let (op, arg) = (chunk[0], chunk[1]);
        let direction = if arg % 2 == 0 { Direction::Up } else { Direction::Down };
        let key = if arg % 2 == 0 { NavKey::ArrowUp } else { NavKey::ArrowDown };
        match op % 9 {
            0 => {
                session.step(direction);
            }
            1 => {
                session.wheel(f64::from(arg) - 128.0);
            }
            2 => {
                session.press(InputSource::Key(key), direction);
            }
            3 => session.release(InputSource::Key(key)),
            4 => {
                session.press(InputSource::Pointer, direction);
            }
            5 => session.release(InputSource::Pointer),
            6 => session.begin_gesture(f64::from(arg) * 4.0, now),
            7 => {
                session.end_gesture(f64::from(arg) * 4.0, now);
            }
            _ => {
                now += u64::from(arg) * 10;
                session.advance_to(now);
            }
        }
        assert!(session.cursor() >= config.min_position);
        assert_eq!(session.frame().cursor, session.cursor());
        let terms = session.frame().entries.iter().filter_map(|e| e.as_term()).count();
        assert_eq!(terms, config.window_size);
    }
});
