//! Concurrent tick and client access.
//!
//! A ticker thread hammers the engine while readers snapshot it.  Every
//! snapshot must be a state the engine actually passed through, never a
//! mix of two.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use gpiocounter::app::ports::ButtonLevels;
use gpiocounter::app::service::CounterService;
use gpiocounter::control::device::CounterDevice;
use gpiocounter::counter::{Direction, Period, RunState};

use super::mock_hw::{MockDisplay, RecordingSink, ScriptedButtons};

const TICKS: usize = 2000;

type Key = (u8, Direction, RunState);

fn script() -> Vec<ButtonLevels> {
    let l = |run, up| ButtonLevels { run, up };
    vec![
        l(true, true),
        l(true, true),
        l(true, false),
        l(false, false),
        l(true, false),
        l(true, true),
        l(false, true),
    ]
}

#[test]
fn readers_only_see_whole_states() {
    let svc = Arc::new(CounterService::new(
        15,
        Period::DEFAULT,
        ScriptedButtons::new(script()),
        MockDisplay::default(),
    ));
    let initial = svc.snapshot();
    let done = Arc::new(AtomicBool::new(false));

    let ticker = {
        let svc = Arc::clone(&svc);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut sink = RecordingSink::new();
            let mut seen: Vec<Key> = Vec::new();
            for _ in 0..TICKS {
                let s = svc.tick(&mut sink);
                let key = (s.value, s.direction, s.run_state);
                if !seen.contains(&key) {
                    seen.push(key);
                }
            }
            done.store(true, Ordering::Release);
            seen
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let svc = Arc::clone(&svc);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut seen: Vec<Key> = Vec::new();
                while !done.load(Ordering::Acquire) {
                    let s = svc.snapshot();
                    assert!((1..=15).contains(&s.value), "value {} escaped", s.value);
                    let key = (s.value, s.direction, s.run_state);
                    if !seen.contains(&key) {
                        seen.push(key);
                    }
                }
                seen
            })
        })
        .collect();

    let mut produced = ticker.join().unwrap();
    produced.push((initial.value, initial.direction, initial.run_state));

    for reader in readers {
        for key in reader.join().unwrap() {
            assert!(produced.contains(&key), "torn snapshot {key:?}");
        }
    }
}

#[test]
fn status_reads_stay_well_formed_under_ticks() {
    let svc = Arc::new(CounterService::new(
        15,
        Period::DEFAULT,
        ScriptedButtons::new(script()),
        MockDisplay::default(),
    ));
    let dev = CounterDevice::new(Arc::clone(&svc));
    let done = Arc::new(AtomicBool::new(false));

    let ticker = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut sink = RecordingSink::new();
            for _ in 0..TICKS {
                svc.tick(&mut sink);
            }
            done.store(true, Ordering::Release);
        })
    };

    let mut reads = 0;
    while !done.load(Ordering::Acquire) || reads == 0 {
        let mut file = dev.open();
        let mut out = Vec::new();
        dev.read_to(&mut file, &mut out).unwrap();
        dev.release(file);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4, "report: {text:?}");
        assert!(lines[0].starts_with("Counter Value:     "));
        assert_eq!(lines[1], "Counter Period:    1.0 sec");
        assert!(matches!(
            lines[2],
            "Counter Direction: Up" | "Counter Direction: Down"
        ));
        assert!(matches!(
            lines[3],
            "Counter State:     Running" | "Counter State:     Stopped"
        ));
        reads += 1;
    }

    ticker.join().unwrap();
}

#[test]
fn concurrent_writers_leave_a_valid_value() {
    let svc = Arc::new(CounterService::new(
        15,
        Period::DEFAULT,
        ScriptedButtons::new(script()),
        MockDisplay::default(),
    ));
    let dev = CounterDevice::new(Arc::clone(&svc));

    let writers: Vec<_> = [b"v3", b"v9", b"f2", b"f8"]
        .into_iter()
        .map(|cmd| {
            let dev = dev.clone();
            thread::spawn(move || {
                let mut sink = RecordingSink::new();
                for _ in 0..200 {
                    let mut file = dev.open();
                    dev.write(&mut file, cmd, &mut sink).unwrap();
                }
            })
        })
        .collect();

    for w in writers {
        w.join().unwrap();
    }

    let s = svc.snapshot();
    assert!(s.value == 3 || s.value == 9);
    assert!(s.period == Period::Ms1000 || s.period == Period::Ms4000);
}
