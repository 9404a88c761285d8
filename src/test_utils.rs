//! Host-side fakes for the embedded-hal pins, delay and reset used in unit
//! tests.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
    sync::{Mutex, MutexGuard, Once},
};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};
use log::{LevelFilter, Log, Metadata, Record};

use crate::Reset;

/// Active-low button. Clones share the same state.
#[derive(Clone, Default)]
pub struct FakeInput {
    pressed: Rc<Cell<bool>>,
    press_at: Rc<Cell<Option<usize>>>,
    reads: Rc<Cell<usize>>,
}

impl FakeInput {
    pub fn released() -> Self {
        Self::default()
    }

    pub fn pressed() -> Self {
        let input = Self::default();
        input.press();
        input
    }

    /// Reads as pressed from the `n`th read on (0-based)
    pub fn pressed_from_read(n: usize) -> Self {
        let input = Self::default();
        input.press_at.set(Some(n));
        input
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
        self.press_at.set(None);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn sample(&self) -> bool {
        let n = self.reads.get();
        self.reads.set(n + 1);
        self.pressed.get() || self.press_at.get().is_some_and(|at| n >= at)
    }
}

impl ErrorType for FakeInput {
    type Error = Infallible;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.sample())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    DelayNs(u32),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    start_high: bool,
    high: bool,
}

/// Shared record of LED writes and delays, in call order
#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<State>>);

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn led(&self) -> RecordingLed {
        RecordingLed(self.clone())
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay(self.clone())
    }

    fn push(&self, event: Event) {
        let mut state = self.0.borrow_mut();
        match event {
            Event::High => state.high = true,
            Event::Low => state.high = false,
            Event::DelayNs(_) => {}
        }
        state.events.push(event);
    }

    /// Drain recorded events. Later measurements start from the current level.
    pub fn take(&self) -> Vec<Event> {
        let mut state = self.0.borrow_mut();
        state.start_high = state.high;
        std::mem::take(&mut state.events)
    }

    pub fn is_high(&self) -> bool {
        self.0.borrow().high
    }

    pub fn pin_events(&self) -> Vec<Event> {
        self.0
            .borrow()
            .events
            .iter()
            .copied()
            .filter(|e| !matches!(e, Event::DelayNs(_)))
            .collect()
    }

    pub fn delays(&self) -> usize {
        self.0
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, Event::DelayNs(_)))
            .count()
    }

    pub fn elapsed_us(&self) -> u32 {
        self.0
            .borrow()
            .events
            .iter()
            .map(|e| match e {
                Event::DelayNs(ns) => *ns,
                _ => 0,
            })
            .sum::<u32>()
            / 1_000
    }

    /// Time spent with the LED high
    pub fn high_us(&self) -> u32 {
        let state = self.0.borrow();
        let mut high = state.start_high;
        let mut ns = 0u32;
        for event in &state.events {
            match event {
                Event::High => high = true,
                Event::Low => high = false,
                Event::DelayNs(d) if high => ns += *d,
                Event::DelayNs(_) => {}
            }
        }
        ns / 1_000
    }
}

pub struct RecordingLed(Timeline);

impl ErrorType for RecordingLed {
    type Error = Infallible;
}

impl OutputPin for RecordingLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::High);
        Ok(())
    }
}

pub struct RecordingDelay(Timeline);

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }
}

/// Reset that unwinds instead of jumping to a bootloader
pub struct PanicReset;

impl Reset for PanicReset {
    fn reset(&mut self) -> ! {
        panic!("bootloader reset");
    }
}

/// Serializes tests that flip the process-wide `can_log` gate
static LOG_GATE: Mutex<()> = Mutex::new(());

pub fn lock_log_gate() -> MutexGuard<'static, ()> {
    LOG_GATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps each test thread's messages apart
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Install the capturing logger once and clear this thread's buffer
pub fn start_log_capture() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).expect("another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
}

/// Messages logged on this thread since [`start_log_capture`]
pub fn captured_logs() -> Vec<String> {
    CAPTURED.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}
