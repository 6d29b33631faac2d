//! Scenarios run against every calculator driver
//!
//! The same key sequences go through the bare engine and through the TUI
//! application; both must agree on what the displays show.

#![allow(clippy::unwrap_used)]

use deskcalc::driver::{self, CalculatorDriver, HeadlessDriver};
use deskcalc::input::InputEvent;

#[cfg(feature = "tui")]
use deskcalc::driver::TuiDriver;

fn assert_scenario<D: CalculatorDriver>(driver: &mut D, keys: &str, total: &str, current: &str) {
    driver.press(InputEvent::Clear);
    driver.press_keys(keys).unwrap();
    assert_eq!(driver.total_display(), total, "total after {keys:?}");
    assert_eq!(driver.current_display(), current, "current after {keys:?}");
}

const SCENARIOS: &[(&str, &str, &str)] = &[
    // (keys, total display, current display)
    ("3.1.", "", "3.1"),
    ("*", "", ""),
    ("-", " − ", ""),
    ("-5=", "", "-5"),
    ("7+3=", "", "10"),
    ("8/0=", "", "Can't divid"),
    ("5+=", "", "Error"),
    ("4n", "", "-4"),
    ("4.5n", "", "-4.5"),
    ("9nr", "", "Error"),
    ("12b", "", "1"),
    ("b", "", ""),
    ("123456789012", "", "12345678901"),
    ("2+3*4=", "", "14"),
    ("8-3-2=", "", "3"),
    ("16/4/2=", "", "2"),
    ("5+4n*", "5 +  − 4 × ", ""),
    ("5+4n*2=", "", "-3"),
    ("0.1+0.2=", "", "0.300000000"),
    ("1i", "", "1"),
    ("4i", "", "0.25"),
    ("200%", "", "2"),
    ("8/0=7", "", "7"),
    ("5+=+", " + ", ""),
    ("8/0=b", "", ""),
    ("7+3=2", "", "102"),
];

fn run_table<D: CalculatorDriver>(driver: &mut D) {
    for (keys, total, current) in SCENARIOS {
        assert_scenario(driver, keys, total, current);
    }
}

// ===== Headless =====

#[test]
fn headless_scenario_table() {
    run_table(&mut HeadlessDriver::new());
}

#[test]
fn headless_all_scenarios() {
    driver::run_all_scenarios(&mut HeadlessDriver::new());
}

// ===== TUI =====

#[cfg(feature = "tui")]
#[test]
fn tui_scenario_table() {
    run_table(&mut TuiDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn tui_all_scenarios() {
    driver::run_all_scenarios(&mut TuiDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn drivers_agree_on_snapshots() {
    for (keys, _, _) in SCENARIOS {
        let mut headless = HeadlessDriver::new();
        let mut tui = TuiDriver::new();
        headless.press_keys(keys).unwrap();
        tui.press_keys(keys).unwrap();
        assert_eq!(headless.snapshot(), tui.snapshot(), "keys {keys:?}");
    }
}
