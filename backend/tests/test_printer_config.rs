//! Printer and filament construction tests
//!
//! The hourly rate is either given or derived once at construction.
//! Inputs that would make it NaN, infinite or negative are rejected with
//! `InvalidConfiguration` instead of leaking into cost queries.

use printcost_core::{Filament, NonPrintedPart, Printer, PrinterSpec, PricingError};

fn is_invalid_configuration<T>(result: Result<T, PricingError>) -> bool {
    matches!(result, Err(PricingError::InvalidConfiguration(_)))
}

#[test]
fn test_zero_repay_period_without_rate_is_rejected() {
    let spec = PrinterSpec::new("free printer", 220.0, 20.0).with_repay_period_hours(0.0);
    let err = Printer::from_spec(spec).unwrap_err();

    assert!(matches!(err, PricingError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("repay_period_hours"));
}

#[test]
fn test_negative_repay_period_is_rejected() {
    let spec = PrinterSpec::new("p", 220.0, 20.0).with_repay_period_hours(-10.0);
    assert!(is_invalid_configuration(Printer::from_spec(spec)));
}

#[test]
fn test_zero_repay_period_with_explicit_rate_is_accepted() {
    let spec = PrinterSpec::new("rented", 0.0, 20.0)
        .with_repay_period_hours(0.0)
        .with_price_per_hour(1.25);
    let printer = Printer::from_spec(spec).unwrap();

    assert_eq!(printer.price_per_hour(), 1.25);
    assert_eq!(printer.repay_period_hours(), 0.0);
}

#[test]
fn test_explicit_zero_rate_is_not_replaced_by_derived_rate() {
    let spec = PrinterSpec::new("borrowed", 220.0, 20.0).with_price_per_hour(0.0);
    let printer = Printer::from_spec(spec).unwrap();

    assert_eq!(printer.price_per_hour(), 0.0);
    assert!(Printer::new("owned", 220.0, 20.0).unwrap().price_per_hour() > 0.0);
}

#[test]
fn test_derived_rate() {
    let printer = Printer::new("Ender 5 Plus", 500.0, 125.0).unwrap();
    let expected = 500.0 / 2160.0 + (0.28 / 1000.0) * 125.0;
    assert!((printer.price_per_hour() - expected).abs() < 1e-12);
}

#[test]
fn test_rate_is_fixed_at_construction() {
    let spec = PrinterSpec::new("p", 220.0, 20.0);
    let printer = Printer::from_spec(spec.clone()).unwrap();
    let rate = printer.price_per_hour();

    // Changing the spec afterwards has no effect on the built printer.
    let _cheaper = Printer::from_spec(spec.with_price_per_watt(0.0)).unwrap();
    assert_eq!(printer.price_per_hour(), rate);
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    assert!(is_invalid_configuration(Printer::new("p", f64::NAN, 20.0)));
    assert!(is_invalid_configuration(Printer::new("p", 220.0, f64::INFINITY)));
    assert!(is_invalid_configuration(Printer::from_spec(
        PrinterSpec::new("p", 220.0, 20.0).with_price_per_hour(f64::NAN)
    )));
    assert!(is_invalid_configuration(Filament::new("f", f64::INFINITY)));
}

#[test]
fn test_negative_amounts_are_rejected() {
    assert!(is_invalid_configuration(Printer::new("p", -1.0, 20.0)));
    assert!(is_invalid_configuration(Printer::from_spec(
        PrinterSpec::new("p", 220.0, 20.0).with_price_per_hour(-0.1)
    )));
    assert!(is_invalid_configuration(Filament::new("f", -0.02)));
    assert!(is_invalid_configuration(NonPrintedPart::new("n", -5.0)));
}

#[test]
fn test_presets() {
    let ender3 = Printer::ender_3_pro();
    assert_eq!(ender3.initial_cost(), 220.0);
    assert_eq!(ender3.power_consumption(), 20.0);
    assert_eq!(ender3.repay_period_hours(), 2160.0);

    let ender5 = Printer::ender_5_plus();
    assert_eq!(ender5.initial_cost(), 500.0);
    assert_eq!(ender5.power_consumption(), 125.0);
    assert!(ender5.price_per_hour() > ender3.price_per_hour());

    assert_eq!(Filament::pla().price_per_gram(), 0.02);
    assert_eq!(Filament::abs().price_per_gram(), 0.009);
}

#[test]
fn test_printer_spec_round_trips_through_json() {
    let spec = PrinterSpec::new("Prusa", 800.0, 90.0).with_price_per_hour(0.4);
    let json = serde_json::to_string(&spec).unwrap();
    let restored: PrinterSpec = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, spec);
    assert_eq!(Printer::from_spec(restored).unwrap().price_per_hour(), 0.4);
}
