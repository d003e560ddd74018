//! Pins the power double count on printed parts
//!
//! A printer's hourly rate already contains `price_per_watt *
//! power_consumption`, and `power_cost()` charges the same electricity a
//! second time. `total_cost()` leaves the power figure out, so for printed
//! parts the four components sum to MORE than the total. Non-printed parts
//! (and assemblies built only from them) add up exactly.
//!
//! These tests fail if either side of that asymmetry changes.

use std::sync::Arc;

use printcost_core::{CostQueries, Filament, MultiPart, NonPrintedPart, Part, Printer};

#[test]
fn test_printed_part_components_exceed_total_by_power() {
    let printer = Arc::new(Printer::ender_3_pro());
    let part = Part::new("tower_main", Arc::new(Filament::pla()), printer.clone(), 53.0, 350.0).unwrap();

    let breakdown = part.breakdown();
    let excess = breakdown.sum() - part.total_cost();

    assert!(part.power_cost() > 0.0);
    assert!((excess - part.power_cost()).abs() < 1e-9);
    assert_eq!(part.total_cost(), part.material_cost() + part.printing_time_cost());
}

#[test]
fn test_hourly_rate_already_contains_power() {
    let printer = Printer::ender_3_pro();
    let amortized = printer.initial_cost() / printer.repay_period_hours();
    let power_per_hour = printer.price_per_watt() * printer.power_consumption();

    assert!((printer.price_per_hour() - (amortized + power_per_hour)).abs() < 1e-15);
}

#[test]
fn test_non_printed_components_equal_total() {
    let kit = MultiPart::new("electronics")
        .with_part(NonPrintedPart::new("LED", 5.0).unwrap())
        .with_part(NonPrintedPart::new("GU10 Lamp Socket", 6.0).unwrap());

    assert_eq!(kit.breakdown().sum(), kit.total_cost());
}

#[test]
fn test_zero_watt_printer_has_no_double_count() {
    let printer = Arc::new(Printer::new("hand crank", 100.0, 0.0).unwrap());
    let part = Part::new("p", Arc::new(Filament::abs()), printer, 4.0, 50.0).unwrap();

    assert_eq!(part.power_cost(), 0.0);
    assert_eq!(part.breakdown().sum(), part.total_cost());
}
