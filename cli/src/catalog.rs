//! Sample catalog: two desk lights priced on the stock presets

use std::sync::Arc;

use printcost_core::{Filament, MultiPart, NonPrintedPart, Part, PricedItem, PricingError, Printer};

/// Messeturm (1:750 tower lamp) and Stonks (meme sign lamp)
pub fn sample_catalog() -> Result<Vec<PricedItem>, PricingError> {
    let pla = Arc::new(Filament::pla());
    let abs = Arc::new(Filament::abs());
    let ender3 = Arc::new(Printer::ender_3_pro());
    let ender5 = Arc::new(Printer::ender_5_plus());

    let messeturm = MultiPart::new("Messeturm")
        .with_part(Part::new("tower_main", pla.clone(), ender3.clone(), 2.0 * 24.0 + 5.0, 350.0)?)
        .with_part(Part::new("socket_pos", abs.clone(), ender3.clone(), 21.0, 350.0)?)
        .with_part(Part::new("socket_neg", abs.clone(), ender3.clone(), 20.0, 350.0)?)
        .with_part(Part::new("spire", pla.clone(), ender3.clone(), 6.0, 80.0)?)
        .with_part(NonPrintedPart::new("LED", 5.0)?)
        .with_part(NonPrintedPart::new("GU10 Lamp Socket", 6.0)?)
        .with_attribute("scale", "1:750")
        .with_attribute("type", "desk_light");

    let stonks = MultiPart::new("Stonks")
        .with_part(Part::new("frame", abs, ender5, 21.0, 311.0)?)
        .with_part(
            Part::new("background", pla.clone(), ender3.clone(), 5.0, 20.0)?.with_attribute("color", "blue"),
        )
        .with_part(Part::new("arrow", pla.clone(), ender3.clone(), 3.0, 20.0)?.with_attribute("color", "red"))
        .with_part(
            Part::new("stonks_guy", pla.clone(), ender3.clone(), 9.0, 40.0)?.with_attribute("color", "black"),
        )
        .with_part(Part::new("text_plate", pla, ender3, 6.0, 30.0)?.with_attribute("color", "white"))
        .with_part(NonPrintedPart::new("LED", 5.0)?)
        .with_part(NonPrintedPart::new("GU10 Lamp Socket", 6.0)?)
        .with_attribute("type", "desk_light");

    Ok(vec![messeturm.into(), stonks.into()])
}
