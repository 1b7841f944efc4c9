use customs_core::{
    AlcoholType, CommodityCategory, CustomsEngine, Declaration,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Helpers
// ===========================================================================

fn alcohol_declaration(
    product: &str,
    kind: AlcoholType,
    volume_ml: Decimal,
    strength: Decimal,
    quantity: u32,
    cif: Decimal,
) -> Declaration {
    Declaration {
        product: product.to_string(),
        category: CommodityCategory::Alcohol(kind),
        cif_value: cif,
        country_of_origin: "Various".to_string(),
        volume_ml_per_unit: Some(volume_ml),
        strength_pct: Some(strength),
        quantity: Some(quantity),
        engine_size_cc: None,
        model_year: None,
        has_liquor_license: false,
        is_first_time_owner: false,
        is_returning_resident: false,
        has_disability_exemption: false,
        is_antique: false,
        used_tire_count: 0,
    }
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_spirits_reference_case() {
    // 12 x 750 mL of rum at 40% ABV, CIF $540. Proof-gallon billing:
    // 9 L -> 1.98 IG -> 70 proof -> 1.386 PG at $15/PG, no ad valorem duty.
    let engine = CustomsEngine::with_default_schedule();
    let decl = alcohol_declaration(
        "Bacardi Superior Rum",
        AlcoholType::Spirits,
        dec!(750),
        dec!(40),
        12,
        dec!(540),
    );
    let output = engine.calculate(&decl).unwrap();
    let b = &output.result;

    assert_eq!(b.total_volume_litres, Some(dec!(9.000)));
    assert_eq!(b.imperial_gallons, Some(dec!(1.980)));
    assert_eq!(b.proof_gallons, Some(dec!(1.386)));
    assert_eq!(b.pure_alcohol_litres, Some(dec!(3.600)));
    assert_eq!(b.import_duty, dec!(0));
    assert_eq!(b.import_duty_rate_display, "0%");
    assert_eq!(b.excise_levy, dec!(20.79));
    assert_eq!(b.excise_calculation, "1.386 PG x $15.00/proof gallon");
    assert_eq!(b.fees, dec!(0));
    assert_eq!(b.vat, dec!(56.08));
    assert_eq!(b.total_landed_cost, dec!(616.87));
    assert!(b.requires_permit);
    assert_eq!(b.hs_code, "2208.40");
}

#[test]
fn test_beer_reference_case() {
    // 24 x 330 mL at 5%, CIF $48: malt billing combines a gallonage charge
    // with an ad valorem component.
    let engine = CustomsEngine::with_default_schedule();
    let decl = alcohol_declaration(
        "Heineken Beer",
        AlcoholType::Beer,
        dec!(330),
        dec!(5),
        24,
        dec!(48),
    );
    let output = engine.calculate(&decl).unwrap();
    let b = &output.result;

    assert_eq!(b.import_duty, dec!(16.80));
    assert_eq!(b.excise_levy, dec!(11.77));
    assert_eq!(b.vat, dec!(7.66));
    assert_eq!(b.total_landed_cost, dec!(84.23));
    assert!(!b.requires_permit);
}

#[test]
fn test_wine_reference_case() {
    let engine = CustomsEngine::with_default_schedule();
    let decl = alcohol_declaration(
        "Chardonnay White Wine",
        AlcoholType::Wine,
        dec!(750),
        dec!(13),
        6,
        dec!(120),
    );
    let output = engine.calculate(&decl).unwrap();
    let b = &output.result;

    assert_eq!(b.import_duty, dec!(42.00));
    assert_eq!(b.excise_levy, dec!(18.00));
    assert_eq!(b.vat, dec!(18.00));
    assert_eq!(b.total_landed_cost, dec!(198.00));
    assert_eq!(b.hs_code, "2204.21");
}

#[test]
fn test_licensed_liqueur_pays_processing_fee() {
    let engine = CustomsEngine::with_default_schedule();
    let mut decl = alcohol_declaration(
        "Baileys Irish Cream",
        AlcoholType::Liqueur,
        dec!(750),
        dec!(17),
        4,
        dec!(160),
    );
    decl.has_liquor_license = true;
    let output = engine.calculate(&decl).unwrap();
    let b = &output.result;

    assert_eq!(b.import_duty, dec!(72.00));
    assert_eq!(b.excise_levy, dec!(7.92));
    assert_eq!(b.fees, dec!(50.00));
    assert_eq!(b.vat, dec!(28.99));
    assert_eq!(b.total_landed_cost, dec!(318.91));
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_vat_reconstructs_from_breakdown_fields() {
    let engine = CustomsEngine::with_default_schedule();
    let vat_rate = engine.schedule().vat_rate;
    for decl in [
        alcohol_declaration("a", AlcoholType::Spirits, dec!(750), dec!(40), 12, dec!(540)),
        alcohol_declaration("b", AlcoholType::Beer, dec!(330), dec!(5), 24, dec!(48)),
        alcohol_declaration("c", AlcoholType::Other, dec!(1000), dec!(50), 10, dec!(200)),
    ] {
        let b = engine.calculate(&decl).unwrap().result;
        let reconstructed = customs_core::to_cents(
            vat_rate * (b.cif_value + b.import_duty + b.excise_levy + b.fees),
        );
        assert_eq!(b.vat, reconstructed, "VAT must be charged on the duty-inclusive base");
    }
}

#[test]
fn test_total_is_the_sum_of_reported_components() {
    let engine = CustomsEngine::with_default_schedule();
    let decl =
        alcohol_declaration("sum", AlcoholType::Liqueur, dec!(700), dec!(22), 9, dec!(310.55));
    let b = engine.calculate(&decl).unwrap().result;
    assert_eq!(
        b.total_landed_cost,
        b.cif_value + b.import_duty + b.excise_levy + b.fees + b.vat
    );
}

#[test]
fn test_zero_strength_shipment_is_priced_not_rejected() {
    // De-alcoholized wine still clears customs; pure-alcohol magnitudes
    // collapse to zero.
    let engine = CustomsEngine::with_default_schedule();
    let decl = alcohol_declaration("Zero Wine", AlcoholType::Wine, dec!(750), dec!(0), 6, dec!(90));
    let b = engine.calculate(&decl).unwrap().result;
    assert_eq!(b.proof_gallons, Some(dec!(0)));
    assert_eq!(b.import_duty, dec!(31.50));
}

// ===========================================================================
// Warnings
// ===========================================================================

#[test]
fn test_high_proof_bulk_unlicensed_shipment_collects_warnings() {
    let engine = CustomsEngine::with_default_schedule();
    let decl = alcohol_declaration(
        "Overproof Rum",
        AlcoholType::Spirits,
        dec!(1000),
        dec!(63),
        12,
        dec!(5400),
    );
    let output = engine.calculate(&decl).unwrap();
    let warnings = &output.result.warnings;

    assert!(warnings.iter().any(|w| w.contains("High ABV")));
    assert!(warnings.iter().any(|w| w.contains("personal use allowance")));
    assert!(warnings.iter().any(|w| w.contains("Import permit required")));
    assert!(warnings.iter().any(|w| w.contains("High value shipment")));
    // The envelope mirrors the breakdown's advisory list.
    assert_eq!(&output.warnings, warnings);
}

#[test]
fn test_small_personal_shipment_has_no_warnings() {
    let engine = CustomsEngine::with_default_schedule();
    let decl =
        alcohol_declaration("Table Wine", AlcoholType::Wine, dec!(750), dec!(12.5), 2, dec!(40));
    let output = engine.calculate(&decl).unwrap();
    assert!(output.result.warnings.is_empty());
}
