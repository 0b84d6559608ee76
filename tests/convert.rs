//! 단위 환산 스칼라/공식 회귀 테스트.
use emission_factor_toolbox::convert::{
    convert_electricity, convert_fuel, convert_market, parse_electricity_unit, parse_fuel_unit,
    ConvertError, ElectricityUnit, FuelUnit, LB_TO_KG,
};
use emission_factor_toolbox::gwp::{self, AssessmentReport};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:.12}, tol {rel_tol})"
    );
}

#[test]
fn electricity_kg_units_are_thousand_times_mt_units() {
    let gwp = gwp::resolve(AssessmentReport::Ar6).expect("gwp");
    let pairs = [
        (ElectricityUnit::KgCo2ePerMwh, ElectricityUnit::MtCo2ePerMwh),
        (ElectricityUnit::KgCo2ePerKwh, ElectricityUnit::MtCo2ePerKwh),
    ];
    for (kg_unit, mt_unit) in pairs {
        let kg = convert_electricity(800.0, 0.02, 0.01, &gwp, kg_unit);
        let mt = convert_electricity(800.0, 0.02, 0.01, &gwp, mt_unit);
        assert_close("co2 ratio", kg.co2, mt.co2 * 1000.0, 1e-12);
        assert_close("total ratio", kg.total, mt.total * 1000.0, 1e-12);
    }
}

#[test]
fn electricity_per_kwh_units_are_thousandth_of_per_mwh() {
    let gwp = gwp::resolve(AssessmentReport::Ar5).expect("gwp");
    let per_mwh = convert_electricity(650.0, 0.05, 0.007, &gwp, ElectricityUnit::MtCo2ePerMwh);
    let per_kwh = convert_electricity(650.0, 0.05, 0.007, &gwp, ElectricityUnit::MtCo2ePerKwh);
    assert_close("total ratio", per_mwh.total, per_kwh.total * 1000.0, 1e-12);
}

#[test]
fn electricity_is_trilinear_product() {
    let gwp = gwp::resolve(AssessmentReport::Ar6).expect("gwp");
    let res = convert_electricity(800.0, 0.02, 0.01, &gwp, ElectricityUnit::KgCo2ePerMwh);
    assert_close("co2", res.co2, 800.0 * LB_TO_KG * 1.0, 1e-12);
    assert_close("ch4", res.ch4, 0.02 * LB_TO_KG * 29.8, 1e-12);
    assert_close("n2o", res.n2o, 0.01 * LB_TO_KG * 273.0, 1e-12);
    assert_close("total", res.total, res.co2 + res.ch4 + res.n2o, 1e-12);
}

#[test]
fn fuel_gas_correction_is_one_thousandth_of_electricity_formula() {
    // CH4/N2O raw values are recorded in g/mmBtu while CO2 is kg/mmBtu, so the
    // fuel formula must yield exactly 1/1000 of the uncorrected trilinear product.
    let gwp = gwp::resolve(AssessmentReport::Ar6).expect("gwp");
    let unit = FuelUnit::KgCo2ePerMmbtu;
    let res = convert_fuel(53.06, 1.0, 0.10, &gwp, unit);
    let uncorrected_ch4 = 1.0 * unit.scalar() * gwp.ch4;
    let uncorrected_n2o = 0.10 * unit.scalar() * gwp.n2o;
    assert_close("ch4", res.ch4, uncorrected_ch4 * 0.001, 1e-12);
    assert_close("n2o", res.n2o, uncorrected_n2o * 0.001, 1e-12);
    // CO2 carries no correction.
    assert_close("co2", res.co2, 53.06 * unit.scalar() * gwp.co2, 1e-12);
}

#[test]
fn fuel_therm_units_are_tenth_of_mmbtu_units() {
    let gwp = gwp::resolve(AssessmentReport::Sar).expect("gwp");
    let mmbtu = convert_fuel(73.96, 3.0, 0.60, &gwp, FuelUnit::KgCo2ePerMmbtu);
    let therm = convert_fuel(73.96, 3.0, 0.60, &gwp, FuelUnit::KgCo2ePerTherm);
    assert_close("total ratio", mmbtu.total, therm.total * 10.0, 1e-12);
}

#[test]
fn market_no_value_propagates_for_every_unit() {
    for unit in ElectricityUnit::ALL {
        assert!(
            convert_market(None, unit).is_none(),
            "no-value sentinel must survive conversion for {}",
            unit.label()
        );
    }
}

#[test]
fn market_is_co2_only() {
    let res = convert_market(Some(206.7), ElectricityUnit::KgCo2ePerMwh).expect("rate present");
    assert_close("co2", res.co2, 206.7 * LB_TO_KG, 1e-12);
    assert_eq!(res.ch4, 0.0);
    assert_eq!(res.n2o, 0.0);
    assert_close("total", res.total, res.co2, 1e-12);
}

#[test]
fn unit_parsing_is_case_insensitive() {
    assert_eq!(
        parse_electricity_unit("MTCO2E/KWH").expect("parse"),
        ElectricityUnit::MtCo2ePerKwh
    );
    assert_eq!(
        parse_fuel_unit("kgCO2e/therms").expect("parse"),
        FuelUnit::KgCo2ePerTherm
    );
    assert!(matches!(
        parse_electricity_unit("mtCO2e/lbs"),
        Err(ConvertError::UnknownUnit(_))
    ));
}

#[test]
fn labels_round_trip_through_parsers() {
    for unit in ElectricityUnit::ALL {
        assert_eq!(parse_electricity_unit(unit.label()).expect("parse"), unit);
    }
    for unit in FuelUnit::ALL {
        assert_eq!(parse_fuel_unit(unit.label()).expect("parse"), unit);
    }
}
