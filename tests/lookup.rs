//! 참조 테이블 조회 회귀 테스트.
use emission_factor_toolbox::factors::{fuel, grid, market};
use emission_factor_toolbox::gwp::{self, AssessmentReport};

#[test]
fn grid_lookup_is_case_insensitive_for_every_row() {
    for row in grid::rows() {
        let lowered = row.acronym.to_lowercase();
        let found = grid::find_factor(&lowered, row.category)
            .unwrap_or_else(|| panic!("{} ({:?}) not found", row.acronym, row.category));
        assert!(found.acronym.eq_ignore_ascii_case(&lowered));
        assert_eq!(found.category, row.category);
    }
}

#[test]
fn grid_unknown_acronym_is_none() {
    assert!(grid::find_factor("ZZZZ", grid::EfCategory::TotalOutput).is_none());
}

#[test]
fn grid_category_must_match_exactly() {
    let total = grid::find_factor("CAMX", grid::EfCategory::TotalOutput).expect("total");
    let nonbase = grid::find_factor("CAMX", grid::EfCategory::NonBaseload).expect("non-baseload");
    assert_ne!(total.co2_lb_per_mwh, nonbase.co2_lb_per_mwh);
}

#[test]
fn grid_regions_are_deduplicated() {
    let regions = grid::regions();
    assert_eq!(regions.len() * 2, grid::rows().len());
    assert!(regions.contains(&"CAMX"));
}

#[test]
fn fuel_lookup_is_exact_match_and_missing_is_recoverable() {
    let row = fuel::find_factor("Natural Gas").expect("natural gas");
    assert_eq!(row.co2_kg_per_mmbtu, 53.06);
    // The original tool assumed exactly one match and crashed otherwise; here
    // the missing case is a plain None.
    assert!(fuel::find_factor("natural gas").is_none());
    assert!(fuel::find_factor("Unobtainium").is_none());
}

#[test]
fn fuel_names_cover_the_table() {
    assert_eq!(fuel::fuel_names().len(), fuel::rows().len());
}

#[test]
fn market_states_are_sorted_and_deduplicated() {
    let states = market::states();
    let mut sorted = states.clone();
    sorted.sort_unstable();
    assert_eq!(states, sorted);
    assert_eq!(
        states.iter().filter(|s| **s == "CA").count(),
        1,
        "duplicate state in pick list"
    );
    for row in market::rows() {
        assert!(states.contains(&row.state), "{} missing from pick list", row.state);
    }
}

#[test]
fn market_progressive_filter_narrows_by_stage() {
    let companies = market::companies_in_state("CA");
    assert!(companies.contains(&"Pacific Gas and Electric Company"));
    assert!(!companies.contains(&"Consolidated Edison"));

    let years = market::years_for_company("CA", "Pacific Gas and Electric Company");
    assert_eq!(years, vec![2021, 2022]);

    // A company listed in another state yields no years under this one.
    assert!(market::years_for_company("CA", "Georgia Power").is_empty());
}

#[test]
fn market_blank_rate_cell_stays_none() {
    let row = market::find_rate("TX", "Austin Energy", 2022).expect("row present");
    assert!(row.avg_emission_rate.is_none());
    assert!(row.residual_mix_rate.is_some());
}

#[test]
fn gwp_sar_round_trips_the_table_values() {
    let v = gwp::resolve(AssessmentReport::Sar).expect("sar");
    assert_eq!(v.co2, 1.0);
    assert_eq!(v.ch4, 21.0);
    assert_eq!(v.n2o, 310.0);
}

#[test]
fn gwp_co2_is_unity_in_every_report() {
    for report in AssessmentReport::ALL {
        let v = gwp::resolve(report).expect("resolve");
        assert_eq!(v.co2, 1.0, "CO2 multiplier must be 1.0 under {}", report.label());
    }
}

#[test]
fn gwp_report_parsing_is_case_insensitive() {
    assert_eq!(
        gwp::parse_assessment_report("Ar6").expect("parse"),
        AssessmentReport::Ar6
    );
    assert!(gwp::parse_assessment_report("AR7").is_err());
}
