use serde::{Deserialize, Serialize};

/// eGRID 배출계수 집계 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfCategory {
    TotalOutput,
    NonBaseload,
}

impl EfCategory {
    pub const ALL: [EfCategory; 2] = [EfCategory::TotalOutput, EfCategory::NonBaseload];

    /// 원본 데이터셋의 EF Category 문자열.
    pub fn label(self) -> &'static str {
        match self {
            EfCategory::TotalOutput => "Total Output Emission Factors",
            EfCategory::NonBaseload => "Non-Baseload Emission Factors",
        }
    }
}

/// 문자열로 전달된 집계 구분을 enum으로 변환한다.
pub fn parse_category(s: &str) -> Option<EfCategory> {
    match s.to_lowercase().as_str() {
        "total-output" | "total" | "total output emission factors" => Some(EfCategory::TotalOutput),
        "non-baseload" | "nonbaseload" | "non-baseload emission factors" => {
            Some(EfCategory::NonBaseload)
        }
        _ => None,
    }
}

/// eGRID 서브리전 배출계수 행. 원시값 단위는 lb/MWh이다.
#[derive(Debug, Clone, Copy)]
pub struct GridRow {
    /// 서브리전 약어 (예: CAMX)
    pub acronym: &'static str,
    pub category: EfCategory,
    /// CO2 배출계수 [lb/MWh]
    pub co2_lb_per_mwh: f64,
    /// CH4 배출계수 [lb/MWh]
    pub ch4_lb_per_mwh: f64,
    /// N2O 배출계수 [lb/MWh]
    pub n2o_lb_per_mwh: f64,
    pub country: &'static str,
    pub authority: &'static str,
    pub data_year: u16,
    pub release_year: u16,
}

pub fn rows() -> &'static [GridRow] {
    GRID_TABLE
}

/// 약어(대소문자 무시)와 집계 구분이 모두 일치하는 행을 반환한다.
/// 중복 행이 존재하면 표 순서상 첫 행을 취한다. 중복 해소는 여기 한 곳에서만 한다.
pub fn find_factor(acronym: &str, category: EfCategory) -> Option<&'static GridRow> {
    GRID_TABLE
        .iter()
        .find(|r| r.acronym.eq_ignore_ascii_case(acronym) && r.category == category)
}

/// 표 순서를 유지한 서브리전 약어 목록(중복 제거). 선택지 표시용.
pub fn regions() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for row in GRID_TABLE {
        if !out.contains(&row.acronym) {
            out.push(row.acronym);
        }
    }
    out
}

const fn row(
    acronym: &'static str,
    category: EfCategory,
    co2: f64,
    ch4: f64,
    n2o: f64,
) -> GridRow {
    GridRow {
        acronym,
        category,
        co2_lb_per_mwh: co2,
        ch4_lb_per_mwh: ch4,
        n2o_lb_per_mwh: n2o,
        country: "USA",
        authority: "EPA eGRID",
        data_year: 2022,
        release_year: 2024,
    }
}

const GRID_TABLE: &[GridRow] = &[
    row("AKGD", EfCategory::TotalOutput, 1074.0, 0.083, 0.012),
    row("AKGD", EfCategory::NonBaseload, 1376.7, 0.106, 0.015),
    row("AZNM", EfCategory::TotalOutput, 721.5, 0.056, 0.008),
    row("AZNM", EfCategory::NonBaseload, 1106.3, 0.071, 0.009),
    row("CAMX", EfCategory::TotalOutput, 498.3, 0.033, 0.004),
    row("CAMX", EfCategory::NonBaseload, 866.4, 0.049, 0.006),
    row("ERCT", EfCategory::TotalOutput, 771.1, 0.052, 0.007),
    row("ERCT", EfCategory::NonBaseload, 1022.5, 0.058, 0.007),
    row("FRCC", EfCategory::TotalOutput, 813.2, 0.055, 0.007),
    row("FRCC", EfCategory::NonBaseload, 948.1, 0.057, 0.007),
    row("MROW", EfCategory::TotalOutput, 936.6, 0.099, 0.013),
    row("MROW", EfCategory::NonBaseload, 1556.0, 0.168, 0.022),
    row("NEWE", EfCategory::TotalOutput, 538.7, 0.066, 0.008),
    row("NEWE", EfCategory::NonBaseload, 1005.1, 0.103, 0.012),
    row("NWPP", EfCategory::TotalOutput, 602.4, 0.061, 0.008),
    row("NWPP", EfCategory::NonBaseload, 1263.4, 0.125, 0.017),
    row("NYUP", EfCategory::TotalOutput, 262.3, 0.016, 0.002),
    row("NYUP", EfCategory::NonBaseload, 931.6, 0.055, 0.006),
    row("RFCE", EfCategory::TotalOutput, 657.9, 0.051, 0.007),
    row("RFCE", EfCategory::NonBaseload, 1216.2, 0.092, 0.012),
    row("RFCW", EfCategory::TotalOutput, 1000.5, 0.086, 0.012),
    row("RFCW", EfCategory::NonBaseload, 1552.4, 0.137, 0.019),
    row("RMPA", EfCategory::TotalOutput, 1093.9, 0.103, 0.014),
    row("RMPA", EfCategory::NonBaseload, 1576.1, 0.144, 0.019),
    row("SRSO", EfCategory::TotalOutput, 851.0, 0.063, 0.009),
    row("SRSO", EfCategory::NonBaseload, 1112.7, 0.077, 0.010),
    row("SRVC", EfCategory::TotalOutput, 633.8, 0.054, 0.008),
    row("SRVC", EfCategory::NonBaseload, 1120.3, 0.091, 0.012),
];

// NOTE:
// - Factors transcribed from EPA eGRID2022 subregion output / non-baseload emission
//   rates (2024 release), for reference. Verify against the latest eGRID release
//   before use in formal reporting.
