use crate::convert::{
    convert_electricity, convert_fuel, convert_market, ConvertedResult, ElectricityUnit, FuelUnit,
};
use crate::factors::{fuel, grid, market};
use crate::gwp::{self, AssessmentReport, GwpError, GwpVector};

/// 조회+변환 파이프라인에서 발생 가능한 오류. 모두 반환값으로 전달되며
/// 프런트엔드가 메시지로 표시할 수 있다.
#[derive(Debug)]
pub enum EngineError {
    /// 약어/집계 구분 조합에 해당하는 eGRID 행 없음
    RegionNotFound(String),
    /// 해당 연료명의 행 없음
    FuelNotFound(String),
    /// 주/회사/연도 조합에 해당하는 행 없음
    NoMarketData {
        state: String,
        company: String,
        year: u16,
    },
    /// GWP 표 스키마 오류
    Gwp(GwpError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::RegionNotFound(acronym) => {
                write!(f, "eGRID 약어를 찾을 수 없음: {acronym}")
            }
            EngineError::FuelNotFound(name) => write!(f, "연료를 찾을 수 없음: {name}"),
            EngineError::NoMarketData {
                state,
                company,
                year,
            } => write!(
                f,
                "선택한 조건의 데이터 없음: {state} / {company} / {year}"
            ),
            EngineError::Gwp(e) => write!(f, "GWP 조회 오류: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<GwpError> for EngineError {
    fn from(value: GwpError) -> Self {
        EngineError::Gwp(value)
    }
}

/// 위치기반 조회 결과. 원시 행과 환산값을 쌍으로 담는다.
#[derive(Debug, Clone, Copy)]
pub struct GridAssessment {
    pub row: &'static grid::GridRow,
    pub gwp: GwpVector,
    pub unit: ElectricityUnit,
    pub converted: ConvertedResult,
}

/// 고정연소 조회 결과.
#[derive(Debug, Clone, Copy)]
pub struct FuelAssessment {
    pub row: &'static fuel::FuelRow,
    pub gwp: GwpVector,
    pub unit: FuelUnit,
    pub converted: ConvertedResult,
}

/// 시장기반 조회 결과. 평균 배출률이 공시되지 않은 행이면 converted는 None이다.
#[derive(Debug, Clone, Copy)]
pub struct MarketAssessment {
    pub row: &'static market::MarketRow,
    pub unit: ElectricityUnit,
    pub converted: Option<ConvertedResult>,
}

/// Scope 2 위치기반: eGRID 행 조회 → GWP 가중 → 단위 환산.
pub fn assess_grid(
    acronym: &str,
    category: grid::EfCategory,
    report: AssessmentReport,
    unit: ElectricityUnit,
) -> Result<GridAssessment, EngineError> {
    let row = grid::find_factor(acronym, category)
        .ok_or_else(|| EngineError::RegionNotFound(acronym.to_string()))?;
    let gwp = gwp::resolve(report)?;
    let converted = convert_electricity(
        row.co2_lb_per_mwh,
        row.ch4_lb_per_mwh,
        row.n2o_lb_per_mwh,
        &gwp,
        unit,
    );
    Ok(GridAssessment {
        row,
        gwp,
        unit,
        converted,
    })
}

/// Scope 1 고정연소: 연료 행 조회 → GWP 가중 → 단위 환산(g→kg 보정 포함).
pub fn assess_fuel(
    name: &str,
    report: AssessmentReport,
    unit: FuelUnit,
) -> Result<FuelAssessment, EngineError> {
    let row = fuel::find_factor(name).ok_or_else(|| EngineError::FuelNotFound(name.to_string()))?;
    let gwp = gwp::resolve(report)?;
    let converted = convert_fuel(
        row.co2_kg_per_mmbtu,
        row.ch4_g_per_mmbtu,
        row.n2o_g_per_mmbtu,
        &gwp,
        unit,
    );
    Ok(FuelAssessment {
        row,
        gwp,
        unit,
        converted,
    })
}

/// Scope 2 시장기반: 3단계 필터 조회 → CO2 단일 가스 환산. GWP 가중은 없다
/// (공시 배출률이 이미 CO2 기준이므로).
pub fn assess_market(
    state: &str,
    company: &str,
    year: u16,
    unit: ElectricityUnit,
) -> Result<MarketAssessment, EngineError> {
    let row =
        market::find_rate(state, company, year).ok_or_else(|| EngineError::NoMarketData {
            state: state.to_string(),
            company: company.to_string(),
            year,
        })?;
    let converted = convert_market(row.avg_emission_rate, unit);
    Ok(MarketAssessment {
        row,
        unit,
        converted,
    })
}
