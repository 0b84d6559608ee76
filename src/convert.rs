use serde::{Deserialize, Serialize};

use crate::gwp::GwpVector;

/// 단위 환산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConvertError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// 파운드-킬로그램 환산 계수(정확값). 전력 계열 스칼라는 모두 이 값에서 유도한다.
pub const LB_TO_KG: f64 = 0.45359237;

/// 연료 표의 CH4/N2O 원시값(g/mmBtu)을 CO2와 같은 kg 기준으로 맞추는 보정 계수.
const G_TO_KG: f64 = 0.001;

/// 전력 계열(위치기반/시장기반) 출력 단위. 원시값 기준은 lb/MWh이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricityUnit {
    MtCo2ePerKwh,
    MtCo2ePerMwh,
    KgCo2ePerKwh,
    KgCo2ePerMwh,
}

impl ElectricityUnit {
    pub const ALL: [ElectricityUnit; 4] = [
        ElectricityUnit::MtCo2ePerKwh,
        ElectricityUnit::MtCo2ePerMwh,
        ElectricityUnit::KgCo2ePerKwh,
        ElectricityUnit::KgCo2ePerMwh,
    ];

    /// lb/MWh 원시값에 곱하는 환산 스칼라.
    pub fn scalar(self) -> f64 {
        match self {
            ElectricityUnit::MtCo2ePerKwh => LB_TO_KG / 1000.0 / 1000.0,
            ElectricityUnit::MtCo2ePerMwh => LB_TO_KG / 1000.0,
            ElectricityUnit::KgCo2ePerKwh => LB_TO_KG / 1000.0,
            ElectricityUnit::KgCo2ePerMwh => LB_TO_KG,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElectricityUnit::MtCo2ePerKwh => "mtCO2e/kWh",
            ElectricityUnit::MtCo2ePerMwh => "mtCO2e/MWh",
            ElectricityUnit::KgCo2ePerKwh => "kgCO2e/kWh",
            ElectricityUnit::KgCo2ePerMwh => "kgCO2e/MWh",
        }
    }
}

/// 연료 계열(고정연소) 출력 단위. 원시 CO2 기준은 kg/mmBtu이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    MtCo2ePerTherm,
    MtCo2ePerMmbtu,
    KgCo2ePerTherm,
    KgCo2ePerMmbtu,
}

impl FuelUnit {
    pub const ALL: [FuelUnit; 4] = [
        FuelUnit::MtCo2ePerTherm,
        FuelUnit::MtCo2ePerMmbtu,
        FuelUnit::KgCo2ePerTherm,
        FuelUnit::KgCo2ePerMmbtu,
    ];

    /// kg/mmBtu 원시값에 곱하는 환산 스칼라. 1 therm = 0.1 mmBtu.
    pub fn scalar(self) -> f64 {
        match self {
            FuelUnit::MtCo2ePerTherm => 0.1 / 1000.0,
            FuelUnit::MtCo2ePerMmbtu => 1.0 / 1000.0,
            FuelUnit::KgCo2ePerTherm => 0.1,
            FuelUnit::KgCo2ePerMmbtu => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelUnit::MtCo2ePerTherm => "mtCO2e/therms",
            FuelUnit::MtCo2ePerMmbtu => "mtCO2e/mmBTU",
            FuelUnit::KgCo2ePerTherm => "kgCO2e/therms",
            FuelUnit::KgCo2ePerMmbtu => "kgCO2e/mmBTU",
        }
    }
}

/// 문자열로 전달된 전력 계열 단위명을 enum으로 변환한다.
pub fn parse_electricity_unit(s: &str) -> Result<ElectricityUnit, ConvertError> {
    match s.to_lowercase().as_str() {
        "mtco2e/kwh" => Ok(ElectricityUnit::MtCo2ePerKwh),
        "mtco2e/mwh" => Ok(ElectricityUnit::MtCo2ePerMwh),
        "kgco2e/kwh" => Ok(ElectricityUnit::KgCo2ePerKwh),
        "kgco2e/mwh" => Ok(ElectricityUnit::KgCo2ePerMwh),
        _ => Err(ConvertError::UnknownUnit(s.to_string())),
    }
}

/// 문자열로 전달된 연료 계열 단위명을 enum으로 변환한다.
pub fn parse_fuel_unit(s: &str) -> Result<FuelUnit, ConvertError> {
    match s.to_lowercase().as_str() {
        "mtco2e/therms" | "mtco2e/therm" => Ok(FuelUnit::MtCo2ePerTherm),
        "mtco2e/mmbtu" => Ok(FuelUnit::MtCo2ePerMmbtu),
        "kgco2e/therms" | "kgco2e/therm" => Ok(FuelUnit::KgCo2ePerTherm),
        "kgco2e/mmbtu" => Ok(FuelUnit::KgCo2ePerMmbtu),
        _ => Err(ConvertError::UnknownUnit(s.to_string())),
    }
}

/// 가스별 환산값과 CO2e 합계. 변환 호출마다 새로 생성되며 변경되지 않는다.
#[derive(Debug, Clone, Copy)]
pub struct ConvertedResult {
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
    pub total: f64,
}

/// 전력 계열 원시 배출계수(lb/MWh)를 GWP 가중 후 목표 단위로 환산한다.
/// 세 가스 모두 동일한 스칼라를 사용하는 삼중 곱이다.
pub fn convert_electricity(
    co2_lb_per_mwh: f64,
    ch4_lb_per_mwh: f64,
    n2o_lb_per_mwh: f64,
    gwp: &GwpVector,
    unit: ElectricityUnit,
) -> ConvertedResult {
    let scalar = unit.scalar();
    let co2 = co2_lb_per_mwh * scalar * gwp.co2;
    let ch4 = ch4_lb_per_mwh * scalar * gwp.ch4;
    let n2o = n2o_lb_per_mwh * scalar * gwp.n2o;
    ConvertedResult {
        co2,
        ch4,
        n2o,
        total: co2 + ch4 + n2o,
    }
}

/// 연료 계열 원시 배출계수를 GWP 가중 후 목표 단위로 환산한다.
/// CH4/N2O 원시값은 g/mmBtu로 기록되므로 0.001 보정을 추가로 곱한다.
pub fn convert_fuel(
    co2_kg_per_mmbtu: f64,
    ch4_g_per_mmbtu: f64,
    n2o_g_per_mmbtu: f64,
    gwp: &GwpVector,
    unit: FuelUnit,
) -> ConvertedResult {
    let scalar = unit.scalar();
    let co2 = co2_kg_per_mmbtu * scalar * gwp.co2;
    let ch4 = ch4_g_per_mmbtu * scalar * gwp.ch4 * G_TO_KG;
    let n2o = n2o_g_per_mmbtu * scalar * gwp.n2o * G_TO_KG;
    ConvertedResult {
        co2,
        ch4,
        n2o,
        total: co2 + ch4 + n2o,
    }
}

/// 시장기반 평균 배출률(lb CO2/MWh)을 목표 단위로 환산한다. CO2 단일 가스이며
/// CH4/N2O는 데이터가 없어 0으로 보고한다. 공시 누락(None)은 그대로 전파한다.
pub fn convert_market(
    rate_lb_per_mwh: Option<f64>,
    unit: ElectricityUnit,
) -> Option<ConvertedResult> {
    let rate = rate_lb_per_mwh?;
    let co2 = rate * unit.scalar();
    Some(ConvertedResult {
        co2,
        ch4: 0.0,
        n2o: 0.0,
        total: co2,
    })
}
