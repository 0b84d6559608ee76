/// 고정연소 연료 배출계수 행. CO2는 kg/mmBtu, CH4/N2O는 g/mmBtu로 기록된다.
/// 단위 비대칭은 원본 데이터셋 그대로이며 환산 단계에서 0.001 보정으로 맞춘다.
#[derive(Debug, Clone, Copy)]
pub struct FuelRow {
    pub name: &'static str,
    /// CO2 배출계수 [kg/mmBtu]
    pub co2_kg_per_mmbtu: f64,
    /// CH4 배출계수 [g/mmBtu]
    pub ch4_g_per_mmbtu: f64,
    /// N2O 배출계수 [g/mmBtu]
    pub n2o_g_per_mmbtu: f64,
    pub country: &'static str,
    pub authority: &'static str,
    pub data_year: u16,
    pub release_year: u16,
    pub combustion_type: &'static str,
}

pub fn rows() -> &'static [FuelRow] {
    FUEL_TABLE
}

/// 연료명이 정확히 일치하는 행을 반환한다. 선택지는 `fuel_names()`에서 온다고
/// 가정하지만, 일치하는 행이 없으면 복구 가능한 None으로 처리한다.
pub fn find_factor(name: &str) -> Option<&'static FuelRow> {
    FUEL_TABLE.iter().find(|r| r.name == name)
}

/// 표 순서를 유지한 연료명 목록. 선택지 표시용.
pub fn fuel_names() -> Vec<&'static str> {
    FUEL_TABLE.iter().map(|r| r.name).collect()
}

const fn row(
    name: &'static str,
    co2: f64,
    ch4: f64,
    n2o: f64,
    combustion_type: &'static str,
) -> FuelRow {
    FuelRow {
        name,
        co2_kg_per_mmbtu: co2,
        ch4_g_per_mmbtu: ch4,
        n2o_g_per_mmbtu: n2o,
        country: "USA",
        authority: "EPA GHG EF Hub",
        data_year: 2023,
        release_year: 2024,
        combustion_type,
    }
}

const FUEL_TABLE: &[FuelRow] = &[
    row("Natural Gas", 53.06, 1.0, 0.10, "Boiler"),
    row("Distillate Fuel Oil No. 2", 73.96, 3.0, 0.60, "Boiler"),
    row("Residual Fuel Oil No. 6", 75.10, 3.0, 0.60, "Boiler"),
    row("Propane", 62.87, 3.0, 0.60, "Boiler"),
    row("Kerosene", 75.20, 3.0, 0.60, "Boiler"),
    row("Motor Gasoline", 70.22, 3.0, 0.60, "Boiler"),
    row("Coal (Bituminous)", 93.28, 11.0, 1.60, "Boiler"),
    row("Coal (Subbituminous)", 97.17, 11.0, 1.60, "Boiler"),
    row("Coal (Lignite)", 97.72, 11.0, 1.60, "Boiler"),
    row("Wood and Wood Residuals", 93.80, 7.2, 3.60, "Boiler"),
];

// NOTE:
// - Factors transcribed from the EPA GHG Emission Factors Hub stationary
//   combustion table (2024 edition), for reference.
