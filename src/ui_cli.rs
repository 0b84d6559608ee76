use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::convert::{ConvertedResult, ElectricityUnit, FuelUnit};
use crate::engine::{
    self, EngineError, FuelAssessment, GridAssessment, MarketAssessment,
};
use crate::factors::{fuel, grid, market};
use crate::gwp::AssessmentReport;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GridLocationBased,
    StationaryFuel,
    MarketBased,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Emission Factor Toolbox ===");
    println!("1) Scope 2 위치기반 (eGRID)");
    println!("2) Scope 1 고정연소 연료");
    println!("3) Scope 2 시장기반 (EEI)");
    println!("4) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::GridLocationBased),
            "2" => return Ok(MenuChoice::StationaryFuel),
            "3" => return Ok(MenuChoice::MarketBased),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// Scope 2 위치기반 메뉴를 처리한다. 약어를 찾지 못하면 메시지만 출력하고 복귀한다.
pub fn handle_grid(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Scope 2 위치기반 (eGRID) --");
    println!("서브리전 약어: {}", grid::regions().join(", "));
    let acronym = read_line("약어 입력: ")?;
    let category = read_category()?;
    let report = read_report(cfg.gwp_report)?;
    let unit = read_electricity_unit(cfg.default_units.electricity)?;
    match engine::assess_grid(acronym.trim(), category, report, unit) {
        Ok(a) => print_grid_assessment(&a),
        Err(e @ EngineError::Gwp(_)) => return Err(AppError::Engine(e)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Scope 1 고정연소 메뉴를 처리한다.
pub fn handle_fuel(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Scope 1 고정연소 연료 --");
    let names = fuel::fuel_names();
    for (i, name) in names.iter().enumerate() {
        println!("{}) {}", i + 1, name);
    }
    let idx = read_choice("연료 선택: ", names.len())?;
    let report = read_report(cfg.gwp_report)?;
    let unit = read_fuel_unit(cfg.default_units.fuel)?;
    match engine::assess_fuel(names[idx], report, unit) {
        Ok(a) => print_fuel_assessment(&a),
        Err(e @ EngineError::Gwp(_)) => return Err(AppError::Engine(e)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Scope 2 시장기반 메뉴를 처리한다. 주 → 회사 → 연도 순서로 선택지를 좁힌다.
pub fn handle_market(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Scope 2 시장기반 (EEI) --");
    let states = market::states();
    for (i, state) in states.iter().enumerate() {
        println!("{}) {}", i + 1, state);
    }
    let state = states[read_choice("주 선택: ", states.len())?];

    let companies = market::companies_in_state(state);
    for (i, company) in companies.iter().enumerate() {
        println!("{}) {}", i + 1, company);
    }
    let company = companies[read_choice("회사 선택: ", companies.len())?];

    let years = market::years_for_company(state, company);
    for (i, year) in years.iter().enumerate() {
        println!("{}) {}", i + 1, year);
    }
    let year = years[read_choice("데이터 연도 선택: ", years.len())?];

    let unit = read_electricity_unit(cfg.default_units.electricity)?;
    match engine::assess_market(state, company, year, unit) {
        Ok(a) => print_market_assessment(&a),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 빈 입력은 기존 값을 유지한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재: GWP {}, 전력 단위 {}, 연료 단위 {}",
        cfg.gwp_report.label(),
        cfg.default_units.electricity.label(),
        cfg.default_units.fuel.label()
    );

    println!("기본 GWP 보고서: 1) AR6  2) AR5  3) AR4  4) SAR");
    if let Some(idx) = read_optional_choice("변경할 번호(유지하려면 엔터): ", 4)? {
        cfg.gwp_report = AssessmentReport::ALL[idx];
    }

    for (i, unit) in ElectricityUnit::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, unit.label());
    }
    if let Some(idx) =
        read_optional_choice("기본 전력 단위 번호(유지하려면 엔터): ", ElectricityUnit::ALL.len())?
    {
        cfg.default_units.electricity = ElectricityUnit::ALL[idx];
    }

    for (i, unit) in FuelUnit::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, unit.label());
    }
    if let Some(idx) =
        read_optional_choice("기본 연료 단위 번호(유지하려면 엔터): ", FuelUnit::ALL.len())?
    {
        cfg.default_units.fuel = FuelUnit::ALL[idx];
    }

    println!(
        "설정됨: GWP {}, 전력 단위 {}, 연료 단위 {}",
        cfg.gwp_report.label(),
        cfg.default_units.electricity.label(),
        cfg.default_units.fuel.label()
    );
    Ok(())
}

/// 위치기반 결과를 원시/환산 두 표로 출력한다.
pub fn print_grid_assessment(a: &GridAssessment) {
    let row = a.row;
    println!(
        "\n원시 배출계수 (lb/MWh): {} / {}",
        row.acronym,
        row.category.label()
    );
    println!(
        "  CO2: {:.4}  CH4: {:.4}  N2O: {:.4}",
        row.co2_lb_per_mwh, row.ch4_lb_per_mwh, row.n2o_lb_per_mwh
    );
    println!(
        "  출처: {} {} (데이터 {} / 공표 {})",
        row.country, row.authority, row.data_year, row.release_year
    );
    println!("환산 배출계수 ({}):", a.unit.label());
    print_converted(&a.converted, 10);
}

/// 고정연소 결과를 원시/환산 두 표로 출력한다.
pub fn print_fuel_assessment(a: &FuelAssessment) {
    let row = a.row;
    println!("\n원시 배출계수: {}", row.name);
    println!(
        "  CO2: {:.2} kg/mmBtu  CH4: {:.2} g/mmBtu  N2O: {:.2} g/mmBtu",
        row.co2_kg_per_mmbtu, row.ch4_g_per_mmbtu, row.n2o_g_per_mmbtu
    );
    println!(
        "  출처: {} {} (데이터 {} / 공표 {}), 연소 형태: {}",
        row.country, row.authority, row.data_year, row.release_year, row.combustion_type
    );
    println!("환산 배출계수 ({}):", a.unit.label());
    print_converted(&a.converted, 7);
}

/// 시장기반 결과를 출력한다. 공시 누락 배출률은 "no value"로 표시한다.
pub fn print_market_assessment(a: &MarketAssessment) {
    let row = a.row;
    println!(
        "\n입력 데이터: {} / {} / {}",
        row.company, row.state, row.data_year
    );
    match row.avg_emission_rate {
        Some(rate) => println!("  유틸리티 평균 배출률: {:.4} lb CO2/MWh", rate),
        None => println!("  유틸리티 평균 배출률: no value"),
    }
    println!(
        "  프로토콜: {}, 배출량 검증: {}",
        row.protocol,
        if row.emissions_certified { "예" } else { "아니오" }
    );
    println!("환산 배출계수 ({}):", a.unit.label());
    match &a.converted {
        Some(c) => {
            println!("  CO2: {:.10}", c.co2);
            println!("  CH4: {:.10}", c.ch4);
            println!("  N2O: {:.10}", c.n2o);
            println!("  합계 CO2e: {:.10}", c.total);
        }
        None => println!("  no value"),
    }
}

fn print_converted(c: &ConvertedResult, decimals: usize) {
    println!("  CO2: {:.*}", decimals, c.co2);
    println!("  CH4: {:.*}", decimals, c.ch4);
    println!("  N2O: {:.*}", decimals, c.n2o);
    println!("  합계 CO2e: {:.*}", decimals, c.total);
}

fn read_category() -> Result<grid::EfCategory, AppError> {
    println!("EF 구분: 1) Total Output  2) Non-Baseload");
    let idx = read_choice("선택: ", grid::EfCategory::ALL.len())?;
    Ok(grid::EfCategory::ALL[idx])
}

fn read_report(default: AssessmentReport) -> Result<AssessmentReport, AppError> {
    println!("GWP 보고서: 1) AR6  2) AR5  3) AR4  4) SAR");
    let prompt = format!("선택(기본 {}): ", default.label());
    match read_optional_choice(&prompt, AssessmentReport::ALL.len())? {
        Some(idx) => Ok(AssessmentReport::ALL[idx]),
        None => Ok(default),
    }
}

fn read_electricity_unit(default: ElectricityUnit) -> Result<ElectricityUnit, AppError> {
    for (i, unit) in ElectricityUnit::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, unit.label());
    }
    let prompt = format!("출력 단위 선택(기본 {}): ", default.label());
    match read_optional_choice(&prompt, ElectricityUnit::ALL.len())? {
        Some(idx) => Ok(ElectricityUnit::ALL[idx]),
        None => Ok(default),
    }
}

fn read_fuel_unit(default: FuelUnit) -> Result<FuelUnit, AppError> {
    for (i, unit) in FuelUnit::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, unit.label());
    }
    let prompt = format!("출력 단위 선택(기본 {}): ", default.label());
    match read_optional_choice(&prompt, FuelUnit::ALL.len())? {
        Some(idx) => Ok(FuelUnit::ALL[idx]),
        None => Ok(default),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 1부터 max까지의 번호를 읽어 0 기반 인덱스로 반환한다.
fn read_choice(prompt: &str, max: usize) -> Result<usize, AppError> {
    loop {
        let s = read_line(prompt)?;
        if let Ok(n) = s.trim().parse::<usize>() {
            if n >= 1 && n <= max {
                return Ok(n - 1);
            }
        }
        println!("1~{max} 사이의 번호를 입력하세요.");
    }
}

/// 빈 입력이면 None, 아니면 0 기반 인덱스를 반환한다.
fn read_optional_choice(prompt: &str, max: usize) -> Result<Option<usize>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        if let Ok(n) = s.trim().parse::<usize>() {
            if n >= 1 && n <= max {
                return Ok(Some(n - 1));
            }
        }
        println!("1~{max} 사이의 번호를 입력하거나 엔터를 누르세요.");
    }
}
