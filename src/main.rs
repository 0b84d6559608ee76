use clap::{Parser, Subcommand};

use emission_factor_toolbox::{app, config, convert, engine, factors::grid, gwp, ui_cli};

/// Scope 1/2 배출계수 조회·환산 도구. 서브커맨드 없이 실행하면 대화형 메뉴로 진입한다.
#[derive(Parser)]
#[command(name = "emission_factor_toolbox", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scope 2 위치기반: eGRID 서브리전 배출계수 조회·환산
    Grid {
        /// 서브리전 약어 (예: CAMX, 대소문자 무시)
        region: String,
        /// EF 구분: total-output | non-baseload
        #[arg(long, default_value = "total-output")]
        category: String,
        /// GWP 보고서: ar6 | ar5 | ar4 | sar
        #[arg(long, default_value = "ar6")]
        report: String,
        /// 출력 단위 (예: kgCO2e/MWh)
        #[arg(long, default_value = "kgCO2e/MWh")]
        unit: String,
    },
    /// Scope 1 고정연소: 연료 배출계수 조회·환산
    Fuel {
        /// 연료명 (예: "Natural Gas")
        fuel: String,
        #[arg(long, default_value = "ar6")]
        report: String,
        /// 출력 단위 (예: kgCO2e/mmBTU)
        #[arg(long, default_value = "kgCO2e/mmBTU")]
        unit: String,
    },
    /// Scope 2 시장기반: EEI 유틸리티 평균 배출률 조회·환산
    Market {
        /// 주 약어 (예: CA)
        state: String,
        /// 회사명 (예: "Pacific Gas and Electric Company")
        company: String,
        /// 데이터 연도
        year: u16,
        #[arg(long, default_value = "kgCO2e/MWh")]
        unit: String,
    },
}

/// 프로그램의 엔트리 포인트. 서브커맨드를 처리하거나 대화형 루프를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        None => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)?;
        }
        Some(Command::Grid {
            region,
            category,
            report,
            unit,
        }) => {
            let category = grid::parse_category(&category)
                .ok_or_else(|| format!("알 수 없는 EF 구분: {category}"))?;
            let report = gwp::parse_assessment_report(&report)?;
            let unit = convert::parse_electricity_unit(&unit)?;
            let assessment = engine::assess_grid(&region, category, report, unit)?;
            ui_cli::print_grid_assessment(&assessment);
        }
        Some(Command::Fuel { fuel, report, unit }) => {
            let report = gwp::parse_assessment_report(&report)?;
            let unit = convert::parse_fuel_unit(&unit)?;
            let assessment = engine::assess_fuel(&fuel, report, unit)?;
            ui_cli::print_fuel_assessment(&assessment);
        }
        Some(Command::Market {
            state,
            company,
            year,
            unit,
        }) => {
            let unit = convert::parse_electricity_unit(&unit)?;
            let assessment = engine::assess_market(&state, &company, year, unit)?;
            ui_cli::print_market_assessment(&assessment);
        }
    }
    Ok(())
}
