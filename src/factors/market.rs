/// EEI 유틸리티 배출률 행. 배출률 단위는 lb CO2/MWh이다.
#[derive(Debug, Clone, Copy)]
pub struct MarketRow {
    pub company: &'static str,
    /// 주(州) 약어 (예: CA)
    pub state: &'static str,
    pub data_year: u16,
    /// 유틸리티별 잔여 믹스 배출률 [lb CO2/MWh]. 공시 누락 셀은 None.
    pub residual_mix_rate: Option<f64>,
    /// 유틸리티 평균 배출률 [lb CO2/MWh]. 공시 누락 셀은 None이며 0으로 대체하지 않는다.
    pub avg_emission_rate: Option<f64>,
    pub protocol: &'static str,
    pub emissions_certified: bool,
}

pub fn rows() -> &'static [MarketRow] {
    MARKET_TABLE
}

/// 주 → 회사 → 연도의 3단계 점진 필터로 행을 찾는다. 각 단계의 선택지는
/// 앞 단계 결과로 제한된다는 전제이므로, 최종 집합이 비면 None(데이터 없음)이다.
pub fn find_rate(state: &str, company: &str, year: u16) -> Option<&'static MarketRow> {
    MARKET_TABLE
        .iter()
        .filter(|r| r.state == state)
        .filter(|r| r.company == company)
        .find(|r| r.data_year == year)
}

/// 주 약어 목록(정렬, 중복 제거). 선택지 표시용.
pub fn states() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for row in MARKET_TABLE {
        if !out.contains(&row.state) {
            out.push(row.state);
        }
    }
    out.sort_unstable();
    out
}

/// 해당 주에 속한 회사 목록(표 순서, 중복 제거).
pub fn companies_in_state(state: &str) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for row in MARKET_TABLE.iter().filter(|r| r.state == state) {
        if !out.contains(&row.company) {
            out.push(row.company);
        }
    }
    out
}

/// 해당 주·회사의 데이터 연도 목록(표 순서, 중복 제거).
pub fn years_for_company(state: &str, company: &str) -> Vec<u16> {
    let mut out: Vec<u16> = Vec::new();
    for row in MARKET_TABLE
        .iter()
        .filter(|r| r.state == state && r.company == company)
    {
        if !out.contains(&row.data_year) {
            out.push(row.data_year);
        }
    }
    out
}

const MARKET_TABLE: &[MarketRow] = &[
    MarketRow {
        company: "Arizona Public Service",
        state: "AZ",
        data_year: 2021,
        residual_mix_rate: Some(742.5),
        avg_emission_rate: Some(731.8),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Arizona Public Service",
        state: "AZ",
        data_year: 2022,
        residual_mix_rate: Some(718.9),
        avg_emission_rate: Some(704.2),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Pacific Gas and Electric Company",
        state: "CA",
        data_year: 2021,
        residual_mix_rate: Some(190.4),
        avg_emission_rate: Some(206.7),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Pacific Gas and Electric Company",
        state: "CA",
        data_year: 2022,
        residual_mix_rate: Some(177.2),
        avg_emission_rate: Some(198.3),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Southern California Edison",
        state: "CA",
        data_year: 2021,
        residual_mix_rate: None,
        avg_emission_rate: Some(438.9),
        protocol: "GHG Protocol",
        emissions_certified: true,
    },
    MarketRow {
        company: "Southern California Edison",
        state: "CA",
        data_year: 2022,
        residual_mix_rate: Some(412.6),
        avg_emission_rate: Some(429.1),
        protocol: "GHG Protocol",
        emissions_certified: true,
    },
    MarketRow {
        company: "San Diego Gas & Electric",
        state: "CA",
        data_year: 2022,
        residual_mix_rate: Some(450.0),
        avg_emission_rate: Some(461.2),
        protocol: "The Climate Registry",
        emissions_certified: false,
    },
    MarketRow {
        company: "Georgia Power",
        state: "GA",
        data_year: 2022,
        residual_mix_rate: Some(790.1),
        avg_emission_rate: Some(802.6),
        protocol: "GHG Protocol",
        emissions_certified: false,
    },
    MarketRow {
        company: "Xcel Energy",
        state: "MN",
        data_year: 2022,
        residual_mix_rate: None,
        avg_emission_rate: Some(851.7),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Duke Energy Carolinas",
        state: "NC",
        data_year: 2021,
        residual_mix_rate: Some(622.0),
        avg_emission_rate: Some(618.4),
        protocol: "GHG Protocol",
        emissions_certified: true,
    },
    MarketRow {
        company: "Duke Energy Carolinas",
        state: "NC",
        data_year: 2022,
        residual_mix_rate: Some(598.3),
        avg_emission_rate: Some(601.9),
        protocol: "GHG Protocol",
        emissions_certified: true,
    },
    MarketRow {
        company: "Consolidated Edison",
        state: "NY",
        data_year: 2021,
        residual_mix_rate: Some(297.4),
        avg_emission_rate: Some(288.9),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Consolidated Edison",
        state: "NY",
        data_year: 2022,
        residual_mix_rate: Some(281.0),
        avg_emission_rate: Some(276.5),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Portland General Electric",
        state: "OR",
        data_year: 2022,
        residual_mix_rate: Some(520.3),
        avg_emission_rate: Some(545.8),
        protocol: "The Climate Registry",
        emissions_certified: true,
    },
    MarketRow {
        company: "Austin Energy",
        state: "TX",
        data_year: 2022,
        residual_mix_rate: Some(610.2),
        avg_emission_rate: None,
        protocol: "GHG Protocol",
        emissions_certified: true,
    },
    MarketRow {
        company: "El Paso Electric",
        state: "TX",
        data_year: 2021,
        residual_mix_rate: None,
        avg_emission_rate: None,
        protocol: "GHG Protocol",
        emissions_certified: false,
    },
];

// NOTE:
// - Rates transcribed from EEI ESG/sustainability template disclosures
//   (2021-2022 data years), for reference. Blank cells in the source
//   disclosure are kept as None.
