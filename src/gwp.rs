use serde::{Deserialize, Serialize};

/// 다루는 온실가스 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gas {
    Co2,
    Ch4,
    N2o,
}

impl Gas {
    pub fn symbol(self) -> &'static str {
        match self {
            Gas::Co2 => "CO2",
            Gas::Ch4 => "CH4",
            Gas::N2o => "N2O",
        }
    }
}

/// IPCC 평가보고서 버전. GWP 표의 열에 해당한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentReport {
    Ar6,
    Ar5,
    Ar4,
    Sar,
}

impl AssessmentReport {
    pub const ALL: [AssessmentReport; 4] = [
        AssessmentReport::Ar6,
        AssessmentReport::Ar5,
        AssessmentReport::Ar4,
        AssessmentReport::Sar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssessmentReport::Ar6 => "AR6",
            AssessmentReport::Ar5 => "AR5",
            AssessmentReport::Ar4 => "AR4",
            AssessmentReport::Sar => "SAR",
        }
    }
}

/// GWP 조회 시 발생 가능한 오류. 스키마 오류는 복구 불가로 취급한다.
#[derive(Debug)]
pub enum GwpError {
    /// GWP 표에 해당 가스 행이 없음
    GasRowMissing(&'static str),
    /// 해당 보고서 열이 가스 행에 기록되어 있지 않음
    ReportColumnMissing(&'static str),
    /// 알 수 없는 평가보고서 식별자
    UnknownReport(String),
}

impl std::fmt::Display for GwpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GwpError::GasRowMissing(gas) => write!(f, "GWP 표에 가스 행이 없음: {gas}"),
            GwpError::ReportColumnMissing(report) => {
                write!(f, "GWP 표에 보고서 열이 없음: {report}")
            }
            GwpError::UnknownReport(s) => write!(f, "알 수 없는 평가보고서: {s}"),
        }
    }
}

impl std::error::Error for GwpError {}

/// 3개 가스에 대한 GWP 계수 벡터. CO2 계수는 표 데이터상 모든 보고서에서 1.0이다.
#[derive(Debug, Clone, Copy)]
pub struct GwpVector {
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
}

#[derive(Debug, Clone, Copy)]
struct GwpRow {
    gas: Gas,
    /// (보고서, 100년 GWP) 쌍. 열 누락 검출을 위해 쌍 단위로 기록한다.
    values: &'static [(AssessmentReport, f64)],
}

const GWP_TABLE: &[GwpRow] = &[
    GwpRow {
        gas: Gas::Co2,
        values: &[
            (AssessmentReport::Ar6, 1.0),
            (AssessmentReport::Ar5, 1.0),
            (AssessmentReport::Ar4, 1.0),
            (AssessmentReport::Sar, 1.0),
        ],
    },
    GwpRow {
        gas: Gas::Ch4,
        values: &[
            (AssessmentReport::Ar6, 29.8),
            (AssessmentReport::Ar5, 28.0),
            (AssessmentReport::Ar4, 25.0),
            (AssessmentReport::Sar, 21.0),
        ],
    },
    GwpRow {
        gas: Gas::N2o,
        values: &[
            (AssessmentReport::Ar6, 273.0),
            (AssessmentReport::Ar5, 265.0),
            (AssessmentReport::Ar4, 298.0),
            (AssessmentReport::Sar, 310.0),
        ],
    },
];

fn value_for(gas: Gas, report: AssessmentReport) -> Result<f64, GwpError> {
    let row = GWP_TABLE
        .iter()
        .find(|r| r.gas == gas)
        .ok_or(GwpError::GasRowMissing(gas.symbol()))?;
    row.values
        .iter()
        .find(|(r, _)| *r == report)
        .map(|(_, v)| *v)
        .ok_or(GwpError::ReportColumnMissing(report.label()))
}

/// 평가보고서 버전에 해당하는 3개 가스 GWP 벡터를 표에서 추출한다.
pub fn resolve(report: AssessmentReport) -> Result<GwpVector, GwpError> {
    Ok(GwpVector {
        co2: value_for(Gas::Co2, report)?,
        ch4: value_for(Gas::Ch4, report)?,
        n2o: value_for(Gas::N2o, report)?,
    })
}

/// 문자열로 전달된 보고서 식별자를 enum으로 변환한다.
pub fn parse_assessment_report(s: &str) -> Result<AssessmentReport, GwpError> {
    match s.to_lowercase().as_str() {
        "ar6" => Ok(AssessmentReport::Ar6),
        "ar5" => Ok(AssessmentReport::Ar5),
        "ar4" => Ok(AssessmentReport::Ar4),
        "sar" => Ok(AssessmentReport::Sar),
        _ => Err(GwpError::UnknownReport(s.to_string())),
    }
}

// NOTE:
// - 100-year GWP values per IPCC assessment reports: AR6 (CH4-fossil 29.8, N2O 273),
//   AR5 (28, 265), AR4 (25, 298), SAR (21, 310).
