//! IEC 60063 preferred-number series (E-series).
//!
//! Mantissas are kept as integer hundredths (`165` is 1.65) so that decade
//! scaling of values at or above 1 Ω is exact.

/// Decade multipliers covered by the standard catalog, 1 Ω to 1 MΩ.
pub const DECADES: [f64; 7] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

/// E24 mantissas. E3/E6/E12 are strided subsets of it.
pub const E24: [u32; 24] = [
    100, 110, 120, 130, 150, 160, 180, 200, 220, 240, 270, 300, 330, 360, 390, 430, 470, 510, 560,
    620, 680, 750, 820, 910,
];

/// Mantissas of the `E<n>` series in ascending order.
///
/// `n` of 3, 6, 12 or 24 returns the historical values, 48, 96 and 192 are
/// computed as `10^(i/n)` rounded to three significant digits. Any other
/// `n` yields an empty list.
pub fn mantissas(n: usize) -> Vec<u32> {
    match n {
        3 | 6 | 12 | 24 => E24.iter().step_by(24 / n).copied().collect(),
        48 | 96 | 192 => (0..n)
            .map(|i| (10f64.powf(i as f64 / n as f64) * 100.0).round() as u32)
            .collect(),
        _ => Vec::new(),
    }
}

/// Every value of the `E<n>` series across [`DECADES`], ascending.
pub fn values(n: usize) -> Vec<f64> {
    let mantissas = mantissas(n);
    DECADES
        .iter()
        .flat_map(|&decade| mantissas.iter().map(move |&m| scale(m, decade)))
        .collect()
}

/// `mantissa / 100 * decade`, multiplying first to keep the result exact.
pub fn scale(mantissa: u32, decade: f64) -> f64 {
    mantissa as f64 * decade / 100.0
}

/// One row of the standard catalog layout: a series stocked at a tolerance
/// with a typical TCR in ppm/°C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGrade {
    pub series: usize,
    pub tolerance_pct: f64,
    pub tcr_ppm: f64,
}

/// Grades stocked by [`StockCatalog::standard`](super::StockCatalog::standard),
/// loosest first.
pub const STANDARD_GRADES: [SeriesGrade; 5] = [
    SeriesGrade {
        series: 24,
        tolerance_pct: 5.0,
        tcr_ppm: 200.0,
    },
    SeriesGrade {
        series: 96,
        tolerance_pct: 1.0,
        tcr_ppm: 100.0,
    },
    SeriesGrade {
        series: 192,
        tolerance_pct: 0.5,
        tcr_ppm: 50.0,
    },
    SeriesGrade {
        series: 192,
        tolerance_pct: 0.25,
        tcr_ppm: 25.0,
    },
    SeriesGrade {
        series: 192,
        tolerance_pct: 0.1,
        tcr_ppm: 25.0,
    },
];
