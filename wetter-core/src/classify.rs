//! Turn raw angular and phase measurements into human-readable labels.
//!
//! Both classifiers are table driven: a sorted list of boundaries is scanned
//! and the first entry whose bound lies above the input wins.

use serde::Serialize;

/// One of the 16 compass points, labelled with the German abbreviations the
/// upstream `lang=de` texts use (O for east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
    Unknown,
}

/// Exclusive upper bound of each sector. North is split across the wrap, so it
/// appears at both ends; the final bound is inclusive to take exactly 360°.
const SECTORS: [(f64, CompassPoint); 17] = [
    (11.25, CompassPoint::N),
    (33.75, CompassPoint::Nne),
    (56.25, CompassPoint::Ne),
    (78.75, CompassPoint::Ene),
    (101.25, CompassPoint::E),
    (123.75, CompassPoint::Ese),
    (146.25, CompassPoint::Se),
    (168.75, CompassPoint::Sse),
    (191.25, CompassPoint::S),
    (213.75, CompassPoint::Ssw),
    (236.25, CompassPoint::Sw),
    (258.75, CompassPoint::Wsw),
    (281.25, CompassPoint::W),
    (303.75, CompassPoint::Wnw),
    (326.25, CompassPoint::Nw),
    (348.75, CompassPoint::Nnw),
    (360.0, CompassPoint::N),
];

impl CompassPoint {
    /// Classify a bearing in degrees. Any finite value is wrapped into [0, 360).
    pub fn from_bearing(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return CompassPoint::Unknown;
        }
        let wrapped = degrees.rem_euclid(360.0);

        SECTORS
            .iter()
            .enumerate()
            .find(|(idx, (upper, _))| {
                if *idx == SECTORS.len() - 1 { wrapped <= *upper } else { wrapped < *upper }
            })
            .map(|(_, (_, point))| *point)
            .unwrap_or(CompassPoint::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Nne => "NNO",
            CompassPoint::Ne => "NO",
            CompassPoint::Ene => "ONO",
            CompassPoint::E => "O",
            CompassPoint::Ese => "OSO",
            CompassPoint::Se => "SO",
            CompassPoint::Sse => "SSO",
            CompassPoint::S => "S",
            CompassPoint::Ssw => "SSW",
            CompassPoint::Sw => "SW",
            CompassPoint::Wsw => "WSW",
            CompassPoint::W => "W",
            CompassPoint::Wnw => "WNW",
            CompassPoint::Nw => "NW",
            CompassPoint::Nnw => "NNW",
            CompassPoint::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
    Unknown,
}

/// Named points of the lunar cycle. A fraction strictly between two points
/// maps to the span label stored with the upper point.
const PHASE_POINTS: [(f64, MoonPhase, MoonPhase); 5] = [
    (0.0, MoonPhase::NewMoon, MoonPhase::Unknown),
    (0.25, MoonPhase::FirstQuarter, MoonPhase::WaxingCrescent),
    (0.5, MoonPhase::FullMoon, MoonPhase::WaxingGibbous),
    (0.75, MoonPhase::LastQuarter, MoonPhase::WaningGibbous),
    (1.0, MoonPhase::NewMoon, MoonPhase::WaningCrescent),
];

impl MoonPhase {
    /// Classify the upstream `moon_phase` fraction (0 and 1 are new moon,
    /// 0.5 is full moon). Values outside [0, 1] are `Unknown`.
    pub fn from_fraction(fraction: f64) -> Self {
        if !(0.0..=1.0).contains(&fraction) {
            return MoonPhase::Unknown;
        }

        for (point, at_point, below_point) in PHASE_POINTS {
            if fraction == point {
                return at_point;
            }
            if fraction < point {
                return below_point;
            }
        }

        MoonPhase::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "new moon",
            MoonPhase::WaxingCrescent => "waxing crescent",
            MoonPhase::FirstQuarter => "first quarter",
            MoonPhase::WaxingGibbous => "waxing gibbous",
            MoonPhase::FullMoon => "full moon",
            MoonPhase::WaningGibbous => "waning gibbous",
            MoonPhase::LastQuarter => "last quarter",
            MoonPhase::WaningCrescent => "waning crescent",
            MoonPhase::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// m/s to km/h.
pub fn km_per_hour(meters_per_second: f64) -> f64 {
    meters_per_second * 3.6
}
