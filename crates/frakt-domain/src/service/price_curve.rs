//! Multi-segment logarithmic price curve
//!
//! A mode's tariff is calibrated by four (weight, price-per-kg) anchors:
//! a fixed low-weight anchor, two anchors linear in the FTL price, and the
//! breakpoint where the per-kg price decays to FTL/weight. Between
//! consecutive anchors the per-kg price follows a power law fit exactly
//! through both endpoints, so the curve reproduces its anchors and stays
//! free of jumps inside a segment.

use frakt_types::QuoteStatus;

use crate::model::ModeConfig;

/// One power-law segment: price_per_kg(w) = a * w^n
#[derive(Clone, Copy, Debug)]
pub struct PowerSegment {
    pub a: f64,
    pub n: f64,
}

impl PowerSegment {
    /// Fit through two calibration points (log-log linear interpolation).
    /// Both y values must be strictly positive.
    fn through(xa: f64, ya: f64, xb: f64, yb: f64) -> Self {
        let n = (yb.ln() - ya.ln()) / (xb.ln() - xa.ln());
        let a = ya / xa.powf(n);
        Self { a, n }
    }

    pub fn price_per_kg(&self, weight_kg: f64) -> f64 {
        self.a * weight_kg.powf(self.n)
    }
}

/// The fitted per-kg price curve for one (mode, FTL price) pair
#[derive(Clone, Debug)]
pub struct PriceCurve {
    anchors: [(f64, f64); 4],
    segments: [PowerSegment; 3],
}

impl PriceCurve {
    /// Derive the calibration anchors and fit the three segments.
    ///
    /// Returns `None` when any anchor's price per kg is non-positive:
    /// the log-log fit is undefined there, which happens when `p2k`/`p2m`
    /// (or `p3k`/`p3m`) are misconfigured relative to a small FTL price.
    pub fn fit(config: &ModeConfig, ftl_price_eur: f64) -> Option<Self> {
        let anchors = [
            (config.p1, config.price_p1 / config.p1),
            (config.p2, (config.p2k * ftl_price_eur + config.p2m) / config.p2),
            (config.p3, (config.p3k * ftl_price_eur + config.p3m) / config.p3),
            (config.default_breakpoint, ftl_price_eur / config.default_breakpoint),
        ];
        if anchors.iter().any(|&(_, y)| y <= 0.0) {
            return None;
        }
        let segment = |i: usize, j: usize| {
            let (xa, ya) = anchors[i];
            let (xb, yb) = anchors[j];
            PowerSegment::through(xa, ya, xb, yb)
        };
        Some(Self {
            anchors,
            segments: [segment(0, 1), segment(1, 2), segment(2, 3)],
        })
    }

    pub fn anchors(&self) -> &[(f64, f64); 4] {
        &self.anchors
    }

    pub fn segments(&self) -> &[PowerSegment; 3] {
        &self.segments
    }
}

/// Outcome of a curve evaluation: either a priced total or a typed rejection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub status: QuoteStatus,
    pub total_price_eur: Option<f64>,
}

impl Evaluation {
    fn rejected(status: QuoteStatus) -> Self {
        Self { status, total_price_eur: None }
    }

    fn priced(total_price_eur: f64) -> Self {
        Self { status: QuoteStatus::Success, total_price_eur: Some(total_price_eur) }
    }
}

/// Total price for a chargeable weight against one mode's tariff.
///
/// Business rejections and malformed calibration come back as statuses;
/// the log/division domain is guarded up front so the math itself can
/// never fail.
pub fn evaluate(config: &ModeConfig, ftl_price_eur: f64, chargeable_weight_kg: f64) -> Evaluation {
    let w = chargeable_weight_kg;
    if w < config.min_allowed_weight_kg || w > config.max_allowed_weight_kg {
        return Evaluation::rejected(QuoteStatus::WeightNotAllowed);
    }

    let monotonic = 0.0 < config.p1
        && config.p1 < config.p2
        && config.p2 < config.p3
        && config.p3 < config.default_breakpoint
        && config.default_breakpoint <= config.max_weight_kg;
    if !monotonic || config.price_p1 <= 0.0 || config.km_price_eur <= 0.0 {
        return Evaluation::rejected(QuoteStatus::BadConfig);
    }

    let Some(curve) = PriceCurve::fit(config, ftl_price_eur) else {
        return Evaluation::rejected(QuoteStatus::BadConfig);
    };

    let ftl = ftl_price_eur;
    let total = if w < config.p1 {
        // Below the first anchor the curve is not fitted; sub-threshold
        // shipments are a linear fraction of FTL over the mode's absolute
        // max weight.
        (ftl * w / config.max_weight_kg).round()
    } else if w < config.p2 {
        segment_total(&curve.segments()[0], w, ftl)
    } else if w < config.p3 {
        segment_total(&curve.segments()[1], w, ftl)
    } else if w <= config.default_breakpoint {
        segment_total(&curve.segments()[2], w, ftl)
    } else if w <= config.max_weight_kg {
        // Flat FTL rate between breakpoint and max weight
        ftl
    } else {
        return Evaluation::rejected(QuoteStatus::WeightExceedsMax);
    };

    Evaluation::priced(total)
}

/// Per-kg rate times the weight, capped at the FTL charter price.
///
/// The fitted value is a price per kg and is multiplied by the weight on
/// top of its own weight exponent; existing tariff agreements are
/// calibrated against this exact form.
fn segment_total(segment: &PowerSegment, weight_kg: f64, ftl_price_eur: f64) -> f64 {
    (segment.price_per_kg(weight_kg) * weight_kg)
        .min(ftl_price_eur)
        .round()
}
