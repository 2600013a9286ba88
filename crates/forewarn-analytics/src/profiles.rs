//! Built-in benchmark profile catalog.
//!
//! One profile per industry group of the merchant dataset, plus a
//! nationwide default. Lookups accept either the frontend industry code
//! (`"cafe"`) or the Korean display name (`"카페"`); unknown industries
//! fall back to the default profile. The data itself is nationwide, so the
//! requested region is echoed, not used for selection.

use forewarn_core::models::benchmark::{
    BenchmarkMetrics, BenchmarkProfile, MetricStat, RiskDistribution,
};

pub const NATIONWIDE: &str = "전국";

struct ProfileSeed {
    code: &'static str,
    name: &'static str,
    average_risk_score: f64,
    /// (average, median) per metric.
    revenue: (f64, f64),
    expenses: (f64, f64),
    customers: (f64, f64),
    profit_margin: (f64, f64),
    /// (green, yellow, orange, red), in percent.
    distribution: (u8, u8, u8, u8),
}

const DEFAULT_SEED: ProfileSeed = ProfileSeed {
    code: "",
    name: "전체",
    average_risk_score: 65.0,
    revenue: (45_000_000.0, 38_000_000.0),
    expenses: (35_000_000.0, 30_000_000.0),
    customers: (850.0, 720.0),
    profit_margin: (22.0, 21.0),
    distribution: (25, 40, 25, 10),
};

const CATALOG: [ProfileSeed; 6] = [
    ProfileSeed {
        code: "restaurant",
        name: "음식점",
        average_risk_score: 63.0,
        revenue: (48_000_000.0, 40_000_000.0),
        expenses: (38_000_000.0, 33_000_000.0),
        customers: (900.0, 750.0),
        profit_margin: (20.0, 19.0),
        distribution: (22, 40, 27, 11),
    },
    ProfileSeed {
        code: "cafe",
        name: "카페",
        average_risk_score: 62.0,
        revenue: (32_000_000.0, 27_000_000.0),
        expenses: (26_000_000.0, 22_000_000.0),
        customers: (1_100.0, 950.0),
        profit_margin: (18.0, 17.0),
        distribution: (20, 42, 27, 11),
    },
    ProfileSeed {
        code: "fastfood",
        name: "패스트푸드",
        average_risk_score: 66.0,
        revenue: (52_000_000.0, 44_000_000.0),
        expenses: (41_000_000.0, 35_000_000.0),
        customers: (1_300.0, 1_100.0),
        profit_margin: (21.0, 20.0),
        distribution: (26, 40, 24, 10),
    },
    ProfileSeed {
        code: "pub",
        name: "주점",
        average_risk_score: 58.0,
        revenue: (38_000_000.0, 31_000_000.0),
        expenses: (30_000_000.0, 26_000_000.0),
        customers: (600.0, 500.0),
        profit_margin: (19.0, 18.0),
        distribution: (18, 38, 30, 14),
    },
    ProfileSeed {
        code: "retail",
        name: "소매/식자재",
        average_risk_score: 68.0,
        revenue: (55_000_000.0, 47_000_000.0),
        expenses: (46_000_000.0, 39_000_000.0),
        customers: (1_500.0, 1_250.0),
        profit_margin: (16.0, 15.0),
        distribution: (28, 41, 22, 9),
    },
    ProfileSeed {
        code: "other",
        name: "기타",
        average_risk_score: 64.0,
        revenue: (40_000_000.0, 34_000_000.0),
        expenses: (32_000_000.0, 27_000_000.0),
        customers: (700.0, 580.0),
        profit_margin: (20.0, 19.0),
        distribution: (24, 40, 26, 10),
    },
];

/// Profile for an industry and region. `None` or unknown industry selects
/// the nationwide default; the region is echoed into the profile.
pub fn profile_for(industry: Option<&str>, region: Option<&str>) -> BenchmarkProfile {
    let region = region
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(NATIONWIDE);

    let seed = industry
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|query| {
            CATALOG
                .iter()
                .find(|seed| seed.code.eq_ignore_ascii_case(query) || seed.name == query)
        })
        .unwrap_or(&DEFAULT_SEED);

    build(seed, region)
}

fn build(seed: &ProfileSeed, region: &str) -> BenchmarkProfile {
    let stat = |(average, median): (f64, f64)| MetricStat { average, median };
    let (green, yellow, orange, red) = seed.distribution;
    BenchmarkProfile {
        industry: seed.name.to_string(),
        region: region.to_string(),
        average_risk_score: seed.average_risk_score,
        metrics: BenchmarkMetrics {
            revenue: stat(seed.revenue),
            expenses: stat(seed.expenses),
            customers: stat(seed.customers),
            profit_margin: stat(seed.profit_margin),
        },
        risk_distribution: RiskDistribution {
            green,
            yellow,
            orange,
            red,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_the_nationwide_baseline() {
        let profile = profile_for(None, None);
        assert_eq!(profile.industry, "전체");
        assert_eq!(profile.region, "전국");
        assert_eq!(profile.average_risk_score, 65.0);
        assert_eq!(profile.metrics.revenue.average, 45_000_000.0);
        assert_eq!(profile.metrics.revenue.median, 38_000_000.0);
        assert_eq!(profile.metrics.customers.average, 850.0);
        assert_eq!(profile.metrics.profit_margin.median, 21.0);
        assert_eq!(profile.risk_distribution.yellow, 40);
    }

    #[test]
    fn industry_code_and_korean_name_select_the_same_profile() {
        let by_code = profile_for(Some("cafe"), None);
        let by_name = profile_for(Some("카페"), None);
        assert_eq!(by_code, by_name);
        assert_eq!(by_code.industry, "카페");
    }

    #[test]
    fn codes_match_case_insensitively() {
        assert_eq!(profile_for(Some("CAFE"), None).industry, "카페");
    }

    #[test]
    fn unknown_industry_falls_back_to_default() {
        let profile = profile_for(Some("네일샵"), None);
        assert_eq!(profile.industry, "전체");
        assert_eq!(profile.average_risk_score, 65.0);
    }

    #[test]
    fn blank_inputs_fall_back_to_defaults() {
        let profile = profile_for(Some("   "), Some(""));
        assert_eq!(profile.industry, "전체");
        assert_eq!(profile.region, "전국");
    }

    #[test]
    fn requested_region_is_echoed() {
        let profile = profile_for(Some("pub"), Some("서울"));
        assert_eq!(profile.industry, "주점");
        assert_eq!(profile.region, "서울");
    }

    #[test]
    fn every_distribution_sums_to_one_hundred() {
        let mut profiles: Vec<BenchmarkProfile> = CATALOG
            .iter()
            .map(|seed| build(seed, NATIONWIDE))
            .collect();
        profiles.push(profile_for(None, None));

        for profile in profiles {
            let d = profile.risk_distribution;
            let total = u32::from(d.green) + u32::from(d.yellow) + u32::from(d.orange) + u32::from(d.red);
            assert_eq!(total, 100, "distribution of {} must sum to 100", profile.industry);
        }
    }
}
