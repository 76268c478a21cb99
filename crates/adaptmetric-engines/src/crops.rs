/// Yield-response parameters for one crop: the optimal temperature band,
/// the rainfall optimum, and a price proxy for the revenue scale.
#[derive(Clone, Copy, Debug)]
pub struct CropProfile {
    pub name: &'static str,
    /// Lower edge of the optimal temperature band, °C.
    pub t_min_c: f64,
    /// Upper edge of the optimal temperature band, °C.
    pub t_max_c: f64,
    /// Annual rainfall optimum, mm.
    pub optimal_rain_mm: f64,
    /// Market price proxy, USD per ton.
    pub price_per_ton_usd: f64,
}

const PROFILES: &[CropProfile] = &[
    CropProfile {
        name: "maize",
        t_min_c: 20.0,
        t_max_c: 30.0,
        optimal_rain_mm: 800.0,
        price_per_ton_usd: 4800.0,
    },
    CropProfile {
        name: "rice",
        t_min_c: 22.0,
        t_max_c: 32.0,
        optimal_rain_mm: 1500.0,
        price_per_ton_usd: 4000.0,
    },
    CropProfile {
        name: "wheat",
        t_min_c: 15.0,
        t_max_c: 25.0,
        optimal_rain_mm: 600.0,
        price_per_ton_usd: 3500.0,
    },
    CropProfile {
        name: "soy",
        t_min_c: 20.0,
        t_max_c: 30.0,
        optimal_rain_mm: 700.0,
        price_per_ton_usd: 5000.0,
    },
    CropProfile {
        name: "cocoa",
        t_min_c: 21.0,
        t_max_c: 32.0,
        optimal_rain_mm: 1800.0,
        price_per_ton_usd: 2500.0,
    },
];

/// Look up the curve parameters for a crop type. Case-insensitive; an
/// unknown crop is a configuration error at the engine boundary.
pub fn profile_for(crop: &str) -> Option<&'static CropProfile> {
    PROFILES.iter().find(|p| p.name.eq_ignore_ascii_case(crop))
}
