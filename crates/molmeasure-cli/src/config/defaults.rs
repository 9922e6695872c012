use molmeasure::core::bonds::{DEFAULT_MAX_BOND, DEFAULT_MIN_BOND};

pub struct DefaultsConfig {
    pub min_bond: f64,
    pub max_bond: f64,
    pub include_angles: bool,
    pub degrees: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_bond: DEFAULT_MIN_BOND,
            max_bond: DEFAULT_MAX_BOND,
            include_angles: true,
            degrees: true,
        }
    }
}
