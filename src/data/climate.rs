//! Temperature classification data structures.

/// Coarse temperature band derived from a Celsius reading.
///
/// Bands are half-open with the lower bound inclusive:
/// - Freezing: below 0°C
/// - Cold: 0°C up to 15°C
/// - Moderate: 15°C up to 25°C
/// - Warm: 25°C up to 35°C
/// - Hot: 35°C and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureCategory {
    /// Below 0°C.
    Freezing,
    /// 0°C to below 15°C.
    Cold,
    /// 15°C to below 25°C.
    Moderate,
    /// 25°C to below 35°C.
    Warm,
    /// 35°C and above.
    Hot,
}

impl TemperatureCategory {
    /// Classify a Celsius temperature.
    ///
    /// # Example
    ///
    /// ```
    /// use lesson_services::TemperatureCategory;
    ///
    /// assert_eq!(TemperatureCategory::from_celsius(-0.1), TemperatureCategory::Freezing);
    /// assert_eq!(TemperatureCategory::from_celsius(15.0), TemperatureCategory::Moderate);
    /// ```
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < 0.0 {
            Self::Freezing
        } else if celsius < 15.0 {
            Self::Cold
        } else if celsius < 25.0 {
            Self::Moderate
        } else if celsius < 35.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Get the lowercase tag for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freezing => "freezing",
            Self::Cold => "cold",
            Self::Moderate => "moderate",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }
}

impl std::fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(TemperatureCategory::from_celsius(-10.0), TemperatureCategory::Freezing);
        assert_eq!(TemperatureCategory::from_celsius(0.0), TemperatureCategory::Cold);
        assert_eq!(TemperatureCategory::from_celsius(14.99), TemperatureCategory::Cold);
        assert_eq!(TemperatureCategory::from_celsius(15.0), TemperatureCategory::Moderate);
        assert_eq!(TemperatureCategory::from_celsius(24.99), TemperatureCategory::Moderate);
        assert_eq!(TemperatureCategory::from_celsius(25.0), TemperatureCategory::Warm);
        assert_eq!(TemperatureCategory::from_celsius(34.99), TemperatureCategory::Warm);
        assert_eq!(TemperatureCategory::from_celsius(35.0), TemperatureCategory::Hot);
        assert_eq!(TemperatureCategory::from_celsius(60.0), TemperatureCategory::Hot);
    }

    #[test]
    fn test_names() {
        assert_eq!(TemperatureCategory::Freezing.name(), "freezing");
        assert_eq!(TemperatureCategory::Hot.to_string(), "hot");
    }
}
