use serde::{Deserialize, Serialize};

/// A raw sensor reading as reported by a field station.
///
/// Device firmware revisions disagree on field names (`temperature` vs
/// `temperature_C`, `humidity` vs `humidity_`, `rainrate_mm_h` vs `rainfall`),
/// and any subset of sensors may be offline, so every field is optional.
/// Unknown keys in the payload are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: Option<f64>,
    #[serde(rename = "temperature_C")]
    pub temperature_c: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(rename = "humidity_")]
    pub humidity_alt: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub wind_kmh: Option<f64>,
    pub rainrate_mm_h: Option<f64>,
    pub rainfall: Option<f64>,
    pub light_lux: Option<f64>,
    #[serde(rename = "sol_power_W")]
    pub sol_power_w: Option<f64>,
    #[serde(rename = "sol_voltage_V")]
    pub sol_voltage_v: Option<f64>,
}

impl SensorReading {
    /// Resolve field-name variants into the canonical numeric view used by
    /// the analyzers. Absent fields collapse to zero; a missing sensor is
    /// indistinguishable from a zero reading past this boundary.
    pub fn canonicalize(&self) -> CanonicalReading {
        CanonicalReading {
            temperature: self.temperature.or(self.temperature_c).unwrap_or(0.0),
            humidity: self.humidity.or(self.humidity_alt).unwrap_or(0.0),
            soil_moisture: self.soil_moisture.unwrap_or(0.0),
            ph: self.ph.unwrap_or(0.0),
            nitrogen: self.nitrogen.unwrap_or(0.0),
            phosphorus: self.phosphorus.unwrap_or(0.0),
            potassium: self.potassium.unwrap_or(0.0),
            wind_kmh: self.wind_kmh.unwrap_or(0.0),
            rain_rate_mm_h: self.rainrate_mm_h.or(self.rainfall).unwrap_or(0.0),
            light_lux: self.light_lux.unwrap_or(0.0),
            sol_power_w: self.sol_power_w.unwrap_or(0.0),
            sol_voltage_v: self.sol_voltage_v.unwrap_or(0.0),
        }
    }
}

/// The normalized, all-fields-present view of a reading.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CanonicalReading {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub wind_kmh: f64,
    pub rain_rate_mm_h: f64,
    pub light_lux: f64,
    pub sol_power_w: f64,
    pub sol_voltage_v: f64,
}
