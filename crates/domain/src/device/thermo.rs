//! Smart thermostat — an energy-rated device with a temperature target.

use serde::{Deserialize, Serialize};

use super::{Appliance, Device, EnergyEfficientDevice, EnergyRated};
use crate::error::{Validate, ValidationError};

/// A thermostat holding the measured and the requested temperature (°F).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartThermo {
    #[serde(flatten)]
    pub base: EnergyEfficientDevice,
    pub current_temperature: f64,
    pub target_temperature: f64,
}

impl SmartThermo {
    #[must_use]
    pub fn new(
        base: EnergyEfficientDevice,
        current_temperature: f64,
        target_temperature: f64,
    ) -> Self {
        Self {
            base,
            current_temperature,
            target_temperature,
        }
    }

    /// Change the target. The current temperature is left as it was.
    pub fn set_temperature(&mut self, new_temp: f64) -> String {
        self.target_temperature = new_temp;
        format!(
            "Temperature set from {}°F to {}°F.",
            self.current_temperature, self.target_temperature
        )
    }
}

impl Appliance for SmartThermo {
    fn device(&self) -> &Device {
        &self.base.device
    }

    fn device_mut(&mut self) -> &mut Device {
        &mut self.base.device
    }
}

impl EnergyRated for SmartThermo {
    fn energy_efficiency_rating(&self) -> i32 {
        self.base.energy_efficiency_rating
    }
}

impl Validate for SmartThermo {
    fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceStatus;

    fn thermostat() -> SmartThermo {
        SmartThermo::new(
            EnergyEfficientDevice::new("Thermostat", DeviceStatus::On, 3000.0, 100),
            75.0,
            61.0,
        )
    }

    #[test]
    fn should_report_transition_from_current_to_target() {
        let mut thermo = thermostat();
        assert_eq!(
            thermo.set_temperature(68.0),
            "Temperature set from 75°F to 68°F."
        );
        assert!((thermo.target_temperature - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_leave_current_temperature_untouched() {
        let mut thermo = thermostat();
        thermo.set_temperature(68.0);
        thermo.set_temperature(70.5);
        assert!((thermo.current_temperature - 75.0).abs() < f64::EPSILON);
        assert_eq!(
            thermo.set_temperature(71.5),
            "Temperature set from 75°F to 71.5°F."
        );
    }

    #[test]
    fn should_run_perfectly_at_rating_100() {
        assert_eq!(
            thermostat().display_efficiency(),
            "Thermostat is running perfectly!"
        );
    }

    #[test]
    fn should_flag_high_draw_as_unsafe() {
        assert_eq!(
            thermostat().power_safety(),
            "Your device is consuming too much power!"
        );
    }
}
