//! Smart light — an energy-rated device with a brightness level.

use serde::{Deserialize, Serialize};

use super::{Appliance, Device, EnergyEfficientDevice, EnergyRated};
use crate::error::{Validate, ValidationError, check_range};

/// A light whose brightness can be adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartLight {
    #[serde(flatten)]
    pub base: EnergyEfficientDevice,
    pub brightness_level: i32,
}

impl SmartLight {
    #[must_use]
    pub fn new(base: EnergyEfficientDevice, brightness_level: i32) -> Self {
        Self {
            base,
            brightness_level,
        }
    }

    /// Set the brightness. Any value is accepted.
    pub fn adjust_brightness(&mut self, level: i32) -> String {
        self.brightness_level = level;
        format!("Brightness level set to {}.", self.brightness_level)
    }
}

impl Appliance for SmartLight {
    fn device(&self) -> &Device {
        &self.base.device
    }

    fn device_mut(&mut self) -> &mut Device {
        &mut self.base.device
    }
}

impl EnergyRated for SmartLight {
    fn energy_efficiency_rating(&self) -> i32 {
        self.base.energy_efficiency_rating
    }
}

impl Validate for SmartLight {
    fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()?;
        check_range("brightness_level", i64::from(self.brightness_level), 0, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceStatus;

    fn kitchen_light() -> SmartLight {
        SmartLight::new(
            EnergyEfficientDevice::new("Kitchen Lights", DeviceStatus::On, 90.0, 90),
            100,
        )
    }

    #[test]
    fn should_set_brightness_when_adjusted() {
        let mut light = kitchen_light();
        assert_eq!(light.adjust_brightness(80), "Brightness level set to 80.");
        assert_eq!(light.brightness_level, 80);
    }

    #[test]
    fn should_accept_out_of_range_brightness_without_validation() {
        let mut light = kitchen_light();
        light.adjust_brightness(250);
        assert_eq!(light.brightness_level, 250);
        assert!(matches!(
            light.validate(),
            Err(ValidationError::OutOfRange {
                field: "brightness_level",
                ..
            })
        ));
    }

    #[test]
    fn should_report_status_of_inner_device() {
        let mut light = kitchen_light();
        light.turn_off();
        assert_eq!(
            light.get_status(),
            "Device: Kitchen Lights | Status: off | Energy Efficiency: 90"
        );
    }
}
