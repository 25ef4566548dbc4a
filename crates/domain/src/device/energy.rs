//! Energy-efficient devices and the servicing bands derived from their rating.

use serde::{Deserialize, Serialize};

use super::{Appliance, Device, DeviceStatus};
use crate::error::{Validate, ValidationError, check_range};

/// Servicing recommendation for an efficiency rating.
///
/// Only a rating of exactly 100 counts as perfect; 90 through 99 fall
/// through to [`ServiceNow`](Self::ServiceNow) like anything below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    Perfect,
    Optimal,
    Good,
    ServiceSoon,
    ServiceNow,
}

impl EfficiencyBand {
    #[must_use]
    pub fn from_rating(rating: i32) -> Self {
        match rating {
            100 => Self::Perfect,
            80..=89 => Self::Optimal,
            70..=79 => Self::Good,
            60..=69 => Self::ServiceSoon,
            _ => Self::ServiceNow,
        }
    }

    /// Render the recommendation for a named device.
    #[must_use]
    pub fn message(self, device_name: &str) -> String {
        match self {
            Self::Perfect => format!("{device_name} is running perfectly!"),
            Self::Optimal => format!("{device_name} is running optimally!"),
            Self::Good => format!("{device_name} is running well!"),
            Self::ServiceSoon => format!("{device_name} needs servicing soon!"),
            Self::ServiceNow => format!("{device_name} needs immediate servicing!"),
        }
    }
}

/// A device that carries an energy efficiency rating.
pub trait EnergyRated: Appliance {
    /// Rating on a nominal 0–100 scale. Not clamped.
    fn energy_efficiency_rating(&self) -> i32;

    fn get_status(&self) -> String {
        format!(
            "Device: {} | Status: {} | Energy Efficiency: {}",
            self.name(),
            self.status(),
            self.energy_efficiency_rating()
        )
    }

    fn efficiency_band(&self) -> EfficiencyBand {
        EfficiencyBand::from_rating(self.energy_efficiency_rating())
    }

    fn display_efficiency(&self) -> String {
        self.efficiency_band().message(self.name())
    }
}

/// A [`Device`] with an energy efficiency rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEfficientDevice {
    #[serde(flatten)]
    pub device: Device,
    pub energy_efficiency_rating: i32,
}

impl EnergyEfficientDevice {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: DeviceStatus,
        power_consumption: f64,
        energy_efficiency_rating: i32,
    ) -> Self {
        Self {
            device: Device::new(name, status, power_consumption),
            energy_efficiency_rating,
        }
    }
}

impl Appliance for EnergyEfficientDevice {
    fn device(&self) -> &Device {
        &self.device
    }

    fn device_mut(&mut self) -> &mut Device {
        &mut self.device
    }
}

impl EnergyRated for EnergyEfficientDevice {
    fn energy_efficiency_rating(&self) -> i32 {
        self.energy_efficiency_rating
    }
}

impl Validate for EnergyEfficientDevice {
    fn validate(&self) -> Result<(), ValidationError> {
        self.device.validate()?;
        check_range(
            "energy_efficiency_rating",
            i64::from(self.energy_efficiency_rating),
            0,
            100,
        )
    }
}
