//! Device — a powered appliance with an on/off status and a power draw.
//!
//! The richer device kinds ([`EnergyEfficientDevice`], [`SmartLight`],
//! [`SmartThermo`]) wrap a plain [`Device`] and expose it through the
//! [`Appliance`] trait, so every kind can be switched and placed in a room.

mod energy;
mod light;
mod status;
mod thermo;

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError, check_name};
use crate::id::DeviceId;

pub use energy::{EfficiencyBand, EnergyEfficientDevice, EnergyRated};
pub use light::SmartLight;
pub use status::DeviceStatus;
pub use thermo::SmartThermo;

/// Power draw (watts) above which a device is reported as unsafe.
/// Exactly this value is still safe.
pub const POWER_SAFE_THRESHOLD_WATTS: f64 = 2000.0;

/// A basic device with a power status and consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub status: DeviceStatus,
    /// Rated draw in watts.
    pub power_consumption: f64,
}

impl Device {
    /// Create a device with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, status: DeviceStatus, power_consumption: f64) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            status,
            power_consumption,
        }
    }

    /// Switch the device on.
    pub fn turn_on(&mut self) -> String {
        self.status = DeviceStatus::On;
        format!("{} has been powered on!", self.name)
    }

    /// Switch the device off.
    pub fn turn_off(&mut self) -> String {
        self.status = DeviceStatus::Off;
        format!("{} has been turned off!", self.name)
    }
}

impl Validate for Device {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        if self.power_consumption < 0.0 {
            return Err(ValidationError::Negative {
                field: "power_consumption",
                value: self.power_consumption,
            });
        }
        Ok(())
    }
}

/// Report whether a power draw is within the safe threshold.
#[must_use]
pub fn is_power_safe(power_consumption: f64) -> &'static str {
    if power_consumption > POWER_SAFE_THRESHOLD_WATTS {
        "Your device is consuming too much power!"
    } else {
        "Your device's power consumption is safe."
    }
}

/// Anything built around a [`Device`].
///
/// Implementors only provide access to the inner device; switching and
/// naming come for free.
pub trait Appliance {
    fn device(&self) -> &Device;

    fn device_mut(&mut self) -> &mut Device;

    fn id(&self) -> DeviceId {
        self.device().id
    }

    fn name(&self) -> &str {
        &self.device().name
    }

    fn status(&self) -> DeviceStatus {
        self.device().status
    }

    fn turn_on(&mut self) -> String {
        self.device_mut().turn_on()
    }

    fn turn_off(&mut self) -> String {
        self.device_mut().turn_off()
    }

    /// [`is_power_safe`] applied to this device's own draw.
    fn power_safety(&self) -> &'static str {
        is_power_safe(self.device().power_consumption)
    }
}

impl Appliance for Device {
    fn device(&self) -> &Device {
        self
    }

    fn device_mut(&mut self) -> &mut Device {
        self
    }
}
