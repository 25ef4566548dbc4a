//! Room — a named place holding an ordered list of devices.

use serde::{Deserialize, Serialize};

use crate::counters::InventoryCounters;
use crate::device::Appliance;
use crate::error::{Validate, ValidationError, check_name};
use crate::id::{DeviceId, RoomId};

/// Number of rooms at which the inventory reports it is full.
pub const MAX_ROOMS: usize = 10;

/// A device as seen from a room: its identity and its name at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRef {
    pub id: DeviceId,
    pub name: String,
}

impl DeviceRef {
    #[must_use]
    pub fn of<A: Appliance + ?Sized>(device: &A) -> Self {
        Self {
            id: device.id(),
            name: device.name().to_string(),
        }
    }
}

/// A room with the devices placed in it.
///
/// Placement is not exclusive: the same device may sit in several rooms,
/// or several times in one room.
#[derive(Debug, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    devices: Vec<DeviceRef>,
    #[serde(skip)]
    counters: InventoryCounters,
}

impl Room {
    /// Create a room and count it against `counters`.
    #[must_use]
    pub fn new(name: impl Into<String>, counters: &InventoryCounters) -> Self {
        counters.record_room();
        Self {
            id: RoomId::new(),
            name: name.into(),
            devices: Vec::new(),
            counters: counters.clone(),
        }
    }

    /// Append a device. Duplicates are kept.
    pub fn add_device<A: Appliance + ?Sized>(&mut self, device: &A) {
        self.devices.push(DeviceRef::of(device));
        self.counters.record_device_added();
    }

    /// Remove the first placement of `device`, matched by id.
    ///
    /// Returns whether anything was removed; an absent device leaves the
    /// room and the counters as they were.
    pub fn remove_device<A: Appliance + ?Sized>(&mut self, device: &A) -> bool {
        let id = device.id();
        let Some(index) = self.devices.iter().position(|d| d.id == id) else {
            return false;
        };
        self.devices.remove(index);
        self.counters.record_device_removed();
        true
    }

    #[must_use]
    pub fn devices(&self) -> &[DeviceRef] {
        &self.devices
    }

    #[must_use]
    pub fn contains(&self, id: DeviceId) -> bool {
        self.devices.iter().any(|d| d.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// List the names of the devices in placement order.
    #[must_use]
    pub fn display_devices(&self) -> String {
        let names: Vec<&str> = self.devices.iter().map(|d| d.name.as_str()).collect();
        format!("Devices in {}: {}", self.name, names.join(", "))
    }

    #[must_use]
    pub fn device_amount(&self) -> String {
        let noun = if self.devices.len() == 1 {
            "device"
        } else {
            "devices"
        };
        format!("{} has {} {noun}.", self.name, self.devices.len())
    }

    /// Report how many rooms have been created against `counters`.
    #[must_use]
    pub fn get_total_rooms(counters: &InventoryCounters) -> String {
        format!("You have {} rooms added!", counters.total_rooms())
    }

    /// Report whether another room fits under [`MAX_ROOMS`].
    #[must_use]
    pub fn accommodate_rooms(counters: &InventoryCounters) -> &'static str {
        if counters.total_rooms() >= MAX_ROOMS {
            "There is no more space for rooms!"
        } else {
            "You can add more rooms!"
        }
    }
}

impl Validate for Room {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)
    }
}
