//! Showcase — a scripted walk through the inventory model.
//!
//! Builds a room, three users and four devices, then exercises each
//! operation once and collects the line every call returns.

use serde::Serialize;

use smarthome_domain::counters::CounterSnapshot;
use smarthome_domain::device::{
    Appliance, DeviceStatus, EnergyEfficientDevice, EnergyRated, SmartLight, SmartThermo,
    is_power_safe,
};
use smarthome_domain::error::InventoryError;
use smarthome_domain::user::{UserRef, roles};

use crate::inventory::Inventory;
use crate::memory_store::InMemoryUserStore;
use crate::services::directory_service::DirectoryService;

/// Output of a showcase run.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseReport {
    /// One line per operation, in call order.
    pub lines: Vec<String>,
    /// Counter values once the script has finished.
    #[serde(flatten)]
    pub counters: CounterSnapshot,
    /// Users entered in the shared directory, in registration order.
    pub directory: Vec<UserRef>,
}

/// Run the walkthrough against `inventory`.
///
/// # Errors
///
/// Returns a validation error when `inventory` is strict and one of the
/// scripted entities fails its checks, or a directory error if a user is
/// registered twice.
#[tracing::instrument(skip(inventory))]
pub fn run(inventory: &Inventory) -> Result<ShowcaseReport, InventoryError> {
    let mut lines = Vec::new();

    let mut room = inventory.create_room("Living Room")?;

    let admin = inventory.create_admin("Nazir", roles::ADMIN, "Living Room")?;
    let guest = inventory.create_guest("Arden", roles::GUEST)?;

    let mut system = inventory.create_user("System", roles::MANAGER)?;
    system.add_user(&admin);
    system.add_user(&guest);

    let mut directory = DirectoryService::new(InMemoryUserStore::new());
    directory.register(&system)?;
    directory.register(&admin)?;
    directory.register(&guest)?;

    lines.push(inventory.users_message());

    let mut kitchen_light = SmartLight::new(
        EnergyEfficientDevice::new("Kitchen Lights", DeviceStatus::On, 90.0, 90),
        100,
    );
    let mut house_thermo = SmartThermo::new(
        EnergyEfficientDevice::new("Thermostat", DeviceStatus::On, 3000.0, 100),
        75.0,
        61.0,
    );
    let mut desktop = EnergyEfficientDevice::new("Desktop", DeviceStatus::On, 1500.0, 100);
    let mut tv = EnergyEfficientDevice::new("TV", DeviceStatus::Off, 3000.0, 69);

    inventory.admit("smart_light", &kitchen_light)?;
    inventory.admit("smart_thermo", &house_thermo)?;
    inventory.admit("energy_efficient_device", &desktop)?;
    inventory.admit("energy_efficient_device", &tv)?;

    room.add_device(&desktop);
    room.add_device(&tv);

    lines.push(kitchen_light.turn_off());
    lines.push(kitchen_light.get_status());
    lines.push(kitchen_light.turn_on());
    lines.push(kitchen_light.adjust_brightness(80));

    lines.push(house_thermo.get_status());
    lines.push(house_thermo.display_efficiency());
    lines.push(house_thermo.set_temperature(68.0));

    lines.push(inventory.accommodate_rooms().to_string());
    lines.push(inventory.get_total_rooms());
    lines.push(room.device_amount());

    lines.push(admin.display_info());
    lines.push(desktop.turn_on());
    lines.push(tv.turn_off());
    lines.push(is_power_safe(desktop.device.power_consumption).to_string());
    lines.push(desktop.display_efficiency());

    lines.push(guest.display_info());

    tracing::info!(
        lines = lines.len(),
        registered = system.registered_users().len(),
        directory = directory.len(),
        "showcase finished"
    );

    Ok(ShowcaseReport {
        lines,
        counters: inventory.snapshot(),
        directory: directory.list().to_vec(),
    })
}
