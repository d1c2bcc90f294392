//! USB device identity and bus state logging.

use defmt::info;
use embassy_usb::{Config as UsbConfig, Handler};

/// pid.codes test vendor ID.
pub const USB_VID: u16 = 0x1209;
/// pid.codes test product ID.
pub const USB_PID: u16 = 0x0001;

pub const MANUFACTURER: &str = "Rust Shifter";
pub const PRODUCT: &str = "USB Shifter";
pub const SERIAL_NUMBER: &str = "001";

/// Device descriptor configuration for the shifter.
#[must_use]
pub fn usb_config() -> UsbConfig<'static> {
    let mut config = UsbConfig::new(USB_VID, USB_PID);
    config.manufacturer = Some(MANUFACTURER);
    config.product = Some(PRODUCT);
    config.serial_number = Some(SERIAL_NUMBER);
    config.max_power = 100;
    config.max_packet_size_0 = 64;
    config
}

/// Logs bus state changes.
#[derive(Default)]
pub struct ShifterDeviceHandler;

impl ShifterDeviceHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Handler for ShifterDeviceHandler {
    fn enabled(&mut self, enabled: bool) {
        if enabled {
            info!("USB device enabled");
        } else {
            info!("USB device disabled");
        }
    }

    fn reset(&mut self) {
        info!("USB bus reset");
    }

    fn addressed(&mut self, addr: u8) {
        info!("USB address set to: {}", addr);
    }

    fn configured(&mut self, configured: bool) {
        if configured {
            info!("USB device configured");
        } else {
            info!("USB device no longer configured");
        }
    }
}
