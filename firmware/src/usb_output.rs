//! USB HID button output implementation.

use defmt::Format;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidWriter, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use shifter_core::{ButtonSet, ButtonSink, OutputError, ShifterButton};
use usbd_hid::descriptor::SerializedDescriptor;

/// USB HID report: one bit per virtual button.
///
/// This matches the HID report descriptor defined below.
/// Total size: 2 bytes (10 buttons + 6 padding bits).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Format)]
#[repr(C)]
pub struct ShifterReport {
    /// Button bitfield, bit n = HID button n + 1
    pub buttons: u16,
}

impl ShifterReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 2;

    /// Convert the report to bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        self.buttons.to_le_bytes()
    }
}

impl From<ButtonSet> for ShifterReport {
    fn from(set: ButtonSet) -> Self {
        Self { buttons: set.raw() }
    }
}

/// HID report descriptor: a gamepad with ten buttons.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Buttons (10 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x0A, //   Usage Maximum (Button 10)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x0A, //   Report Count (10)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Padding to the byte boundary ---
    0x95, 0x01, //   Report Count (1)
    0x75, 0x06, //   Report Size (6)
    0x81, 0x03, //   Input (Constant, Variable, Absolute)
    //
    0xC0, // End Collection
];

impl SerializedDescriptor for ShifterReport {
    fn desc() -> &'static [u8] {
        REPORT_DESCRIPTOR
    }
}

/// HID writer type for the shifter report.
pub type ShifterHidWriter<'d> = HidWriter<'d, Driver<'d, USB>, { ShifterReport::SIZE }>;

/// USB HID button output.
///
/// Keeps the cumulative pressed set and sends the whole set on every
/// press or release.
pub struct UsbHidButtons<'d> {
    writer: ShifterHidWriter<'d>,
    pressed: ButtonSet,
}

impl<'d> UsbHidButtons<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: ShifterHidWriter<'d>) -> Self {
        Self {
            writer,
            pressed: ButtonSet::NONE,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
    }

    /// Buttons currently reported as pressed.
    #[inline]
    #[must_use]
    pub fn pressed(&self) -> ButtonSet {
        self.pressed
    }

    async fn write_report(&mut self) -> Result<(), OutputError> {
        let report = ShifterReport::from(self.pressed);
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(|e| match e {
                EndpointError::Disabled => OutputError::NotReady,
                _ => OutputError::Io,
            })
    }
}

impl ButtonSink for UsbHidButtons<'_> {
    async fn press(&mut self, button: ShifterButton) -> Result<(), OutputError> {
        self.pressed.insert(button);
        self.write_report().await
    }

    async fn release(&mut self, button: ShifterButton) -> Result<(), OutputError> {
        self.pressed.remove(button);
        self.write_report().await
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
) -> ShifterHidWriter<'d> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: ShifterReport::desc(),
        request_handler: None,
        poll_ms: 1,
        max_packet_size: 8,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
