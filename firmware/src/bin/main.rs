#![no_std]
#![no_main]

use defmt::{debug, error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::{Duration, Instant, Ticker};
use embassy_usb::class::hid::State;
use embassy_usb::Builder;
use shifter_firmware::{
    configure_usb_hid, usb_config, AdcShifterInput, BridgeError, Cycle, Shifter, ShifterBridge,
    ShifterDeviceHandler, UsbHidButtons, POLL_PERIOD_MS, SHIFTER_CONFIG,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

/// USB bus event handler.
static DEVICE_HANDLER: StaticCell<ShifterDeviceHandler> = StaticCell::new();

type Bridge = ShifterBridge<AdcShifterInput<'static, Input<'static>>, UsbHidButtons<'static>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("USB shifter starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Input Setup ---
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let horiz = adc::Channel::new_pin(p.PIN_26, Pull::None);
    let vert = adc::Channel::new_pin(p.PIN_27, Pull::None);
    let button = Input::new(p.PIN_15, Pull::Up);
    let shifter_input = AdcShifterInput::new(adc, horiz, vert, button);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config(),
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );
    builder.handler(DEVICE_HANDLER.init(ShifterDeviceHandler::new()));

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let hid_writer = configure_usb_hid(&mut builder, hid_state);

    // Build the USB device
    let usb_device = builder.build();

    let bridge = ShifterBridge::new(
        shifter_input,
        UsbHidButtons::new(hid_writer),
        Shifter::new(SHIFTER_CONFIG),
    );

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(shifter_task(bridge).unwrap());

    info!("USB shifter initialized, polling every {} ms", POLL_PERIOD_MS);
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Free-running millisecond counter; wraps like any 32-bit tick count.
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Shifter task - samples the inputs and emits HID reports on a fixed period.
#[embassy_executor::task]
async fn shifter_task(mut bridge: Bridge) {
    // Wait for USB to be ready
    bridge.output_mut().wait_ready().await;
    info!("USB HID ready, mode {:?}", bridge.shifter().mode());

    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    loop {
        match bridge.process_one(now_ms()).await {
            Ok(cycle) => log_cycle(&cycle),
            Err(BridgeError::Input(e)) => error!("Input error: {:?}", e),
            Err(BridgeError::Output(e)) => warn!("Output error: {:?}", e),
        }
        ticker.next().await;
    }
}

fn log_cycle(cycle: &Cycle) {
    #[cfg(feature = "sample-trace")]
    defmt::debug!(
        "Horizontal: {}, Vertical: {}, Button: {}",
        cycle.sample.axes.horiz,
        cycle.sample.axes.vert,
        cycle.sample.button.is_high()
    );

    if let Some(mode) = cycle.tick.mode_changed {
        info!("Mode changed to {:?}", mode);
    }
    if !cycle.tick.transition.is_empty() {
        debug!(
            "release {:?} -> press {:?}",
            cycle.tick.transition.release, cycle.tick.transition.press
        );
    }
}
