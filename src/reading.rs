//! Status byte and measurement payload decoding.
//!
//! Every read from the AHT10 returns six bytes:
//!
//! ```text
//! byte 0      1         2          3                    4         5
//!      status hum[19:12] hum[11:4] hum[3:0] | temp[19:16] temp[15:8] temp[7:0]
//! ```
//!
//! Humidity and temperature are 20-bit unsigned fields that share byte 3,
//! humidity in the high nibble and temperature in the low nibble.

/// Status bit set while a command or measurement is still in progress.
pub const STATUS_BUSY: u8 = 0x80;

/// Status bit set once the sensor has loaded its calibration.
pub const STATUS_CALIBRATED: u8 = 0x08;

/// Size of every read from the sensor, status byte included.
pub const PAYLOAD_LEN: usize = 6;

/// Largest value a 20-bit raw field can hold.
pub const RAW_FIELD_MAX: u32 = 0x000F_FFFF;

// 2^20
const FULL_SCALE: f32 = 1_048_576.0;

/// Whether the sensor can accept a new command.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorState {
    /// A command or measurement is in progress.
    Busy,
    /// Ready for the next command.
    Idle,
}

/// The status byte leading every read from the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status(u8);

impl Status {
    /// Wraps a raw status byte.
    pub const fn new(bits: u8) -> Self {
        Status(bits)
    }

    /// The raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_busy(self) -> bool {
        self.0 & STATUS_BUSY != 0
    }

    pub const fn is_calibrated(self) -> bool {
        self.0 & STATUS_CALIBRATED != 0
    }

    /// Busy/idle state as reported by this status byte.
    pub const fn state(self) -> SensorState {
        if self.is_busy() {
            SensorState::Busy
        } else {
            SensorState::Idle
        }
    }
}

/// Reading returned by the AHT10 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

/// The six raw bytes of one measurement cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSample([u8; PAYLOAD_LEN]);

impl RawSample {
    /// Wraps a payload exactly as it came off the bus.
    pub const fn new(bytes: [u8; PAYLOAD_LEN]) -> Self {
        RawSample(bytes)
    }

    /// Packs a status byte and two 20-bit raw fields into the wire layout.
    ///
    /// Bits above the low 20 of `humidity` and `temperature` are ignored. This
    /// is the exact inverse of [`humidity_raw`](Self::humidity_raw) and
    /// [`temperature_raw`](Self::temperature_raw).
    pub const fn from_fields(status: u8, humidity: u32, temperature: u32) -> Self {
        let humidity = humidity & RAW_FIELD_MAX;
        let temperature = temperature & RAW_FIELD_MAX;

        RawSample([
            status,
            (humidity >> 12) as u8,
            (humidity >> 4) as u8,
            ((humidity & 0xF) << 4) as u8 | (temperature >> 16) as u8,
            (temperature >> 8) as u8,
            temperature as u8,
        ])
    }

    pub const fn bytes(&self) -> [u8; PAYLOAD_LEN] {
        self.0
    }

    pub const fn status(&self) -> Status {
        Status::new(self.0[0])
    }

    /// The 20-bit humidity field.
    pub const fn humidity_raw(&self) -> u32 {
        let [_, hi, mid, split, _, _] = self.0;
        ((hi as u32) << 12) | ((mid as u32) << 4) | ((split as u32) >> 4)
    }

    /// The 20-bit temperature field.
    pub const fn temperature_raw(&self) -> u32 {
        let [_, _, _, split, mid, lo] = self.0;
        (((split & 0x0F) as u32) << 16) | ((mid as u32) << 8) | lo as u32
    }

    /// Relative humidity in percent, in `[0, 100)`.
    pub fn relative_humidity(&self) -> f32 {
        humidity_from_raw(self.humidity_raw())
    }

    /// Temperature in degrees Celsius, in `[-50, 150)`.
    pub fn temperature(&self) -> f32 {
        temperature_from_raw(self.temperature_raw())
    }

    /// Both fields decoded from this one sample.
    pub fn reading(&self) -> Reading {
        Reading {
            temperature: self.temperature(),
            relative_humidity: self.relative_humidity(),
        }
    }
}

/// Converts a 20-bit humidity field to percent: `raw * 100 / 2^20`.
pub fn humidity_from_raw(raw: u32) -> f32 {
    raw as f32 * 100.0 / FULL_SCALE
}

/// Converts a 20-bit temperature field to degrees Celsius: `raw * 200 / 2^20 - 50`.
pub fn temperature_from_raw(raw: u32) -> f32 {
    raw as f32 * 200.0 / FULL_SCALE - 50.0
}
