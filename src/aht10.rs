use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::config::Config;
use crate::error::Error;
use crate::reading::{PAYLOAD_LEN, RawSample, Reading, SensorState, Status};

/// Starts the sensor's self-calibration.
const CMD_INITIALIZE: [u8; 3] = [0xE1, 0x08, 0x00];
/// Starts a combined humidity and temperature capture.
const CMD_TRIGGER: [u8; 3] = [0xAC, 0x33, 0x00];
const CMD_SOFT_RESET: [u8; 1] = [0xBA];

/// Time the sensor needs after power-up before it accepts commands.
const POWER_UP_DELAY_MS: u32 = 20;
/// Settle time after a soft reset.
const RESET_DELAY_MS: u32 = 20;
/// Pause between two status reads while the sensor reports busy.
const POLL_INTERVAL_MS: u32 = 5;

/// Driver for the AHT10 temperature and humidity sensor.
///
/// The driver keeps no sensor state of its own: busy and calibrated flags
/// live on the sensor and are read back on demand through [`status`](Self::status).
pub struct Aht10<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    buffer: [u8; PAYLOAD_LEN],
    // buffer holds the payload of a completed measurement cycle
    sampled: bool,
}

impl<I2C, D, E> Aht10<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates the driver at the default address and brings the sensor up.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    ///
    /// # Errors
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(i2c: I2C, delay: D) -> Result<Self, Error<E>> {
        Self::with_config(i2c, delay, Config::default())
    }

    /// Creates the driver for a sensor at `address`.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Result<Self, Error<E>> {
        Self::with_config(i2c, delay, Config::default().with_address(address))
    }

    /// Creates the driver with an explicit configuration.
    ///
    /// Waits for the sensor to power up, soft-resets it and asks it to
    /// calibrate itself.
    ///
    /// # Errors
    ///
    /// * `Error::I2c` if any bus transfer fails.
    /// * `Error::Initialization` if the sensor does not report itself
    ///   calibrated afterwards. No driver is returned in that case.
    pub fn with_config(i2c: I2C, mut delay: D, config: Config) -> Result<Self, Error<E>> {
        delay.delay_ms(POWER_UP_DELAY_MS);

        let mut sensor = Aht10 {
            i2c,
            delay,
            config,
            buffer: [0; PAYLOAD_LEN],
            sampled: false,
        };

        sensor.reset()?;
        sensor.initialize()?;
        Ok(sensor)
    }

    /// Performs a soft reset of the sensor.
    ///
    /// The settle delay only happens after the reset command went out; a
    /// failed write returns straight away.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        debug!("aht10: soft reset at {:#x}", self.config.address);
        self.sampled = false;
        self.i2c.write(self.config.address, &CMD_SOFT_RESET)?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Reads the status byte.
    ///
    /// This is a full 6-byte transfer, not a single register peek, and it
    /// invalidates [`last_sample`](Self::last_sample).
    pub fn status(&mut self) -> Result<Status, Error<E>> {
        self.read_to_buffer()?;
        Ok(Status::new(self.buffer[0]))
    }

    /// Reads the status byte and reports whether the sensor is busy.
    pub fn state(&mut self) -> Result<SensorState, Error<E>> {
        Ok(self.status()?.state())
    }

    /// Measures the relative humidity in percent.
    ///
    /// Every call runs its own measurement cycle. Calling this and then
    /// [`temperature`](Self::temperature) takes two separate measurements; use
    /// [`measure`](Self::measure) to get both values from one sample.
    pub fn relative_humidity(&mut self) -> Result<f32, Error<E>> {
        Ok(self.perform_measurement()?.relative_humidity())
    }

    /// Measures the temperature in degrees Celsius.
    ///
    /// Like [`relative_humidity`](Self::relative_humidity), this runs its own
    /// measurement cycle.
    pub fn temperature(&mut self) -> Result<f32, Error<E>> {
        Ok(self.perform_measurement()?.temperature())
    }

    /// Runs one measurement cycle and decodes both fields from it.
    pub fn measure(&mut self) -> Result<Reading, Error<E>> {
        Ok(self.perform_measurement()?.reading())
    }

    /// Runs one measurement cycle and returns the undecoded payload.
    pub fn measure_raw(&mut self) -> Result<RawSample, Error<E>> {
        self.perform_measurement()
    }

    /// The payload of the most recent measurement cycle.
    ///
    /// `None` before the first measurement and after any later [`status`](Self::status)
    /// or [`reset`](Self::reset) call, since those overwrite or invalidate
    /// the data bytes.
    pub fn last_sample(&self) -> Option<RawSample> {
        self.sampled.then(|| RawSample::new(self.buffer))
    }

    pub fn address(&self) -> u8 {
        self.config.address
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Destroys the driver and hands back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Asks the sensor to calibrate itself and checks that it did.
    fn initialize(&mut self) -> Result<Status, Error<E>> {
        debug!("aht10: initialize");
        self.i2c.write(self.config.address, &CMD_INITIALIZE)?;
        self.wait_for_idle()?;

        let status = self.status()?;
        if status.is_calibrated() {
            Ok(status)
        } else {
            warn!("aht10: not calibrated, status {:#x}", status.bits());
            Err(Error::Initialization(status))
        }
    }

    fn trigger_measurement(&mut self) -> Result<(), Error<E>> {
        self.i2c.write(self.config.address, &CMD_TRIGGER)?;
        Ok(())
    }

    /// Polls the status byte until the busy bit clears.
    ///
    /// With `BusyWait::Unbounded` there is no way out of this loop other than
    /// the sensor going idle or a bus error.
    fn wait_for_idle(&mut self) -> Result<(), Error<E>> {
        let mut polls: u32 = 0;

        loop {
            let status = self.status()?;
            polls = polls.saturating_add(1);

            if status.state() == SensorState::Idle {
                return Ok(());
            }
            if self.config.busy_wait.exhausted(polls) {
                warn!("aht10: still busy after {} polls", polls);
                return Err(Error::BusyTimeout);
            }

            trace!("aht10: busy, poll {}", polls);
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }

    /// Trigger, wait for the sensor, then read the result into the buffer.
    fn perform_measurement(&mut self) -> Result<RawSample, Error<E>> {
        self.trigger_measurement()?;
        self.wait_for_idle()?;
        self.read_to_buffer()?;
        self.sampled = true;

        let sample = RawSample::new(self.buffer);
        trace!(
            "aht10: sample humidity_raw={:#x} temperature_raw={:#x}",
            sample.humidity_raw(),
            sample.temperature_raw()
        );
        Ok(sample)
    }

    fn read_to_buffer(&mut self) -> Result<(), Error<E>> {
        self.sampled = false;
        self.i2c.read(self.config.address, &mut self.buffer)?;
        Ok(())
    }
}
