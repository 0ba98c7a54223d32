/// Factory I2C address of the AHT10.
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// How long the driver keeps polling a busy sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BusyWait {
    /// Poll until the busy bit clears, however long that takes.
    ///
    /// A sensor that never reports idle blocks the caller forever.
    #[default]
    Unbounded,
    /// Give up with [`Error::BusyTimeout`](crate::Error::BusyTimeout) after this
    /// many status reads all reported busy. `0` behaves like `1`.
    MaxPolls(u32),
}

impl BusyWait {
    /// Returns true once `polls` busy status reads exhaust the budget.
    pub(crate) fn exhausted(self, polls: u32) -> bool {
        match self {
            BusyWait::Unbounded => false,
            BusyWait::MaxPolls(max) => polls >= max.max(1),
        }
    }
}

/// Driver configuration, fixed at construction.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C address of the sensor.
    pub address: u8,
    /// Busy polling policy used by every command that waits for the sensor.
    pub busy_wait: BusyWait,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: DEFAULT_ADDRESS,
            busy_wait: BusyWait::Unbounded,
        }
    }
}

impl Config {
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_busy_wait(mut self, busy_wait: BusyWait) -> Self {
        self.busy_wait = busy_wait;
        self
    }
}
