use log::trace;

/// Open interval of plausible readings for a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityWindow {
    /// Noise floor. Readings at or below it are rejected.
    pub min: f64,
    /// Farthest plausible reading. Readings at or above it are rejected.
    pub max: f64,
}

impl ValidityWindow {
    /// Window used for the analog sonar channels.
    pub const ANALOG_SONAR: Self = Self::new(20.0, 500.0);

    /// Window used for the two-wire ultrasonic rangefinders, in centimeters.
    pub const ULTRASONIC: Self = Self::new(3.0, 300.0);

    /// Creates a window.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies strictly between `min` and `max`.
    ///
    /// NaN is never contained.
    ///
    /// ```
    /// use trackbot_sensing::ValidityWindow;
    ///
    /// let window = ValidityWindow::new(20.0, 500.0);
    /// assert!(window.contains(108.0));
    /// assert!(!window.contains(20.0));
    /// assert!(!window.contains(f64::NAN));
    /// ```
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

/// Keeps the most recent reading that passed a [`ValidityWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldLastGood {
    window: ValidityWindow,
    value: Option<f64>,
}

impl HoldLastGood {
    /// Creates a filter with no accepted reading.
    #[must_use]
    pub const fn new(window: ValidityWindow) -> Self {
        Self {
            window,
            value: None,
        }
    }

    /// The window readings are checked against.
    #[must_use]
    pub const fn window(&self) -> ValidityWindow {
        self.window
    }

    /// The filtered value, or `None` until a reading has been accepted.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Offers a raw reading to the filter and returns the filtered value.
    pub fn update(&mut self, raw: f64) -> Option<f64> {
        if self.window.contains(raw) {
            self.value = Some(raw);
        } else {
            trace!("discarding out-of-range reading {raw}");
        }
        self.value
    }
}
