use crate::filter::{HoldLastGood, ValidityWindow};

/// A distance sensor sampled once per control cycle.
pub trait RangeSensor {
    /// Reads the current distance.
    ///
    /// Returns `None` when the device has no reading to offer, such as a disconnected
    /// port or an echo that never returned. The filter treats that the same as an
    /// out-of-window reading.
    fn read(&mut self) -> Option<f64>;
}

impl<S: RangeSensor + ?Sized> RangeSensor for Box<S> {
    fn read(&mut self) -> Option<f64> {
        (**self).read()
    }
}

/// A sensor paired with its noise filter.
#[derive(Debug)]
pub struct FilteredRange<S> {
    sensor: S,
    filter: HoldLastGood,
    last_raw: Option<f64>,
}

impl<S: RangeSensor> FilteredRange<S> {
    /// Wraps `sensor` with a hold-last-good filter over `window`.
    pub const fn new(sensor: S, window: ValidityWindow) -> Self {
        Self {
            sensor,
            filter: HoldLastGood::new(window),
            last_raw: None,
        }
    }

    /// Reads the sensor once and returns the filtered value.
    pub fn sample(&mut self) -> Option<f64> {
        self.last_raw = self.sensor.read();
        match self.last_raw {
            Some(raw) => self.filter.update(raw),
            None => self.filter.value(),
        }
    }

    /// Filtered value from the last sample.
    pub const fn value(&self) -> Option<f64> {
        self.filter.value()
    }

    /// Unfiltered value from the last sample.
    pub const fn last_raw(&self) -> Option<f64> {
        self.last_raw
    }
}

/// Filtered distances from one control cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RangeSample {
    /// Left sensor.
    pub left: Option<f64>,
    /// Center sensor.
    pub center: Option<f64>,
    /// Right sensor.
    pub right: Option<f64>,
}

/// Unfiltered distances from one control cycle, kept for diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RawSample {
    /// Left sensor.
    pub left: Option<f64>,
    /// Center sensor.
    pub center: Option<f64>,
    /// Right sensor.
    pub right: Option<f64>,
}

type Channel = Option<FilteredRange<Box<dyn RangeSensor>>>;

/// Up to three range sensors across the front of the robot.
///
/// Channels without a sensor always report `None`.
#[derive(Default)]
pub struct RangeArray {
    left: Channel,
    center: Channel,
    right: Channel,
}

impl RangeArray {
    /// Creates an array with no sensors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the left sensor.
    #[must_use]
    pub fn with_left(mut self, sensor: impl RangeSensor + 'static, window: ValidityWindow) -> Self {
        self.left = Some(FilteredRange::new(Box::new(sensor), window));
        self
    }

    /// Installs the center sensor.
    #[must_use]
    pub fn with_center(
        mut self,
        sensor: impl RangeSensor + 'static,
        window: ValidityWindow,
    ) -> Self {
        self.center = Some(FilteredRange::new(Box::new(sensor), window));
        self
    }

    /// Installs the right sensor.
    #[must_use]
    pub fn with_right(
        mut self,
        sensor: impl RangeSensor + 'static,
        window: ValidityWindow,
    ) -> Self {
        self.right = Some(FilteredRange::new(Box::new(sensor), window));
        self
    }

    /// Reads every installed sensor once.
    pub fn sample(&mut self) -> RangeSample {
        RangeSample {
            left: self.left.as_mut().and_then(FilteredRange::sample),
            center: self.center.as_mut().and_then(FilteredRange::sample),
            right: self.right.as_mut().and_then(FilteredRange::sample),
        }
    }

    /// Raw readings from the last [`RangeArray::sample`].
    #[must_use]
    pub fn raw(&self) -> RawSample {
        RawSample {
            left: self.left.as_ref().and_then(FilteredRange::last_raw),
            center: self.center.as_ref().and_then(FilteredRange::last_raw),
            right: self.right.as_ref().and_then(FilteredRange::last_raw),
        }
    }
}

impl core::fmt::Debug for RangeArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeArray")
            .field("left", &self.left.as_ref().map(FilteredRange::value))
            .field("center", &self.center.as_ref().map(FilteredRange::value))
            .field("right", &self.right.as_ref().map(FilteredRange::value))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    struct Scripted(VecDeque<Option<f64>>);

    impl RangeSensor for Scripted {
        fn read(&mut self) -> Option<f64> {
            self.0.pop_front().flatten()
        }
    }

    fn scripted(readings: &[Option<f64>]) -> Scripted {
        Scripted(readings.iter().copied().collect())
    }

    #[test]
    fn channels_filter_independently() {
        let window = ValidityWindow::new(20.0, 500.0);
        let mut array = RangeArray::new()
            .with_left(scripted(&[Some(130.0), Some(5.0)]), window)
            .with_right(scripted(&[Some(900.0), Some(140.0)]), window);

        assert_eq!(
            array.sample(),
            RangeSample {
                left: Some(130.0),
                center: None,
                right: None,
            }
        );
        assert_eq!(
            array.sample(),
            RangeSample {
                left: Some(130.0),
                center: None,
                right: Some(140.0),
            }
        );
        assert_eq!(array.raw().left, Some(5.0));
    }

    #[test]
    fn missing_read_holds_value() {
        let mut channel = FilteredRange::new(
            scripted(&[Some(64.0), None]),
            ValidityWindow::ULTRASONIC,
        );
        assert_eq!(channel.sample(), Some(64.0));
        assert_eq!(channel.sample(), Some(64.0));
        assert_eq!(channel.last_raw(), None);
    }
}
