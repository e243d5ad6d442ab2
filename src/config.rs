use serde_json::Value;

use crate::error::{Error, Result};

macro_rules! impl_config {
    ($($(#[$doc:meta])* $name:ident: $type:ty = $value:expr),* $(,)*) => {
        /// Fixed parameters of a simulation run. JSON keys are the upper-cased
        /// field names; missing keys keep their defaults.
        #[derive(Debug, Clone, PartialEq)]
        pub struct Config {
            $(
                $(#[$doc])*
                pub $name: $type
            ),*
        }

        impl Default for Config {
            fn default() -> Config {
                Config {
                    $($name: $value),*
                }
            }
        }

        impl Config {
            pub fn from_json(json: &Value) -> Result<Config> {
                if !json.is_object() && !json.is_null() {
                    return Err(Error::InvalidConfig(format!("expected an object, got {}", json)));
                }
                let defaults = Config::default();
                Ok(Config {
                    $(
                        $name: get_or_default!(json, stringify!($name), defaults.$name)
                    ),*
                })
            }
        }
    };
}

macro_rules! get_or_default {
    ($json:ident, $key:expr, $default_value:expr) => {
        match $json.get($key.to_uppercase().as_str()) {
            Some(value) => FromValue::from_value($key, value)?,
            None => $default_value,
        }
    };
}

trait FromValue: Sized {
    fn from_value(key: &str, value: &Value) -> Result<Self>;
}

macro_rules! impl_from_value {
    ($type:ty, $method:ident) => {
        impl FromValue for $type {
            fn from_value(key: &str, value: &Value) -> Result<$type> {
                value.$method().ok_or_else(|| {
                    Error::InvalidConfig(format!(
                        "{} must be {}, got {}",
                        key.to_uppercase(),
                        stringify!($type),
                        value
                    ))
                })
            }
        }
    };
}

impl_from_value!(i64, as_i64);
impl_from_value!(f64, as_f64);
impl_from_value!(u64, as_u64);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(key: &str, value: &Value) -> Result<Option<T>> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(key, value).map(Some)
        }
    }
}

impl_config! {
    bounds_width: f64 = 400.0,
    bounds_height: f64 = 400.0,
    /// Contact radius: cells closer than this transmit.
    cell_radius: f64 = 15.0,
    /// Ticks a cell stays infected before becoming immune.
    recovery_period: i64 = 60,
    cell_speed: f64 = 5.0,
    cell_count: i64 = 50,
    infected_count: i64 = 10,
    immune_count: i64 = 5,
    /// Upper bound on ticks the driver runs.
    max_ticks: i64 = 10_000,
    seed: Option<u64> = None,
}

impl Config {
    pub fn max_x(&self) -> f64 {
        self.bounds_width / 2.0
    }

    pub fn min_x(&self) -> f64 {
        -self.max_x()
    }

    pub fn max_y(&self) -> f64 {
        self.bounds_height / 2.0
    }

    pub fn min_y(&self) -> f64 {
        -self.max_y()
    }

    /// Checks the geometric parameters. Population counts are checked by
    /// model construction.
    pub fn validate(&self) -> Result<()> {
        if !(self.bounds_width > 0.0 && self.bounds_width.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "BOUNDS_WIDTH must be positive, got {}",
                self.bounds_width
            )));
        }
        if !(self.bounds_height > 0.0 && self.bounds_height.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "BOUNDS_HEIGHT must be positive, got {}",
                self.bounds_height
            )));
        }
        if !(self.cell_radius >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "CELL_RADIUS must not be negative, got {}",
                self.cell_radius
            )));
        }
        if !self.cell_speed.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "CELL_SPEED must be finite, got {}",
                self.cell_speed
            )));
        }
        if self.recovery_period < 0 {
            return Err(Error::InvalidConfig(format!(
                "RECOVERY_PERIOD must not be negative, got {}",
                self.recovery_period
            )));
        }
        Ok(())
    }
}
