// sht31 uplink payload
pub const PAYLOAD_MIN_LEN: usize = 4;
pub const TEMPERATURE_OFFSET: usize = 0;
pub const HUMIDITY_OFFSET: usize = 2;
// raw register value to physical unit, 0.01 °C and 0.01 %RH per step
pub const SCALE_FACTOR: f64 = 0.01;
// humidity is emitted as a fixed point string
pub const HUMIDITY_FRACTION_DIGITS: usize = 2;
