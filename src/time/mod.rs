/// The time module provides timing utilities for measuring compilation performance.
/// It tracks duration of different compilation phases for profiling and optimization.
pub mod time_values;
pub mod timer;
pub mod times;
pub mod value_label;
