//! Preset validation.
//!
//! Validates numeric ranges and the background color, collecting every
//! problem into one error.

use crate::schema::ImgcatConfig;
use imgcat_common::{Color, ConfigError};

/// Run all validations on a preset, collecting all errors.
pub fn validate(config: &ImgcatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Cell size
    validate_positive(&mut errors, "layout.width", config.layout.width);
    validate_positive(&mut errors, "layout.height", config.layout.height);
    validate_positive(&mut errors, "layout.columns", config.layout.columns);

    // Output
    validate_range(&mut errors, "output.quality", u32::from(config.output.quality), 1, 100);
    if Color::parse(&config.output.background).is_none() {
        errors.push(format!(
            "output.background = {:?} is not a valid color",
            config.output.background
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: Option<u32>) {
    if value == Some(0) {
        errors.push(format!("{name} must be greater than 0"));
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
