//! Hydraulic parameters of the pumped aquifer.

use thiserror::Error;

/// Error type for aquifer parameter validation.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Transmissivity must be positive.
    #[error("Transmissivity must be positive, got {0}")]
    NonPositiveTransmissivity(f64),

    /// Storativity must be positive.
    #[error("Storativity must be positive, got {0}")]
    NonPositiveStorativity(f64),

    /// A parameter is NaN or infinite.
    #[error("Parameter {name} is not finite: {value}")]
    NonFinite {
        name: &'static str,
        value: f64,
    },
}

/// Hydraulic parameters governing the transient drawdown response.
///
/// Units are metric: transmissivity in m²/h, discharge in m³/h. Storativity
/// is dimensionless. Discharge is signed: positive for pumping, negative
/// for injection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AquiferParameters {
    /// Transmissivity T [m²/h]
    pub transmissivity: f64,
    /// Storativity S [-]
    pub storativity: f64,
    /// Scenario discharge Q [m³/h]; per-well rates may override this
    pub discharge: f64,
}

impl AquiferParameters {
    /// Create validated aquifer parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if transmissivity or storativity is
    /// non-positive, or any value is not finite.
    pub fn new(transmissivity: f64, storativity: f64, discharge: f64) -> Result<Self, ParameterError> {
        for (name, value) in [
            ("transmissivity", transmissivity),
            ("storativity", storativity),
            ("discharge", discharge),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        if transmissivity <= 0.0 {
            return Err(ParameterError::NonPositiveTransmissivity(transmissivity));
        }
        if storativity <= 0.0 {
            return Err(ParameterError::NonPositiveStorativity(storativity));
        }
        Ok(Self {
            transmissivity,
            storativity,
            discharge,
        })
    }

    /// Copy of these parameters with a different discharge rate.
    pub fn with_discharge(mut self, discharge: f64) -> Self {
        self.discharge = discharge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let p = AquiferParameters::new(250.0, 2e-4, 150.0).unwrap();
        assert_eq!(p.transmissivity, 250.0);
        assert_eq!(p.storativity, 2e-4);
    }

    #[test]
    fn test_injection_discharge_is_valid() {
        // Negative discharge models an injection well
        assert!(AquiferParameters::new(250.0, 2e-4, -150.0).is_ok());
    }

    #[test]
    fn test_rejects_zero_transmissivity() {
        let err = AquiferParameters::new(0.0, 2e-4, 150.0).unwrap_err();
        assert!(err.to_string().contains("Transmissivity"));
    }

    #[test]
    fn test_rejects_nan() {
        let err = AquiferParameters::new(f64::NAN, 2e-4, 150.0).unwrap_err();
        assert!(matches!(err, ParameterError::NonFinite { .. }));
    }

    #[test]
    fn test_with_discharge() {
        let p = AquiferParameters::new(250.0, 2e-4, 150.0).unwrap();
        assert_eq!(p.with_discharge(-75.0).discharge, -75.0);
    }
}
