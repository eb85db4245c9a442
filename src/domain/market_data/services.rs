use super::entities::Sample;
use crate::domain::errors::ValidationError;

/// Domain service for validating raw samples
#[derive(Debug, Clone, Copy, Default)]
pub struct DataValidationService;

impl DataValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Check one sample against the OHLC invariant, naming the broken rule.
    pub fn validate_sample(&self, index: usize, sample: &Sample) -> Result<(), ValidationError> {
        let ohlcv = &sample.ohlcv;
        let invalid = |reason: &str| ValidationError::InvalidSample {
            index,
            reason: reason.to_string(),
        };

        let prices = [
            ("open", ohlcv.open.value()),
            ("high", ohlcv.high.value()),
            ("low", ohlcv.low.value()),
            ("close", ohlcv.close.value()),
        ];
        for (name, value) in prices {
            if !value.is_finite() {
                return Err(invalid(&format!("{} price is not a finite number", name)));
            }
            if value <= 0.0 {
                return Err(invalid(&format!("{} price must be positive", name)));
            }
        }

        if ohlcv.high < ohlcv.low {
            return Err(invalid("High price cannot be lower than low price"));
        }
        if ohlcv.high < ohlcv.open || ohlcv.high < ohlcv.close {
            return Err(invalid("High price cannot be lower than open or close price"));
        }
        if ohlcv.low > ohlcv.open || ohlcv.low > ohlcv.close {
            return Err(invalid("Low price cannot be higher than open or close price"));
        }

        Ok(())
    }

    /// `current` must be strictly newer than `previous`.
    pub fn validate_pair(
        &self,
        index: usize,
        previous: &Sample,
        current: &Sample,
    ) -> Result<(), ValidationError> {
        if current.timestamp == previous.timestamp {
            return Err(ValidationError::DuplicateTimestamp {
                index,
                timestamp: current.timestamp.value(),
            });
        }
        if current.timestamp < previous.timestamp {
            return Err(ValidationError::OutOfOrder { index });
        }
        Ok(())
    }

    /// Validate every sample plus ascending, duplicate-free ordering.
    pub fn validate_sequence(&self, samples: &[Sample]) -> Result<(), ValidationError> {
        for (index, sample) in samples.iter().enumerate() {
            self.validate_sample(index, sample)?;
            if index > 0 {
                self.validate_pair(index, &samples[index - 1], sample)?;
            }
        }
        Ok(())
    }
}
