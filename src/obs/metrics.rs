// self
use crate::{config::Endpoint, obs::OperationOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(endpoint: Endpoint, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"daraja_operation_total",
			"operation" => endpoint.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_operation_outcome_noop_without_metrics() {
		record_operation_outcome(Endpoint::StkPush, OperationOutcome::Failure);
	}
}
