use serde::{Deserialize, Serialize};

// ValidationError describes a single expected, user-correctable rule
// violation. The serialized shape {reason, propertyName?, propertyValue?}
// is a compatibility contract for any transport adapter built on top.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_value: Option<String>,
}

impl ValidationError {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            property_name: None,
            property_value: None,
        }
    }

    pub fn with_property(reason: &str, property_name: &str, property_value: &str) -> Self {
        Self {
            reason: reason.to_string(),
            property_name: Some(property_name.to_string()),
            property_value: Some(property_value.to_string()),
        }
    }
}

// Failure splits expected rule violations, which accumulate, from unexpected
// faults, which never join the accumulation and abort the operation instead.
#[derive(Debug, PartialEq, Clone)]
pub enum Failure {
    Validation(Vec<ValidationError>),
    Internal { message: String },
}

impl Failure {
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Failure::Validation(errors) => errors,
            Failure::Internal { .. } => &[],
        }
    }
}

// CirculationResult is the propagation backbone of the decision engine:
// every rule evaluates independently and its result is merged, so a single
// renewal attempt can report multiple simultaneous violations.
#[derive(Debug, PartialEq, Clone)]
pub enum CirculationResult<T> {
    Succeeded(T),
    Failed(Failure),
}

impl<T> CirculationResult<T> {
    pub fn succeeded(value: T) -> Self {
        CirculationResult::Succeeded(value)
    }

    pub fn failed_validation(error: ValidationError) -> Self {
        CirculationResult::Failed(Failure::Validation(vec![error]))
    }

    pub fn failed_internal(message: &str) -> Self {
        CirculationResult::Failed(Failure::Internal { message: message.to_string() })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, CirculationResult::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        !self.is_succeeded()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CirculationResult::Succeeded(value) => Some(value),
            CirculationResult::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CirculationResult::Succeeded(_) => None,
            CirculationResult::Failed(failure) => Some(failure),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> CirculationResult<U> {
        match self {
            CirculationResult::Succeeded(value) => CirculationResult::Succeeded(f(value)),
            CirculationResult::Failed(failure) => CirculationResult::Failed(failure),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> CirculationResult<U>>(self, f: F) -> CirculationResult<U> {
        match self {
            CirculationResult::Succeeded(value) => f(value),
            CirculationResult::Failed(failure) => CirculationResult::Failed(failure),
        }
    }

    // Merges two independently evaluated results. Both sides are always
    // inspected: two validation failures concatenate their errors in
    // left-to-right order, a lone failure survives a success, and an
    // internal failure (left side first) displaces everything else.
    pub fn combine<U, V, F>(self, other: CirculationResult<U>, merge: F) -> CirculationResult<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (CirculationResult::Succeeded(left), CirculationResult::Succeeded(right)) => {
                CirculationResult::Succeeded(merge(left, right))
            }
            (CirculationResult::Failed(failure), CirculationResult::Succeeded(_)) => {
                CirculationResult::Failed(failure)
            }
            (CirculationResult::Succeeded(_), CirculationResult::Failed(failure)) => {
                CirculationResult::Failed(failure)
            }
            (CirculationResult::Failed(left), CirculationResult::Failed(right)) => {
                CirculationResult::Failed(merge_failures(left, right))
            }
        }
    }
}

fn merge_failures(left: Failure, right: Failure) -> Failure {
    match (left, right) {
        (Failure::Validation(mut first), Failure::Validation(second)) => {
            first.extend(second);
            Failure::Validation(first)
        }
        (internal @ Failure::Internal { .. }, _) => internal,
        (_, internal @ Failure::Internal { .. }) => internal,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::results::{CirculationResult, Failure, ValidationError};

    fn keep_left<T, U>(left: T, _right: U) -> T {
        left
    }

    #[tokio::test]
    async fn test_should_combine_two_successes() {
        let left = CirculationResult::succeeded(2);
        let right = CirculationResult::succeeded(3);
        assert_eq!(CirculationResult::Succeeded(5), left.combine(right, |a, b| a + b));
    }

    #[tokio::test]
    async fn test_should_keep_failure_over_success() {
        let failed: CirculationResult<i32> =
            CirculationResult::failed_validation(ValidationError::new("bad date"));
        let combined = failed.clone().combine(CirculationResult::succeeded(1), keep_left);
        assert_eq!(failed, combined);

        let combined = CirculationResult::succeeded(1).combine(failed.clone(), keep_left);
        assert_eq!(failed, combined);
    }

    #[tokio::test]
    async fn test_should_accumulate_failures_in_order() {
        let left: CirculationResult<()> =
            CirculationResult::failed_validation(ValidationError::new("first"));
        let right: CirculationResult<()> =
            CirculationResult::failed_validation(ValidationError::new("second"));
        let combined: CirculationResult<()> = left.combine(right, keep_left);
        let errors = combined.failure().unwrap().validation_errors();
        assert_eq!(2, errors.len());
        assert_eq!("first", errors[0].reason);
        assert_eq!("second", errors[1].reason);
    }

    #[tokio::test]
    async fn test_should_not_combine_internal_failure_with_validation() {
        let internal: CirculationResult<()> = CirculationResult::failed_internal("store down");
        let validation: CirculationResult<()> =
            CirculationResult::failed_validation(ValidationError::new("bad date"));
        let combined: CirculationResult<()> = internal.combine(validation, keep_left);
        assert_eq!(
            Some(&Failure::Internal { message: "store down".to_string() }),
            combined.failure()
        );
    }

    #[tokio::test]
    async fn test_should_prefer_left_internal_failure() {
        let left: CirculationResult<()> = CirculationResult::failed_internal("left");
        let right: CirculationResult<()> = CirculationResult::failed_internal("right");
        let combined: CirculationResult<()> = left.combine(right, keep_left);
        assert_eq!(Some(&Failure::Internal { message: "left".to_string() }), combined.failure());
    }

    #[tokio::test]
    async fn test_should_render_errors_as_ordered_triples() {
        let errors = vec![
            ValidationError::with_property("loan at maximum renewal number", "renewalCount", "3"),
            ValidationError::new("renewal would not change the due date"),
        ];
        let json = serde_json::to_value(&errors).expect("should serialize");
        assert_eq!(
            serde_json::json!([
                {"reason": "loan at maximum renewal number",
                 "propertyName": "renewalCount", "propertyValue": "3"},
                {"reason": "renewal would not change the due date"}
            ]),
            json
        );
    }

    #[tokio::test]
    async fn test_should_map_and_chain() {
        let res = CirculationResult::succeeded(2).map(|v| v * 2);
        assert_eq!(Some(&4), res.value());
        let res = res.and_then(|v| {
            if v > 3 {
                CirculationResult::succeeded(v)
            } else {
                CirculationResult::failed_validation(ValidationError::new("too small"))
            }
        });
        assert!(res.is_succeeded());
    }
}
