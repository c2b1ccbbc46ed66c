use bunner_csp_rs::{ContentSecurityPolicy, CspError};

pub fn assert_header(policy: &ContentSecurityPolicy) -> String {
    match policy.serialize() {
        Ok(value) => value,
        Err(error) => panic!("expected serialized policy, got {:?}", error),
    }
}

pub fn assert_empty_policy(policy: &ContentSecurityPolicy) {
    match policy.serialize() {
        Err(CspError::EmptyPolicy) => {}
        other => panic!("expected empty policy error, got {:?}", other),
    }
}

pub fn assert_missing_values<T>(result: Result<T, CspError>, expected_operation: &str) {
    match result {
        Err(CspError::MissingValues { operation }) => assert_eq!(operation, expected_operation),
        Err(other) => panic!("expected missing values error, got {:?}", other),
        Ok(_) => panic!("expected missing values error, got success"),
    }
}
