//! Canned errors for the error page demo.

/// Client-side event raised after the forced logout error settles, sent as
/// the `HX-Trigger-After-Settle` value verbatim.
pub const LOGOUT_TRIGGER: &str =
    r#"{"logoutEvent":{"level" : "Critical", "details" : "No further details"}}"#;

/// A simulated failure.
#[derive(Debug, Default)]
pub struct SimulatedError {
    pub message: &'static str,
    /// `HX-Trigger-After-Settle` payload, if any.
    pub trigger: Option<&'static str>,
}

/// Maps a demo error id to its message. Unknown ids give an empty message.
pub fn simulate(id: &str) -> SimulatedError {
    let message = match id {
        "1" => "404: Not found",
        "2" => "403: Not authorized",
        "3" => "Some processing error",
        "4" => {
            return SimulatedError {
                message: "Forcefully logged out",
                trigger: Some(LOGOUT_TRIGGER),
            };
        }
        _ => "",
    };

    SimulatedError {
        message,
        trigger: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(simulate("1").message, "404: Not found");
        assert_eq!(simulate("2").message, "403: Not authorized");
        assert_eq!(simulate("3").message, "Some processing error");
        assert!(simulate("3").trigger.is_none());
    }

    #[test]
    fn test_logout_carries_trigger() {
        let error = simulate("4");

        assert_eq!(error.message, "Forcefully logged out");
        assert_eq!(error.trigger, Some(LOGOUT_TRIGGER));

        let json: serde_json::Value = serde_json::from_str(LOGOUT_TRIGGER).unwrap();
        assert_eq!(json["logoutEvent"]["level"], "Critical");
        assert_eq!(json["logoutEvent"]["details"], "No further details");
    }

    #[test]
    fn test_unknown_id_is_empty() {
        let error = simulate("99");
        assert_eq!(error.message, "");
        assert!(error.trigger.is_none());
        assert_eq!(simulate("").message, "");
    }
}
