use crate::PilotRequestSchema;
use crate::tests::sarah_chen_payload;

use proptest::prelude::*;
use serde_json::{Value, json};

fn required_field() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PilotRequestSchema::required_fields().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn given_any_non_empty_strings_when_parsed_then_echoed(
        name in ".{1,40}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
        industry in "[a-z-]{1,20}",
        use_case in "[a-z-]{1,20}",
        deployment_type in "[a-z0-9]{1,12}",
        network_size in "[a-z]{1,12}",
        requirements in proptest::option::of(".{0,80}"),
    ) {
        let mut payload = json!({
            "name": name,
            "email": email,
            "industry": industry,
            "useCase": use_case,
            "deploymentType": deployment_type,
            "networkSize": network_size,
        });
        if let Some(ref text) = requirements {
            payload["requirements"] = json!(text);
        }

        let request = PilotRequestSchema::parse(&payload).unwrap();

        prop_assert_eq!(request.name(), name.as_str());
        prop_assert_eq!(request.email(), email.as_str());
        prop_assert_eq!(request.industry(), industry.as_str());
        prop_assert_eq!(request.use_case(), use_case.as_str());
        prop_assert_eq!(request.deployment_type(), deployment_type.as_str());
        prop_assert_eq!(request.network_size(), network_size.as_str());
        prop_assert_eq!(request.requirements(), requirements.as_deref());
    }

    #[test]
    fn given_missing_required_field_when_parsed_then_named_in_error(field in required_field()) {
        let mut payload = sarah_chen_payload();
        payload.as_object_mut().unwrap().remove(field);

        let error = PilotRequestSchema::parse(&payload).unwrap_err();
        let errors = error.field_errors().unwrap();

        prop_assert_eq!(errors.field_names(), vec![field]);
    }

    #[test]
    fn given_non_string_required_field_when_parsed_then_rejected(
        field in required_field(),
        value in prop_oneof![
            any::<i64>().prop_map(|n| json!(n)),
            any::<bool>().prop_map(Value::Bool),
            Just(json!({})),
            Just(json!([])),
        ],
    ) {
        let mut payload = sarah_chen_payload();
        payload[field] = value;

        prop_assert!(PilotRequestSchema::parse(&payload).is_err());
    }
}
