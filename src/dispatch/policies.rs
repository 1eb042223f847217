//! Policy sub-resources, keyed by `policy_type`.

use super::{DispatchTable, SubResource};

pub const TABLE: DispatchTable = DispatchTable {
    family: "policy",
    group: "policies",
    entries: &[
        SubResource {
            discriminator: "dummy",
            segment: "dummy",
            create_request_key: "dummy_policy_request",
            update_request_key: "patched_dummy_policy_request",
        },
        SubResource {
            discriminator: "event_matcher",
            segment: "event_matcher",
            create_request_key: "event_matcher_policy_request",
            update_request_key: "patched_event_matcher_policy_request",
        },
        SubResource {
            discriminator: "expression",
            segment: "expression",
            create_request_key: "expression_policy_request",
            update_request_key: "patched_expression_policy_request",
        },
        SubResource {
            discriminator: "geoip",
            segment: "geoip",
            create_request_key: "geoip_policy_request",
            update_request_key: "patched_geoip_policy_request",
        },
        SubResource {
            discriminator: "password",
            segment: "password",
            create_request_key: "password_policy_request",
            update_request_key: "patched_password_policy_request",
        },
        SubResource {
            discriminator: "password_expiry",
            segment: "password_expiry",
            create_request_key: "password_expiry_policy_request",
            update_request_key: "patched_password_expiry_policy_request",
        },
        SubResource {
            discriminator: "reputation",
            segment: "reputation",
            create_request_key: "reputation_policy_request",
            update_request_key: "patched_reputation_policy_request",
        },
    ],
};
