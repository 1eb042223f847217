//! Provider sub-resources, keyed by `provider_type`.

use super::{DispatchTable, SubResource};

pub const TABLE: DispatchTable = DispatchTable {
    family: "provider",
    group: "providers",
    entries: &[
        SubResource {
            discriminator: "oauth2",
            segment: "oauth2",
            create_request_key: "oauth2_provider_request",
            update_request_key: "patched_oauth2_provider_request",
        },
        SubResource {
            discriminator: "saml",
            segment: "saml",
            create_request_key: "saml_provider_request",
            update_request_key: "patched_saml_provider_request",
        },
        SubResource {
            discriminator: "proxy",
            segment: "proxy",
            create_request_key: "proxy_provider_request",
            update_request_key: "patched_proxy_provider_request",
        },
        SubResource {
            discriminator: "ldap",
            segment: "ldap",
            create_request_key: "ldap_provider_request",
            update_request_key: "patched_ldap_provider_request",
        },
        SubResource {
            discriminator: "scim",
            segment: "scim",
            create_request_key: "scim_provider_request",
            update_request_key: "patched_scim_provider_request",
        },
        SubResource {
            discriminator: "radius",
            segment: "radius",
            create_request_key: "radius_provider_request",
            update_request_key: "patched_radius_provider_request",
        },
        SubResource {
            discriminator: "rac",
            segment: "rac",
            create_request_key: "rac_provider_request",
            update_request_key: "patched_rac_provider_request",
        },
        SubResource {
            discriminator: "microsoft_entra",
            segment: "microsoft_entra",
            create_request_key: "microsoft_entra_provider_request",
            update_request_key: "patched_microsoft_entra_provider_request",
        },
        SubResource {
            discriminator: "google_workspace",
            segment: "google_workspace",
            create_request_key: "google_workspace_provider_request",
            update_request_key: "patched_google_workspace_provider_request",
        },
    ],
};
