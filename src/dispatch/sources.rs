//! Source sub-resources, keyed by `source_type`.

use super::{DispatchTable, SubResource};

pub const TABLE: DispatchTable = DispatchTable {
    family: "source",
    group: "sources",
    entries: &[
        SubResource {
            discriminator: "kerberos",
            segment: "kerberos",
            create_request_key: "kerberos_source_request",
            update_request_key: "patched_kerberos_source_request",
        },
        SubResource {
            discriminator: "ldap",
            segment: "ldap",
            create_request_key: "ldap_source_request",
            update_request_key: "patched_ldap_source_request",
        },
        SubResource {
            discriminator: "oauth",
            segment: "oauth",
            create_request_key: "oauth_source_request",
            update_request_key: "patched_oauth_source_request",
        },
        SubResource {
            discriminator: "plex",
            segment: "plex",
            create_request_key: "plex_source_request",
            update_request_key: "patched_plex_source_request",
        },
        SubResource {
            discriminator: "saml",
            segment: "saml",
            create_request_key: "saml_source_request",
            update_request_key: "patched_saml_source_request",
        },
        SubResource {
            discriminator: "scim",
            segment: "scim",
            create_request_key: "scim_source_request",
            update_request_key: "patched_scim_source_request",
        },
    ],
};
