//! Property-mapping sub-resources, keyed by `property_mapping_type`.
//!
//! Mappings split into provider-side and source-side groups, mirrored in
//! the nested path segments.

use super::{DispatchTable, SubResource};

pub const TABLE: DispatchTable = DispatchTable {
    family: "property mapping",
    group: "propertymappings",
    entries: &[
        SubResource {
            discriminator: "provider_google_workspace",
            segment: "provider/google_workspace",
            create_request_key: "google_workspace_provider_mapping_request",
            update_request_key: "patched_google_workspace_provider_mapping_request",
        },
        SubResource {
            discriminator: "provider_microsoft_entra",
            segment: "provider/microsoft_entra",
            create_request_key: "microsoft_entra_provider_mapping_request",
            update_request_key: "patched_microsoft_entra_provider_mapping_request",
        },
        SubResource {
            discriminator: "provider_rac",
            segment: "provider/rac",
            create_request_key: "rac_property_mapping_request",
            update_request_key: "patched_rac_property_mapping_request",
        },
        SubResource {
            discriminator: "provider_radius",
            segment: "provider/radius",
            create_request_key: "radius_provider_property_mapping_request",
            update_request_key: "patched_radius_provider_property_mapping_request",
        },
        SubResource {
            discriminator: "provider_saml",
            segment: "provider/saml",
            create_request_key: "saml_property_mapping_request",
            update_request_key: "patched_saml_property_mapping_request",
        },
        SubResource {
            discriminator: "provider_scim",
            segment: "provider/scim",
            create_request_key: "scim_mapping_request",
            update_request_key: "patched_scim_mapping_request",
        },
        SubResource {
            discriminator: "provider_scope",
            segment: "provider/scope",
            create_request_key: "scope_mapping_request",
            update_request_key: "patched_scope_mapping_request",
        },
        SubResource {
            discriminator: "source_kerberos",
            segment: "source/kerberos",
            create_request_key: "kerberos_source_property_mapping_request",
            update_request_key: "patched_kerberos_source_property_mapping_request",
        },
        SubResource {
            discriminator: "source_ldap",
            segment: "source/ldap",
            create_request_key: "ldap_source_property_mapping_request",
            update_request_key: "patched_ldap_source_property_mapping_request",
        },
        SubResource {
            discriminator: "source_oauth",
            segment: "source/oauth",
            create_request_key: "oauth_source_property_mapping_request",
            update_request_key: "patched_oauth_source_property_mapping_request",
        },
        SubResource {
            discriminator: "source_plex",
            segment: "source/plex",
            create_request_key: "plex_source_property_mapping_request",
            update_request_key: "patched_plex_source_property_mapping_request",
        },
        SubResource {
            discriminator: "source_saml",
            segment: "source/saml",
            create_request_key: "saml_source_property_mapping_request",
            update_request_key: "patched_saml_source_property_mapping_request",
        },
    ],
};
