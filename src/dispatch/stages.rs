//! Stage sub-resources, keyed by `stage_type`.
//!
//! The largest of the five tables; authenticator stages live under a nested
//! `authenticator/` path segment.

use super::{DispatchTable, SubResource};

pub const TABLE: DispatchTable = DispatchTable {
    family: "stage",
    group: "stages",
    entries: &[
        SubResource {
            discriminator: "authenticator_duo",
            segment: "authenticator/duo",
            create_request_key: "authenticator_duo_stage_request",
            update_request_key: "patched_authenticator_duo_stage_request",
        },
        SubResource {
            discriminator: "authenticator_email",
            segment: "authenticator/email",
            create_request_key: "authenticator_email_stage_request",
            update_request_key: "patched_authenticator_email_stage_request",
        },
        SubResource {
            discriminator: "authenticator_sms",
            segment: "authenticator/sms",
            create_request_key: "authenticator_sms_stage_request",
            update_request_key: "patched_authenticator_sms_stage_request",
        },
        SubResource {
            discriminator: "authenticator_static",
            segment: "authenticator/static",
            create_request_key: "authenticator_static_stage_request",
            update_request_key: "patched_authenticator_static_stage_request",
        },
        SubResource {
            discriminator: "authenticator_totp",
            segment: "authenticator/totp",
            create_request_key: "authenticator_totp_stage_request",
            update_request_key: "patched_authenticator_totp_stage_request",
        },
        SubResource {
            discriminator: "authenticator_validate",
            segment: "authenticator/validate",
            create_request_key: "authenticator_validate_stage_request",
            update_request_key: "patched_authenticator_validate_stage_request",
        },
        SubResource {
            discriminator: "authenticator_webauthn",
            segment: "authenticator/webauthn",
            create_request_key: "authenticator_webauthn_stage_request",
            update_request_key: "patched_authenticator_webauthn_stage_request",
        },
        SubResource {
            discriminator: "captcha",
            segment: "captcha",
            create_request_key: "captcha_stage_request",
            update_request_key: "patched_captcha_stage_request",
        },
        SubResource {
            discriminator: "consent",
            segment: "consent",
            create_request_key: "consent_stage_request",
            update_request_key: "patched_consent_stage_request",
        },
        SubResource {
            discriminator: "deny",
            segment: "deny",
            create_request_key: "deny_stage_request",
            update_request_key: "patched_deny_stage_request",
        },
        SubResource {
            discriminator: "dummy",
            segment: "dummy",
            create_request_key: "dummy_stage_request",
            update_request_key: "patched_dummy_stage_request",
        },
        SubResource {
            discriminator: "email",
            segment: "email",
            create_request_key: "email_stage_request",
            update_request_key: "patched_email_stage_request",
        },
        SubResource {
            discriminator: "identification",
            segment: "identification",
            create_request_key: "identification_stage_request",
            update_request_key: "patched_identification_stage_request",
        },
        SubResource {
            discriminator: "invitation",
            segment: "invitation",
            create_request_key: "invitation_stage_request",
            update_request_key: "patched_invitation_stage_request",
        },
        SubResource {
            discriminator: "password",
            segment: "password",
            create_request_key: "password_stage_request",
            update_request_key: "patched_password_stage_request",
        },
        SubResource {
            discriminator: "prompt",
            segment: "prompt/stages",
            create_request_key: "prompt_stage_request",
            update_request_key: "patched_prompt_stage_request",
        },
        SubResource {
            discriminator: "user_delete",
            segment: "user_delete",
            create_request_key: "user_delete_stage_request",
            update_request_key: "patched_user_delete_stage_request",
        },
        SubResource {
            discriminator: "user_login",
            segment: "user_login",
            create_request_key: "user_login_stage_request",
            update_request_key: "patched_user_login_stage_request",
        },
        SubResource {
            discriminator: "user_logout",
            segment: "user_logout",
            create_request_key: "user_logout_stage_request",
            update_request_key: "patched_user_logout_stage_request",
        },
        SubResource {
            discriminator: "user_write",
            segment: "user_write",
            create_request_key: "user_write_stage_request",
            update_request_key: "patched_user_write_stage_request",
        },
    ],
};
