use crate::config;

/// What the identity provider needs from us: its client key and where its
/// hosted sign-in and sign-up pages live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCapability {
    pub publishable_key: String,
    pub sign_in_url: String,
    pub sign_up_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySlot {
    SessionWrapper,
    SignInTrigger,
    SignUpTrigger,
    UserBadge,
}

const ALL_IDENTITY_SLOTS: [IdentitySlot; 4] = [
    IdentitySlot::SessionWrapper,
    IdentitySlot::SignInTrigger,
    IdentitySlot::SignUpTrigger,
    IdentitySlot::UserBadge,
];

/// Configuration snapshot taken once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    identity: Option<IdentityCapability>,
}

impl FeatureFlags {
    /// A blank or missing key leaves identity unconfigured.
    pub fn resolve(publishable_key: Option<&str>, sign_in_url: &str, sign_up_url: &str) -> Self {
        let identity = publishable_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| IdentityCapability {
                publishable_key: key.to_string(),
                sign_in_url: sign_in_url.to_string(),
                sign_up_url: sign_up_url.to_string(),
            });
        Self { identity }
    }

    pub fn from_build_env() -> Self {
        let flags = Self::resolve(
            config::identity_publishable_key(),
            config::sign_in_url(),
            config::sign_up_url(),
        );
        log::info!("Identity integration configured: {}", flags.auth_configured());
        flags
    }

    pub fn auth_configured(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&IdentityCapability> {
        self.identity.as_ref()
    }
}

/// Either every identity slot is eligible for rendering or none is.
pub fn eligible_identity_slots(flags: &FeatureFlags) -> &'static [IdentitySlot] {
    if flags.auth_configured() {
        &ALL_IDENTITY_SLOTS
    } else {
        &[]
    }
}
