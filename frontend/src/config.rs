#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Publishable key of the identity provider, baked in at build time.
/// Unset or blank means the site runs without any identity UI.
pub fn identity_publishable_key() -> Option<&'static str> {
    option_env!("DREAMNATURAL_CLERK_PUBLISHABLE_KEY")
}

pub fn sign_in_url() -> &'static str {
    option_env!("DREAMNATURAL_SIGN_IN_URL").unwrap_or("/sign-in")
}

pub fn sign_up_url() -> &'static str {
    option_env!("DREAMNATURAL_SIGN_UP_URL").unwrap_or("/sign-up")
}

pub const BACKGROUND_AUDIO_SRC: &str = "/audio/city-of-stars.mp3";
pub const BRAND_VIDEO_SRC: &str = "/video/brand-story.mp4";
