use gloo_net::http::Request;
use log::{debug, info};
use serde::Deserialize;
use yew::prelude::*;

use crate::config;
use crate::features::IdentityCapability;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionResponse {
    pub configured: bool,
    pub signed_in: bool,
    pub user_id: Option<String>,
}

/// Session as the identity provider reports it. `Unknown` renders neither the
/// signed-in nor the signed-out slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Unknown,
    SignedOut,
    SignedIn { user_id: String },
}

impl From<SessionResponse> for SessionStatus {
    fn from(response: SessionResponse) -> Self {
        match (response.signed_in, response.user_id) {
            (true, Some(user_id)) => SessionStatus::SignedIn { user_id },
            _ => SessionStatus::SignedOut,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityContext {
    pub capability: IdentityCapability,
    pub session: SessionStatus,
}

#[derive(Properties, PartialEq)]
pub struct IdentityProviderProps {
    pub capability: IdentityCapability,
    pub children: Children,
}

/// Session-check wrapper. Only mounted when identity is configured.
#[function_component(IdentityProvider)]
pub fn identity_provider(props: &IdentityProviderProps) -> Html {
    let session = use_state(|| SessionStatus::Unknown);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let url = format!("{}/api/session", config::get_backend_url());
                    match Request::get(&url).send().await {
                        Ok(response) if response.ok() => match response.json::<SessionResponse>().await {
                            Ok(body) => {
                                debug!("Session resolved: signed_in={}", body.signed_in);
                                session.set(body.into());
                            }
                            Err(e) => {
                                info!("Unreadable session response: {}", e);
                                session.set(SessionStatus::SignedOut);
                            }
                        },
                        Ok(response) => {
                            info!("Session check returned status {}", response.status());
                            session.set(SessionStatus::SignedOut);
                        }
                        Err(e) => {
                            info!("Session check failed: {}", e);
                            session.set(SessionStatus::SignedOut);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let context = IdentityContext {
        capability: props.capability.clone(),
        session: (*session).clone(),
    };

    html! {
        <ContextProvider<IdentityContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<IdentityContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SlotProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SignedOut)]
pub fn signed_out(props: &SlotProps) -> Html {
    match use_context::<IdentityContext>() {
        Some(IdentityContext { session: SessionStatus::SignedOut, .. }) => {
            html! { <>{ for props.children.iter() }</> }
        }
        _ => html! {},
    }
}

#[function_component(SignedIn)]
pub fn signed_in(props: &SlotProps) -> Html {
    match use_context::<IdentityContext>() {
        Some(IdentityContext { session: SessionStatus::SignedIn { .. }, .. }) => {
            html! { <>{ for props.children.iter() }</> }
        }
        _ => html! {},
    }
}

#[function_component(SignInButton)]
pub fn sign_in_button() -> Html {
    let identity = use_context::<IdentityContext>();
    let Some(identity) = identity else {
        return html! {};
    };
    html! {
        <a class="nav-pill" href={identity.capability.sign_in_url.clone()}>{"로그인"}</a>
    }
}

#[function_component(SignUpButton)]
pub fn sign_up_button() -> Html {
    let identity = use_context::<IdentityContext>();
    let Some(identity) = identity else {
        return html! {};
    };
    html! {
        <a class="nav-pill accent" href={identity.capability.sign_up_url.clone()}>{"회원가입"}</a>
    }
}

#[function_component(UserButton)]
pub fn user_button() -> Html {
    let user_id = match use_context::<IdentityContext>() {
        Some(IdentityContext { session: SessionStatus::SignedIn { user_id }, .. }) => user_id,
        _ => return html! {},
    };
    let initial = user_id.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    html! {
        <div class="user-badge" title={user_id}>{initial}</div>
    }
}

/// The full set of identity slots for the navigation bar.
#[function_component(IdentityNav)]
pub fn identity_nav() -> Html {
    html! {
        <>
            <SignedOut>
                <SignInButton />
                <SignUpButton />
            </SignedOut>
            <SignedIn>
                <UserButton />
            </SignedIn>
        </>
    }
}
