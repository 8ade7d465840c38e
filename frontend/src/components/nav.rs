use yew::prelude::*;

use crate::audio::AudioControls;
use crate::features::{eligible_identity_slots, FeatureFlags};
use crate::identity::IdentityNav;
use crate::popover::VolumeControl;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub audio: AudioControls,
    pub on_reserve: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let flags = use_context::<FeatureFlags>().unwrap_or_default();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_reserve.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="/">
                    <span class="logo-mark">{"☾"}</span>
                    <span class="logo-text">{"DreamNatural"}</span>
                </a>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <VolumeControl audio={props.audio.clone()} />
                    {
                        if !eligible_identity_slots(&flags).is_empty() {
                            html! { <IdentityNav /> }
                        } else {
                            html! {}
                        }
                    }
                    <button class="nav-pill" onclick={on_reserve}>{"사전 예약하기"}</button>
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="메뉴">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
