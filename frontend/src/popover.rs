use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::audio::{parse_volume, AudioControls, MAX_VOLUME_PERCENT};
use crate::outside_click::{dismisses, use_outside_click, RegionHit};

/// Selector of the region whose presses keep the volume popover open.
pub const VOLUME_CONTROL_REGION: &str = ".volume-control";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VolumePopover {
    visible: bool,
}

impl VolumePopover {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Applies a document press. Returns true when it hid the popover.
    pub fn pointer_down(&mut self, hit: RegionHit) -> bool {
        if dismisses(self.visible, hit) {
            self.visible = false;
            return true;
        }
        false
    }
}

#[derive(Properties, PartialEq)]
pub struct VolumeControlProps {
    pub audio: AudioControls,
}

#[function_component(VolumeControl)]
pub fn volume_control(props: &VolumeControlProps) -> Html {
    let popover = use_state_eq(VolumePopover::default);

    {
        let visible = popover.is_visible();
        let popover = popover.clone();
        let on_dismiss = Callback::from(move |_: ()| {
            let mut next = *popover;
            next.pointer_down(RegionHit::Outside);
            popover.set(next);
        });
        use_outside_click(VOLUME_CONTROL_REGION, visible, on_dismiss);
    }

    let on_button = {
        let popover = popover.clone();
        let toggle_music = props.audio.toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            toggle_music.emit(());
            let mut next = *popover;
            next.toggle_visible();
            popover.set(next);
        })
    };

    let on_slider = {
        let set_volume = props.audio.set_volume.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(percent) = parse_volume(&input.value()) {
                set_volume.emit(percent);
            }
        })
    };

    let label = if props.audio.is_playing { "음악 일시정지" } else { "음악 재생" };

    html! {
        <div class="volume-control">
            <button class="round-button" onclick={on_button} aria-label={label}>
                {
                    if props.audio.is_playing {
                        html! { <span class="icon-pause">{"❚❚"}</span> }
                    } else {
                        html! { <span class="icon-play">{"▶"}</span> }
                    }
                }
            </button>
            {
                if popover.is_visible() {
                    html! {
                        <div class="volume-popover" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                            <input
                                type="range"
                                min="0"
                                max={MAX_VOLUME_PERCENT.to_string()}
                                step="1"
                                value={props.audio.volume_percent.to_string()}
                                oninput={on_slider}
                            />
                            <span class="volume-label">{format!("{}%", props.audio.volume_percent)}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
