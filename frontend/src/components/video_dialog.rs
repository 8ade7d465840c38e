use yew::prelude::*;

use crate::config;
use crate::modal::ModalFrame;

#[derive(Properties, PartialEq)]
pub struct VideoDialogProps {
    pub on_close: Callback<()>,
}

#[function_component(VideoDialog)]
pub fn video_dialog(props: &VideoDialogProps) -> Html {
    html! {
        <ModalFrame on_close={props.on_close.clone()} wide={true}>
            <div class="video-wrapper">
                <h3>{"브랜드 스토리"}</h3>
                <div class="video-frame">
                    <video src={config::BRAND_VIDEO_SRC} controls={true} autoplay={true}>
                        {"브라우저가 비디오 태그를 지원하지 않습니다."}
                    </video>
                </div>
            </div>
        </ModalFrame>
    }
}
