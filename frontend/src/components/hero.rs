use yew::prelude::*;

use crate::scroll::ScrollSnapshot;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll: ScrollSnapshot,
    pub on_reserve: Callback<()>,
    pub on_story: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        Callback::from(move |_: MouseEvent| on_reserve.emit(()))
    };
    let on_story = {
        let on_story = props.on_story.clone();
        Callback::from(move |_: MouseEvent| on_story.emit(()))
    };

    html! {
        <section class="hero">
            <div class="hero-background" style={props.scroll.hero_background_style()}>
                <div class="hero-shade"></div>
                <img src="/images/night-sky-lake.jpg" alt="Peaceful Night Sky" />
            </div>

            <div class="hero-content" style={props.scroll.hero_content_style()}>
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    {"Premium Sleep Wellness"}
                </div>
                <h1>
                    {"당신의 밤, "}<br />
                    <span class="gradient-text">{"자연의 깊이"}</span>
                    {"로 채우다"}
                </h1>
                <p class="hero-tagline">{"아침의 변화, 밤의 안락함"}</p>
                <p class="hero-description">
                    {"깊은 잠의 본질을 찾아낸 프리미엄 수면 케어 솔루션."}<br />
                    {"자연이 선사하는 가장 완벽한 휴식을 경험하세요."}
                </p>
                <div class="hero-actions">
                    <button class="cta-button" onclick={on_reserve}>
                        <span>{"사전 예약하기"}</span>
                        <span class="arrow">{"→"}</span>
                    </button>
                    <button class="story-button" onclick={on_story}>
                        <span class="play-circle">{"▶"}</span>
                        <span>{"브랜드 스토리"}</span>
                    </button>
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"Scroll to Explore"}</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}
