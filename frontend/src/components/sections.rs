use yew::prelude::*;

struct Struggle {
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
}

const STRUGGLES: [Struggle; 3] = [
    Struggle {
        title: "끊임없는 생각의 고리",
        desc: "자려고 누우면 시작되는 걱정과 불안으로 뒤척이는 시간",
        icon: "≋",
    },
    Struggle {
        title: "깨어진 생체 리듬",
        desc: "불규칙한 생활과 스마트폰으로 무너진 수면 패턴",
        icon: "☾",
    },
    Struggle {
        title: "아침의 무거운 피로",
        desc: "자고 일어나도 개운하지 않은 만성적인 피로감",
        icon: "◌",
    },
];

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    html! {
        <section class="problem-section">
            <div class="two-column">
                <div class="framed-image">
                    <img src="/images/sleepless-night.jpg" alt="Sleep Struggle" />
                    <div class="status-card">
                        <div class="status-header">
                            <span class="status-dot"></span>
                            <span>{"Current Status"}</span>
                        </div>
                        <p>{"\"생각이 멈추지 않아 잠들 수 없는 밤...\""}</p>
                    </div>
                </div>
                <div>
                    <h2>{"당신의 밤은 "}<br /><span class="muted">{"안녕하신가요?"}</span></h2>
                    <div class="struggle-list">
                        { for STRUGGLES.iter().map(|item| html! {
                            <div class="struggle">
                                <div class="struggle-icon">{item.icon}</div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Pillar {
    title: &'static str,
    desc: &'static str,
    image: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Pure Nature",
        desc: "100% 식물성 원료만을 사용하여 몸에 부담 없이 편안하게 스며듭니다.",
        image: "/images/lavender-chamomile.jpg",
    },
    Pillar {
        title: "Science Backed",
        desc: "수면 전문 연구진이 설계한 최적의 배합비로 확실한 효과를 약속합니다.",
        image: "/images/lab-glassware.jpg",
    },
    Pillar {
        title: "Daily Ritual",
        desc: "하루를 마무리하는 가장 우아하고 편안한 습관이 되어드립니다.",
        image: "/images/evening-tea.jpg",
    },
];

#[function_component(SolutionSection)]
pub fn solution_section() -> Html {
    html! {
        <section class="solution-section">
            <div class="section-backdrop">
                <img src="/images/deep-blue-silk.jpg" alt="Background Texture" />
            </div>
            <div class="section-heading">
                <span class="eyebrow">{"The Solution"}</span>
                <h2>{"자연에서 찾은 해답"}</h2>
                <p>
                    {"드림내추럴은 단순한 보조제가 아닙니다."}<br />
                    {"당신의 밤을 위한 완벽한 리추얼입니다."}
                </p>
            </div>
            <div class="card-grid">
                { for PILLARS.iter().map(|pillar| html! {
                    <div class="pillar-card">
                        <div class="pillar-image">
                            <img src={pillar.image} alt={pillar.title} />
                        </div>
                        <div class="pillar-body">
                            <h3>{pillar.title}</h3>
                            <p>{pillar.desc}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

const INGREDIENTS: [(&str, &str, &str); 3] = [
    ("01", "L-테아닌 200mg", "스트레스로 인한 긴장 완화에 도움을 줄 수 있는 기능성 원료"),
    ("02", "타트체리 추출물", "자연 유래 멜라토닌이 풍부하여 수면의 질 개선에 도움"),
    ("03", "마그네슘 & 비타민 B6", "신경과 근육 기능 유지 및 에너지 이용에 필요"),
];

#[function_component(IngredientsSection)]
pub fn ingredients_section() -> Html {
    html! {
        <section class="ingredients-section">
            <div class="two-column">
                <div>
                    <h2>{"검증된 성분, "}<br /><span class="accent">{"투명한 공개"}</span></h2>
                    <div class="ingredient-list">
                        { for INGREDIENTS.iter().map(|(number, name, desc)| html! {
                            <div class="ingredient">
                                <div class="ingredient-number">{*number}</div>
                                <div>
                                    <h3>{*name}</h3>
                                    <p>{*desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="framed-image">
                    <img src="/images/supplement-bottle.jpg" alt="Product Composition" />
                </div>
            </div>
        </section>
    }
}

struct Review {
    text: &'static str,
    author: &'static str,
    role: &'static str,
    detail: &'static str,
    rating: usize,
    verified: bool,
}

const REVIEWS: [Review; 3] = [
    Review {
        text: "수면제는 부담스러워서 망설였는데, 이건 정말 자연스럽게 잠이 와요. 아침이 달라졌습니다. 불면증으로 2년간 고생했는데 이제는 깊은 잠을 자고 있어요.",
        author: "김민지",
        role: "마케팅팀 3년차 · 29세",
        detail: "불면증 경험 2년, 직장인",
        rating: 5,
        verified: true,
    },
    Review {
        text: "야근하고 집에 오면 각성 상태라 잠들기 힘들었는데, 이제는 30분이면 꿀잠 잡니다. 개발 업무로 스트레스가 많았는데 수면의 질이 완전히 달라졌어요.",
        author: "이준호",
        role: "소프트웨어 개발자 · 32세",
        detail: "야근 빈번, 각성 상태로 잠들기 어려움",
        rating: 5,
        verified: true,
    },
    Review {
        text: "향도 좋고 목넘김도 편해요. 자기 전 따뜻한 물과 함께 먹는 게 제 힐링 루틴이 되었어요. 운동 후에도 복용하는데 다음날 컨디션이 훨씬 좋아졌습니다.",
        author: "박서연",
        role: "필라테스 강사 · 35세",
        detail: "운동 후 회복, 수면 루틴 개선",
        rating: 5,
        verified: true,
    },
];

#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    html! {
        <section class="reviews-section">
            <div class="section-heading">
                <h2>{"먼저 경험한 분들의 이야기"}</h2>
            </div>
            <div class="card-grid">
                { for REVIEWS.iter().map(|review| {
                    let stars = "★".repeat(review.rating);
                    html! {
                        <div class="review-card">
                            {
                                if review.verified {
                                    html! { <div class="verified-badge">{"구매 인증 완료"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="stars">{stars}</div>
                            <p class="review-text">{format!("\"{}\"", review.text)}</p>
                            <div class="review-author">
                                <div class="avatar">{review.author.chars().next().map(String::from).unwrap_or_default()}</div>
                                <div>
                                    <div class="author-name">{review.author}</div>
                                    <div class="author-role">{review.role}</div>
                                    <div class="author-detail">{review.detail}</div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

const SHOWCASE_POINTS: [(&str, &str); 3] = [
    ("100% 식물성 원료", "자연에서 추출한 순수 성분만 사용"),
    ("환경 친화적 패키지", "재활용 가능한 소재로 제작"),
    ("편리한 복용", "하루 1회, 자기 전 30분 복용"),
];

#[function_component(ShowcaseSection)]
pub fn showcase_section() -> Html {
    html! {
        <section class="showcase-section">
            <div class="section-heading">
                <h2>{"실제 제품을 확인하세요"}</h2>
                <p>{"자연 친화적 패키지와 프리미엄 품질의 제품을 직접 만나보세요"}</p>
            </div>
            <div class="two-column">
                <div class="framed-image">
                    <img src="/images/product-package.png" alt="DreamNatural 제품 패키지 실물" />
                </div>
                <div class="showcase-points">
                    { for SHOWCASE_POINTS.iter().map(|(title, desc)| html! {
                        <div class="showcase-point">
                            <div class="check">{"✓"}</div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub on_reserve: Callback<()>,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        Callback::from(move |_: MouseEvent| on_reserve.emit(()))
    };

    html! {
        <section class="cta-section">
            <div class="section-backdrop">
                <img src="/images/moonlit-lake.jpg" alt="Footer Background" />
            </div>
            <div class="cta-content">
                <h2>{"오늘 밤부터 "}<br /><span class="accent">{"달라질 거예요"}</span></h2>
                <p class="hero-tagline">{"아침의 변화, 밤의 안락함"}</p>
                <p>
                    {"지금 웨이팅 리스트에 등록하시고 "}<br />
                    {"가장 먼저 특별한 혜택을 만나보세요."}
                </p>
                <button class="cta-button large" onclick={on_reserve}>{"지금 시작하기"}</button>
                <div class="perks">
                    <span>{"사전 예약 시 20% 할인"}</span>
                    <span class="dot">{"•"}</span>
                    <span>{"특별 사은품 증정"}</span>
                    <span class="dot">{"•"}</span>
                    <span>{"우선 배송 혜택"}</span>
                </div>
                <p class="fine-print">
                    {"* 사전 예약 고객에게만 제공되는 특별 혜택입니다. 수량 한정으로 조기 마감될 수 있습니다."}
                </p>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="logo-mark">{"☾"}</span>
                <span>{"DreamNatural"}</span>
            </div>
            <div class="footer-links">
                <a href="#">{"Instagram"}</a>
                <a href="#">{"Youtube"}</a>
                <a href="#">{"Contact"}</a>
            </div>
            <p>{"© 2025 DreamNatural. All rights reserved."}</p>
        </footer>
    }
}

#[function_component(AssistantButton)]
pub fn assistant_button() -> Html {
    html! {
        <button class="assistant-button" aria-label="AI 도우미에게 질문하기">{"💬"}</button>
    }
}
