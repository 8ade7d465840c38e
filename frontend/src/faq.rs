use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hydration::HydrationGate;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "DreamNatural은 어떤 효과가 있나요?",
        answer: "L-테아닌, 타트체리 추출물, 마그네슘 등 검증된 성분이 수면의 질 개선과 스트레스 완화에 도움을 줍니다. 자연스럽고 안전한 수면을 지원합니다.",
    },
    FaqEntry {
        question: "누가 복용할 수 있나요?",
        answer: "수면의 질을 개선하고 싶은 성인 누구나 복용할 수 있습니다. 임신·수유 중이거나 특정 약물을 복용 중인 경우 의사와 상담 후 복용하시기 바랍니다.",
    },
    FaqEntry {
        question: "부작용이 있나요?",
        answer: "천연 성분으로 제조되어 일반적으로 부작용이 거의 없습니다. 다만 개인차에 따라 소화불량이나 졸음이 발생할 수 있으니 권장량을 지켜 복용하시기 바랍니다.",
    },
    FaqEntry {
        question: "어떻게 복용하나요?",
        answer: "취침 30분 전에 따뜻한 물과 함께 1회 복용하시면 됩니다. 규칙적인 복용이 효과적입니다.",
    },
    FaqEntry {
        question: "다른 약물과 함께 복용해도 되나요?",
        answer: "처방약을 복용 중이시라면 반드시 의사나 약사와 상담 후 복용하시기 바랍니다. 안전한 복용을 위해 전문가의 조언을 받으시는 것이 좋습니다.",
    },
    FaqEntry {
        question: "보관 방법은 어떻게 되나요?",
        answer: "직사광선을 피하고 서늘하고 건조한 곳에 보관하세요. 어린이의 손이 닿지 않는 곳에 보관하시기 바랍니다.",
    },
];

/// Skeleton rows shown before mount, one per entry.
pub const PLACEHOLDER_ROWS: usize = FAQ_ENTRIES.len();

/// Single-open accordion; opening an item closes the previous one, and the
/// open item can be collapsed again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[function_component(FaqPlaceholder)]
pub fn faq_placeholder() -> Html {
    html! {
        <div class="faq-list placeholder" aria-hidden="true">
            { for (0..PLACEHOLDER_ROWS).map(|row| html! {
                <div key={row} class="faq-item skeleton">
                    <div class="skeleton-bar"></div>
                </div>
            }) }
        </div>
    }
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let state = use_state_eq(AccordionState::default);

    html! {
        <div class="faq-list">
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = *state;
                        next.toggle(index);
                        state.set(next);
                    })
                };
                let open = state.is_open(index);
                html! {
                    <div key={index} class={classes!("faq-item", open.then(|| "open"))}>
                        <button class="faq-question" onclick={toggle} aria-expanded={open.to_string()}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                        </button>
                        {
                            if open {
                                html! { <div class="faq-answer">{entry.answer}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <div class="section-heading">
                <h2>{"자주 묻는 질문"}</h2>
                <p>{"궁금한 점을 확인하세요"}</p>
            </div>
            <HydrationGate placeholder={html! { <FaqPlaceholder /> }}>
                <FaqAccordion />
            </HydrationGate>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_live_item_count() {
        assert_eq!(PLACEHOLDER_ROWS, 6);
        assert_eq!(PLACEHOLDER_ROWS, FAQ_ENTRIES.len());
    }

    #[test]
    fn accordion_starts_collapsed() {
        let state = AccordionState::default();
        assert!((0..FAQ_ENTRIES.len()).all(|index| !state.is_open(index)));
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let mut state = AccordionState::default();
        state.toggle(1);
        state.toggle(4);
        assert!(!state.is_open(1));
        assert!(state.is_open(4));
    }

    #[test]
    fn open_item_collapses_on_second_toggle() {
        let mut state = AccordionState::default();
        state.toggle(2);
        state.toggle(2);
        assert!(!state.is_open(2));
    }

    #[tokio::test]
    async fn section_renders_only_placeholder_rows_before_mount() {
        let html = yew::ServerRenderer::<FaqSection>::new().render().await;
        assert_eq!(html.matches(r#"class="faq-item skeleton""#).count(), 6);
        assert!(!html.contains("faq-question"));
    }

    #[tokio::test]
    async fn live_accordion_has_the_placeholder_item_count() {
        let html = yew::ServerRenderer::<FaqAccordion>::new().render().await;
        assert_eq!(html.matches(r#"class="faq-question""#).count(), PLACEHOLDER_ROWS);
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn every_entry_has_copy() {
        for entry in FAQ_ENTRIES.iter() {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }
}
