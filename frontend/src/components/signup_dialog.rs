use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::modal::{ModalFrame, SignupForm, SignupPhase};

#[derive(Properties, PartialEq)]
pub struct SignupDialogProps {
    pub phase: SignupPhase,
    pub on_submit: Callback<SignupForm>,
    pub on_close: Callback<()>,
}

/// Waiting-list dialog body. Mounted only while the dialog is open, so the
/// typed values start empty on every open.
#[function_component(SignupDialog)]
pub fn signup_dialog(props: &SignupDialogProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SignupForm {
                name: (*name).clone(),
                email: (*email).clone(),
            });
        })
    };

    let body = match &props.phase {
        SignupPhase::Submitted => html! {
            <div class="signup-done">
                <div class="done-check">{"✓"}</div>
                <h3>{"등록되었습니다!"}</h3>
                <p>
                    {"가장 먼저 소식을 전해드릴게요. "}<br />
                    {"오늘도 편안한 밤 되세요. 🌙"}
                </p>
            </div>
        },
        phase => {
            let pending = matches!(phase, SignupPhase::Pending(_));
            let error = match phase {
                SignupPhase::Unsubmitted { error } => error.clone(),
                _ => None,
            };
            html! {
                <div class="signup-form-wrapper">
                    <h3>{"웨이팅 리스트 등록"}</h3>
                    <p class="modal-subtitle">{"출시 알림과 함께 얼리버드 혜택을 보내드립니다."}</p>
                    <form class="signup-form" onsubmit={onsubmit}>
                        <div>
                            <label for="signup-name">{"이름"}</label>
                            <input
                                id="signup-name"
                                type="text"
                                required={true}
                                placeholder="홍길동"
                                value={(*name).clone()}
                                oninput={on_name}
                                disabled={pending}
                            />
                        </div>
                        <div>
                            <label for="signup-email">{"이메일"}</label>
                            <input
                                id="signup-email"
                                type="email"
                                required={true}
                                placeholder="hello@example.com"
                                value={(*email).clone()}
                                oninput={on_email}
                                disabled={pending}
                            />
                        </div>
                        {
                            if let Some(error) = error {
                                html! { <p class="form-error" role="alert">{error}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="cta-button full" disabled={pending}>
                            { if pending { "등록 중..." } else { "등록하기" } }
                        </button>
                    </form>
                </div>
            }
        }
    };

    html! {
        <ModalFrame on_close={props.on_close.clone()}>
            { body }
        </ModalFrame>
    }
}
