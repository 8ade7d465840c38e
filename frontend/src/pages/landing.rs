use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::audio::use_audio_session;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::sections::{
    AssistantButton, CtaSection, Footer, IngredientsSection, ProblemSection, ReviewsSection,
    ShowcaseSection, SolutionSection,
};
use crate::components::signup_dialog::SignupDialog;
use crate::components::video_dialog::VideoDialog;
use crate::config;
use crate::faq::FaqSection;
use crate::modal::{
    settle_submission, ModalAction, ModalStack, SignupForm, SubmissionTicket, SIGNUP_ACK_DELAY_MS,
};
use crate::scroll::use_scroll_snapshot;

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_scroll_snapshot();
    let audio_node = use_node_ref();
    let audio = use_audio_session(audio_node.clone());
    let modals = use_reducer_eq(ModalStack::default);

    // Settle a pending waiting-list submission after the delay. Closing the
    // dialog clears the pending ticket, which drops and cancels the timer.
    {
        let dispatcher = modals.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<SubmissionTicket>| {
                let timer = pending.map(|ticket| {
                    Timeout::new(SIGNUP_ACK_DELAY_MS, move || {
                        let online = web_sys::window()
                            .map(|window| window.navigator().on_line())
                            .unwrap_or(true);
                        if !online {
                            warn!("Browser is offline, waiting list submission not acknowledged");
                        }
                        dispatcher.dispatch(settle_submission(ticket, online));
                    })
                });
                move || drop(timer)
            },
            modals.signup.pending_ticket(),
        );
    }

    let open_signup = {
        let modals = modals.clone();
        Callback::from(move |_: ()| {
            info!("Opening waiting list dialog");
            modals.dispatch(ModalAction::OpenSignup);
        })
    };
    let close_signup = {
        let modals = modals.clone();
        Callback::from(move |_: ()| modals.dispatch(ModalAction::CloseSignup))
    };
    let submit_signup = {
        let modals = modals.clone();
        Callback::from(move |form: SignupForm| modals.dispatch(ModalAction::SubmitSignup(form)))
    };
    let open_video = {
        let modals = modals.clone();
        Callback::from(move |_: ()| modals.dispatch(ModalAction::OpenVideo))
    };
    let close_video = {
        let modals = modals.clone();
        Callback::from(move |_: ()| modals.dispatch(ModalAction::CloseVideo))
    };

    html! {
        <div class="landing-page">
            <audio ref={audio_node} src={config::BACKGROUND_AUDIO_SRC} preload="auto"></audio>

            <Nav scrolled={scroll.is_past_threshold()} audio={audio} on_reserve={open_signup.clone()} />
            <Hero scroll={scroll} on_reserve={open_signup.clone()} on_story={open_video} />
            <ProblemSection />
            <SolutionSection />
            <IngredientsSection />
            <ReviewsSection />
            <ShowcaseSection />
            <FaqSection />
            <CtaSection on_reserve={open_signup} />
            <Footer />
            <AssistantButton />

            {
                match modals.signup.phase() {
                    Some(phase) => html! {
                        <SignupDialog
                            phase={phase.clone()}
                            on_submit={submit_signup}
                            on_close={close_signup}
                        />
                    },
                    None => html! {},
                }
            }
            {
                if modals.video.is_open() {
                    html! { <VideoDialog on_close={close_video} /> }
                } else {
                    html! {}
                }
            }

            <style>{LANDING_STYLES}</style>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #0a1120;
    color: #ffffff;
    overflow-x: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.landing-page ::selection {
    background: #2A9D8F;
    color: #ffffff;
}
.landing-page section {
    position: relative;
    padding: 8rem 1.5rem;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.5rem 0;
    background: transparent;
    transition: all 0.5s ease;
}
.top-nav.scrolled {
    padding: 1rem 0;
    background: rgba(10, 17, 32, 0.8);
    backdrop-filter: blur(24px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 700;
    font-size: 1.25rem;
    color: #ffffff;
    text-decoration: none;
}
.logo-mark {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(45deg, #2A9D8F, #3b82f6);
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.nav-pill, .round-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #ffffff;
    border-radius: 9999px;
    padding: 0.6rem 1.5rem;
    font-size: 0.875rem;
    cursor: pointer;
    text-decoration: none;
    backdrop-filter: blur(4px);
    transition: all 0.3s ease;
}
.nav-pill:hover, .round-button:hover {
    background: rgba(255, 255, 255, 0.1);
    border-color: rgba(255, 255, 255, 0.2);
}
.nav-pill.accent {
    background: #2A9D8F;
    border-color: #2A9D8F;
}
.round-button {
    width: 2.5rem;
    height: 2.5rem;
    padding: 0;
    justify-content: center;
}
.volume-control {
    position: relative;
    display: flex;
    align-items: center;
}
.volume-popover {
    position: absolute;
    right: 100%;
    margin-right: 0.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem;
    background: rgba(10, 17, 32, 0.9);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.5rem;
    animation: popIn 0.2s ease-out;
}
.volume-popover input[type="range"] {
    width: 6rem;
    accent-color: #2A9D8F;
}
.volume-label {
    width: 2rem;
    font-size: 0.75rem;
    text-align: right;
}
.user-badge {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    background: #2A9D8F;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 600;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #ffffff;
}
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    text-align: center;
}
.hero-background {
    position: absolute;
    inset: 0;
    z-index: 0;
    will-change: transform;
}
.hero-background img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.8;
}
.hero-shade {
    position: absolute;
    inset: 0;
    z-index: 1;
    background: linear-gradient(to bottom, rgba(10,17,32,0.3), rgba(10,17,32,0.6), #0a1120);
}
.hero-content {
    position: relative;
    z-index: 2;
    max-width: 64rem;
    padding-top: 5rem;
    animation: riseIn 1s ease-out;
}
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #2A9D8F;
    font-size: 0.875rem;
    margin-bottom: 2rem;
}
.pulse-dot, .status-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #2A9D8F;
    animation: pulse 2s infinite;
}
.status-dot {
    background: #ef4444;
}
.hero h1 {
    font-size: clamp(3rem, 8vw, 6rem);
    line-height: 1.1;
    margin-bottom: 1rem;
}
.gradient-text {
    background: linear-gradient(90deg, #2A9D8F, #60a5fa, #2A9D8F);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-tagline {
    color: #2A9D8F;
    font-size: 1.25rem;
    margin-bottom: 2rem;
}
.hero-description {
    color: #d1d5db;
    font-size: 1.5rem;
    font-weight: 300;
    max-width: 42rem;
    margin: 0 auto 3rem;
}
.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}
.cta-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    background: #2A9D8F;
    color: #ffffff;
    border: none;
    border-radius: 9999px;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    font-weight: 600;
    cursor: pointer;
    box-shadow: 0 0 40px -10px rgba(42, 157, 143, 0.5);
    transition: transform 0.2s ease, background 0.2s ease;
}
.cta-button:hover {
    background: #21867a;
    transform: scale(1.05);
}
.cta-button:disabled {
    opacity: 0.6;
    cursor: wait;
    transform: none;
}
.cta-button.full {
    width: 100%;
}
.cta-button.large {
    padding: 1.25rem 3rem;
    font-size: 1.25rem;
}
.story-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #ffffff;
    cursor: pointer;
}
.play-circle {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.1);
    display: inline-flex;
    align-items: center;
    justify-content: center;
    font-size: 0.7rem;
}
.scroll-indicator {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 2;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    color: rgba(255, 255, 255, 0.3);
    font-size: 10px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    animation: fadeIn 1s ease 1.5s both;
}
.scroll-line {
    width: 1px;
    height: 4rem;
    background: linear-gradient(to bottom, rgba(255,255,255,0.3), transparent);
}
.two-column {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.framed-image {
    position: relative;
}
.framed-image img {
    width: 100%;
    border-radius: 2rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    object-fit: cover;
}
.status-card {
    position: absolute;
    bottom: 2rem;
    left: 2rem;
    right: 2rem;
    padding: 1.5rem;
    background: rgba(10, 17, 32, 0.8);
    backdrop-filter: blur(24px);
    border-radius: 1rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
}
.status-header {
    display: flex;
    align-items: center;
    gap: 1rem;
    color: #9ca3af;
    font-size: 0.875rem;
    text-transform: uppercase;
}
.muted {
    color: #6b7280;
}
.accent {
    color: #2A9D8F;
}
.struggle-list, .ingredient-list, .showcase-points {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}
.struggle, .ingredient, .showcase-point {
    display: flex;
    gap: 1.5rem;
}
.struggle-icon, .ingredient-number, .check {
    width: 3.5rem;
    height: 3.5rem;
    flex-shrink: 0;
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #2A9D8F;
}
.struggle p, .ingredient p, .showcase-point p, .pillar-body p {
    color: #9ca3af;
    line-height: 1.6;
}
.section-backdrop {
    position: absolute;
    inset: 0;
    z-index: 0;
}
.section-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.2;
}
.section-heading {
    position: relative;
    z-index: 1;
    text-align: center;
    max-width: 48rem;
    margin: 0 auto 4rem;
}
.section-heading h2, .two-column h2, .cta-content h2 {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    line-height: 1.2;
    margin-bottom: 1.5rem;
}
.section-heading p {
    color: #9ca3af;
    font-size: 1.125rem;
}
.eyebrow {
    color: #2A9D8F;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.875rem;
}
.card-grid {
    position: relative;
    z-index: 1;
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.pillar-card, .review-card {
    position: relative;
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    overflow: hidden;
    transition: transform 0.3s ease;
}
.pillar-card:hover {
    transform: translateY(-10px);
}
.pillar-image img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
}
.pillar-body, .review-card {
    padding: 2rem;
}
.verified-badge {
    position: absolute;
    top: 1rem;
    right: 1rem;
    font-size: 0.75rem;
    color: #2A9D8F;
    background: rgba(42, 157, 143, 0.1);
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
}
.stars {
    color: #facc15;
    margin-bottom: 1rem;
}
.review-text {
    color: #d1d5db;
    line-height: 1.7;
    margin-bottom: 1.5rem;
}
.review-author {
    display: flex;
    gap: 1rem;
    align-items: center;
}
.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: linear-gradient(45deg, #2A9D8F, #3b82f6);
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}
.author-role, .author-detail {
    color: #9ca3af;
    font-size: 0.875rem;
}
.faq-section {
    max-width: 48rem;
    margin: 0 auto;
}
.faq-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.faq-item {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 0 1.5rem;
}
.faq-item.open {
    border-color: rgba(42, 157, 143, 0.4);
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem 0;
    background: none;
    border: none;
    color: #ffffff;
    font-size: 1.125rem;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
}
.faq-answer {
    color: #9ca3af;
    padding-bottom: 1.5rem;
    line-height: 1.7;
}
.faq-item.skeleton {
    height: 4.5rem;
    display: flex;
    align-items: center;
}
.skeleton-bar {
    height: 1.25rem;
    width: 70%;
    border-radius: 0.25rem;
    background: rgba(255, 255, 255, 0.08);
    animation: pulse 2s infinite;
}
.cta-section {
    text-align: center;
    overflow: hidden;
}
.cta-content {
    position: relative;
    z-index: 1;
    max-width: 48rem;
    margin: 0 auto;
}
.perks {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-top: 2rem;
    color: #d1d5db;
}
.perks .dot {
    color: #2A9D8F;
}
.fine-print {
    margin-top: 1.5rem;
    color: #6b7280;
    font-size: 0.75rem;
}
.site-footer {
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    padding: 3rem 1.5rem;
    text-align: center;
    color: #6b7280;
}
.footer-brand, .footer-links {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}
.footer-links a {
    color: #9ca3af;
    text-decoration: none;
}
.assistant-button {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    z-index: 40;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    border: none;
    background: #2A9D8F;
    font-size: 1.5rem;
    cursor: pointer;
    animation: popIn 0.4s ease 2s both;
}
.modal-root {
    position: fixed;
    inset: 0;
    z-index: 100;
}
.modal-backdrop {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(8px);
    animation: fadeIn 0.2s ease-out;
}
.modal-panel {
    position: relative;
    width: 100%;
    max-width: 28rem;
    padding: 2.5rem;
    overflow: hidden;
    background: #0f172a;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    animation: riseIn 0.3s ease-out;
}
.modal-panel.wide {
    max-width: 56rem;
}
.modal-glow {
    position: absolute;
    width: 12rem;
    height: 12rem;
    border-radius: 50%;
    filter: blur(64px);
    pointer-events: none;
}
.modal-glow.top {
    top: -4rem;
    right: -4rem;
    background: rgba(42, 157, 143, 0.2);
}
.modal-glow.bottom {
    bottom: -4rem;
    left: -4rem;
    background: rgba(59, 130, 246, 0.2);
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: #9ca3af;
    font-size: 1.25rem;
    cursor: pointer;
}
.modal-subtitle {
    color: #9ca3af;
    margin-bottom: 2rem;
}
.signup-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.signup-form label {
    display: block;
    font-size: 0.875rem;
    color: #d1d5db;
    margin-bottom: 0.5rem;
}
.signup-form input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    color: #ffffff;
}
.form-error {
    color: #f87171;
    font-size: 0.875rem;
}
.signup-done {
    text-align: center;
    padding: 2rem 0;
}
.done-check {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: rgba(42, 157, 143, 0.2);
    color: #2A9D8F;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
}
.video-frame {
    position: relative;
    width: 100%;
    aspect-ratio: 16 / 9;
    border-radius: 1rem;
    overflow: hidden;
    background: #000000;
    margin-top: 1.5rem;
}
.video-frame video {
    width: 100%;
    height: 100%;
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes riseIn {
    from { opacity: 0; transform: translateY(20px) scale(0.97); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}
@keyframes popIn {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}
@media (max-width: 768px) {
    .two-column, .card-grid {
        grid-template-columns: 1fr;
    }
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1.5rem;
        background: rgba(10, 17, 32, 0.95);
    }
}
"#;
